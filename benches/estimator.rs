use codspeed_criterion_compat::{Criterion, criterion_group, criterion_main};
use lifexpect::prelude::*;

fn setup_profile() -> PersonProfile {
    PersonProfile::builder()
        .age(45)
        .sex(Sex::Female)
        .weight(WeightStatus::Overweight)
        .smoking(SmokingStatus::Former)
        .diabetes(true)
        .exercise(ExerciseLevel::Moderate)
        .build()
}

fn bench_core_functions(c: &mut Criterion) {
    let profile = setup_profile();

    c.bench_function("estimate_single_profile", |b| {
        b.iter(|| estimate(&profile))
    });

    c.bench_function("estimate_with_validation", |b| {
        b.iter(|| estimate_with().profile(&profile).call().unwrap())
    });

    c.bench_function("causes_for_single_age", |b| {
        b.iter(|| causes_for(profile.age, profile.sex))
    });
}

fn bench_presentation_data(c: &mut Criterion) {
    let result = estimate(&setup_profile());

    c.bench_function("density_curve_100_points", |b| {
        b.iter(|| DensityCurve::from_estimate(&result).unwrap())
    });

    c.bench_function("report_render_text", |b| {
        let report = Report::new(setup_profile(), result, &EstimatorConfig::default());
        b.iter(|| report.render_text())
    });
}

fn bench_bulk_estimates(c: &mut Criterion) {
    c.bench_function("estimate_age_range_1_100", |b| {
        b.iter(|| {
            for age in 1..=100 {
                let profile = PersonProfile::builder().age(age).sex(Sex::Male).build();
                estimate(&profile);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_core_functions,
    bench_presentation_data,
    bench_bulk_estimates
);
criterion_main!(benches);
