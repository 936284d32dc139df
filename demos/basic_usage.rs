//! # lifexpect Basic Usage Example
//!
//! This example demonstrates the basic usage of the lifexpect crate
//! for life expectancy estimates using the builder pattern API.

use lifexpect::prelude::*;

fn main() -> LifeResult<()> {
    println!("lifexpect Basic Usage Example");
    println!("=============================");
    println!();

    // Method 1: Build a profile with only the required fields
    println!("Creating a baseline profile (age 30, male, no risk factors)...");
    let baseline = PersonProfile::builder().age(30).sex(Sex::Male).build();

    // Method 2: Parse form labels into a second profile
    println!("Creating a second profile from form labels...");
    let smoker = PersonProfile::builder()
        .age(30)
        .sex("Male".parse()?)
        .weight("Obese (BMI 30+)".parse()?)
        .smoking("Current smoker".parse()?)
        .diabetes(true)
        .build();
    smoker.check()?;

    println!("\n=== Estimates (default CDC 2021 table) ===");
    for (name, profile) in [("Baseline", &baseline), ("Obese smoker, diabetic", &smoker)] {
        let result = estimate(profile);
        let (low, high) = result.confidence_interval(2.0);
        println!("{name}:");
        println!("  Life expectancy: {:.2} years", result.life_expectancy);
        println!("  Standard deviation: {:.4}", result.std_dev);
        println!("  95% interval: {low:.1} to {high:.1}");
        println!("  Adjustments: {:+.2} years", result.adjustments.total());
    }

    // Sensitivity check with a wider dispersion
    println!("\n=== Sensitivity (dispersion ratio 0.25) ===");
    let wide = EstimatorConfig::builder().dispersion_ratio(0.25).build()?;
    let result = estimate_with().profile(&baseline).config(&wide).call()?;
    println!("  Standard deviation: {:.4}", result.std_dev);

    // Cause-of-death breakdown
    println!("\n=== Leading Causes of Death (age 30) ===");
    let causes = causes_for(baseline.age, baseline.sex);
    for share in causes.iter() {
        println!("  {:<22}{:>3}%", share.cause, share.weight);
    }

    // Density curve samples
    println!("\n=== Density Curve ===");
    let curve = DensityCurve::from_estimate(&estimate(&baseline))?;
    if let Some(peak) = curve.peak() {
        println!("  Peak density {:.5} at age {:.1}", peak.density, peak.age);
    }
    println!("{}", curve.to_df()?.head(Some(5)));

    println!("\n✓ All calculations completed successfully!");

    Ok(())
}
