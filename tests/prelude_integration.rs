//! # Integration Tests for the lifexpect Prelude
//!
//! Verifies that the prelude re-exports everything a caller needs to go from raw inputs to a
//! rendered report with a single `use` statement.

use polars::df;
use lifexpect::prelude::*;

#[test]
fn test_prelude_imports_input_types() {
    let profile = PersonProfile::builder()
        .age(42)
        .sex(Sex::Female)
        .weight(WeightStatus::Overweight)
        .smoking(SmokingStatus::Former)
        .exercise(ExerciseLevel::Moderate)
        .build();

    assert!(profile.check().is_ok());
    assert!(matches!(
        "sometimes".parse::<ExerciseLevel>(),
        Err(InvalidProfile::UnrecognizedLabel { .. })
    ));
}

#[test]
fn test_prelude_imports_polars_types() {
    let _df_type_name = std::any::type_name::<DataFrame>();
    let _result_type_name = std::any::type_name::<PolarsResult<f64>>();

    assert!(_df_type_name.contains("DataFrame"));
    assert!(_result_type_name.contains("PolarsError"));
}

#[test]
fn test_prelude_function_accessibility() {
    let _estimate_fn = estimate;
    let _estimate_with_fn = estimate_with;
    let _causes_fn = causes_for;
    let _curve_fn = density_curve;
}

#[test]
fn test_prelude_end_to_end_with_custom_table() {
    let df = df! {
        "lower" => [0.0, 50.0, 90.0],
        "upper" => [50.0, 90.0, f64::NAN],
        "male" => [40.0, 20.0, 3.0],
        "female" => [45.0, 23.0, 4.0],
    }
    .expect("Failed to create mock DataFrame");
    let table = BaseTable::from_df(df).expect("Failed to create BaseTable from DataFrame");

    let profile = PersonProfile::builder().age(60).sex(Sex::Male).build();
    let result = estimate_with()
        .profile(&profile)
        .table(&table)
        .call()
        .expect("Estimate failed");
    assert_eq!(result.base_remaining, 20.0);
    assert_eq!(result.life_expectancy, 80.0);

    let report = Report::new(profile, result, &EstimatorConfig::default())
        .with_curve()
        .expect("Curve failed");
    assert_eq!(report.causes.bracket(), CauseBracket::From45To64);
    assert_eq!(report.curve.as_ref().map(DensityCurve::len), Some(100));
    assert!(report.render_text().contains("Estimated Life Expectancy: 80.0 years"));
}

#[test]
fn test_prelude_btdf_macro() {
    let table = btdf! {
        "lower" => [0_u32],
        "upper" => [None::<u32>],
        "male" => [50.0_f64],
        "female" => [55.0_f64],
    }
    .expect("Failed to create BaseTable from macro");
    assert_eq!(table.remaining_years(Sex::Female, 77), 55.0);
}
