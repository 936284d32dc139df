/// Macro to create a BaseTable from literal `lower`/`upper`/`male`/`female` columns.
/// Usage:
/// ```rust
/// # use lifexpect::prelude::*;
/// let table = btdf! {
///     "lower" => [0_u32, 50],
///     "upper" => [Some(50_u32), None],
///     "male" => [35.0_f64, 20.0],
///     "female" => [39.0_f64, 23.0],
/// }?;
/// assert_eq!(table.brackets().len(), 2);
/// # LifeResult::Ok(())
/// ```
#[macro_export]
macro_rules! btdf {
    ($($name:expr => $val:expr),+ $(,)?) => {{
        use $crate::base_table::BaseTable;
        use polars::prelude::df;
        let df_result = df! { $($name => $val),+ };
        match df_result {
            Ok(df) => BaseTable::from_df(df),
            Err(e) => Err(e.into()),
        }
    }};
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use crate::profile::Sex;

    #[test]
    fn test_btdf_macro_with_open_top() {
        let table = btdf! {
            "lower" => [0_u32, 40, 80],
            "upper" => [Some(40_u32), Some(80), None],
            "male" => [50.0_f64, 25.0, 6.0],
            "female" => [55.0_f64, 28.0, 7.0],
        }
        .expect("Failed to create BaseTable from macro");

        assert_eq!(table.brackets().len(), 3);
        assert_eq!(table.remaining_years(Sex::Male, 39), 50.0);
        assert_eq!(table.remaining_years(Sex::Female, 95), 7.0);
    }

    #[test]
    fn test_btdf_macro_rejects_inverted_bracket() {
        let result = btdf! {
            "lower" => [50_u32],
            "upper" => [Some(20_u32)],
            "male" => [10.0_f64],
            "female" => [12.0_f64],
        };
        assert!(result.is_err());
    }
}
