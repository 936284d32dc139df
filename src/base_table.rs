//! # Base Remaining-Years Table
//!
//! Reference table of expected additional years of life by sex and age bracket, before any
//! individual risk factor is taken into account.
//!
//! The table is an ordered list of brackets scanned first-match-wins. The built-in table
//! ([`BaseTable::cdc_2021`]) approximates the CDC 2021 life tables; custom tables can be
//! loaded from a DataFrame or a spreadsheet with the columns `lower`, `upper`, `male`,
//! `female` (an empty `upper` cell marks an open-top bracket).
//!
//! ## Quick Start
//! ```rust
//! # use lifexpect::prelude::*;
//! let table = BaseTable::cdc_2021();
//! assert_eq!(table.remaining_years(Sex::Male, 30), 47.0);
//! assert_eq!(table.remaining_years(Sex::Female, 85), 9.0);
//!
//! let custom = btdf! {
//!     "lower" => [0_u32, 65],
//!     "upper" => [Some(65_u32), None],
//!     "male" => [40.0, 15.0],
//!     "female" => [44.0, 18.0],
//! }?;
//! assert_eq!(custom.remaining_years(Sex::Female, 90), 18.0);
//! # LifeResult::Ok(())
//! ```

mod spreadsheet_helpers;

use self::spreadsheet_helpers::{SheetColumns, read_excel_range, read_ods_sheet};
use crate::LifeResult;
use crate::profile::Sex;
use calamine::{Reader, open_workbook_auto};
use polars::prelude::*;
use serde::Serialize;
use spreadsheet_ods::read_ods;
use std::sync::LazyLock;

// ===============================================
// BRACKET
// ===============================================

/// One row of the base table: ages `lower..upper` (upper exclusive, `None` = no upper bound).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseBracket {
    pub lower: u32,
    pub upper: Option<u32>,
    pub male: f64,
    pub female: f64,
}

impl BaseBracket {
    pub const fn new(lower: u32, upper: Option<u32>, male: f64, female: f64) -> Self {
        Self {
            lower,
            upper,
            male,
            female,
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.lower && self.upper.is_none_or(|upper| age < upper)
    }

    pub fn years(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

// Approximate remaining years from the CDC 2021 life tables.
// The last row repeats the 90-100 tier for ages past the input range.
const CDC_2021_BRACKETS: [BaseBracket; 10] = [
    BaseBracket::new(0, Some(20), 76.0, 81.0),
    BaseBracket::new(20, Some(30), 57.0, 62.0),
    BaseBracket::new(30, Some(40), 47.0, 52.0),
    BaseBracket::new(40, Some(50), 38.0, 42.0),
    BaseBracket::new(50, Some(60), 29.0, 33.0),
    BaseBracket::new(60, Some(70), 21.0, 24.0),
    BaseBracket::new(70, Some(80), 14.0, 16.0),
    BaseBracket::new(80, Some(90), 8.0, 9.0),
    BaseBracket::new(90, Some(101), 4.0, 5.0),
    BaseBracket::new(101, None, 4.0, 5.0),
];

static CDC_2021: LazyLock<BaseTable> = LazyLock::new(|| BaseTable {
    description: "CDC Life Tables (2021), approximate remaining years".to_string(),
    brackets: CDC_2021_BRACKETS.to_vec(),
});

// ===============================================
// TABLE
// ===============================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseTable {
    pub description: String,
    brackets: Vec<BaseBracket>,
}

impl BaseTable {
    /// Built-in reference table, shared process-wide.
    pub fn cdc_2021() -> &'static BaseTable {
        &CDC_2021
    }

    /// Build a table from brackets in lookup order.
    ///
    /// # Errors
    /// - No brackets
    /// - A bracket whose upper bound is not above its lower bound
    /// - Negative or non-finite remaining years
    pub fn new(description: String, brackets: Vec<BaseBracket>) -> LifeResult<Self> {
        validate_brackets(&brackets)?;
        warn_on_gaps(&brackets);
        Ok(Self {
            description,
            brackets,
        })
    }

    pub fn brackets(&self) -> &[BaseBracket] {
        &self.brackets
    }

    /// First bracket containing `age`, in table order.
    pub fn bracket_for(&self, age: u32) -> Option<&BaseBracket> {
        self.brackets.iter().find(|b| b.contains(age))
    }

    /// Base remaining years for `sex` at `age`.
    ///
    /// Ages not covered by any bracket yield `0.0`; the estimator's floor still guarantees
    /// at least one projected year.
    pub fn remaining_years(&self, sex: Sex, age: u32) -> f64 {
        match self.bracket_for(age) {
            Some(bracket) => bracket.years(sex),
            None => {
                log::warn!(
                    "age {age} is not covered by base table '{}', using 0 remaining years",
                    self.description
                );
                0.0
            }
        }
    }

    // ========================================================
    // Loaders
    // ========================================================

    /// Create a table from a DataFrame with columns `lower`, `upper`, `male`, `female`.
    ///
    /// Columns are looked up by name and cast to `f64`, so integer or float input both work.
    /// A null or `NaN` upper bound marks an open-top bracket. Row order is lookup order.
    ///
    /// # Errors
    /// - Missing column or a column that cannot be cast to a number
    /// - Bounds that are not whole, non-negative numbers
    /// - Anything rejected by [`BaseTable::new`]
    pub fn from_df(df: DataFrame) -> LifeResult<Self> {
        if df.height() == 0 {
            return Err("DataFrame must contain at least one row of data".into());
        }

        let lower = float_column(&df, "lower")?;
        let upper = float_column(&df, "upper")?;
        let male = float_column(&df, "male")?;
        let female = float_column(&df, "female")?;

        let mut brackets = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let lower_age = lower[row]
                .ok_or_else(|| format!("Missing lower bound at row {}", row + 1))?;
            let bracket = BaseBracket {
                lower: whole_age(lower_age, "lower", row)?,
                upper: upper[row]
                    .map(|value| whole_age(value, "upper", row))
                    .transpose()?,
                male: male[row].ok_or_else(|| format!("Missing male value at row {}", row + 1))?,
                female: female[row]
                    .ok_or_else(|| format!("Missing female value at row {}", row + 1))?,
            };
            brackets.push(bracket);
        }

        Self::new("Created from DataFrame".to_string(), brackets)
    }

    /// Load a table from an ODS worksheet (header row first, one bracket per row).
    ///
    /// # Errors
    /// - File not found or not a valid ODS file
    /// - Sheet not found or empty
    /// - Invalid cells, or anything rejected by [`BaseTable::from_df`]
    ///
    /// # Examples
    /// ```rust, ignore
    /// # use lifexpect::prelude::*;
    /// let table = BaseTable::from_ods("data/base_years.ods", "remaining")?;
    /// # LifeResult::Ok(())
    /// ```
    pub fn from_ods(ods_file_path_str: &str, sheet_name: &str) -> LifeResult<Self> {
        let workbook = read_ods(ods_file_path_str).map_err(|e| -> Box<dyn std::error::Error> {
            format!("Failed to open ODS file '{ods_file_path_str}': {e}").into()
        })?;

        let sheet = (0..workbook.num_sheets())
            .map(|i| workbook.sheet(i))
            .find(|sheet| sheet.name() == sheet_name)
            .ok_or_else(|| format!("Sheet '{sheet_name}' not found in ODS file"))?;

        let (max_row, _) = sheet.used_grid_size();
        if max_row < 1 {
            return Err(format!("Sheet '{sheet_name}' is empty").into());
        }

        let data = read_ods_sheet(sheet)?;
        let mut table = Self::from_df(sheet_to_df(data)?)?;
        table.description = format!("Created from ODS file {ods_file_path_str}, sheet {sheet_name}");
        log::info!("Loaded {} base brackets from {ods_file_path_str}", table.brackets.len());
        Ok(table)
    }

    /// Load a table from an XLSX (or any calamine-supported) worksheet.
    ///
    /// # Errors
    /// Same as [`BaseTable::from_ods`].
    ///
    /// # Examples
    /// ```rust, ignore
    /// # use lifexpect::prelude::*;
    /// let table = BaseTable::from_xlsx("data/base_years.xlsx", "remaining")?;
    /// # LifeResult::Ok(())
    /// ```
    pub fn from_xlsx(xlsx_file_path_str: &str, sheet_name: &str) -> LifeResult<Self> {
        let mut workbook = open_workbook_auto(xlsx_file_path_str)
            .map_err(|e| format!("Failed to open XLSX file '{xlsx_file_path_str}': {e}"))?;

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| format!("Failed to read sheet '{sheet_name}': {e}"))?;

        if range.is_empty() {
            return Err(format!("Sheet '{sheet_name}' is empty").into());
        }

        let data = read_excel_range(&range)?;
        let mut table = Self::from_df(sheet_to_df(data)?)?;
        table.description =
            format!("Created from XLSX file {xlsx_file_path_str}, sheet {sheet_name}");
        log::info!("Loaded {} base brackets from {xlsx_file_path_str}", table.brackets.len());
        Ok(table)
    }

    pub fn to_df(&self) -> PolarsResult<DataFrame> {
        let lower: Vec<u32> = self.brackets.iter().map(|b| b.lower).collect();
        let upper: Vec<Option<u32>> = self.brackets.iter().map(|b| b.upper).collect();
        let male: Vec<f64> = self.brackets.iter().map(|b| b.male).collect();
        let female: Vec<f64> = self.brackets.iter().map(|b| b.female).collect();

        DataFrame::new(vec![
            Series::new("lower".into(), lower).into_column(),
            Series::new("upper".into(), upper).into_column(),
            Series::new("male".into(), male).into_column(),
            Series::new("female".into(), female).into_column(),
        ])
    }
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

fn validate_brackets(brackets: &[BaseBracket]) -> LifeResult<()> {
    if brackets.is_empty() {
        return Err("Base table must contain at least one bracket".into());
    }

    for (i, bracket) in brackets.iter().enumerate() {
        let row = i + 1;
        if let Some(upper) = bracket.upper {
            if upper <= bracket.lower {
                return Err(format!(
                    "Bracket {row}: upper bound {upper} must be greater than lower bound {}",
                    bracket.lower
                )
                .into());
            }
        }

        for (name, years) in [("male", bracket.male), ("female", bracket.female)] {
            if !years.is_finite() || years < 0.0 {
                return Err(format!(
                    "Bracket {row}: {name} remaining years must be a non-negative number, got {years}"
                )
                .into());
            }
        }
    }

    Ok(())
}

fn warn_on_gaps(brackets: &[BaseBracket]) {
    for pair in brackets.windows(2) {
        if let Some(upper) = pair[0].upper {
            if pair[1].lower > upper {
                log::warn!(
                    "base table has no bracket for ages {upper}..{}, lookups there yield 0",
                    pair[1].lower
                );
            }
        }
    }
}

fn float_column(df: &DataFrame, name: &str) -> LifeResult<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .map_err(|_| format!("Base table is missing column '{name}'"))?;
    let casted = column.cast(&DataType::Float64)?;
    let values = casted
        .f64()?
        .into_iter()
        .map(|opt| opt.filter(|v| !v.is_nan()))
        .collect();
    Ok(values)
}

fn whole_age(value: f64, name: &str, row: usize) -> LifeResult<u32> {
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(format!(
            "Column '{name}' must hold whole non-negative ages, got {value} at row {}",
            row + 1
        )
        .into());
    }
    Ok(value as u32)
}

fn sheet_to_df(data: SheetColumns) -> LifeResult<DataFrame> {
    if data.is_empty() {
        return Err("No data rows found in sheet".into());
    }

    let columns = data
        .headers
        .iter()
        .zip(data.columns)
        .map(|(name, values)| Series::from_vec(name.into(), values).into_column())
        .collect::<Vec<_>>();

    DataFrame::new(columns).map_err(|e| format!("Failed to create DataFrame: {e}").into())
}
