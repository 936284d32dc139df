//! # Person Profile
//!
//! Self-reported demographic and lifestyle inputs for a single estimate.
//!
//! Every categorical input is a small `Copy` enum carrying the number of years it moves the
//! estimate before age decay is applied. Text labels accepted by [`std::str::FromStr`] cover both
//! the long form labels of the input form (e.g. `"Overweight (BMI 25-29.9)"`) and short forms
//! (e.g. `"overweight"`), case-insensitively.
//!
//! ## Example
//! ```rust
//! # use lifexpect::prelude::*;
//! let profile = PersonProfile::builder()
//!     .age(30)
//!     .sex(Sex::Male)
//!     .smoking("current smoker".parse()?)
//!     .diabetes(true)
//!     .build();
//! profile.check()?;
//! # LifeResult::Ok(())
//! ```

use crate::error::InvalidProfile;
use bon::Builder;
use garde::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest age accepted at the input boundary.
pub const MIN_AGE: u32 = 1;
/// Highest age accepted at the input boundary.
pub const MAX_AGE: u32 = 100;

// ===============================================
// CATEGORICAL INPUTS
// ===============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Body weight category derived from BMI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightStatus {
    /// BMI below 25.
    #[default]
    Normal,
    /// BMI 25 to 29.9.
    Overweight,
    /// BMI 30 and above.
    Obese,
}

impl WeightStatus {
    pub fn label(self) -> &'static str {
        match self {
            WeightStatus::Normal => "Normal weight",
            WeightStatus::Overweight => "Overweight (BMI 25-29.9)",
            WeightStatus::Obese => "Obese (BMI 30+)",
        }
    }

    /// Unscaled effect on remaining years.
    pub fn years(self) -> f64 {
        match self {
            WeightStatus::Normal => 0.0,
            WeightStatus::Overweight => -1.0,
            WeightStatus::Obese => -3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmokingStatus {
    #[default]
    Never,
    Former,
    Current,
}

impl SmokingStatus {
    pub fn label(self) -> &'static str {
        match self {
            SmokingStatus::Never => "Never smoked",
            SmokingStatus::Former => "Former smoker",
            SmokingStatus::Current => "Current smoker",
        }
    }

    /// Unscaled effect on remaining years.
    pub fn years(self) -> f64 {
        match self {
            SmokingStatus::Never => 0.0,
            SmokingStatus::Former => -3.0,
            SmokingStatus::Current => -10.0,
        }
    }
}

/// Weekly exercise frequency.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ExerciseLevel {
    #[default]
    Sedentary,
    /// 1-2 times per week.
    Moderate,
    /// 3 or more times per week.
    Active,
}

impl ExerciseLevel {
    pub fn label(self) -> &'static str {
        match self {
            ExerciseLevel::Sedentary => "Sedentary",
            ExerciseLevel::Moderate => "Moderate (1-2 times/week)",
            ExerciseLevel::Active => "Active (3+ times/week)",
        }
    }

    /// Unscaled effect on remaining years.
    pub fn years(self) -> f64 {
        match self {
            ExerciseLevel::Sedentary => 0.0,
            ExerciseLevel::Moderate => 2.0,
            ExerciseLevel::Active => 4.0,
        }
    }
}

/// Unscaled effect of a diabetes diagnosis on remaining years.
pub const DIABETES_YEARS: f64 = -7.5;
/// Unscaled effect of heart disease on remaining years.
pub const HEART_DISEASE_YEARS: f64 = -8.0;
/// Unscaled effect of a cancer history on remaining years.
pub const CANCER_HISTORY_YEARS: f64 = -5.0;

// ===============================================
// PERSON PROFILE
// ===============================================

/// Inputs for one estimate.
///
/// Only `age` and `sex` are required by the builder; every other field defaults to the
/// no-risk value (normal weight, never smoked, no conditions, sedentary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct PersonProfile {
    /// Current age in whole years. Must be within 1..=100 to pass validation.
    #[garde(range(min = 1, max = 100))]
    pub age: u32,

    pub sex: Sex,

    #[builder(default)]
    pub weight: WeightStatus,

    #[builder(default)]
    pub smoking: SmokingStatus,

    #[builder(default)]
    pub diabetes: bool,

    #[builder(default)]
    pub heart_disease: bool,

    #[builder(default)]
    pub cancer_history: bool,

    #[builder(default)]
    pub exercise: ExerciseLevel,
}

impl PersonProfile {
    /// Reject profiles the estimator is not meant to see.
    pub fn check(&self) -> Result<(), InvalidProfile> {
        self.validate()?;
        Ok(())
    }
}

// ===============================================
// LABEL PARSING
// ===============================================

impl FromStr for Sex {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(InvalidProfile::label("sex", s)),
        }
    }
}

impl FromStr for WeightStatus {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "normal weight" | "normal" => Ok(WeightStatus::Normal),
            "overweight (bmi 25-29.9)" | "overweight" => Ok(WeightStatus::Overweight),
            "obese (bmi 30+)" | "obese" => Ok(WeightStatus::Obese),
            _ => Err(InvalidProfile::label("weight status", s)),
        }
    }
}

impl FromStr for SmokingStatus {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "never smoked" | "never" => Ok(SmokingStatus::Never),
            "former smoker" | "former" => Ok(SmokingStatus::Former),
            "current smoker" | "current" | "smoker" => Ok(SmokingStatus::Current),
            _ => Err(InvalidProfile::label("smoking status", s)),
        }
    }
}

impl FromStr for ExerciseLevel {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sedentary" => Ok(ExerciseLevel::Sedentary),
            "moderate (1-2 times/week)" | "moderate" => Ok(ExerciseLevel::Moderate),
            "active (3+ times/week)" | "active" => Ok(ExerciseLevel::Active),
            _ => Err(InvalidProfile::label("exercise level", s)),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

macro_rules! impl_display_with_label {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

impl_display_with_label!(Sex, WeightStatus, SmokingStatus, ExerciseLevel);

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_no_risk() {
        let profile = PersonProfile::builder().age(45).sex(Sex::Female).build();
        assert_eq!(profile.weight, WeightStatus::Normal);
        assert_eq!(profile.smoking, SmokingStatus::Never);
        assert!(!profile.diabetes);
        assert!(!profile.heart_disease);
        assert!(!profile.cancer_history);
        assert_eq!(profile.exercise, ExerciseLevel::Sedentary);
    }

    #[test]
    fn test_check_age_bounds() {
        for age in [1, 50, 100] {
            let profile = PersonProfile::builder().age(age).sex(Sex::Male).build();
            assert!(profile.check().is_ok(), "age {age} should be accepted");
        }
        for age in [0, 101, 150] {
            let profile = PersonProfile::builder().age(age).sex(Sex::Male).build();
            let err = profile.check().unwrap_err();
            assert!(matches!(err, InvalidProfile::Rejected(_)), "age {age}");
        }
    }

    #[test]
    fn test_parse_form_labels() {
        assert_eq!(
            "Overweight (BMI 25-29.9)".parse::<WeightStatus>().unwrap(),
            WeightStatus::Overweight
        );
        assert_eq!(
            "Obese (BMI 30+)".parse::<WeightStatus>().unwrap(),
            WeightStatus::Obese
        );
        assert_eq!(
            "Former smoker".parse::<SmokingStatus>().unwrap(),
            SmokingStatus::Former
        );
        assert_eq!(
            "Active (3+ times/week)".parse::<ExerciseLevel>().unwrap(),
            ExerciseLevel::Active
        );
    }

    #[test]
    fn test_parse_short_labels_case_insensitive() {
        assert_eq!(" F ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("MALE".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("normal".parse::<WeightStatus>().unwrap(), WeightStatus::Normal);
        assert_eq!("Current".parse::<SmokingStatus>().unwrap(), SmokingStatus::Current);
        assert_eq!("moderate".parse::<ExerciseLevel>().unwrap(), ExerciseLevel::Moderate);
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "vaping".parse::<SmokingStatus>().unwrap_err();
        match err {
            InvalidProfile::UnrecognizedLabel { field, value } => {
                assert_eq!(field, "smoking status");
                assert_eq!(value, "vaping");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_label_round_trips_through_parse() {
        for w in [WeightStatus::Normal, WeightStatus::Overweight, WeightStatus::Obese] {
            assert_eq!(w.label().parse::<WeightStatus>().unwrap(), w);
        }
        for s in [SmokingStatus::Never, SmokingStatus::Former, SmokingStatus::Current] {
            assert_eq!(s.to_string().parse::<SmokingStatus>().unwrap(), s);
        }
    }
}
