//! # Life Expectancy Estimator
//!
//! Maps a [`PersonProfile`] to a point estimate of life expectancy and a dispersion value.
//!
//! # Formula
//! ```text
//! base      = BaseTable(sex, age)
//! f         = max(0.2, 1 - age/100)
//! adj       = f · (weight + smoking + diabetes + heart disease + cancer + exercise)
//! E         = age + max(1, base + adj)
//! σ         = max(1, 0.15 · (E - age))
//! ```
//!
//! Risk factors are independent and additive. The age-decay factor `f` shrinks every
//! adjustment as age increases, never below 20% of its full effect.
//!
//! ## Example
//! ```rust
//! # use lifexpect::prelude::*;
//! let profile = PersonProfile::builder().age(30).sex(Sex::Male).build();
//! let result = estimate(&profile);
//! assert_eq!(result.life_expectancy, 77.0);
//!
//! // Custom configuration and validation
//! let config = EstimatorConfig::builder().dispersion_ratio(0.2).build()?;
//! let result = estimate_with().profile(&profile).config(&config).call()?;
//! println!("{:.1} ± {:.1}", result.life_expectancy, result.std_dev);
//! # LifeResult::Ok(())
//! ```

use crate::LifeResult;
use crate::base_table::BaseTable;
use crate::config::EstimatorConfig;
use crate::profile::{CANCER_HISTORY_YEARS, DIABETES_YEARS, HEART_DISEASE_YEARS, PersonProfile};
use bon::builder;
use serde::Serialize;

// =======================================
// RESULT TYPES
// =======================================

/// Risk adjustments in years, already scaled by the age-decay factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Adjustments {
    pub weight: f64,
    pub smoking: f64,
    pub diabetes: f64,
    pub heart_disease: f64,
    pub cancer_history: f64,
    pub exercise: f64,
}

impl Adjustments {
    pub fn total(&self) -> f64 {
        0.0 + self.weight
            + self.smoking
            + self.diabetes
            + self.heart_disease
            + self.cancer_history
            + self.exercise
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateResult {
    /// Age the estimate was made at.
    pub age: u32,
    /// Remaining years from the base table before adjustments.
    pub base_remaining: f64,
    pub age_factor: f64,
    pub adjustments: Adjustments,
    /// Expected age at death. Always at least `age + 1` with the default configuration.
    pub life_expectancy: f64,
    /// Always at least 1 with the default configuration.
    pub std_dev: f64,
}

impl EstimateResult {
    pub fn remaining_years(&self) -> f64 {
        self.life_expectancy - f64::from(self.age)
    }

    /// `life_expectancy ± z·σ`. `z = 2.0` is the usual 95% band.
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.std_dev;
        (
            self.life_expectancy - half_width,
            self.life_expectancy + half_width,
        )
    }
}

// =======================================
// PUBLIC FUNCTIONS
// =======================================

/// Estimate with the built-in CDC 2021 table and default configuration.
///
/// Never fails. Ages outside 1..=100 are not rejected here; use [`PersonProfile::check`] or
/// [`estimate_with`] at the input boundary.
pub fn estimate(profile: &PersonProfile) -> EstimateResult {
    compute(profile, BaseTable::cdc_2021(), &EstimatorConfig::default())
}

/// Estimate with an optional custom base table and configuration.
///
/// The profile is validated first unless `.validate(false)` is set.
///
/// # Errors
/// - [`crate::error::InvalidProfile`] when validation is on and the profile is rejected
#[builder]
pub fn estimate_with(
    profile: &PersonProfile,
    table: Option<&BaseTable>,
    config: Option<&EstimatorConfig>,
    #[builder(default = true)] validate: bool,
) -> LifeResult<EstimateResult> {
    if validate {
        profile.check()?;
    }

    let table = table.unwrap_or(BaseTable::cdc_2021());
    let default_config = EstimatorConfig::default();
    let config = config.unwrap_or(&default_config);

    Ok(compute(profile, table, config))
}

/// Scaled adjustments for every risk factor in `profile`.
pub fn risk_adjustments(profile: &PersonProfile, age_factor: f64) -> Adjustments {
    let condition = |present: bool, years: f64| if present { years * age_factor } else { 0.0 };

    Adjustments {
        weight: profile.weight.years() * age_factor,
        smoking: profile.smoking.years() * age_factor,
        diabetes: condition(profile.diabetes, DIABETES_YEARS),
        heart_disease: condition(profile.heart_disease, HEART_DISEASE_YEARS),
        cancer_history: condition(profile.cancer_history, CANCER_HISTORY_YEARS),
        exercise: profile.exercise.years() * age_factor,
    }
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

fn compute(profile: &PersonProfile, table: &BaseTable, config: &EstimatorConfig) -> EstimateResult {
    let age = f64::from(profile.age);
    let base_remaining = table.remaining_years(profile.sex, profile.age);
    let age_factor = config.age_factor(profile.age);
    let adjustments = risk_adjustments(profile, age_factor);

    let remaining = f64::max(
        config.min_remaining_years,
        base_remaining + adjustments.total(),
    );
    let life_expectancy = age + remaining;
    let std_dev = f64::max(
        config.min_std_dev,
        (life_expectancy - age) * config.dispersion_ratio,
    );

    log::debug!(
        "age {} {}: base {base_remaining}, factor {age_factor:.3}, adjustments {:.3} -> {life_expectancy:.3} (sd {std_dev:.3})",
        profile.age,
        profile.sex,
        adjustments.total()
    );

    EstimateResult {
        age: profile.age,
        base_remaining,
        age_factor,
        adjustments,
        life_expectancy,
        std_dev,
    }
}
