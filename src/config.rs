//! # Estimator Configuration (EstimatorConfig)
//!
//! Tunable constants of the life expectancy estimate. The defaults reproduce the reference
//! model exactly; alternative values are meant for sensitivity checks.
//!
//! ## Quick Start
//! ```rust
//! # use lifexpect::prelude::*;
//! // Same as EstimatorConfig::default()
//! let config = EstimatorConfig::builder().build()?;
//! assert_eq!(config.dispersion_ratio, 0.15);
//!
//! // Wider uncertainty band
//! let wide = EstimatorConfig::builder().dispersion_ratio(0.25).build()?;
//! assert_eq!(wide.dispersion_ratio, 0.25);
//! # LifeResult::Ok(())
//! ```
//!
//! ## Configuration Options
//! - **age_factor_floor**: lowest value of the age-decay factor (0.2)
//! - **min_remaining_years**: floor on projected remaining years (1.0)
//! - **dispersion_ratio**: standard deviation as a share of remaining years (0.15)
//! - **min_std_dev**: floor on the standard deviation (1.0)
//! - **confidence_z**: half-width of the reported interval in standard deviations (2.0)

use crate::LifeResult;
use bon::bon;
use garde::Validate;
use serde::Serialize;

pub const DEFAULT_AGE_FACTOR_FLOOR: f64 = 0.2;
pub const DEFAULT_MIN_REMAINING_YEARS: f64 = 1.0;
pub const DEFAULT_DISPERSION_RATIO: f64 = 0.15;
pub const DEFAULT_MIN_STD_DEV: f64 = 1.0;
pub const DEFAULT_CONFIDENCE_Z: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Validate)]
pub struct EstimatorConfig {
    /// Risk adjustments never shrink below this share of their full effect.
    #[garde(custom(validate_unit_interval))]
    pub age_factor_floor: f64,

    #[garde(custom(validate_positive))]
    pub min_remaining_years: f64,

    #[garde(custom(validate_positive))]
    pub dispersion_ratio: f64,

    #[garde(custom(validate_positive))]
    pub min_std_dev: f64,

    /// 2.0 gives the conventional ~95% interval.
    #[garde(custom(validate_positive))]
    pub confidence_z: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            age_factor_floor: DEFAULT_AGE_FACTOR_FLOOR,
            min_remaining_years: DEFAULT_MIN_REMAINING_YEARS,
            dispersion_ratio: DEFAULT_DISPERSION_RATIO,
            min_std_dev: DEFAULT_MIN_STD_DEV,
            confidence_z: DEFAULT_CONFIDENCE_Z,
        }
    }
}

#[bon]
impl EstimatorConfig {
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_AGE_FACTOR_FLOOR)] age_factor_floor: f64,
        #[builder(default = DEFAULT_MIN_REMAINING_YEARS)] min_remaining_years: f64,
        #[builder(default = DEFAULT_DISPERSION_RATIO)] dispersion_ratio: f64,
        #[builder(default = DEFAULT_MIN_STD_DEV)] min_std_dev: f64,
        #[builder(default = DEFAULT_CONFIDENCE_Z)] confidence_z: f64,
    ) -> LifeResult<Self> {
        let config = EstimatorConfig {
            age_factor_floor,
            min_remaining_years,
            dispersion_ratio,
            min_std_dev,
            confidence_z,
        };

        config
            .validate()
            .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

        Ok(config)
    }

    /// Age-decay factor: `max(floor, 1 - age/100)`.
    pub fn age_factor(&self, age: u32) -> f64 {
        f64::max(self.age_factor_floor, 1.0 - f64::from(age) / 100.0)
    }
}

fn validate_positive(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() || *value <= 0.0 {
        return Err(garde::Error::new(format!(
            "{value} must be a finite number greater than 0.0"
        )));
    }
    Ok(())
}

fn validate_unit_interval(value: &f64, _context: &()) -> garde::Result {
    if !(*value > 0.0 && *value <= 1.0) {
        return Err(garde::Error::new(format!(
            "{value} must lie in (0.0, 1.0] so adjustments keep their sign"
        )));
    }
    Ok(())
}
