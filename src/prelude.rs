//! # lifexpect Prelude
//!
//! Conveniently re-exports the most common types and functions.
//! Import this module to access all primary features with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use lifexpect::prelude::*;
//! let profile = PersonProfile::builder()
//!     .age(80)
//!     .sex(Sex::Female)
//!     .exercise(ExerciseLevel::Active)
//!     .build();
//! let result = estimate(&profile);
//! let report = Report::new(profile, result, &EstimatorConfig::default()).with_curve()?;
//! println!("{}", report.render_text());
//! # LifeResult::Ok(())
//! ```

// Package Result type
pub use crate::LifeResult;

// Inputs
pub use crate::error::InvalidProfile;
pub use crate::profile::{ExerciseLevel, PersonProfile, Sex, SmokingStatus, WeightStatus};

// Core functions
pub use crate::causes::{CauseBracket, CauseDistribution, CauseShare, causes_for};
pub use crate::estimator::{Adjustments, EstimateResult, estimate, estimate_with};

// Reference data and configuration
pub use crate::base_table::{BaseBracket, BaseTable};
pub use crate::btdf;
pub use crate::config::EstimatorConfig;

// Presentation data
pub use crate::density::{DensityCurve, DensityPoint, density_curve};
pub use crate::report::Report;

// Most commonly used Polars types for working with exported tables
pub use polars::prelude::{DataFrame, PolarsError, PolarsResult};
