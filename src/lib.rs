//! # lifexpect
//!
//! A small, type-safe Rust library for lifestyle-adjusted life expectancy estimates and
//! cause-of-death breakdowns.
//!
//! ## Features
//! - **Deterministic**: two pure functions, no state, bit-identical results for identical inputs
//! - **Actuarial Base**: remaining years by sex and age bracket (CDC 2021 approximation), or a custom table from ODS/XLSX/DataFrame
//! - **Risk Adjustments**: weight, smoking, diabetes, heart disease, cancer history and exercise, decayed with age
//! - **Presentation Data**: density curve samples, confidence interval, ordered cause shares, JSON report
//! - **Builder Pattern**: configuration and optional parameters via builders with automatic validation
//!
//! ## Quick Start
//!
//! ```rust
//! use lifexpect::prelude::*;
//!
//! let profile = PersonProfile::builder()
//!     .age(30)
//!     .sex(Sex::Male)
//!     .weight(WeightStatus::Obese)
//!     .smoking(SmokingStatus::Current)
//!     .diabetes(true)
//!     .build();
//!
//! let result = estimate_with().profile(&profile).call()?;
//! let causes = causes_for(profile.age, profile.sex);
//!
//! println!("Life expectancy: {:.2} ± {:.2}", result.life_expectancy, result.std_dev);
//! for share in causes.iter() {
//!     println!("{}: {}%", share.cause, share.weight);
//! }
//! # LifeResult::Ok(())
//! ```
//!
//! ## Notes
//! - `estimate` and `causes_for` never fail; validation happens at the input boundary
//!   (`PersonProfile::check`, `estimate_with`)
//! - Ages are whole years; profiles accept 1 to 100

pub type LifeResult<T> = Result<T, Box<dyn std::error::Error>>;
pub mod base_table;
pub mod causes;
pub mod config;
pub mod density;
pub mod error;
pub mod estimator;
pub mod helpers;
mod macros;
pub mod params;
pub mod prelude;
pub mod profile;
pub mod report;
