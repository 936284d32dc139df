//! # Life Expectancy Density Curve
//!
//! Samples the normal density around an estimate, for rendering as a filled area chart.
//!
//! The domain starts at the current age and spans the projected remaining years, widened to
//! at least `min_span` (20 years by default) so short projections still show a readable curve:
//!
//! ```text
//! domain = [age, age + max(min_span, trunc(E - age))]
//! y(x)   = φ(x; E, σ)
//! ```
//!
//! ## Example
//! ```rust
//! # use lifexpect::prelude::*;
//! let profile = PersonProfile::builder().age(30).sex(Sex::Male).build();
//! let result = estimate(&profile);
//!
//! let curve = DensityCurve::from_estimate(&result)?;
//! assert_eq!(curve.len(), 100);
//!
//! let coarse = density_curve()
//!     .age(result.age)
//!     .life_expectancy(result.life_expectancy)
//!     .std_dev(result.std_dev)
//!     .points(25)
//!     .call()?;
//! println!("{}", coarse.to_df()?);
//! # LifeResult::Ok(())
//! ```

use crate::LifeResult;
use crate::estimator::EstimateResult;
use crate::helpers::{linspace, normal_pdf};
use crate::params::CurveParams;
use bon::builder;
use polars::prelude::*;
use serde::Serialize;

pub const DEFAULT_CURVE_POINTS: usize = 100;
pub const DEFAULT_MIN_SPAN: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityPoint {
    pub age: f64,
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityCurve {
    pub mean: f64,
    pub std_dev: f64,
    points: Vec<DensityPoint>,
}

impl DensityCurve {
    /// Curve with default sampling for an estimate.
    pub fn from_estimate(result: &EstimateResult) -> LifeResult<Self> {
        density_curve()
            .age(result.age)
            .life_expectancy(result.life_expectancy)
            .std_dev(result.std_dev)
            .call()
    }

    pub fn points(&self) -> &[DensityPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last sampled age.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.age, self.points.last()?.age))
    }

    pub fn ages(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.age).collect()
    }

    pub fn densities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.density).collect()
    }

    /// Sample with the highest density.
    pub fn peak(&self) -> Option<DensityPoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.density.total_cmp(&b.density))
    }

    pub fn to_df(&self) -> PolarsResult<DataFrame> {
        df! {
            "age" => self.ages(),
            "density" => self.densities(),
        }
    }
}

/// Sample the normal density of an estimate over its display domain.
///
/// # Errors
/// - Fewer than 2 points, non-positive `std_dev`, `min_span` of 0
/// - `life_expectancy` below `age` or not finite
#[builder]
pub fn density_curve(
    age: u32,
    life_expectancy: f64,
    std_dev: f64,
    #[builder(default = DEFAULT_CURVE_POINTS)] points: usize,
    #[builder(default = DEFAULT_MIN_SPAN)] min_span: u32,
    #[builder(default = true)] validate: bool,
) -> LifeResult<DensityCurve> {
    if validate {
        let params = CurveParams {
            age,
            life_expectancy,
            std_dev,
            points,
            min_span,
        };

        params
            .validate_all()
            .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;
    }

    let start = f64::from(age);
    let span = f64::max(f64::from(min_span), (life_expectancy - start).trunc());

    let points = linspace(start, start + span, points)
        .into_iter()
        .map(|x| DensityPoint {
            age: x,
            density: normal_pdf(x, life_expectancy, std_dev),
        })
        .collect();

    Ok(DensityCurve {
        mean: life_expectancy,
        std_dev,
        points,
    })
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate;
    use crate::profile::{ExerciseLevel, PersonProfile, Sex};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fn_density_curve_spans_remaining_years() {
        let profile = PersonProfile::builder().age(30).sex(Sex::Male).build();
        let curve = DensityCurve::from_estimate(&estimate(&profile)).unwrap();
        assert_eq!(curve.len(), DEFAULT_CURVE_POINTS);
        assert_eq!(curve.domain(), Some((30.0, 77.0)));

        let peak = curve.peak().unwrap();
        assert_eq!(peak.age, 77.0);
        assert_abs_diff_eq!(
            peak.density,
            1.0 / (7.05 * (2.0 * std::f64::consts::PI).sqrt()),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_fn_density_curve_minimum_span() {
        let profile = PersonProfile::builder()
            .age(80)
            .sex(Sex::Female)
            .exercise(ExerciseLevel::Active)
            .build();
        let curve = DensityCurve::from_estimate(&estimate(&profile)).unwrap();
        // 9.8 remaining years is widened to the 20-year minimum
        assert_eq!(curve.domain(), Some((80.0, 100.0)));
    }

    #[test]
    fn test_fn_density_curve_truncates_span() {
        let curve = density_curve()
            .age(30)
            .life_expectancy(72.65)
            .std_dev(6.3975)
            .points(43)
            .call()
            .unwrap();
        // trunc(42.65) = 42, one point per year
        assert_eq!(curve.domain(), Some((30.0, 72.0)));
        let ages = curve.ages();
        assert_abs_diff_eq!(ages[1] - ages[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fn_density_curve_covers_most_mass() {
        // Mean well inside the domain: trapezoid integral close to the mass within the domain
        let curve = density_curve()
            .age(20)
            .life_expectancy(60.0)
            .std_dev(5.0)
            .points(400)
            .min_span(80)
            .call()
            .unwrap();
        let ages = curve.ages();
        let dens = curve.densities();
        let area: f64 = ages
            .windows(2)
            .zip(dens.windows(2))
            .map(|(x, y)| (x[1] - x[0]) * (y[0] + y[1]) / 2.0)
            .sum();
        assert_abs_diff_eq!(area, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_fn_density_curve_validation() {
        assert!(
            density_curve()
                .age(30)
                .life_expectancy(80.0)
                .std_dev(0.0)
                .call()
                .is_err()
        );
        assert!(
            density_curve()
                .age(30)
                .life_expectancy(20.0)
                .std_dev(2.0)
                .call()
                .is_err()
        );
        assert!(
            density_curve()
                .age(30)
                .life_expectancy(80.0)
                .std_dev(2.0)
                .points(1)
                .call()
                .is_err()
        );
    }

    #[test]
    fn test_to_df() {
        let curve = density_curve()
            .age(50)
            .life_expectancy(78.0)
            .std_dev(4.2)
            .points(10)
            .call()
            .unwrap();
        let df = curve.to_df().unwrap();
        assert_eq!(df.shape(), (10, 2));
        assert_eq!(df.get_column_names(), vec!["age", "density"]);
    }
}
