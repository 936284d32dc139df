//! # Result Report
//!
//! Bundles everything a presentation layer needs for one person: the inputs, the estimate,
//! the cause-of-death breakdown and, optionally, the sampled density curve.

use crate::LifeResult;
use crate::causes::{CauseDistribution, causes_for};
use crate::config::EstimatorConfig;
use crate::density::DensityCurve;
use crate::estimator::EstimateResult;
use crate::profile::PersonProfile;
use serde::Serialize;
use std::fmt;

pub const DISCLAIMER: &str = "\
Disclaimer: This calculator provides rough estimates based on population-level statistics
and should not be used for medical decisions. Consult healthcare professionals for
personalized medical advice.

Data sources: CDC Life Tables (2021), CDC Leading Causes of Death data, and
epidemiological studies on risk factors. Estimates become less certain with age and
multiple health conditions; risk factor impacts are reduced with age.";

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub profile: PersonProfile,
    pub estimate: EstimateResult,
    /// Number of standard deviations either side of the estimate.
    pub confidence_z: f64,
    /// Lower and upper bound of the confidence interval.
    pub interval: (f64, f64),
    pub causes: CauseDistribution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<DensityCurve>,
}

impl Report {
    pub fn new(profile: PersonProfile, estimate: EstimateResult, config: &EstimatorConfig) -> Self {
        Self {
            profile,
            confidence_z: config.confidence_z,
            interval: estimate.confidence_interval(config.confidence_z),
            estimate,
            causes: causes_for(profile.age, profile.sex),
            curve: None,
        }
    }

    pub fn with_curve(mut self) -> LifeResult<Self> {
        self.curve = Some(DensityCurve::from_estimate(&self.estimate)?);
        Ok(self)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text summary: results block followed by the cause breakdown.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.estimate;
        let (low, high) = self.interval;

        writeln!(f, "Results")?;
        writeln!(f, "-------")?;
        writeln!(f, "Current Age: {}", e.age)?;
        writeln!(f, "Estimated Years Remaining: {:.1} years", e.remaining_years())?;
        writeln!(f, "Estimated Life Expectancy: {:.1} years", e.life_expectancy)?;
        writeln!(
            f,
            "Confidence Interval (±{}σ): {low:.1} to {high:.1} years",
            self.confidence_z
        )?;
        writeln!(f)?;

        let a = &e.adjustments;
        writeln!(
            f,
            "Base remaining years: {:.1} (age factor {:.2})",
            e.base_remaining, e.age_factor
        )?;
        for (name, years) in [
            ("Weight", a.weight),
            ("Smoking", a.smoking),
            ("Diabetes", a.diabetes),
            ("Heart disease", a.heart_disease),
            ("Cancer history", a.cancer_history),
            ("Exercise", a.exercise),
        ] {
            if years != 0.0 {
                writeln!(f, "  {name:<16}{years:+.2} years")?;
            }
        }
        writeln!(f)?;

        writeln!(
            f,
            "Leading Causes of Death (age {})",
            self.causes.bracket().label()
        )?;
        for (cause, p) in self.causes.proportions() {
            writeln!(f, "  {cause:<22}{:>5.1}%", p * 100.0)?;
        }
        Ok(())
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate;
    use crate::profile::{Sex, SmokingStatus};

    fn smoker_report() -> Report {
        let profile = PersonProfile::builder()
            .age(30)
            .sex(Sex::Male)
            .smoking(SmokingStatus::Current)
            .build();
        Report::new(profile, estimate(&profile), &EstimatorConfig::default())
    }

    #[test]
    fn test_render_text() {
        let text = smoker_report().render_text();
        // 47 - 7 = 40 remaining years, sd 6
        assert!(text.contains("Current Age: 30"));
        assert!(text.contains("Estimated Years Remaining: 40.0 years"));
        assert!(text.contains("Estimated Life Expectancy: 70.0 years"));
        assert!(text.contains("Confidence Interval (±2σ): 58.0 to 82.0 years"));
        assert!(text.contains("Smoking"));
        assert!(!text.contains("Diabetes  "));
        assert!(text.contains("Liver Disease"));
    }

    #[test]
    fn test_render_text_uses_configured_z() {
        let profile = PersonProfile::builder().age(30).sex(Sex::Male).build();
        let config = EstimatorConfig::builder().confidence_z(1.5).build().unwrap();
        let report = Report::new(profile, estimate(&profile), &config);
        // 77 ± 1.5 * 7.05
        assert_eq!(report.render_text(), report.to_string());
        assert!(
            report
                .render_text()
                .contains("Confidence Interval (±1.5σ): 66.4 to 87.6 years")
        );
    }

    #[test]
    fn test_to_json_without_curve() {
        let json = smoker_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"]["smoking"], "Current");
        assert_eq!(value["causes"]["bracket"], "From25To44");
        assert_eq!(value["causes"]["shares"][0]["cause"], "Accidents");
        assert_eq!(value["confidence_z"], 2.0);
        assert!(value.get("curve").is_none());
    }

    #[test]
    fn test_to_json_with_curve() {
        let report = smoker_report().with_curve().unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        let points = value["curve"]["points"].as_array().unwrap();
        assert_eq!(points.len(), 100);
        assert_eq!(points[0]["age"], 30.0);
    }
}
