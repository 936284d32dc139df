//! # Cause-of-Death Lookup
//!
//! Relative share of leading causes of death by age bracket (approximate CDC figures).
//!
//! Four disjoint brackets select a fixed, ordered table of causes. Weights are percentage-like
//! integers that sum to 100 in every bracket; order is preserved so charts render causes in a
//! stable sequence.
//!
//! | Bracket     | Causes |
//! |-------------|--------|
//! | `< 25`      | Accidents, Suicide, Homicide, Cancer, Heart Disease, Other |
//! | `25 – 44`   | Accidents, Cancer, Heart Disease, Suicide, Liver Disease, Other |
//! | `45 – 64`   | Cancer, Heart Disease, Accidents, Diabetes, Respiratory Disease, Other |
//! | `≥ 65`      | Heart Disease, Cancer, Respiratory Disease, Alzheimer's, Stroke, Other |
//!
//! ## Example
//! ```rust
//! # use lifexpect::prelude::*;
//! let causes = causes_for(30, Sex::Female);
//! assert_eq!(causes.bracket(), CauseBracket::From25To44);
//! assert_eq!(causes.get("Liver Disease"), Some(5));
//! for share in causes.iter() {
//!     println!("{:<20} {:>3}%", share.cause, share.weight);
//! }
//! ```

use crate::profile::Sex;
use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CauseShare {
    pub cause: &'static str,
    pub weight: u32,
}

const fn share(cause: &'static str, weight: u32) -> CauseShare {
    CauseShare { cause, weight }
}

const UNDER_25: [CauseShare; 6] = [
    share("Accidents", 40),
    share("Suicide", 15),
    share("Homicide", 15),
    share("Cancer", 10),
    share("Heart Disease", 5),
    share("Other", 15),
];

const FROM_25_TO_44: [CauseShare; 6] = [
    share("Accidents", 25),
    share("Cancer", 20),
    share("Heart Disease", 20),
    share("Suicide", 10),
    share("Liver Disease", 5),
    share("Other", 20),
];

const FROM_45_TO_64: [CauseShare; 6] = [
    share("Cancer", 30),
    share("Heart Disease", 25),
    share("Accidents", 10),
    share("Diabetes", 10),
    share("Respiratory Disease", 10),
    share("Other", 15),
];

const FROM_65: [CauseShare; 6] = [
    share("Heart Disease", 30),
    share("Cancer", 25),
    share("Respiratory Disease", 15),
    share("Alzheimer's", 10),
    share("Stroke", 10),
    share("Other", 10),
];

// ===============================================
// BRACKETS
// ===============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CauseBracket {
    Under25,
    From25To44,
    From45To64,
    From65,
}

impl CauseBracket {
    pub fn for_age(age: u32) -> Self {
        match age {
            0..25 => CauseBracket::Under25,
            25..45 => CauseBracket::From25To44,
            45..65 => CauseBracket::From45To64,
            _ => CauseBracket::From65,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CauseBracket::Under25 => "under 25",
            CauseBracket::From25To44 => "25-44",
            CauseBracket::From45To64 => "45-64",
            CauseBracket::From65 => "65 and over",
        }
    }

    fn shares(self) -> &'static [CauseShare] {
        match self {
            CauseBracket::Under25 => &UNDER_25,
            CauseBracket::From25To44 => &FROM_25_TO_44,
            CauseBracket::From45To64 => &FROM_45_TO_64,
            CauseBracket::From65 => &FROM_65,
        }
    }
}

// ===============================================
// DISTRIBUTION
// ===============================================

/// Ordered cause → weight mapping for one age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CauseDistribution {
    bracket: CauseBracket,
    shares: &'static [CauseShare],
}

impl CauseDistribution {
    pub fn bracket(&self) -> CauseBracket {
        self.bracket
    }

    pub fn iter(&self) -> std::slice::Iter<'static, CauseShare> {
        self.shares.iter()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|s| s.cause).collect()
    }

    pub fn weights(&self) -> Vec<u32> {
        self.iter().map(|s| s.weight).collect()
    }

    pub fn get(&self, cause: &str) -> Option<u32> {
        self.iter().find(|s| s.cause == cause).map(|s| s.weight)
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|s| s.weight).sum()
    }

    /// Weights normalised to fractions of the bracket total, in table order.
    pub fn proportions(&self) -> Vec<(&'static str, f64)> {
        let total = f64::from(self.total());
        self.iter()
            .map(|s| {
                let p = if total > 0.0 {
                    f64::from(s.weight) / total
                } else {
                    0.0
                };
                (s.cause, p)
            })
            .collect()
    }

    pub fn to_df(&self) -> PolarsResult<DataFrame> {
        df! {
            "cause" => self.labels(),
            "weight" => self.weights(),
        }
    }
}

impl IntoIterator for CauseDistribution {
    type Item = &'static CauseShare;
    type IntoIter = std::slice::Iter<'static, CauseShare>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}

/// Leading causes of death for a person of `age`.
///
/// `sex` does not change the result; the reference figures are not split by sex. The
/// parameter is kept so callers do not change when sex-specific figures are added.
pub fn causes_for(age: u32, sex: Sex) -> CauseDistribution {
    let bracket = CauseBracket::for_age(age);
    log::debug!("cause bracket {} for age {age} ({sex})", bracket.label());
    CauseDistribution {
        bracket,
        shares: bracket.shares(),
    }
}
