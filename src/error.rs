//! # Boundary Errors
//!
//! The estimator and the cause lookup never fail. Errors only exist where inputs enter
//! the crate: profile validation, text labels coming from a form or the command line,
//! and custom base tables read from disk (the latter are reported through [`crate::LifeResult`]).

/// A person profile that must not reach the estimator.
#[derive(Debug, thiserror::Error)]
pub enum InvalidProfile {
    /// One or more field constraints failed (e.g. age outside 1..=100).
    #[error("invalid profile: {0}")]
    Rejected(#[from] garde::Report),

    /// A text label did not match any known value for the field.
    #[error("unrecognized {field} value '{value}'")]
    UnrecognizedLabel { field: &'static str, value: String },
}

impl InvalidProfile {
    pub(crate) fn label(field: &'static str, value: &str) -> Self {
        Self::UnrecognizedLabel {
            field,
            value: value.to_string(),
        }
    }
}
