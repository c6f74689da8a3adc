//! Error types for PCR runs and their input/output collaborators.
//!
//! A run either completes (possibly with zero products) or fails fast with
//! [`PcrError::InputMissing`]. Finding no products is **not** an error; see
//! [`crate::PcrRun::has_products`].
use core::fmt;

/// Which piece of input was missing when a run was refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MissingInput {
    /// The cleaned template is empty.
    NoTemplate,
    /// The forward or the reverse primer is empty.
    MissingPrimer,
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingInput::NoTemplate => write!(f, "no template"),
            MissingInput::MissingPrimer => write!(f, "missing primer"),
        }
    }
}

/// Errors that can be returned by this crate.
#[derive(thiserror::Error, Debug)]
pub enum PcrError {
    /// Template or primer text is empty; no search was attempted.
    #[error("input missing: {0}")]
    InputMissing(MissingInput),
    /// Uploaded content is not a readable single-record FASTA.
    #[error("could not read FASTA: {0}")]
    FastaParse(String),
    /// Underlying IO failure while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Building or writing the product table failed.
    #[error("table error: {0}")]
    Table(#[from] polars::prelude::PolarsError),
    /// JSON serialization of product rows failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_missing_reasons_are_human_readable() {
        assert_eq!(PcrError::InputMissing(MissingInput::NoTemplate).to_string(), "input missing: no template");
        assert_eq!(PcrError::InputMissing(MissingInput::MissingPrimer).to_string(), "input missing: missing primer");
    }
}
