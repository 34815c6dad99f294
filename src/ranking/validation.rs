//! Advisory input validation for the ranking engine.
//!
//! Callers should run [`validate`] before [`TopsisEngine::rank`] so missing
//! or corrupt measurements surface as messages instead of silently scoring
//! as zero. The engine does not enforce this: `rank` applies its defaulting
//! policy regardless, and validation never blocks a run (defense in depth,
//! not mutual exclusivity).
//!
//! [`TopsisEngine::rank`]: crate::ranking::TopsisEngine::rank

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Attribute, Candidate};

/// A single problem found in the candidate data.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// The candidate has no value recorded for the attribute.
    #[error("{candidate} is missing value for \"{attribute}\"")]
    MissingValue { candidate: String, attribute: String },

    /// The recorded value is not a finite number.
    #[error("{candidate} has invalid value for \"{attribute}\"")]
    InvalidValue { candidate: String, attribute: String },
}

impl ValidationIssue {
    /// Creates a missing-value issue.
    pub fn missing(candidate: impl Into<String>, attribute: impl Into<String>) -> Self {
        ValidationIssue::MissingValue {
            candidate: candidate.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid-value issue.
    pub fn invalid(candidate: impl Into<String>, attribute: impl Into<String>) -> Self {
        ValidationIssue::InvalidValue {
            candidate: candidate.into(),
            attribute: attribute.into(),
        }
    }
}

/// Outcome of validating candidate data against a position's attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when no issues were found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the issues found, in candidate-then-attribute input order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Renders the issues as display messages.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.to_string()).collect()
    }
}

/// Checks that every candidate carries a finite value for every attribute.
///
/// Records one issue per candidate/attribute pair that has no value or a
/// non-finite one (NaN or infinite).
pub fn validate(candidates: &[Candidate], attributes: &[Attribute]) -> ValidationReport {
    let mut issues = Vec::new();

    for candidate in candidates {
        for attr in attributes {
            match candidate.value_for(&attr.name) {
                None => issues.push(ValidationIssue::missing(&candidate.name, &attr.name)),
                Some(value) if !value.is_finite() => {
                    issues.push(ValidationIssue::invalid(&candidate.name, &attr.name));
                }
                Some(_) => {}
            }
        }
    }

    ValidationReport { issues }
}
