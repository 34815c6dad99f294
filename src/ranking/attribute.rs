//! Attribute definitions - the weighted, directional evaluation criteria.

use serde::{Deserialize, Serialize};

/// Input style for an attribute, owned by the form/UI layer.
///
/// The engine never consumes this; it travels with the attribute so the
/// record store round-trips position definitions losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Number,
    Rating,
}

/// A weighted, directional evaluation criterion within a position.
///
/// `weight` expresses relative importance on a 0.0 to 1.0 scale; across all
/// attributes of a position the weights are expected to sum to 1.0 (checked
/// by the caller, see [`Position`](crate::ranking::Position)). The engine
/// applies weights exactly as supplied and never re-normalizes them.
///
/// `beneficial` gives the criterion its direction: `true` means higher raw
/// values are better (skill score), `false` marks a cost attribute where
/// lower is better (salary expectation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub weight: f64,
    pub beneficial: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AttributeKind>,
}

impl Attribute {
    /// Creates an attribute with the fields the engine consumes.
    pub fn new(name: impl Into<String>, weight: f64, beneficial: bool) -> Self {
        Self {
            name: name.into(),
            weight,
            beneficial,
            min: None,
            max: None,
            kind: None,
        }
    }

    /// Attaches the min/max bounds the form layer uses for input checking.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Attaches the input style.
    pub fn with_kind(mut self, kind: AttributeKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
