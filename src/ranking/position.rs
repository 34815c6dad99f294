//! Position records - the container a set of attributes belongs to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::foundation::{PositionId, Timestamp};

use super::Attribute;

/// How far the attribute weights of a position may drift from summing to
/// exactly 1.0 before the position counts as unbalanced.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// An open position with the attributes candidates are evaluated against.
///
/// The engine itself only ever sees the attribute list; the position record
/// exists so the record store and the engine's callers share one shape, and
/// so the weight-balance rule the caller must enforce before ranking has a
/// canonical implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub name: String,
    pub description: String,
    pub attributes: Vec<Attribute>,
    pub created_at: Timestamp,
}

impl Position {
    /// Creates a position stamped with the current time.
    pub fn new(
        id: impl Into<PositionId>,
        name: impl Into<String>,
        description: impl Into<String>,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            attributes,
            created_at: Timestamp::now(),
        }
    }

    /// Sum of all attribute weights.
    pub fn weights_total(&self) -> f64 {
        self.attributes.iter().map(|attr| attr.weight).sum()
    }

    /// Checks the weight-sum invariant: weights must sum to 1.0 within
    /// [`WEIGHT_SUM_TOLERANCE`].
    ///
    /// Callers enforce this before invoking the engine; the engine itself
    /// tolerates any weight set and applies it as given.
    pub fn weights_are_balanced(&self) -> bool {
        (self.weights_total() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// Returns attribute names that appear more than once, in first-seen
    /// order.
    ///
    /// Names must be unique within a position for lookup-by-name to be
    /// well-defined; an empty result means the position is usable.
    pub fn duplicate_attribute_names(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for attr in &self.attributes {
            *counts.entry(attr.name.as_str()).or_insert(0) += 1;
        }

        let mut duplicates = Vec::new();
        for attr in &self.attributes {
            let name = attr.name.as_str();
            if counts[name] > 1 && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}
