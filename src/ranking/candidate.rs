//! Candidate records - raw measurements keyed by attribute name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::foundation::CandidateId;

/// A single measurement for one attribute of a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub attribute_name: String,
    pub value: f64,
}

impl AttributeValue {
    /// Creates a new measurement.
    pub fn new(attribute_name: impl Into<String>, value: f64) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            value,
        }
    }
}

/// A candidate under evaluation.
///
/// Values are held as a list of pairs rather than a map so the record
/// round-trips the store's shape exactly; lookups go through [`value_for`]
/// or the precomputed [`value_map`].
///
/// [`value_for`]: Candidate::value_for
/// [`value_map`]: Candidate::value_map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub values: Vec<AttributeValue>,
}

impl Candidate {
    /// Creates a candidate with no values recorded yet.
    pub fn new(id: impl Into<CandidateId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Creates a candidate from (attribute name, value) pairs.
    pub fn with_values<N>(
        id: impl Into<CandidateId>,
        name: impl Into<String>,
        values: impl IntoIterator<Item = (N, f64)>,
    ) -> Self
    where
        N: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            values: values
                .into_iter()
                .map(|(n, v)| AttributeValue::new(n, v))
                .collect(),
        }
    }

    /// Looks up the value recorded for an attribute name.
    ///
    /// If the list carries duplicate entries for a name, the first
    /// occurrence wins.
    pub fn value_for(&self, attribute_name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.attribute_name == attribute_name)
            .map(|v| v.value)
    }

    /// Builds a name-to-value map for O(1) lookups during matrix
    /// construction.
    ///
    /// Preserves first-occurrence-wins semantics for duplicate names.
    pub fn value_map(&self) -> HashMap<&str, f64> {
        let mut map = HashMap::with_capacity(self.values.len());
        for v in &self.values {
            map.entry(v.attribute_name.as_str()).or_insert(v.value);
        }
        map
    }
}
