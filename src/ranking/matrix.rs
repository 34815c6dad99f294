//! Decision matrix construction, normalization, weighting, and ideal
//! solution derivation.

use serde::{Deserialize, Serialize};

use super::{Attribute, Candidate};

/// The raw decision matrix: one row per candidate, one column per attribute,
/// both in input order.
///
/// Derived and ephemeral - rebuilt on every analysis run, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Builds the matrix from raw candidate measurements.
    ///
    /// `matrix[i][j]` is candidate `i`'s value for attribute `j`, looked up
    /// by attribute name. A candidate with no value recorded for an
    /// attribute contributes `0` for that cell - a silent default kept for
    /// compatibility with stored analyses (missing data is surfaced by
    /// [`validate`](crate::ranking::validate) instead, which callers should
    /// run first).
    pub fn build(candidates: &[Candidate], attributes: &[Attribute]) -> Self {
        let rows = candidates
            .iter()
            .map(|candidate| {
                let values = candidate.value_map();
                attributes
                    .iter()
                    .map(|attr| values.get(attr.name.as_str()).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect();

        Self { rows }
    }

    /// Returns the matrix rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the number of candidates (rows).
    pub fn candidate_count(&self) -> usize {
        self.rows.len()
    }

    /// Normalizes the matrix column-wise using vector normalization.
    ///
    /// # Algorithm
    /// Each value is divided by the square root of the sum of squares of its
    /// column: `normalized[i][j] = matrix[i][j] / sqrt(Σ_i matrix[i][j]²)`.
    ///
    /// # Edge Cases
    /// - All-zero column: The denominator would be 0; `1` is used instead,
    ///   so the column normalizes to all zeros rather than dividing by zero.
    /// - Empty matrix: Returns an empty matrix.
    pub fn normalized(&self) -> Vec<Vec<f64>> {
        let Some(first) = self.rows.first() else {
            return Vec::new();
        };

        let column_count = first.len();
        let mut denominators = Vec::with_capacity(column_count);
        for j in 0..column_count {
            let sum_of_squares: f64 = self.rows.iter().map(|row| row[j] * row[j]).sum();
            let denom = sum_of_squares.sqrt();
            denominators.push(if denom == 0.0 { 1.0 } else { denom });
        }

        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&denominators)
                    .map(|(value, denom)| value / denom)
                    .collect()
            })
            .collect()
    }

    /// Applies attribute weights elementwise to a normalized matrix.
    ///
    /// Weights are used exactly as supplied - no re-normalization happens
    /// here even when they do not sum to 1.
    pub fn weighted(normalized: &[Vec<f64>], attributes: &[Attribute]) -> Vec<Vec<f64>> {
        normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(attributes)
                    .map(|(value, attr)| value * attr.weight)
                    .collect()
            })
            .collect()
    }
}

/// The ideal-best (A+) and ideal-worst (A-) synthetic alternatives.
///
/// Each vector has one entry per attribute, assembled from the column
/// extremes of the weighted matrix according to the attribute's direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdealSolution {
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
}

impl IdealSolution {
    /// Derives the ideal solutions from a weighted matrix.
    ///
    /// For a beneficial attribute the column maximum is best and the minimum
    /// worst; for a cost attribute the roles reverse.
    ///
    /// # Edge Cases
    /// - Empty matrix: Returns empty vectors.
    /// - Constant column (max == min): `ideal_best[j] == ideal_worst[j]`,
    ///   which is valid and simply contributes no discriminating power.
    pub fn from_weighted(weighted: &[Vec<f64>], attributes: &[Attribute]) -> Self {
        if weighted.is_empty() {
            return Self::default();
        }

        let mut ideal_best = Vec::with_capacity(attributes.len());
        let mut ideal_worst = Vec::with_capacity(attributes.len());

        for (j, attr) in attributes.iter().enumerate() {
            let column = weighted.iter().map(|row| row[j]);
            let max_val = column.clone().fold(f64::NEG_INFINITY, f64::max);
            let min_val = column.fold(f64::INFINITY, f64::min);

            if attr.beneficial {
                ideal_best.push(max_val);
                ideal_worst.push(min_val);
            } else {
                ideal_best.push(min_val);
                ideal_worst.push(max_val);
            }
        }

        Self {
            ideal_best,
            ideal_worst,
        }
    }
}
