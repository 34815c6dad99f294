//! Ranking module - Pure domain services for candidate analysis.
//!
//! This module contains the stateless TOPSIS pipeline that turns raw
//! per-candidate, per-attribute measurements into a deterministic ranking.
//!
//! # Components
//!
//! - `Attribute` / `Candidate` - Input records supplied by the record store
//! - `DecisionMatrix` - Raw matrix construction, normalization, weighting
//! - `IdealSolution` - Ideal-best / ideal-worst vector derivation
//! - `TopsisEngine` - Distance computation, closeness scoring, ranking
//! - `ValidationReport` - Advisory input validation
//! - `Position` / `AnalysisSnapshot` - Record shapes exchanged with callers
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod attribute;
mod candidate;
mod engine;
mod matrix;
mod position;
mod snapshot;
mod validation;

// Re-export all public types
pub use attribute::{Attribute, AttributeKind};
pub use candidate::{AttributeValue, Candidate};
pub use engine::{AnalysisResult, RankingResult, TopsisEngine};
pub use matrix::{DecisionMatrix, IdealSolution};
pub use position::{Position, WEIGHT_SUM_TOLERANCE};
pub use snapshot::AnalysisSnapshot;
pub use validation::{validate, ValidationIssue, ValidationReport};
