//! Candidate Compass - Multi-Criteria Candidate Ranking Engine
//!
//! This crate implements the TOPSIS method (Technique for Order of
//! Preference by Similarity to Ideal Solution) for ranking job candidates
//! against weighted, directional evaluation attributes.
//!
//! The engine is a pure function of its inputs: it holds no state between
//! invocations, performs no I/O, and leaves persistence and presentation to
//! external collaborators. Each call returns the full audit trail of how
//! scores were derived (normalized matrix, weighted matrix, ideal vectors)
//! alongside the ranking itself.

pub mod foundation;
pub mod ranking;

pub use foundation::{CandidateId, PositionId, Timestamp};
pub use ranking::{
    validate, AnalysisResult, AnalysisSnapshot, Attribute, AttributeKind, AttributeValue,
    Candidate, DecisionMatrix, IdealSolution, Position, RankingResult, TopsisEngine,
    ValidationIssue, ValidationReport,
};
