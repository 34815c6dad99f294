//! Immutable analysis snapshots - the shape callers persist after a run.

use serde::{Deserialize, Serialize};

use crate::foundation::{PositionId, Timestamp};

use super::{AnalysisResult, RankingResult};

/// An analysis outcome frozen for storage.
///
/// Mirrors what the record store keeps per run: the rankings and the ideal
/// vectors, stamped with the position and creation time. The intermediate
/// matrices stay on [`AnalysisResult`] for the export layer; they are not
/// part of the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub position_id: PositionId,
    pub rankings: Vec<RankingResult>,
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
    pub created_at: Timestamp,
}

impl AnalysisSnapshot {
    /// Freezes an analysis result for a position, stamped with the current
    /// time.
    pub fn from_result(position_id: impl Into<PositionId>, result: &AnalysisResult) -> Self {
        Self {
            position_id: position_id.into(),
            rankings: result.rankings.clone(),
            ideal_best: result.ideal_best.clone(),
            ideal_worst: result.ideal_worst.clone(),
            created_at: Timestamp::now(),
        }
    }

    /// Returns every rank-1 entry (more than one when the top is tied).
    pub fn top_ranked(&self) -> Vec<&RankingResult> {
        self.rankings.iter().filter(|r| r.rank == 1).collect()
    }
}
