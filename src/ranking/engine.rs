//! TOPSIS engine - distance computation, closeness scoring, and ranking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::CandidateId;

use super::{Attribute, Candidate, DecisionMatrix, IdealSolution};

/// One candidate's scored outcome within an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    /// Relative closeness to the ideal solution, in `[0, 1]`. Higher is
    /// better.
    pub closeness_score: f64,
    pub distance_to_best: f64,
    pub distance_to_worst: f64,
    /// Competition rank, starting at 1. Tied scores share a rank; the next
    /// distinct score takes its position index, so two candidates tied at
    /// rank 1 are followed by rank 3.
    pub rank: u32,
}

/// Complete output of one analysis run.
///
/// Alongside the ranking itself this carries the full audit trail - the
/// intermediate matrices and ideal vectors downstream reporting needs to
/// show how each score was derived. Nothing here is persisted by the
/// engine; the caller owns the result's lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub rankings: Vec<RankingResult>,
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
    pub normalized_matrix: Vec<Vec<f64>>,
    pub weighted_matrix: Vec<Vec<f64>>,
}

/// TOPSIS ranking functions.
///
/// Stateless: every invocation is independent and side-effect-free, so
/// callers may run analyses for different inputs concurrently without
/// coordination.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Ranks candidates against weighted, directional attributes.
    ///
    /// # Algorithm
    /// 1. Build the decision matrix (missing values default to 0)
    /// 2. Normalize it column-wise (vector normalization)
    /// 3. Apply attribute weights as supplied
    /// 4. Determine ideal-best and ideal-worst vectors per direction flag
    /// 5. Compute each candidate's Euclidean distance to both ideals
    /// 6. Score: `distance_to_worst / (distance_to_best + distance_to_worst)`
    /// 7. Round scores, distances, and ideal vectors to 4 decimal places
    /// 8. Stable-sort by score descending and assign competition ranks
    ///
    /// Ordering and tie detection operate on the rounded scores, and ties
    /// keep their relative input order.
    ///
    /// # Edge Cases
    /// - No candidates: Everything empty
    /// - Single candidate: Trivially rank 1 with score 1.0 and zero
    ///   distances; no comparison is performed, so matrices and ideal
    ///   vectors come back empty
    /// - No attributes: Every candidate scores a neutral 0.5 with rank
    ///   equal to its 1-based input position; no sorting is performed
    /// - Zero-sum distances (identical weighted vectors): Neutral 0.5
    ///   score instead of NaN
    pub fn rank(candidates: &[Candidate], attributes: &[Attribute]) -> AnalysisResult {
        if candidates.is_empty() {
            return AnalysisResult::default();
        }

        if candidates.len() == 1 {
            let only = &candidates[0];
            return AnalysisResult {
                rankings: vec![RankingResult {
                    candidate_id: only.id.clone(),
                    candidate_name: only.name.clone(),
                    closeness_score: 1.0,
                    distance_to_best: 0.0,
                    distance_to_worst: 0.0,
                    rank: 1,
                }],
                ..AnalysisResult::default()
            };
        }

        if attributes.is_empty() {
            let rankings = candidates
                .iter()
                .enumerate()
                .map(|(i, candidate)| RankingResult {
                    candidate_id: candidate.id.clone(),
                    candidate_name: candidate.name.clone(),
                    closeness_score: 0.5,
                    distance_to_best: 0.0,
                    distance_to_worst: 0.0,
                    rank: (i + 1) as u32,
                })
                .collect();
            return AnalysisResult {
                rankings,
                ..AnalysisResult::default()
            };
        }

        let matrix = DecisionMatrix::build(candidates, attributes);
        let normalized = matrix.normalized();
        let weighted = DecisionMatrix::weighted(&normalized, attributes);
        let ideal = IdealSolution::from_weighted(&weighted, attributes);

        let mut rankings: Vec<RankingResult> = candidates
            .iter()
            .zip(&weighted)
            .map(|(candidate, row)| {
                let distance_to_best = euclidean_distance(row, &ideal.ideal_best);
                let distance_to_worst = euclidean_distance(row, &ideal.ideal_worst);

                RankingResult {
                    candidate_id: candidate.id.clone(),
                    candidate_name: candidate.name.clone(),
                    closeness_score: round4(closeness(distance_to_best, distance_to_worst)),
                    distance_to_best: round4(distance_to_best),
                    distance_to_worst: round4(distance_to_worst),
                    rank: 0,
                }
            })
            .collect();

        // Stable sort: tied scores keep their input-relative order.
        rankings.sort_by(|a, b| b.closeness_score.total_cmp(&a.closeness_score));
        assign_competition_ranks(&mut rankings);

        debug!(
            candidates = candidates.len(),
            attributes = attributes.len(),
            "computed TOPSIS ranking"
        );

        AnalysisResult {
            rankings,
            ideal_best: ideal.ideal_best.iter().copied().map(round4).collect(),
            ideal_worst: ideal.ideal_worst.iter().copied().map(round4).collect(),
            normalized_matrix: normalized,
            weighted_matrix: weighted,
        }
    }
}

/// Euclidean distance between a weighted row and an ideal vector.
fn euclidean_distance(row: &[f64], ideal: &[f64]) -> f64 {
    row.iter()
        .zip(ideal)
        .map(|(value, target)| (value - target) * (value - target))
        .sum::<f64>()
        .sqrt()
}

/// Relative closeness to the ideal solution.
///
/// An exactly-zero denominator (both distances zero) yields a neutral 0.5
/// rather than NaN; it documents an undecidable tie.
fn closeness(distance_to_best: f64, distance_to_worst: f64) -> f64 {
    let denominator = distance_to_best + distance_to_worst;
    if denominator == 0.0 {
        return 0.5;
    }
    distance_to_worst / denominator
}

/// Rounds to 4 decimal places for presentation stability.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Assigns competition ranks over rows already sorted by score descending.
///
/// A row whose score equals the previous row's keeps the previous rank; a
/// strictly lower score takes its 1-based position index, skipping the
/// ranks consumed by the tie above it.
fn assign_competition_ranks(rankings: &mut [RankingResult]) {
    let mut current_rank = 1;
    for i in 0..rankings.len() {
        if i > 0 && rankings[i].closeness_score < rankings[i - 1].closeness_score {
            current_rank = (i + 1) as u32;
        }
        rankings[i].rank = current_rank;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(name: &str, weight: f64, beneficial: bool) -> Attribute {
        Attribute::new(name, weight, beneficial)
    }

    fn has_four_decimals(value: f64) -> bool {
        (value * 10_000.0 - (value * 10_000.0).round()).abs() < 1e-9
    }

    // ─────────────────────────────────────────────────────────────────────
    // Edge cases
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn no_candidates_yields_empty_result() {
        let result = TopsisEngine::rank(&[], &[attr("x", 1.0, true)]);

        assert!(result.rankings.is_empty());
        assert!(result.ideal_best.is_empty());
        assert!(result.ideal_worst.is_empty());
        assert!(result.normalized_matrix.is_empty());
        assert!(result.weighted_matrix.is_empty());
    }

    #[test]
    fn single_candidate_is_trivially_best() {
        let candidates = vec![Candidate::with_values("1", "Alice", [("x", 5.0)])];
        let result = TopsisEngine::rank(&candidates, &[attr("x", 1.0, true)]);

        assert_eq!(result.rankings.len(), 1);
        let ranking = &result.rankings[0];
        assert_eq!(ranking.candidate_id, CandidateId::from("1"));
        assert_eq!(ranking.candidate_name, "Alice");
        assert_eq!(ranking.closeness_score, 1.0);
        assert_eq!(ranking.distance_to_best, 0.0);
        assert_eq!(ranking.distance_to_worst, 0.0);
        assert_eq!(ranking.rank, 1);

        // No comparison was performed.
        assert!(result.ideal_best.is_empty());
        assert!(result.normalized_matrix.is_empty());
    }

    #[test]
    fn single_candidate_wins_even_with_no_attributes() {
        // The single-candidate rule takes precedence over the no-attributes
        // rule, so the score is 1.0 rather than the neutral 0.5.
        let candidates = vec![Candidate::new("1", "Alice")];
        let result = TopsisEngine::rank(&candidates, &[]);

        assert_eq!(result.rankings[0].closeness_score, 1.0);
        assert_eq!(result.rankings[0].rank, 1);
    }

    #[test]
    fn no_attributes_scores_everyone_neutrally_in_input_order() {
        let candidates = vec![
            Candidate::new("1", "Alice"),
            Candidate::new("2", "Bob"),
            Candidate::new("3", "Carol"),
        ];
        let result = TopsisEngine::rank(&candidates, &[]);

        for (i, ranking) in result.rankings.iter().enumerate() {
            assert_eq!(ranking.closeness_score, 0.5);
            assert_eq!(ranking.distance_to_best, 0.0);
            assert_eq!(ranking.distance_to_worst, 0.0);
            assert_eq!(ranking.rank, (i + 1) as u32);
        }
        assert_eq!(result.rankings[0].candidate_name, "Alice");
        assert_eq!(result.rankings[2].candidate_name, "Carol");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Scoring
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn higher_beneficial_value_wins_outright() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 10.0)]),
            Candidate::with_values("2", "Bob", [("x", 20.0)]),
        ];
        let result = TopsisEngine::rank(&candidates, &[attr("x", 1.0, true)]);

        let winner = &result.rankings[0];
        assert_eq!(winner.candidate_name, "Bob");
        assert_eq!(winner.closeness_score, 1.0);
        assert_eq!(winner.distance_to_best, 0.0);
        assert_eq!(winner.rank, 1);

        let loser = &result.rankings[1];
        assert_eq!(loser.candidate_name, "Alice");
        assert_eq!(loser.closeness_score, 0.0);
        assert_eq!(loser.rank, 2);

        // The winner's ideal-best entry is its own weighted value.
        let winner_weighted = result.weighted_matrix[1][0];
        assert_eq!(result.ideal_best[0], (winner_weighted * 10_000.0).round() / 10_000.0);
    }

    #[test]
    fn lower_cost_value_wins() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("salary", 120.0)]),
            Candidate::with_values("2", "Bob", [("salary", 90.0)]),
        ];
        let result = TopsisEngine::rank(&candidates, &[attr("salary", 1.0, false)]);

        assert_eq!(result.rankings[0].candidate_name, "Bob");
        assert!(result.rankings[0].closeness_score > result.rankings[1].closeness_score);
    }

    #[test]
    fn missing_value_is_scored_as_zero() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 10.0)]),
            Candidate::new("2", "Bob"),
        ];
        let result = TopsisEngine::rank(&candidates, &[attr("x", 1.0, true)]);

        assert_eq!(result.rankings[0].candidate_name, "Alice");
        assert_eq!(result.rankings[0].closeness_score, 1.0);
        assert_eq!(result.rankings[1].candidate_name, "Bob");
        assert_eq!(result.rankings[1].closeness_score, 0.0);
    }

    #[test]
    fn identical_weighted_vectors_score_neutral() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 7.0)]),
            Candidate::with_values("2", "Bob", [("x", 7.0)]),
        ];
        let result = TopsisEngine::rank(&candidates, &[attr("x", 1.0, true)]);

        assert_eq!(result.rankings[0].closeness_score, 0.5);
        assert_eq!(result.rankings[1].closeness_score, 0.5);
    }

    #[test]
    fn scores_and_distances_are_rounded_to_four_decimals() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 1.0), ("y", 3.0)]),
            Candidate::with_values("2", "Bob", [("x", 2.0), ("y", 2.0)]),
            Candidate::with_values("3", "Carol", [("x", 3.0), ("y", 1.0)]),
        ];
        let attributes = vec![attr("x", 0.6, true), attr("y", 0.4, true)];
        let result = TopsisEngine::rank(&candidates, &attributes);

        for ranking in &result.rankings {
            assert!(has_four_decimals(ranking.closeness_score));
            assert!(has_four_decimals(ranking.distance_to_best));
            assert!(has_four_decimals(ranking.distance_to_worst));
        }
        for value in result.ideal_best.iter().chain(&result.ideal_worst) {
            assert!(has_four_decimals(*value));
        }
    }

    #[test]
    fn intermediate_matrices_are_not_rounded() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 10.0)]),
            Candidate::with_values("2", "Bob", [("x", 20.0)]),
        ];
        let result = TopsisEngine::rank(&candidates, &[attr("x", 1.0, true)]);

        // 10 / sqrt(500) carries full precision in the audit matrices.
        let expected = 10.0 / 500.0_f64.sqrt();
        assert_eq!(result.normalized_matrix[0][0], expected);
        assert_eq!(result.weighted_matrix[0][0], expected);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Ranking and ties
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn tied_candidates_share_rank_and_next_rank_skips() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 9.0)]),
            Candidate::with_values("2", "Bob", [("x", 9.0)]),
            Candidate::with_values("3", "Carol", [("x", 1.0)]),
        ];
        let result = TopsisEngine::rank(&candidates, &[attr("x", 1.0, true)]);

        assert_eq!(result.rankings[0].rank, 1);
        assert_eq!(result.rankings[1].rank, 1);
        assert_eq!(result.rankings[2].rank, 3);
        assert_eq!(result.rankings[2].candidate_name, "Carol");
    }

    #[test]
    fn tied_candidates_keep_input_order() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 5.0)]),
            Candidate::with_values("2", "Bob", [("x", 5.0)]),
            Candidate::with_values("3", "Carol", [("x", 5.0)]),
        ];
        let result = TopsisEngine::rank(&candidates, &[attr("x", 1.0, true)]);

        let names: Vec<_> = result
            .rankings
            .iter()
            .map(|r| r.candidate_name.as_str())
            .collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn ties_are_detected_on_rounded_scores() {
        // The weight skew puts the unrounded scores a hair's breadth apart
        // (about 1e-7); after 4-decimal rounding both are 0.5 and must tie.
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 1.0), ("y", 0.0)]),
            Candidate::with_values("2", "Bob", [("x", 0.0), ("y", 1.0)]),
        ];
        let attributes = vec![attr("x", 0.5, true), attr("y", 0.500_000_1, true)];
        let result = TopsisEngine::rank(&candidates, &attributes);

        assert_eq!(result.rankings[0].closeness_score, 0.5);
        assert_eq!(result.rankings[1].closeness_score, 0.5);
        assert_eq!(result.rankings[0].rank, 1);
        assert_eq!(result.rankings[1].rank, 1);
        // Stable sort keeps input order for the tied pair.
        assert_eq!(result.rankings[0].candidate_name, "Alice");
    }

    #[test]
    fn ranks_are_non_decreasing_and_scores_non_increasing() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 2.0), ("y", 8.0)]),
            Candidate::with_values("2", "Bob", [("x", 7.0), ("y", 3.0)]),
            Candidate::with_values("3", "Carol", [("x", 5.0), ("y", 5.0)]),
            Candidate::with_values("4", "Dan", [("x", 1.0), ("y", 1.0)]),
        ];
        let attributes = vec![attr("x", 0.7, true), attr("y", 0.3, false)];
        let result = TopsisEngine::rank(&candidates, &attributes);

        for pair in result.rankings.windows(2) {
            assert!(pair[0].closeness_score >= pair[1].closeness_score);
            assert!(pair[0].rank <= pair[1].rank);
        }
        assert_eq!(result.rankings[0].rank, 1);
    }

    #[test]
    fn rank_is_deterministic_for_identical_inputs() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 3.5), ("y", 120.0)]),
            Candidate::with_values("2", "Bob", [("x", 8.0), ("y", 95.0)]),
            Candidate::with_values("3", "Carol", [("x", 6.0), ("y", 110.0)]),
        ];
        let attributes = vec![attr("x", 0.6, true), attr("y", 0.4, false)];

        let first = TopsisEngine::rank(&candidates, &attributes);
        let second = TopsisEngine::rank(&candidates, &attributes);
        assert_eq!(first, second);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 3.0)]),
            Candidate::with_values("2", "Bob", [("x", 4.0)]),
        ];
        let attributes = vec![attr("x", 1.0, true)];

        let candidates_before = candidates.clone();
        let attributes_before = attributes.clone();
        TopsisEngine::rank(&candidates, &attributes);

        assert_eq!(candidates, candidates_before);
        assert_eq!(attributes, attributes_before);
    }

    #[test]
    fn result_round_trips_through_json() {
        let candidates = vec![
            Candidate::with_values("1", "Alice", [("x", 10.0)]),
            Candidate::with_values("2", "Bob", [("x", 20.0)]),
        ];
        let result = TopsisEngine::rank(&candidates, &[attr("x", 1.0, true)]);

        let json = serde_json::to_string(&result).unwrap();
        let restored: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, result);
    }
}
