//! Tournament over every strategy permutation
//!
//! A permutation is one (Q first move, P move, Q second move) triple of
//! strategy indices. Each permutation plays `config.trials` rounds from a
//! fresh score; the random source is shared across the whole tournament
//! and never reseeded. A failed round aborts only its own permutation.

use serde::{Deserialize, Serialize};
use crate::error::GameError;
use crate::game::{play_round, update_score, Enumeration, GameConfig, Score};
use crate::random::{RandomSource, SeededRng};
use crate::transform::Transformation;

/// Strategy indices chosen for one tournament entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permutation {
    /// 1-based position in the tournament
    pub ordinal: u32,
    pub q_first: usize,
    pub p_move: usize,
    pub q_second: usize,
}

impl Permutation {
    /// Resolve the indices against the config's strategy sets
    pub fn moves(
        &self,
        config: &GameConfig,
    ) -> Result<(Transformation, Transformation, Transformation), GameError> {
        match (
            config.q_strategies.get(self.q_first),
            config.p_strategies.get(self.p_move),
            config.q_strategies.get(self.q_second),
        ) {
            (Some(q1), Some(p1), Some(q2)) => Ok((*q1, *p1, *q2)),
            _ => Err(GameError::InvalidPermutation {
                ordinal: self.ordinal,
                q_first: self.q_first,
                p_move: self.p_move,
                q_second: self.q_second,
            }),
        }
    }
}

/// Final score of one permutation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationReport {
    pub permutation: Permutation,
    pub score: Score,
}

/// A permutation that was aborted, with the diagnostic that stopped it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationFailure {
    pub ordinal: u32,
    pub error: String,
}

/// Every report of one tournament run, in play order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub seed: u64,
    pub config: GameConfig,
    pub reports: Vec<PermutationReport>,
    pub failures: Vec<PermutationFailure>,
}

impl TournamentResult {
    pub fn q_total(&self) -> u32 {
        self.reports.iter().map(|r| r.score.q).sum()
    }

    pub fn p_total(&self) -> u32 {
        self.reports.iter().map(|r| r.score.p).sum()
    }

    /// Permutations where Q took every round
    pub fn q_sweeps(&self) -> impl Iterator<Item = &PermutationReport> + '_ {
        let trials = self.config.trials;
        self.reports.iter().filter(move |r| r.score.q == trials)
    }
}

/// Number of permutations: |Q| * |P| * |Q|
pub fn permutation_count(config: &GameConfig) -> u32 {
    let q = config.q_strategies.len() as u32;
    let p = config.p_strategies.len() as u32;
    q * p * q
}

/// Map a permutation index to strategy indices
///
/// With four Q moves and two P moves this is
/// `q_first = i/8 % 4`, `p_move = i % 2`, `q_second = i/2 % 4`.
/// Returns `None` when either strategy set is empty.
pub fn indexed_permutation(index: u32, q_count: usize, p_count: usize) -> Option<Permutation> {
    if q_count == 0 || p_count == 0 {
        return None;
    }
    let i = index as usize;
    Some(Permutation {
        ordinal: index + 1,
        q_first: (i / (p_count * q_count)) % q_count,
        p_move: i % p_count,
        q_second: (i / p_count) % q_count,
    })
}

/// All permutations in the order the config asks for
pub fn permutations(config: &GameConfig) -> Vec<Permutation> {
    let q_count = config.q_strategies.len();
    let p_count = config.p_strategies.len();

    match config.enumeration {
        Enumeration::Indexed => (0..permutation_count(config))
            .filter_map(|i| indexed_permutation(i, q_count, p_count))
            .collect(),
        Enumeration::Nested => {
            let mut out = Vec::with_capacity(permutation_count(config) as usize);
            for q_first in 0..q_count {
                for p_move in 0..p_count {
                    for q_second in 0..q_count {
                        out.push(Permutation {
                            ordinal: out.len() as u32 + 1,
                            q_first,
                            p_move,
                            q_second,
                        });
                    }
                }
            }
            out
        }
    }
}

/// Play `config.trials` rounds of one permutation from a zero score
pub fn run_permutation<R: RandomSource>(
    permutation: &Permutation,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Score, GameError> {
    let (q1, p1, q2) = permutation.moves(config)?;
    let mut score = Score::default();

    for _ in 0..config.trials {
        let outcome = play_round(q1, p1, q2, config, rng).map_err(|e| GameError::Permutation {
            ordinal: permutation.ordinal,
            source: Box::new(e),
        })?;
        score = update_score(outcome, score);
    }

    Ok(score)
}

/// Run every permutation with a caller-supplied random source
///
/// Returns the reports of completed permutations and the failures of
/// aborted ones, each in play order.
pub fn run_permutations<R: RandomSource>(
    config: &GameConfig,
    rng: &mut R,
) -> (Vec<PermutationReport>, Vec<PermutationFailure>) {
    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for permutation in permutations(config) {
        match run_permutation(&permutation, config, rng) {
            Ok(score) => {
                log::debug!(
                    "permutation #{} ({} {} {}): P {} Q {}",
                    permutation.ordinal,
                    permutation.q_first,
                    permutation.p_move,
                    permutation.q_second,
                    score.p,
                    score.q
                );
                reports.push(PermutationReport { permutation, score });
            }
            Err(error) => {
                log::error!("{}", error);
                failures.push(PermutationFailure {
                    ordinal: permutation.ordinal,
                    error: error.to_string(),
                });
            }
        }
    }

    (reports, failures)
}

/// Run a full tournament from a single seed
pub fn run_tournament(config: &GameConfig, seed: u64) -> TournamentResult {
    let mut rng = SeededRng::from_u64(seed);
    let (reports, failures) = run_permutations(config, &mut rng);
    TournamentResult {
        seed,
        config: config.clone(),
        reports,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::DrawRange;
    use crate::transform::StateVector;
    use std::collections::HashSet;

    fn triple(p: &Permutation) -> (usize, usize, usize) {
        (p.q_first, p.p_move, p.q_second)
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutation_count(&GameConfig::standard()), 32);
    }

    #[test]
    fn test_index_formula() {
        for i in 0..32u32 {
            let p = indexed_permutation(i, 4, 2).unwrap();
            assert_eq!(p.ordinal, i + 1);
            assert_eq!(p.q_first, (i as usize / 8) % 4);
            assert_eq!(p.p_move, i as usize % 2);
            assert_eq!(p.q_second, (i as usize / 2) % 4);
        }
    }

    #[test]
    fn test_index_ordering() {
        let perms = permutations(&GameConfig::standard());
        assert_eq!(triple(&perms[0]), (0, 0, 0));
        assert_eq!(triple(&perms[1]), (0, 1, 0));
        assert_eq!(triple(&perms[2]), (0, 0, 1));
        assert_eq!(triple(&perms[8]), (1, 0, 0));
        assert_eq!(triple(&perms[31]), (3, 1, 3));
    }

    #[test]
    fn test_indexed_covers_every_triple_once() {
        let perms = permutations(&GameConfig::standard());
        let unique: HashSet<_> = perms.iter().map(triple).collect();
        assert_eq!(perms.len(), 32);
        assert_eq!(unique.len(), 32);
    }

    #[test]
    fn test_nested_matches_indexed_set() {
        let config = GameConfig::standard();
        let indexed: HashSet<_> = permutations(&config).iter().map(triple).collect();
        let nested_perms = permutations(&config.clone().with_enumeration(Enumeration::Nested));
        let nested: HashSet<_> = nested_perms.iter().map(triple).collect();

        assert_eq!(indexed, nested);
        assert_eq!(triple(&nested_perms[1]), (0, 0, 1));
        let ordinals: Vec<_> = nested_perms.iter().map(|p| p.ordinal).collect();
        assert_eq!(ordinals, (1..=32).collect::<Vec<_>>());
    }

    #[test]
    fn test_tournament_reports() {
        let config = GameConfig::standard();
        let result = run_tournament(&config, 42);

        assert_eq!(result.reports.len(), 32);
        assert!(result.failures.is_empty());
        for (i, report) in result.reports.iter().enumerate() {
            let p = &report.permutation;
            assert_eq!(p.ordinal, i as u32 + 1);
            assert!((1..=32).contains(&p.ordinal));
            assert!(p.q_first < 4 && p.q_second < 4);
            assert!(p.p_move < 2);
            assert_eq!(report.score.total(), 100);
        }
        assert_eq!(result.q_total() + result.p_total(), 3200);
    }

    #[test]
    fn test_tournament_determinism() {
        let config = GameConfig::standard();
        assert_eq!(run_tournament(&config, 7), run_tournament(&config, 7));
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = GameConfig::standard();
        let a = run_tournament(&config, 1);
        let b = run_tournament(&config, 2);
        assert_ne!(a.reports, b.reports);
    }

    #[test]
    fn test_deterministic_permutations() {
        let result = run_tournament(&GameConfig::standard(), 3);
        let score_of = |q1, p, q2| {
            result
                .reports
                .iter()
                .find(|r| triple(&r.permutation) == (q1, p, q2))
                .map(|r| r.score)
                .unwrap()
        };

        // N N N
        assert_eq!(score_of(0, 0, 0), Score::new(0, 100));
        // SI N SI and SI F SI: Q undoes its own superposition
        assert_eq!(score_of(2, 0, 2), Score::new(0, 100));
        assert_eq!(score_of(2, 1, 2), Score::new(0, 100));
        // SI N SN
        assert_eq!(score_of(2, 0, 3), Score::new(100, 0));

        let sweeps: Vec<_> = result.q_sweeps().map(|r| triple(&r.permutation)).collect();
        assert!(sweeps.contains(&(2, 1, 2)));
    }

    #[test]
    fn test_failed_round_aborts_permutation() {
        let mut config = GameConfig::standard();
        config.initial_state = StateVector::new(0.0, 0.0);
        let mut rng = SeededRng::from_u64(1);

        let first = indexed_permutation(0, 4, 2).unwrap();
        match run_permutation(&first, &config, &mut rng).unwrap_err() {
            GameError::Permutation { ordinal, source } => {
                assert_eq!(ordinal, 1);
                assert!(matches!(*source, GameError::NotClassical { .. }));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_failures_do_not_stop_other_permutations() {
        // NaN survives N and F and is forced by the exact 0 beside it;
        // SI and SN smear it into both components, which cannot collapse.
        let mut config = GameConfig::standard();
        config.initial_state = StateVector::new(f64::NAN, 0.0);

        let result = run_tournament(&config, 5);
        assert_eq!(result.reports.len(), 8);
        for report in &result.reports {
            let p = &report.permutation;
            assert!(p.q_first < 2 && p.q_second < 2);
            let flips = p.q_first + p.p_move + p.q_second;
            let expected = if flips % 2 == 0 { Score::new(0, 100) } else { Score::new(100, 0) };
            assert_eq!(report.score, expected, "{:?}", p);
        }

        assert_eq!(result.failures.len(), 24);
        let ordinals: HashSet<_> = result.failures.iter().map(|f| f.ordinal).collect();
        assert_eq!(ordinals.len(), 24);
        assert!(result.failures.iter().all(|f| f.error.contains("aborted")));
    }

    #[test]
    fn test_out_of_range_permutation() {
        let config = GameConfig::standard();
        let mut rng = SeededRng::from_u64(1);

        let bad_q = Permutation { ordinal: 1, q_first: 4, p_move: 0, q_second: 0 };
        assert_eq!(
            run_permutation(&bad_q, &config, &mut rng),
            Err(GameError::InvalidPermutation { ordinal: 1, q_first: 4, p_move: 0, q_second: 0 })
        );

        let bad_p = Permutation { ordinal: 9, q_first: 0, p_move: 2, q_second: 3 };
        assert!(matches!(
            bad_p.moves(&config),
            Err(GameError::InvalidPermutation { ordinal: 9, p_move: 2, .. })
        ));
    }

    #[test]
    fn test_empty_strategy_sets() {
        assert_eq!(indexed_permutation(0, 4, 0), None);
        assert_eq!(indexed_permutation(3, 0, 2), None);

        let mut config = GameConfig::standard();
        config.p_strategies.clear();
        assert!(permutations(&config).is_empty());
        let result = run_tournament(&config, 1);
        assert!(result.reports.is_empty() && result.failures.is_empty());
    }

    #[test]
    fn test_draw_range_is_used() {
        let config = GameConfig::standard().with_draw_range(DrawRange::new(1, 1).unwrap());
        let mut rng = SeededRng::from_u64(8);
        // A draw of 1 is always <= 5, so every superposed component 0 resolves to 1
        let perm = indexed_permutation(4, 4, 2).unwrap(); // (0, 0, 2): N N SI
        assert_eq!(triple(&perm), (0, 0, 2));
        assert_eq!(run_permutation(&perm, &config, &mut rng), Ok(Score::new(0, 100)));
    }
}
