//! Spin Logic for the Electron Game
//!
//! Core game logic for a sequential two-player game played on the spin of
//! a single electron. Q moves twice, P moves once in between; the final
//! state collapses to up (a point for Q) or down (a point for P).
//! This crate is compiled to:
//! - Native (for the console tournament)
//! - WASM (for frontend tournament replay)

mod error;
mod random;
mod transform;
mod collapse;
mod game;
mod tournament;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::GameError;
pub use random::{DrawRange, RandomSource, SeededRng};
pub use transform::{StateVector, Transformation, P_STRATEGIES, Q_STRATEGIES};
pub use collapse::{collapse, Outcome};
pub use game::{play_round, score_vector, update_score, Enumeration, GameConfig, Score, TRIALS_PER_PERMUTATION};
pub use tournament::{
    indexed_permutation, permutation_count, permutations, run_permutation, run_permutations,
    run_tournament, Permutation, PermutationFailure, PermutationReport, TournamentResult,
};
