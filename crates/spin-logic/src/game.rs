//! Round execution and scoring

use serde::{Deserialize, Serialize};
use crate::collapse::{collapse, Outcome};
use crate::error::GameError;
use crate::random::{DrawRange, RandomSource};
use crate::transform::{StateVector, Transformation, P_STRATEGIES, Q_STRATEGIES};

/// Rounds played per strategy permutation
pub const TRIALS_PER_PERMUTATION: u32 = 100;

/// Order in which the tournament walks strategy triples
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Enumeration {
    /// Index arithmetic over 0..32: q_first = i/8 % 4, p = i % 2, q_second = i/2 % 4
    #[default]
    Indexed,
    /// Nested loops: q_first outermost, then p, then q_second
    Nested,
}

/// Fixed parameters of a game, passed explicitly to rounds and tournaments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub initial_state: StateVector,
    pub trials: u32,
    pub q_strategies: Vec<Transformation>,
    pub p_strategies: Vec<Transformation>,
    pub draw_range: DrawRange,
    pub enumeration: Enumeration,
}

impl GameConfig {
    /// The canonical game: start at (1,0), 100 trials, Q picks from 4 moves, P from 2
    pub fn standard() -> Self {
        Self {
            initial_state: StateVector::INITIAL,
            trials: TRIALS_PER_PERMUTATION,
            q_strategies: Q_STRATEGIES.to_vec(),
            p_strategies: P_STRATEGIES.to_vec(),
            draw_range: DrawRange::ONE_TO_TEN,
            enumeration: Enumeration::Indexed,
        }
    }

    pub fn with_draw_range(mut self, draw_range: DrawRange) -> Self {
        self.draw_range = draw_range;
        self
    }

    pub fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = enumeration;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Points held by each player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub p: u32,
    pub q: u32,
}

impl Score {
    pub fn new(p: u32, q: u32) -> Self {
        Self { p, q }
    }

    pub fn total(&self) -> u32 {
        self.p + self.q
    }
}

/// Play one round: Q moves, P moves, Q moves again, then the spin collapses
///
/// Computes `q2(p1(q1(initial_state)))` and collapses it.
pub fn play_round<R: RandomSource>(
    q1: Transformation,
    p1: Transformation,
    q2: Transformation,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Outcome, GameError> {
    let state = q2.apply(p1.apply(q1.apply(config.initial_state)));
    collapse(state, config.draw_range, rng)
}

/// Award the round: Up scores for Q, Down scores for P
///
/// Returns a new score; `current` is left untouched.
pub fn update_score(outcome: Outcome, current: Score) -> Score {
    match outcome {
        Outcome::Up => Score { q: current.q + 1, ..current },
        Outcome::Down => Score { p: current.p + 1, ..current },
    }
}

/// Score a raw vector, rejecting anything that is not exactly (1,0) or (0,1)
pub fn score_vector(outcome: StateVector, current: Score) -> Result<Score, GameError> {
    Ok(update_score(Outcome::try_from(outcome)?, current))
}
