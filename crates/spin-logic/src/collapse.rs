//! Collapse of a transformed spin state into a classical outcome

use serde::{Deserialize, Serialize};
use crate::error::GameError;
use crate::random::{DrawRange, RandomSource};
use crate::transform::StateVector;

/// Decimal places kept before classifying a component
const PRECISION: i32 = 5;

/// One of the two terminal states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// (1, 0): the electron kept its starting spin. Point to Q.
    Up,
    /// (0, 1): the electron ended flipped. Point to P.
    Down,
}

impl Outcome {
    pub fn vector(self) -> StateVector {
        match self {
            Outcome::Up => StateVector([1.0, 0.0]),
            Outcome::Down => StateVector([0.0, 1.0]),
        }
    }
}

impl TryFrom<StateVector> for Outcome {
    type Error = GameError;

    /// Exact pairwise comparison, no tolerance
    fn try_from(v: StateVector) -> Result<Self, Self::Error> {
        match v.0 {
            [a0, a1] if a0 == 1.0 && a1 == 0.0 => Ok(Outcome::Up),
            [a0, a1] if a0 == 0.0 && a1 == 1.0 => Ok(Outcome::Down),
            amplitudes => Err(GameError::NotClassical { amplitudes }),
        }
    }
}

impl From<Outcome> for StateVector {
    fn from(outcome: Outcome) -> Self {
        outcome.vector()
    }
}

/// Halves round away from zero, not to even as numpy does; no built-in
/// move lands on an exact half at the fifth decimal.
fn round_to_precision(x: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    (x * scale).round() / scale
}

/// Resolve `v` into a classical outcome
///
/// Components are fixed in index order. Exact 0s and 1s (after rounding)
/// are kept; a component is otherwise forced by the other component when
/// that one is exact. Only a genuine superposition consumes a draw: the
/// component becomes 1 when `draw <= amplitude^2 * 10`. Component 1 always
/// sees the already-fixed component 0, so at most one draw is made.
pub fn collapse<R: RandomSource>(
    v: StateVector,
    range: DrawRange,
    rng: &mut R,
) -> Result<Outcome, GameError> {
    let mut state = v.0;

    for i in 0..state.len() {
        let other = (i + state.len() - 1) % state.len();
        let value = round_to_precision(state[i]);
        let other_value = round_to_precision(state[other]);

        state[i] = if value == 0.0 {
            0.0
        } else if value == 1.0 {
            1.0
        } else if other_value == 1.0 {
            0.0
        } else if other_value == 0.0 {
            1.0
        } else {
            let r = rng.draw(range) as f64;
            let p = state[i].powi(2) * 10.0;
            if r > p {
                0.0
            } else if r <= p {
                1.0
            } else {
                return Err(GameError::Collapse { index: i, amplitude: state[i] });
            }
        };
    }

    Outcome::try_from(StateVector(state))
}
