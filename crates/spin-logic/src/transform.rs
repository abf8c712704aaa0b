//! Transformations over the electron spin state

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::str::FromStr;

/// Amplitudes for the two classical outcomes, index 0 and index 1
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateVector(pub [f64; 2]);

impl StateVector {
    /// The state every round starts from
    pub const INITIAL: StateVector = StateVector([1.0, 0.0]);

    pub fn new(a0: f64, a1: f64) -> Self {
        Self([a0, a1])
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.0[0].hypot(self.0[1])
    }

    /// Component-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &StateVector, tolerance: f64) -> bool {
        (self.0[0] - other.0[0]).abs() <= tolerance && (self.0[1] - other.0[1]).abs() <= tolerance
    }
}

/// A player's move: one fixed 2x2 orthogonal operator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transformation {
    /// Leaves the spin untouched.
    Identity,
    /// Swaps the two components.
    Flip,
    /// Equal superposition; applied twice returns the original state.
    SuperpositionA,
    /// Equal superposition; applied twice returns the flipped state.
    SuperpositionB,
}

/// Moves available to Q, in strategy-index order
pub const Q_STRATEGIES: [Transformation; 4] = [
    Transformation::Identity,
    Transformation::Flip,
    Transformation::SuperpositionA,
    Transformation::SuperpositionB,
];

/// Moves available to P, in strategy-index order
pub const P_STRATEGIES: [Transformation; 2] = [Transformation::Identity, Transformation::Flip];

impl Transformation {
    pub fn apply(self, v: StateVector) -> StateVector {
        let [a0, a1] = v.0;
        match self {
            Transformation::Identity => v,
            Transformation::Flip => StateVector([a1, a0]),
            Transformation::SuperpositionA => {
                StateVector([(a0 + a1) * FRAC_1_SQRT_2, (a0 - a1) * FRAC_1_SQRT_2])
            }
            Transformation::SuperpositionB => {
                StateVector([(a0 - a1) * FRAC_1_SQRT_2, (a0 + a1) * FRAC_1_SQRT_2])
            }
        }
    }

    /// Short name used in console output
    pub fn name(self) -> &'static str {
        match self {
            Transformation::Identity => "N",
            Transformation::Flip => "F",
            Transformation::SuperpositionA => "SI",
            Transformation::SuperpositionB => "SN",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Transformation::Identity => "No flip. Leaves the electron as it is.",
            Transformation::Flip => "Flips the electron between up and down.",
            Transformation::SuperpositionA => {
                "Superposes up and down. Applied twice, restores the original state."
            }
            Transformation::SuperpositionB => {
                "Superposes up and down. Applied twice, flips the original state."
            }
        }
    }
}

impl FromStr for Transformation {
    type Err = String;

    /// Accepts the full variant name or the short console name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Q_STRATEGIES
            .into_iter()
            .find(|t| s == t.name() || s == format!("{:?}", t))
            .ok_or_else(|| format!("Unknown transformation: {}", s))
    }
}
