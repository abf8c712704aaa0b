//! Error kinds raised while playing rounds and tournaments

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// A component could not be resolved to 0 or 1
    #[error("error returning from superimposed state: component {index} = {amplitude}")]
    Collapse { index: usize, amplitude: f64 },

    /// A vector presented as a classical outcome is neither (1,0) nor (0,1)
    #[error("score error: {amplitudes:?} is not a classical outcome")]
    NotClassical { amplitudes: [f64; 2] },

    #[error("invalid draw range {low}..={high}")]
    InvalidDrawRange { low: u32, high: u32 },

    /// Strategy indices out of range for the configured strategy sets
    #[error("permutation #{ordinal} has no move at q_first={q_first}, p_move={p_move}, q_second={q_second}")]
    InvalidPermutation {
        ordinal: u32,
        q_first: usize,
        p_move: usize,
        q_second: usize,
    },

    /// A round failed and aborted the permutation it belonged to
    #[error("permutation #{ordinal} aborted: {source}")]
    Permutation {
        ordinal: u32,
        #[source]
        source: Box<GameError>,
    },
}
