//! WASM bindings for frontend tournament replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{play_round, run_tournament, Enumeration, GameConfig, SeededRng, Transformation};
use crate::Q_STRATEGIES;

fn parse_enumeration(enumeration: &str) -> Result<Enumeration, JsError> {
    match enumeration {
        "" | "Indexed" => Ok(Enumeration::Indexed),
        "Nested" => Ok(Enumeration::Nested),
        other => Err(JsError::new(&format!("Unknown enumeration: {}", other))),
    }
}

/// Replay a full tournament
///
/// # Arguments
/// * `seed` - Seed the tournament was run with
/// * `enumeration` - "Indexed" (default when empty) or "Nested"
///
/// # Returns
/// Serialized TournamentResult
#[wasm_bindgen]
pub fn replay_tournament(seed: u64, enumeration: &str) -> Result<JsValue, JsError> {
    let config = GameConfig::standard().with_enumeration(parse_enumeration(enumeration)?);

    let result = run_tournament(&config, seed);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Play a single round with the named moves
#[wasm_bindgen]
pub fn play_single_round(q1: &str, p1: &str, q2: &str, seed: u64) -> Result<JsValue, JsError> {
    let parse = |name: &str| name.parse::<Transformation>().map_err(|e| JsError::new(&e));
    let (q1, p1, q2) = (parse(q1)?, parse(p1)?, parse(q2)?);

    let mut rng = SeededRng::from_u64(seed);
    let outcome = play_round(q1, p1, q2, &GameConfig::standard(), &mut rng)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&outcome)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct TransformationInfo {
    id: String,
    name: String,
    description: String,
}

/// Get all available transformations
#[wasm_bindgen]
pub fn get_transformation_types() -> Result<JsValue, JsError> {
    let types: Vec<_> = Q_STRATEGIES
        .into_iter()
        .map(|t| TransformationInfo {
            id: format!("{:?}", t),
            name: t.name().to_string(),
            description: t.describe().to_string(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
