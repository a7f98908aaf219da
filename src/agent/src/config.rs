use common::model::game::Move;
use serde::{Deserialize, Serialize};

use crate::pattern_table::MAX_K;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningPolicy {
    Fixed(Move),
    Random,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    Fixed(Move),
    // Play whatever beats the opponent's most recent move
    CounterLast,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PredictorConfig {
    pub max_lookback: usize,
    pub opening: OpeningPolicy,
    pub fallback: FallbackPolicy,
    pub seed: Option<u64>,
}

impl PredictorConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn lookback(&self) -> usize {
        self.max_lookback.clamp(1, MAX_K)
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        PredictorConfig {
            max_lookback: MAX_K,
            opening: OpeningPolicy::Fixed(Move::Rock),
            fallback: FallbackPolicy::Fixed(Move::Scissors),
            seed: None,
        }
    }
}
