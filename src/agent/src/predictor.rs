use common::model::game::{InvalidMoveError, Move};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::{
    config::{FallbackPolicy, OpeningPolicy, PredictorConfig},
    pattern_table::{PatternTable, Prediction},
    strategy::Strategy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorState {
    AwaitingFirstMove,
    Tracking,
}

pub struct PatternPredictor {
    config: PredictorConfig,
    history: Vec<Move>,
    table: PatternTable,
    last_prediction: Option<Prediction>,
    rng: SmallRng,
}

impl PatternPredictor {
    pub fn new(config: PredictorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        PatternPredictor {
            config,
            history: Vec::new(),
            table: PatternTable::new(),
            last_prediction: None,
            rng,
        }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn last_prediction(&self) -> Option<Prediction> {
        self.last_prediction
    }

    pub fn state(&self) -> PredictorState {
        if self.history.is_empty() {
            PredictorState::AwaitingFirstMove
        } else {
            PredictorState::Tracking
        }
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.table.clear();
        self.last_prediction = None;
    }

    pub fn next_move(&mut self, previous_opponent_move: Option<Move>) -> Move {
        let Some(previous) = previous_opponent_move else {
            self.reset();
            let opening = self.opening();
            info!("New match, opening with {:?}", opening);
            return opening;
        };

        self.history.push(previous);
        let lookback = self.config.lookback();
        self.table.observe(&self.history, lookback);

        self.last_prediction = self.table.predict(&self.history, lookback);
        let response = match self.last_prediction {
            Some(prediction) => prediction.predicted.counter(),
            None => self.fallback(&previous),
        };
        debug!(
            "Round {}: opponent played {:?}, prediction {:?}, responding {:?}",
            self.history.len(),
            previous,
            self.last_prediction,
            response
        );
        response
    }

    /// Play one round using single-character codes. An empty string starts a
    /// new match; anything other than `R`, `P` or `S` is rejected before any
    /// state changes.
    pub fn next_move_code(&mut self, previous_opponent_move: &str) -> Result<char, InvalidMoveError> {
        if previous_opponent_move.is_empty() {
            return Ok(self.next_move(None).code());
        }
        let previous = previous_opponent_move.parse::<Move>().map_err(|e| {
            warn!("Rejected opponent move: {}", e);
            e
        })?;
        Ok(self.next_move(Some(previous)).code())
    }

    fn opening(&mut self) -> Move {
        match self.config.opening {
            OpeningPolicy::Fixed(value) => value,
            OpeningPolicy::Random => Move::ALL[self.rng.random_range(0..Move::ALL.len())],
        }
    }

    fn fallback(&self, previous: &Move) -> Move {
        match self.config.fallback {
            FallbackPolicy::Fixed(value) => value,
            FallbackPolicy::CounterLast => previous.counter(),
        }
    }
}

impl Default for PatternPredictor {
    fn default() -> Self {
        Self::new(PredictorConfig::default())
    }
}

impl Strategy for PatternPredictor {
    fn next_move(&mut self, previous_opponent_move: Option<&Move>) -> Move {
        PatternPredictor::next_move(self, previous_opponent_move.copied())
    }

    fn name(&self) -> &str {
        "pattern-predictor"
    }
}
