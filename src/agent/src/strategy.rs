use common::model::game::{Move, Outcome};

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub my_move: Move,
    pub their_move: Move,
    pub outcome: Outcome,
}

/// `previous_opponent_move` is `None` on the first call of a match, which
/// also tells the strategy to forget everything it learned so far.
pub trait Strategy {
    fn next_move(&mut self, previous_opponent_move: Option<&Move>) -> Move;

    fn name(&self) -> &str;
}
