use common::model::{
    game::{Move, Outcome},
    messages::{ClientRequest, ClientResponse},
};
use tracing::{debug, info, warn};

use crate::strategy::{Round, Strategy};

pub struct Client {
    strategy: Box<dyn Strategy>,
    history: Vec<Round>,
    last_move: Option<Move>,
    their_last_move: Option<Move>,
}

impl Client {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Client {
            strategy,
            history: Vec::new(),
            last_move: None,
            their_last_move: None,
        }
    }

    pub fn join(&self) -> ClientRequest {
        ClientRequest::JoinGame
    }

    pub fn rounds(&self) -> &[Round] {
        &self.history
    }

    pub fn score(&self) -> (usize, usize, usize) {
        self.history
            .iter()
            .fold((0, 0, 0), |(w, l, d), round| match round.outcome {
                Outcome::Win => (w + 1, l, d),
                Outcome::Loss => (w, l + 1, d),
                Outcome::Draw => (w, l, d + 1),
            })
    }

    pub fn handle(&mut self, response: ClientResponse) -> Option<ClientRequest> {
        match response {
            ClientResponse::GameJoined => {
                debug!("Joined game with strategy {}", self.strategy.name());
                self.new_match();
                None
            }
            ClientResponse::PendingMove => {
                // Still waiting on the previous round's result: the opponent move
                // we know about has already been reported to the strategy
                if let Some(pending) = self.last_move {
                    warn!("Got move prompt while {:?} is still pending, resending", pending);
                    return Some(ClientRequest::Move { value: pending });
                }
                let value = self.play();
                Some(ClientRequest::Move { value })
            }
            ClientResponse::RoundResult(result) => {
                let Some(my_move) = self.last_move.take() else {
                    warn!("Got round result {:?} without a pending move", result);
                    return None;
                };
                self.their_last_move = Some(result.other_move);
                self.history.push(Round {
                    my_move,
                    their_move: result.other_move,
                    outcome: result.result,
                });
                None
            }
            ClientResponse::MatchResult { result, wins, total } => {
                info!("Match finished: {:?} ({}/{})", result, wins, total);
                // Whatever comes next belongs to another match
                self.their_last_move = None;
                self.last_move = None;
                None
            }
        }
    }

    fn new_match(&mut self) {
        self.history.clear();
        self.last_move = None;
        self.their_last_move = None;
    }

    fn play(&mut self) -> Move {
        if self.their_last_move.is_none() {
            self.history.clear();
        }
        let next_move = self.strategy.next_move(self.their_last_move.as_ref());
        self.last_move = Some(next_move);
        next_move
    }
}
