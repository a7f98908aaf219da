use crate::model::game::{Move, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoundResultResponse {
    pub result: Outcome,
    pub other_move: Move,
}

// Client types
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ClientRequest {
    JoinGame,
    Move { value: Move },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ClientResponse {
    GameJoined,
    PendingMove,
    RoundResult(RoundResultResponse),
    MatchResult {
        result: Outcome,
        wins: u8,
        total: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_result_wire_format() {
        let body = r#"{"type":"RoundResult","result":"Loss","other_move":"Paper"}"#;
        let response: ClientResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response,
            ClientResponse::RoundResult(RoundResultResponse {
                result: Outcome::Loss,
                other_move: Move::Paper,
            })
        );
    }

    #[test]
    fn move_request_wire_format() {
        let request = ClientRequest::Move { value: Move::Rock };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"type":"Move","value":"Rock"}"#
        );
    }
}
