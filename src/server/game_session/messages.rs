use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::GameError;
use crate::game::Game;
use crate::game::types::{Action, Player, Position};

// Message client -> serveur
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    Join {
        name: String,
        color: String,
        #[serde(default)]
        grid_size: Option<i32>,
    },
    Move(Position),
    Attack(Position),
    PlaceObstacle(Position),
    Reset,
    Ping,
}

impl ClientWsMessage {
    /// The game action carried by this message, if any.
    pub fn as_action(&self) -> Option<Action> {
        match self {
            ClientWsMessage::Move(target) => Some(Action::Move(*target)),
            ClientWsMessage::Attack(target) => Some(Action::Attack(*target)),
            ClientWsMessage::PlaceObstacle(target) => Some(Action::PlaceObstacle(*target)),
            _ => None,
        }
    }
}

// Message serveur -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    /// The connection now holds this seat.
    Joined { player: Player },
    /// No seat was available: the connection only watches.
    Spectating,
    /// The game was reset: every seat is free again.
    SeatReleased,
    GameState(Game),
    Pong,
}

/// A request from this connection was refused.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct Rejected {
    pub code: String,
    pub message: String,
}

impl Rejected {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }
}

impl From<&GameError> for Rejected {
    fn from(error: &GameError) -> Self {
        Rejected::new(error.code(), &error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_messages() {
        let join: ClientWsMessage =
            serde_json::from_str(r##"{"action":"Join","data":{"name":"Ann","color":"#ff0000"}}"##).unwrap();
        assert_eq!(
            join,
            ClientWsMessage::Join { name: "Ann".to_string(), color: "#ff0000".to_string(), grid_size: None }
        );

        let attack: ClientWsMessage = serde_json::from_str(r#"{"action":"Attack","data":{"x":-1,"y":3}}"#).unwrap();
        assert_eq!(attack.as_action(), Some(Action::Attack(Position::new(-1, 3))));

        let reset: ClientWsMessage = serde_json::from_str(r#"{"action":"Reset"}"#).unwrap();
        assert_eq!(reset, ClientWsMessage::Reset);
        assert_eq!(reset.as_action(), None);
    }

    #[test]
    fn test_reject_malformed_client_messages() {
        assert!(serde_json::from_str::<ClientWsMessage>(r#"{"action":"Fly","data":{}}"#).is_err());
        assert!(serde_json::from_str::<ClientWsMessage>(r#"{"action":"Move","data":{"x":"a","y":0}}"#).is_err());
    }

    #[test]
    fn test_game_state_frame_shape() {
        let text = serde_json::to_string(&ServerWsMessage::GameState(Game::new(8))).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["action"], "GameState");
        assert_eq!(parsed["data"]["status"], "Lobby");
        assert_eq!(parsed["data"]["grid_size"], 8);
    }

    #[test]
    fn test_rejected_from_game_error() {
        let rejected = Rejected::from(&GameError::AttackBlocked);
        assert_eq!(rejected.code, "ATTACK_BLOCKED");
        assert_eq!(rejected.message, "something blocks the attack");
    }
}
