//! Errors reported by the rules engine.
//!
//! Every error is recoverable and only concerns the caller that triggered it.
//! The `Display` text is the human-readable reason sent back to clients and
//! `code()` is the stable identifier used on the wire.

use crate::game::types::Position;

/// Broad classification of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, rejected before the game state is consulted.
    InvalidInput,
    /// A legality check failed against the current game state.
    IllegalAction,
    /// The referenced player no longer exists.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid pseudo")]
    InvalidPseudo,

    #[error("invalid color")]
    InvalidColor,

    #[error("target {0} is outside the grid")]
    OutOfBounds(Position),

    #[error("game is not in progress")]
    NotInProgress,

    #[error("game is over")]
    GameOver,

    #[error("unknown player")]
    UnknownPlayer,

    #[error("player is defeated")]
    PlayerDefeated,

    #[error("not your turn")]
    NotYourTurn,

    #[error("target must be on the same row or column")]
    NotStraightLine,

    #[error("target must be 1 to {max} cells away (got {distance})")]
    OutOfRange { distance: u32, max: u32 },

    #[error("path is blocked")]
    PathBlocked,

    #[error("something blocks the attack")]
    AttackBlocked,

    #[error("no target in that direction")]
    NoTarget,

    #[error("no obstacles left")]
    NoObstacleStock,

    #[error("obstacle must be placed next to you")]
    NotAdjacent,

    #[error("cell is occupied")]
    CellOccupied,

    #[error("game not finished")]
    GameNotFinished,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidPseudo | GameError::InvalidColor | GameError::OutOfBounds(_) => {
                ErrorKind::InvalidInput
            }
            GameError::UnknownPlayer => ErrorKind::NotFound,
            _ => ErrorKind::IllegalAction,
        }
    }

    /// Stable error code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidPseudo => "INVALID_PSEUDO",
            GameError::InvalidColor => "INVALID_COLOR",
            GameError::OutOfBounds(_) => "OUT_OF_BOUNDS",
            GameError::NotInProgress => "NOT_IN_PROGRESS",
            GameError::GameOver => "GAME_OVER",
            GameError::UnknownPlayer => "UNKNOWN_PLAYER",
            GameError::PlayerDefeated => "PLAYER_DEFEATED",
            GameError::NotYourTurn => "NOT_YOUR_TURN",
            GameError::NotStraightLine => "NOT_STRAIGHT_LINE",
            GameError::OutOfRange { .. } => "OUT_OF_RANGE",
            GameError::PathBlocked => "PATH_BLOCKED",
            GameError::AttackBlocked => "ATTACK_BLOCKED",
            GameError::NoTarget => "NO_TARGET",
            GameError::NoObstacleStock => "NO_OBSTACLE_STOCK",
            GameError::NotAdjacent => "NOT_ADJACENT",
            GameError::CellOccupied => "CELL_OCCUPIED",
            GameError::GameNotFinished => "GAME_NOT_FINISHED",
        }
    }
}
