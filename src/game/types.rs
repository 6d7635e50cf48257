use std::fmt;

use serde::{Serialize, Deserialize};
use uuid::Uuid;

pub type PlayerId = Uuid;
pub type ObstacleId = Uuid;

/// A grid cell. Coordinates are signed so that malformed client targets
/// survive decoding and are rejected by the bounds check instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Lobby,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    Active,
    Defeated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    pub hp: i32,
    pub position: Option<Position>,
    pub obstacle_stock: u32,
    pub status: PlayerStatus,
}

impl Player {
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub position: Position,
    pub hp: i32,
    /// Player who placed it. Informational only.
    pub owner: PlayerId,
}

/// What stands on an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id")]
pub enum Occupant {
    Player(PlayerId),
    Obstacle(ObstacleId),
}

/// An action a turn holder may submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move(Position),
    Attack(Position),
    PlaceObstacle(Position),
}

/// Result of a join request that passed input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// A seat was taken.
    Player(Player),
    /// Seats are full or the game already started: the caller only watches.
    Spectator,
}
