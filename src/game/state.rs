use serde::{Serialize, Deserialize};

use crate::game::grid::Occupancy;
use crate::game::types::{GameStatus, Obstacle, Occupant, Player, PlayerId, Position};

/// The whole state of the single running game.
///
/// Cloning a `Game` yields an independent snapshot: nothing in it is shared
/// with the live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub status: GameStatus,
    pub grid_size: i32,
    /// Join order, which is also turn order.
    pub players: Vec<Player>,
    pub obstacles: Vec<Obstacle>,
    pub current_turn: Option<PlayerId>,
    /// Set when the game finishes with a single survivor. Kept if that
    /// player later leaves, so it may name someone no longer in `players`.
    pub winner: Option<PlayerId>,
}

impl Game {
    // Crée une partie vide, en attente de joueurs
    pub fn new(grid_size: i32) -> Self {
        Game {
            status: GameStatus::Lobby,
            grid_size,
            players: Vec::new(),
            obstacles: Vec::new(),
            current_turn: None,
            winner: None,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }
}

impl Occupancy for Game {
    fn occupant_at(&self, cell: Position) -> Option<Occupant> {
        if let Some(player) = self.players.iter().find(|p| p.is_active() && p.position == Some(cell)) {
            return Some(Occupant::Player(player.id));
        }
        self.obstacles
            .iter()
            .find(|o| o.position == cell)
            .map(|o| Occupant::Obstacle(o.id))
    }
}
