//! Player entity logic.
//!
//! Validation of the identity a client asks for, and the fixed loadout every
//! seat starts with.

use uuid::Uuid;

use crate::config::game::{MAX_NAME_LEN, OBSTACLE_STOCK, STARTING_HP};
use crate::game::error::GameError;
use crate::game::types::{Player, PlayerStatus, Position};

/// Trim and check a display name.
pub fn validate_name(name: &str) -> Result<String, GameError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(GameError::InvalidPseudo);
    }
    Ok(name.to_string())
}

/// Accepts exactly `#RRGGBB`.
pub fn validate_color(color: &str) -> Result<(), GameError> {
    match color.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) => Ok(()),
        _ => Err(GameError::InvalidColor),
    }
}

/// Corner assigned to the seat at `index`: top-left, top-right, bottom-left,
/// bottom-right.
pub fn starting_position(index: usize, grid_size: i32) -> Position {
    let far = grid_size - 1;
    match index % 4 {
        0 => Position::new(0, 0),
        1 => Position::new(far, 0),
        2 => Position::new(0, far),
        _ => Position::new(far, far),
    }
}

/// Generate a new player with a full loadout on its seat's corner.
pub fn spawn_player(index: usize, name: String, color: String, grid_size: i32) -> Player {
    Player {
        id: Uuid::new_v4(),
        name,
        color,
        hp: STARTING_HP,
        position: Some(starting_position(index, grid_size)),
        obstacle_stock: OBSTACLE_STOCK,
        status: PlayerStatus::Active,
    }
}

/// Take the player off the grid and out of the turn rotation.
pub fn mark_defeated(player: &mut Player) {
    player.status = PlayerStatus::Defeated;
    player.position = None;
}
