//! Player movement system.
//!
//! This module handles moving players along a row or column.

use crate::config::game::MOVE_RANGE;
use crate::game::error::GameError;
use crate::game::grid::{in_bounds, manhattan_distance, path_clear, straight_line};
use crate::game::state::Game;
use crate::game::systems::rules::{check_turn, conclude_action};
use crate::game::types::{PlayerId, Position};

/// Move the specified player to `target`.
/// The whole path, destination included, must be free.
pub fn move_player(game: &mut Game, player_id: PlayerId, target: Position) -> Result<(), GameError> {
    let origin = check_turn(game, player_id)?;

    if !in_bounds(target, game.grid_size) {
        return Err(GameError::OutOfBounds(target));
    }
    if !straight_line(origin, target) {
        return Err(GameError::NotStraightLine);
    }
    let distance = manhattan_distance(origin, target);
    if distance == 0 || distance > MOVE_RANGE {
        return Err(GameError::OutOfRange { distance, max: MOVE_RANGE });
    }
    if !path_clear(&*game, origin, target) {
        return Err(GameError::PathBlocked);
    }

    let player = game.player_mut(player_id).ok_or(GameError::UnknownPlayer)?;
    player.position = Some(target);
    conclude_action(game, player_id);
    Ok(())
}
