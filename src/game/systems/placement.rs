//! Obstacle placement system.

use crate::game::entities::spawn_obstacle;
use crate::game::error::GameError;
use crate::game::grid::{adjacent, in_bounds, Occupancy};
use crate::game::state::Game;
use crate::game::systems::rules::{check_turn, conclude_action};
use crate::game::types::{ObstacleId, PlayerId, Position};

/// Place one of the player's obstacles on a free cell next to them.
pub fn place_obstacle(game: &mut Game, player_id: PlayerId, target: Position) -> Result<ObstacleId, GameError> {
    let origin = check_turn(game, player_id)?;

    let stock = game.player(player_id).map(|p| p.obstacle_stock).unwrap_or(0);
    if stock == 0 {
        return Err(GameError::NoObstacleStock);
    }
    if !in_bounds(target, game.grid_size) {
        return Err(GameError::OutOfBounds(target));
    }
    if !adjacent(origin, target) {
        return Err(GameError::NotAdjacent);
    }
    if game.is_occupied(target) {
        return Err(GameError::CellOccupied);
    }

    let obstacle = spawn_obstacle(target, player_id);
    let obstacle_id = obstacle.id;
    game.obstacles.push(obstacle);
    if let Some(player) = game.player_mut(player_id) {
        player.obstacle_stock -= 1;
    }

    conclude_action(game, player_id);
    Ok(obstacle_id)
}
