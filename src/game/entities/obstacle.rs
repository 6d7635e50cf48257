//! Obstacle entity logic.

use uuid::Uuid;

use crate::config::game::OBSTACLE_HP;
use crate::game::types::{Obstacle, PlayerId, Position};

/// Create a fresh obstacle owned by `owner`.
pub fn spawn_obstacle(position: Position, owner: PlayerId) -> Obstacle {
    Obstacle {
        id: Uuid::new_v4(),
        position,
        hp: OBSTACLE_HP,
        owner,
    }
}

/// Remove every obstacle whose hit points ran out.
pub fn prune_destroyed_obstacles(obstacles: &mut Vec<Obstacle>) {
    obstacles.retain(|o| o.hp > 0);
}
