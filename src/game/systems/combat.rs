//! Attack resolution.
//!
//! An attack is resolved in two passes: a pure ray cast finds what is
//! actually struck, then the cell the client named is cross-checked so a
//! nearer entity cannot be shot through by aiming past it.

use crate::config::game::{ATTACK_COST, ATTACK_DAMAGE, ATTACK_RANGE};
use crate::game::error::GameError;
use crate::game::grid::{first_entity_along_ray, in_bounds, manhattan_distance, straight_line, Hit, Occupancy};
use crate::game::state::Game;
use crate::game::systems::rules::{check_turn, conclude_action};
use crate::game::types::{Occupant, PlayerId, Position};

/// Reject the attack when the named cell holds something other than what
/// the ray actually hit. An empty named cell is fine.
pub fn check_claimed_target(occupancy: &impl Occupancy, target: Position, hit: &Hit) -> Result<(), GameError> {
    match occupancy.occupant_at(target) {
        Some(claimed) if claimed != hit.occupant => Err(GameError::AttackBlocked),
        _ => Ok(()),
    }
}

/// Attack towards `target` and return what was struck.
pub fn attack(game: &mut Game, player_id: PlayerId, target: Position) -> Result<Hit, GameError> {
    let origin = check_turn(game, player_id)?;

    if !in_bounds(target, game.grid_size) {
        return Err(GameError::OutOfBounds(target));
    }
    if !straight_line(origin, target) {
        return Err(GameError::NotStraightLine);
    }
    let distance = manhattan_distance(origin, target);
    if distance == 0 || distance > ATTACK_RANGE {
        return Err(GameError::OutOfRange { distance, max: ATTACK_RANGE });
    }

    let hit = first_entity_along_ray(&*game, origin, target, ATTACK_RANGE).ok_or(GameError::NoTarget)?;
    check_claimed_target(&*game, target, &hit)?;

    // The caster pays first but the hit lands even if that defeats them.
    if let Some(caster) = game.player_mut(player_id) {
        caster.hp -= ATTACK_COST;
    }
    match hit.occupant {
        Occupant::Player(id) => {
            if let Some(victim) = game.player_mut(id) {
                victim.hp -= ATTACK_DAMAGE;
            }
        }
        Occupant::Obstacle(id) => {
            if let Some(obstacle) = game.obstacles.iter_mut().find(|o| o.id == id) {
                obstacle.hp -= ATTACK_DAMAGE;
            }
        }
    }

    conclude_action(game, player_id);
    Ok(hit)
}
