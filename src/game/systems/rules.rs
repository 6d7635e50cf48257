//! Turn rotation, defeat marking and victory detection.
//!
//! Every successful action and every in-game disconnection ends in
//! [`conclude_action`], so both paths share the same cleanup, victory and
//! turn-advance sequence.

use crate::game::entities::{mark_defeated, prune_destroyed_obstacles};
use crate::game::error::GameError;
use crate::game::state::Game;
use crate::game::types::{GameStatus, PlayerId, Position};

/// Preconditions shared by every action. Returns the actor's position.
pub fn check_turn(game: &Game, player_id: PlayerId) -> Result<Position, GameError> {
    match game.status {
        GameStatus::InProgress => {}
        GameStatus::Finished => return Err(GameError::GameOver),
        GameStatus::Lobby => return Err(GameError::NotInProgress),
    }
    let player = game.player(player_id).ok_or(GameError::UnknownPlayer)?;
    if !player.is_active() {
        return Err(GameError::PlayerDefeated);
    }
    if game.current_turn != Some(player_id) {
        return Err(GameError::NotYourTurn);
    }
    player.position.ok_or(GameError::PlayerDefeated)
}

/// Drop destroyed obstacles, defeat players out of hit points, then check
/// for a winner.
pub fn cleanup_after_action(game: &mut Game) {
    prune_destroyed_obstacles(&mut game.obstacles);
    for player in game.players.iter_mut().filter(|p| p.is_active() && p.hp <= 0) {
        mark_defeated(player);
    }
    evaluate_victory(game);
}

/// Finish the game once at most one player is still standing.
pub fn evaluate_victory(game: &mut Game) {
    if game.status != GameStatus::InProgress {
        return;
    }
    match game.active_count() {
        0 => {
            game.winner = None;
            game.status = GameStatus::Finished;
        }
        1 => {
            game.winner = game.players.iter().find(|p| p.is_active()).map(|p| p.id);
            game.status = GameStatus::Finished;
        }
        _ => {}
    }
}

/// Hand the turn to the next active player in join order, wrapping around.
/// Defeated seats are skipped; the current holder is never picked again.
pub fn advance_turn(game: &mut Game) {
    if game.status != GameStatus::InProgress {
        return;
    }
    let count = game.players.len();
    let next = match game.current_turn.and_then(|id| game.player_index(id)) {
        Some(start) => (1..count)
            .map(|offset| &game.players[(start + offset) % count])
            .find(|p| p.is_active()),
        None => game.players.iter().find(|p| p.is_active()),
    };
    game.current_turn = next.map(|p| p.id);
}

/// Shared tail of every state change made on behalf of `actor`.
pub fn conclude_action(game: &mut Game, actor: PlayerId) {
    cleanup_after_action(game);
    if game.status != GameStatus::InProgress {
        game.current_turn = None;
        return;
    }
    if game.current_turn == Some(actor) {
        advance_turn(game);
    }
}

/// Remove a player from play mid-game and let the game carry on without them.
pub fn forfeit(game: &mut Game, player_id: PlayerId) {
    if game.status != GameStatus::InProgress {
        return;
    }
    let Some(player) = game.player_mut(player_id) else {
        return;
    };
    if !player.is_active() {
        return;
    }
    mark_defeated(player);
    conclude_action(game, player_id);
}
