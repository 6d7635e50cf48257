//! Game lifecycle: lobby seating, departures and reset.

use crate::config::game::{GRID_SIZES, MAX_PLAYERS};
use crate::game::entities::{spawn_player, starting_position, validate_color, validate_name};
use crate::game::error::GameError;
use crate::game::state::Game;
use crate::game::systems::rules::forfeit;
use crate::game::types::{GameStatus, JoinOutcome, PlayerId};

/// Seat a new player, or turn the caller into a spectator when no seat is
/// available. Only the very first player may choose the grid size.
pub fn join_game(
    game: &mut Game,
    name: &str,
    color: &str,
    grid_size_hint: Option<i32>,
) -> Result<JoinOutcome, GameError> {
    let name = validate_name(name)?;
    validate_color(color)?;

    if game.status != GameStatus::Lobby || game.players.len() >= MAX_PLAYERS {
        return Ok(JoinOutcome::Spectator);
    }

    if game.players.is_empty() {
        if let Some(size) = grid_size_hint.filter(|size| GRID_SIZES.contains(size)) {
            game.grid_size = size;
        }
    }

    let player = spawn_player(game.players.len(), name, color.to_string(), game.grid_size);
    game.players.push(player.clone());

    if game.players.len() == MAX_PLAYERS {
        game.status = GameStatus::InProgress;
        game.current_turn = game.players.first().map(|p| p.id);
    }
    Ok(JoinOutcome::Player(player))
}

/// Remove a player. Unknown ids are ignored.
///
/// Mid-game the player forfeits first, so the turn and the outcome move on
/// exactly as if they had been defeated.
pub fn leave_game(game: &mut Game, player_id: PlayerId) {
    let Some(index) = game.player_index(player_id) else {
        return;
    };

    forfeit(game, player_id);
    game.players.remove(index);

    if game.players.is_empty() {
        *game = Game::new(game.grid_size);
        return;
    }

    if game.status == GameStatus::Lobby {
        let grid_size = game.grid_size;
        for (i, player) in game.players.iter_mut().enumerate() {
            player.position = Some(starting_position(i, grid_size));
        }
    }
}

/// Start over with an empty lobby of the same size. Only allowed once the
/// game is finished.
pub fn reset_game(game: &mut Game) -> Result<(), GameError> {
    if game.status != GameStatus::Finished {
        return Err(GameError::GameNotFinished);
    }
    *game = Game::new(game.grid_size);
    Ok(())
}
