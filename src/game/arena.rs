//! The single game controller.
//!
//! `Arena` owns the game state and is the only way to change it. Each call
//! runs to completion (validate, mutate, clean up) before returning, so
//! wrapping the arena in one actor or one lock is enough to serialize every
//! request.

use log::{debug, info, warn};

use crate::config::game::DEFAULT_GRID_SIZE;
use crate::game::error::{ErrorKind, GameError};
use crate::game::state::Game;
use crate::game::systems::{attack, join_game, leave_game, move_player, place_obstacle, render_grid, reset_game};
use crate::game::types::{Action, GameStatus, JoinOutcome, PlayerId};

#[derive(Debug)]
pub struct Arena {
    game: Game,
}

impl Default for Arena {
    fn default() -> Self {
        Arena::new(DEFAULT_GRID_SIZE)
    }
}

impl Arena {
    pub fn new(grid_size: i32) -> Self {
        Arena { game: Game::new(grid_size) }
    }

    pub fn status(&self) -> GameStatus {
        self.game.status
    }

    /// Independent copy of the current state, safe to hand out.
    pub fn snapshot(&self) -> Game {
        self.game.clone()
    }

    pub fn join(&mut self, name: &str, color: &str, grid_size_hint: Option<i32>) -> Result<JoinOutcome, GameError> {
        let outcome = join_game(&mut self.game, name, color, grid_size_hint);
        match &outcome {
            Ok(JoinOutcome::Player(player)) => {
                info!(
                    "[Arena] {} joined as seat {} ({}x{} grid)",
                    player.name,
                    self.game.players.len(),
                    self.game.grid_size,
                    self.game.grid_size
                );
                if self.game.status == GameStatus::InProgress {
                    info!("[Arena] Game started, {} plays first", player_name(&self.game, self.game.current_turn));
                }
            }
            Ok(JoinOutcome::Spectator) => debug!("[Arena] {} joins as spectator", name.trim()),
            Err(e) => warn!("[Arena] Join refused for {:?}: {}", name, e),
        }
        outcome
    }

    pub fn request_action(&mut self, player_id: PlayerId, action: Action) -> Result<(), GameError> {
        let result = match action {
            Action::Move(target) => move_player(&mut self.game, player_id, target),
            Action::Attack(target) => attack(&mut self.game, player_id, target).map(|hit| {
                debug!("[Arena] Attack by {} struck {:?} at {}", player_id, hit.occupant, hit.cell);
            }),
            Action::PlaceObstacle(target) => place_obstacle(&mut self.game, player_id, target).map(|_| ()),
        };

        match &result {
            Ok(()) => {
                debug!("[Arena] {:?} by {} accepted\n{}", action, player_id, render_grid(&self.game));
                self.log_outcome();
            }
            Err(e) if e.kind() == ErrorKind::InvalidInput => {
                debug!("[Arena] {:?} by {} rejected: {}", action, player_id, e)
            }
            Err(e) => warn!("[Arena] {:?} by {} rejected: {}", action, player_id, e),
        }
        result
    }

    pub fn leave(&mut self, player_id: PlayerId) {
        if self.game.player(player_id).is_none() {
            return;
        }
        let was_playing = self.game.status == GameStatus::InProgress;
        leave_game(&mut self.game, player_id);
        info!("[Arena] Player {} left ({} remaining)", player_id, self.game.players.len());
        if was_playing {
            self.log_outcome();
        }
    }

    pub fn reset(&mut self) -> Result<(), GameError> {
        reset_game(&mut self.game)?;
        info!("[Arena] Game reset, waiting for players on a {0}x{0} grid", self.game.grid_size);
        Ok(())
    }

    fn log_outcome(&self) {
        if self.game.status != GameStatus::Finished {
            return;
        }
        match self.game.winner {
            Some(winner) => info!("[Arena] Game finished, winner: {}", player_name(&self.game, Some(winner))),
            None => info!("[Arena] Game finished in a draw"),
        }
    }
}

fn player_name(game: &Game, id: Option<PlayerId>) -> String {
    id.and_then(|id| game.player(id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "nobody".to_string())
}
