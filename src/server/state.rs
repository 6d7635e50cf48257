// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the game server actor.
//! Used to share state between HTTP/WebSocket handlers and the actor system.

use actix::Addr;
use crate::server::game_session::GameServer;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game server actor (owns the single game).
    pub game_server: Addr<GameServer>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(game_server: Addr<GameServer>) -> Self {
        AppState { game_server }
    }
}
