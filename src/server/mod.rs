// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the transport around the rules engine, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session orchestration (seats, player actions, broadcasts)
//! - Anti-spam protection and error frames

pub mod state;
pub mod router;
pub mod game_session;
pub mod anti_spam;
pub mod ws_actor_utils;
pub mod ws_error;
