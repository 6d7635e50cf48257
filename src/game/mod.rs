//! Game rules engine.
//!
//! `Arena` owns the single game; `systems` holds one routine per action and
//! the turn/lifecycle controller; `grid` holds the spatial queries they share.

pub mod arena;
pub mod entities;
pub mod error;
pub mod grid;
pub mod state;
pub mod systems;
pub mod types;


pub use arena::Arena;
pub use error::GameError;
pub use state::Game;
