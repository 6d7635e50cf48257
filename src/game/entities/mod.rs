//! Game entities module.
//!
//! This module organizes player and obstacle entity logic.

pub mod player;
pub mod obstacle;

pub use player::*;
pub use obstacle::*;
