//! Text rendering of the grid, for debug logs.

use crate::game::grid::Occupancy;
use crate::game::state::Game;
use crate::game::types::{Occupant, Position};

/// Render the grid as text: `P1`..`P4` for active players by seat, `##` for
/// obstacles and `..` for free cells.
pub fn render_grid(game: &Game) -> String {
    let mut out = String::new();
    for y in 0..game.grid_size {
        for x in 0..game.grid_size {
            let symbol = match game.occupant_at(Position::new(x, y)) {
                Some(Occupant::Player(id)) => {
                    let seat = game.player_index(id).map(|i| i + 1).unwrap_or(0);
                    format!("P{}", seat)
                }
                Some(Occupant::Obstacle(_)) => "##".to_string(),
                None => "..".to_string(),
            };
            out.push_str(&format!("{:<3}", symbol));
        }
        out.push('\n');
    }
    out
}
