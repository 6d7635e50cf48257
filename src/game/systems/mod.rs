pub mod rules;
pub mod movement;
pub mod combat;
pub mod placement;
pub mod lifecycle;
pub mod render;

pub use movement::*;
pub use combat::*;
pub use placement::*;
pub use lifecycle::*;
pub use render::*;
