/// Game configuration constants.
/// 
/// This module defines the gameplay parameters shared by the server and every
/// client: grid sizes, seat count, hit points, ranges and damage.
/// They are fixed at process start and never change during a game.

/// Grid sizes a first joining player may ask for.
pub const GRID_SIZES: [i32; 4] = [8, 10, 12, 15];

/// Grid size used when the first player expresses no (valid) preference.
pub const DEFAULT_GRID_SIZE: i32 = 10;

/// Number of seats in a game. The game starts when the last one is taken.
pub const MAX_PLAYERS: usize = 4;

/// Hit points of a freshly joined player.
pub const STARTING_HP: i32 = 10;

/// Obstacles each player may place over the whole game.
pub const OBSTACLE_STOCK: u32 = 3;

/// Hit points of a freshly placed obstacle.
pub const OBSTACLE_HP: i32 = 2;

/// Maximum number of cells a player may move in one action.
pub const MOVE_RANGE: u32 = 3;

/// Maximum reach of an attack, in cells.
pub const ATTACK_RANGE: u32 = 2;

/// Damage dealt to the struck entity.
pub const ATTACK_DAMAGE: i32 = 2;

/// Hit points the attacker pays for each attack.
pub const ATTACK_COST: i32 = 0;

/// Maximum length of a display name, in characters.
pub const MAX_NAME_LEN: usize = 20;
