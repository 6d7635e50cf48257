//! Spatial queries over the game grid.
//!
//! All functions here are pure: they read occupancy through the [`Occupancy`]
//! trait and never mutate anything. Walks always start one cell past the
//! origin and advance one orthogonal step at a time.

use std::cmp::Ordering;

use crate::game::types::{Occupant, Position};

/// Read-only view of which entity stands on a cell.
///
/// Only entities that block movement count: active players and obstacles.
pub trait Occupancy {
    fn occupant_at(&self, cell: Position) -> Option<Occupant>;

    fn is_occupied(&self, cell: Position) -> bool {
        self.occupant_at(cell).is_some()
    }
}

/// First entity met by a ray cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub cell: Position,
    pub occupant: Occupant,
}

pub fn in_bounds(cell: Position, grid_size: i32) -> bool {
    (0..grid_size).contains(&cell.x) && (0..grid_size).contains(&cell.y)
}

/// Same row or same column. Diagonals never qualify.
pub fn straight_line(a: Position, b: Position) -> bool {
    a.x == b.x || a.y == b.y
}

pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}

/// Chebyshev distance of exactly one: the 8 surrounding cells.
pub fn adjacent(a: Position, b: Position) -> bool {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y)) == 1
}

fn unit(from: i32, to: i32) -> i32 {
    match to.cmp(&from) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Cells from `from` (exclusive) to `to` (inclusive) along a straight line.
/// Empty when the two cells are equal or not aligned.
pub fn walk(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let step = if from != to && straight_line(from, to) {
        Some((unit(from.x, to.x), unit(from.y, to.y)))
    } else {
        None
    };

    let first = step.map(|(dx, dy)| Position::new(from.x + dx, from.y + dy));
    std::iter::successors(first, move |cell| {
        let (dx, dy) = step?;
        if *cell == to {
            None
        } else {
            Some(Position::new(cell.x + dx, cell.y + dy))
        }
    })
}

/// True when no cell on the way, destination included, is occupied.
pub fn path_clear(occupancy: &impl Occupancy, from: Position, to: Position) -> bool {
    walk(from, to).all(|cell| !occupancy.is_occupied(cell))
}

/// Casts a ray from `from` towards `to` and returns the first occupied cell,
/// giving up past `max_range` or once `to` has been examined.
pub fn first_entity_along_ray(
    occupancy: &impl Occupancy,
    from: Position,
    to: Position,
    max_range: u32,
) -> Option<Hit> {
    walk(from, to)
        .take_while(|cell| manhattan_distance(from, *cell) <= max_range)
        .find_map(|cell| occupancy.occupant_at(cell).map(|occupant| Hit { cell, occupant }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use uuid::Uuid;

    struct Cells(HashMap<Position, Occupant>);

    impl Occupancy for Cells {
        fn occupant_at(&self, cell: Position) -> Option<Occupant> {
            self.0.get(&cell).copied()
        }
    }

    fn cells(entries: &[(Position, Occupant)]) -> Cells {
        Cells(entries.iter().copied().collect())
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(Position::new(0, 0), 10));
        assert!(in_bounds(Position::new(9, 9), 10));
        assert!(!in_bounds(Position::new(10, 0), 10));
        assert!(!in_bounds(Position::new(0, -1), 10));
        assert!(!in_bounds(Position::new(i32::MIN, i32::MAX), 10));
    }

    #[test]
    fn test_straight_line_excludes_diagonals() {
        let origin = Position::new(3, 3);
        assert!(straight_line(origin, Position::new(3, 7)));
        assert!(straight_line(origin, Position::new(0, 3)));
        assert!(!straight_line(origin, Position::new(4, 4)));
    }

    #[test]
    fn test_manhattan_distance_is_total() {
        assert_eq!(manhattan_distance(Position::new(1, 1), Position::new(4, 3)), 5);
        assert_eq!(manhattan_distance(Position::new(i32::MIN, i32::MIN), Position::new(i32::MAX, i32::MAX)), u32::MAX);
    }

    #[test]
    fn test_adjacent_is_eight_neighbourhood() {
        let origin = Position::new(5, 5);
        assert!(adjacent(origin, Position::new(4, 4)));
        assert!(adjacent(origin, Position::new(5, 6)));
        assert!(!adjacent(origin, origin));
        assert!(!adjacent(origin, Position::new(7, 5)));
    }

    #[test]
    fn test_walk_excludes_origin_and_includes_target() {
        let path: Vec<Position> = walk(Position::new(2, 2), Position::new(2, 5)).collect();
        assert_eq!(path, vec![Position::new(2, 3), Position::new(2, 4), Position::new(2, 5)]);

        let back: Vec<Position> = walk(Position::new(3, 0), Position::new(1, 0)).collect();
        assert_eq!(back, vec![Position::new(2, 0), Position::new(1, 0)]);

        assert_eq!(walk(Position::new(1, 1), Position::new(1, 1)).count(), 0);
        assert_eq!(walk(Position::new(1, 1), Position::new(2, 2)).count(), 0);
    }

    #[test]
    fn test_path_clear_checks_destination() {
        let obstacle = Occupant::Obstacle(Uuid::new_v4());
        let grid = cells(&[(Position::new(0, 3), obstacle)]);
        assert!(path_clear(&grid, Position::new(0, 0), Position::new(0, 2)));
        assert!(!path_clear(&grid, Position::new(0, 0), Position::new(0, 3)));
        assert!(!path_clear(&grid, Position::new(0, 5), Position::new(0, 1)));
    }

    #[test]
    fn test_ray_stops_at_nearest_entity() {
        let obstacle = Occupant::Obstacle(Uuid::new_v4());
        let player = Occupant::Player(Uuid::new_v4());
        let grid = cells(&[(Position::new(0, 1), obstacle), (Position::new(0, 2), player)]);

        let hit = first_entity_along_ray(&grid, Position::new(0, 0), Position::new(0, 2), 2);
        assert_eq!(hit, Some(Hit { cell: Position::new(0, 1), occupant: obstacle }));
    }

    #[test]
    fn test_ray_respects_range_and_target() {
        let player = Occupant::Player(Uuid::new_v4());
        let grid = cells(&[(Position::new(3, 0), player)]);

        // Out of range.
        assert_eq!(first_entity_along_ray(&grid, Position::new(0, 0), Position::new(5, 0), 2), None);
        // Beyond the aimed cell.
        assert_eq!(first_entity_along_ray(&grid, Position::new(0, 0), Position::new(2, 0), 5), None);
        // Never the origin itself.
        assert_eq!(first_entity_along_ray(&grid, Position::new(3, 0), Position::new(5, 0), 2), None);
        assert_eq!(
            first_entity_along_ray(&grid, Position::new(1, 0), Position::new(4, 0), 2),
            Some(Hit { cell: Position::new(3, 0), occupant: player })
        );
    }
}
