//! Basic grid geometry: cells, directions and segment intersection.

use std::fmt;
use std::ops::{Add, Sub};

/// An integer grid coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ZERO: Cell = Cell { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another cell.
    #[inline]
    pub fn distance(&self, other: &Cell) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }

    /// The neighboring cell one step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Cell {
        self + dir.delta()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// One of the four axis-aligned unit moves.
///
/// `x` is the row and `y` the column, so `Up` decreases `x` and `Right`
/// increases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Directions in the order the path search expands them.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    #[inline]
    pub const fn delta(self) -> Cell {
        match self {
            Direction::Up => Cell::new(-1, 0),
            Direction::Down => Cell::new(1, 0),
            Direction::Left => Cell::new(0, -1),
            Direction::Right => Cell::new(0, 1),
        }
    }

    /// Direction of a unit offset, if it is one.
    pub fn from_delta(delta: Cell) -> Option<Direction> {
        match (delta.x, delta.y) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Direction of the move `from -> to` when the cells are 4-adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        Self::from_delta(to - from)
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Manhattan distance between two cells.
#[inline]
pub fn manhattan_distance(a: Cell, b: Cell) -> u32 {
    (b.x - a.x).unsigned_abs() + (b.y - a.y).unsigned_abs()
}

/// Whether the turn `a -> b -> c` is counter-clockwise.
///
/// The inequality is strict, so collinear triples report `false`.
#[inline]
pub fn orientation(a: Cell, b: Cell, c: Cell) -> bool {
    let lhs = (c.y - a.y) as i64 * (b.x - a.x) as i64;
    let rhs = (b.y - a.y) as i64 * (c.x - a.x) as i64;
    lhs > rhs
}

/// Proper crossing test for segments `p1-p2` and `p3-p4`.
///
/// Shared endpoints are not special-cased; callers skip adjacent edges.
pub fn segments_cross(p1: Cell, p2: Cell, p3: Cell, p4: Cell) -> bool {
    orientation(p1, p3, p4) != orientation(p2, p3, p4)
        && orientation(p1, p2, p3) != orientation(p1, p2, p4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(Cell::new(0, 0), Cell::new(3, 4)), 7);
        assert_eq!(manhattan_distance(Cell::new(5, 1), Cell::new(2, 9)), 11);
        assert_eq!(manhattan_distance(Cell::new(2, 2), Cell::new(2, 2)), 0);
    }

    #[test]
    fn test_orientation_collinear_is_false() {
        let a = Cell::new(0, 0);
        let b = Cell::new(1, 1);
        let c = Cell::new(2, 2);
        assert!(!orientation(a, b, c));
        assert!(!orientation(c, b, a));
    }

    #[test]
    fn test_orientation_flips_with_winding() {
        let a = Cell::new(0, 0);
        let b = Cell::new(1, 0);
        let c = Cell::new(0, 1);
        assert_ne!(orientation(a, b, c), orientation(a, c, b));
    }

    #[test]
    fn test_segments_cross() {
        // An X shape crosses.
        assert!(segments_cross(
            Cell::new(0, 0),
            Cell::new(4, 4),
            Cell::new(0, 4),
            Cell::new(4, 0),
        ));
        // Parallel segments do not.
        assert!(!segments_cross(
            Cell::new(0, 0),
            Cell::new(4, 0),
            Cell::new(0, 2),
            Cell::new(4, 2),
        ));
        // Disjoint segments on the same line do not.
        assert!(!segments_cross(
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(3, 0),
            Cell::new(5, 0),
        ));
    }

    fn collinear(a: Cell, b: Cell, c: Cell) -> bool {
        (c.y - a.y) * (b.x - a.x) == (b.y - a.y) * (c.x - a.x)
    }

    // Only holds in general position: collinear triples are `false` both ways.
    #[test]
    fn test_segments_cross_symmetric_under_endpoint_swap() {
        let pts: Vec<Cell> = (0..5)
            .flat_map(|x| (0..5).map(move |y| Cell::new(x, y)))
            .collect();
        for &p1 in pts.iter().step_by(3) {
            for &p2 in pts.iter().step_by(5) {
                for &p3 in pts.iter().step_by(7) {
                    for &p4 in pts.iter().step_by(2) {
                        let degenerate = [(p1, p2, p3), (p1, p2, p4), (p1, p3, p4), (p2, p3, p4)]
                            .iter()
                            .any(|&(a, b, c)| collinear(a, b, c));
                        if degenerate {
                            continue;
                        }
                        assert_eq!(
                            segments_cross(p1, p2, p3, p4),
                            segments_cross(p2, p1, p4, p3),
                            "{p1} {p2} {p3} {p4}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_direction_roundtrip() {
        for dir in Direction::ALL {
            let from = Cell::new(3, 3);
            assert_eq!(Direction::between(from, from.step(dir)), Some(dir));
            assert_eq!(from.step(dir).step(dir.opposite()), from);
        }
        assert_eq!(Direction::between(Cell::new(0, 0), Cell::new(1, 1)), None);
    }
}
