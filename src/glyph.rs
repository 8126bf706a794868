//! Direction glyphs and colors for drawing a track.
//!
//! Not used by the generator itself; the viewer and the report binary
//! consume it.

use crate::geometry::{Cell, Direction};
use crate::track::Track;

/// A change of direction, named by the incoming and outgoing movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    DownRight,
    LeftDown,
    UpLeft,
    RightUp,
    LeftUp,
    UpRight,
    RightDown,
    DownLeft,
}

impl Turn {
    /// The turn from moving `incoming` to moving `outgoing`, if the two
    /// directions are perpendicular.
    pub fn from_moves(incoming: Direction, outgoing: Direction) -> Option<Turn> {
        use Direction::*;
        match (incoming, outgoing) {
            (Down, Right) => Some(Turn::DownRight),
            (Left, Down) => Some(Turn::LeftDown),
            (Up, Left) => Some(Turn::UpLeft),
            (Right, Up) => Some(Turn::RightUp),
            (Left, Up) => Some(Turn::LeftUp),
            (Up, Right) => Some(Turn::UpRight),
            (Right, Down) => Some(Turn::RightDown),
            (Down, Left) => Some(Turn::DownLeft),
            _ => None,
        }
    }

    pub fn moves(self) -> (Direction, Direction) {
        use Direction::*;
        match self {
            Turn::DownRight => (Down, Right),
            Turn::LeftDown => (Left, Down),
            Turn::UpLeft => (Up, Left),
            Turn::RightUp => (Right, Up),
            Turn::LeftUp => (Left, Up),
            Turn::UpRight => (Up, Right),
            Turn::RightDown => (Right, Down),
            Turn::DownLeft => (Down, Left),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Turn::DownRight => '↳',
            Turn::LeftDown => '⬐',
            Turn::UpLeft => '↰',
            Turn::RightUp => '⬏',
            Turn::LeftUp => '⬑',
            Turn::UpRight => '↱',
            Turn::RightDown => '⬎',
            Turn::DownLeft => '↲',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// First cell of the track.
    Start,
    /// Leaving the cell in the given direction without turning.
    Straight(Direction),
    Turn(Turn),
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Start => '●',
            Glyph::Straight(Direction::Up) => '↑',
            Glyph::Straight(Direction::Down) => '↓',
            Glyph::Straight(Direction::Left) => '←',
            Glyph::Straight(Direction::Right) => '→',
            Glyph::Turn(turn) => turn.symbol(),
        }
    }

    /// Glyph for cell `i` of a closed loop of `cells`.
    ///
    /// Index 0 is the start. Every other cell looks at the move that
    /// entered it and the move that leaves it, wrapping from the last cell
    /// to the first; anything that is not a clean turn falls back to the
    /// straight glyph of the outgoing move.
    pub fn at(cells: &[Cell], i: usize) -> Option<Glyph> {
        let n = cells.len();
        if i >= n {
            return None;
        }
        if i == 0 {
            return Some(Glyph::Start);
        }

        let cell = cells[i];
        let incoming = Direction::between(cells[i - 1], cell)?;
        let outgoing = Direction::between(cell, cells[(i + 1) % n])?;

        Some(match Turn::from_moves(incoming, outgoing) {
            Some(turn) => Glyph::Turn(turn),
            None => Glyph::Straight(outgoing),
        })
    }

    /// Glyphs for every cell of `track`; cells that are not adjacent to
    /// their neighbors get `None`.
    pub fn for_track(track: &Track) -> Vec<Option<Glyph>> {
        (0..track.len()).map(|i| Glyph::at(&track.cells, i)).collect()
    }
}

/// Hue in degrees for cell `index` of a track of `len` cells.
pub fn track_hue(index: usize, len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    360.0 / len as f32 * index as f32
}

/// Text rendering of a track, one row per grid row.
///
/// Empty cells are `.`, cells the track passes twice are `+`.
pub fn render_ascii(track: &Track, grid_size: usize) -> String {
    let mut rows = vec![vec!['.'; grid_size]; grid_size];
    for (i, &cell) in track.cells.iter().enumerate() {
        if cell.x < 0 || cell.y < 0 {
            continue;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        if x >= grid_size || y >= grid_size {
            continue;
        }
        rows[x][y] = if track.usage.at(cell) > 1 {
            '+'
        } else {
            Glyph::at(&track.cells, i).map_or('?', Glyph::symbol)
        };
    }

    let mut out = String::with_capacity(grid_size * (grid_size * 2 + 1));
    for row in rows {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
