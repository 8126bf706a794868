//! Randomized best-first search connecting two waypoints.
//!
//! The search is a greedy best-first walk keyed on Manhattan distance to
//! the target, run through a [`Frontier`] that occasionally shuffles its
//! pending nodes. Moves are restricted by the straight-run cap, the shared
//! usage grid, the turn mask and the waypoint proximity mask, so segments
//! built later respect the segments already committed.
//!
//! Nodes live in an arena (no `Rc<RefCell<T>>`): each node stores the index
//! of its parent and the path is rebuilt once the target is reached.

use rand::prelude::*;

use crate::config::TrackConfig;
use crate::error::TrackError;
use crate::frontier::Frontier;
use crate::geometry::{manhattan_distance, Cell, Direction};
use crate::grid::{Mask, UsageGrid};

/// Read-only view of the grids a segment search must respect.
#[derive(Debug, Clone, Copy)]
pub struct SearchGrids<'a> {
    /// Passes through each cell by earlier segments.
    pub usage: &'a UsageGrid,
    /// Neighborhood of every waypoint.
    pub nearby: &'a Mask,
    /// Cells where an earlier segment turned.
    pub turns: &'a Mask,
}

/// One cell of a segment with the direction used to enter it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub cell: Cell,
    pub dir: Direction,
}

/// A path between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Cells from the start (exclusive) to the target (inclusive).
    pub steps: Vec<Step>,
    /// Cells where this segment changes direction.
    pub turns: Vec<Cell>,
    /// Crossings consumed so far, including those carried in.
    pub crossings_used: usize,
    /// Nodes dequeued by the search.
    pub expansions: usize,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.steps.iter().map(|s| s.cell)
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchNode {
    pos: Cell,
    /// Direction used to enter `pos`; `None` for the start node.
    dir: Option<Direction>,
    straight: u32,
    crossings_used: usize,
    /// Turn discovered when this node was created (at the parent's cell).
    turn: Option<Cell>,
    parent: Option<usize>,
}

/// Find a path from `from` to `to`.
///
/// `crossings_used` is the crossing budget already consumed by earlier
/// segments; the returned segment carries the updated total.
pub fn find_segment<R: Rng + ?Sized>(
    from: Cell,
    to: Cell,
    grids: SearchGrids<'_>,
    crossings_used: usize,
    config: &TrackConfig,
    rng: &mut R,
) -> Result<Segment, TrackError> {
    let mut arena = vec![SearchNode {
        pos: from,
        dir: None,
        straight: 0,
        crossings_used,
        turn: None,
        parent: None,
    }];
    let mut visited = Mask::new(grids.usage.size());
    let mut frontier = Frontier::new(config.randomness);

    visited.mark(from);
    frontier.push(manhattan_distance(from, to), 0, rng);

    let mut expansions = 0;
    while let Some(index) = frontier.pop() {
        expansions += 1;
        let node = arena[index];

        if node.pos == to {
            return Ok(rebuild(&arena, index, expansions));
        }

        for dir in Direction::ALL {
            let next = node.pos.step(dir);
            if !grids.usage.contains(next) || visited.at(next) {
                continue;
            }

            let same_dir = node.dir == Some(dir);
            let straight = if same_dir { node.straight + 1 } else { 1 };
            if straight > config.max_straight {
                continue;
            }

            let usage = grids.usage.at(next);
            if grids.nearby.at(next) && usage >= 1 {
                continue;
            }
            if grids.turns.at(next) {
                continue;
            }

            // A used cell may only be crossed going straight through it.
            let mut crossings = node.crossings_used;
            if usage == 1 {
                if !same_dir {
                    continue;
                }
                crossings += 1;
            }
            if crossings > config.max_crossings {
                continue;
            }

            let turn = match node.dir {
                Some(prev) if prev != dir => Some(node.pos),
                _ => None,
            };

            visited.mark(next);
            arena.push(SearchNode {
                pos: next,
                dir: Some(dir),
                straight,
                crossings_used: crossings,
                turn,
                parent: Some(index),
            });
            frontier.push(manhattan_distance(next, to), arena.len() - 1, rng);
        }
    }

    Err(TrackError::SegmentUnreachable {
        from,
        to,
        expansions,
    })
}

/// Walk parent links back from `goal` to build the segment.
fn rebuild(arena: &[SearchNode], goal: usize, expansions: usize) -> Segment {
    let mut steps = Vec::new();
    let mut turns = Vec::new();

    let mut current = Some(goal);
    while let Some(index) = current {
        let node = &arena[index];
        if let Some(dir) = node.dir {
            steps.push(Step { cell: node.pos, dir });
        }
        if let Some(turn) = node.turn {
            turns.push(turn);
        }
        current = node.parent;
    }
    steps.reverse();
    turns.reverse();

    Segment {
        steps,
        turns,
        crossings_used: arena[goal].crossings_used,
        expansions,
    }
}
