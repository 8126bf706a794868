//! Joining per-pair segments into one closed track.

use log::trace;
use rand::prelude::*;

use crate::config::TrackConfig;
use crate::error::TrackError;
use crate::geometry::{manhattan_distance, Cell};
use crate::grid::{nearby_mask, Mask, UsageGrid};
use crate::search::{find_segment, SearchGrids};

/// A generated closed loop and the grid state it left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    /// Ordered cells; the last cell connects back to the first.
    pub cells: Vec<Cell>,
    /// Waypoints in the order they are visited.
    pub ring: Vec<Cell>,
    /// Number of cells contributed by each ring segment.
    pub segment_lengths: Vec<usize>,
    /// Passes through each cell.
    pub usage: UsageGrid,
    /// Cells where the track changes direction inside a segment.
    pub turns: Mask,
    /// Crossings consumed across all segments.
    pub crossings_used: usize,
    /// Pipeline attempts the generator needed.
    pub attempts: usize,
}

impl Track {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every cell is 4-adjacent to the next, including last to first.
    pub fn is_closed(&self) -> bool {
        let n = self.cells.len();
        n > 1
            && (0..n).all(|i| manhattan_distance(self.cells[i], self.cells[(i + 1) % n]) == 1)
    }

    /// Cells of segment `index` (ending at `ring[(index + 1) % ring.len()]`).
    pub fn segment(&self, index: usize) -> Option<&[Cell]> {
        let len = *self.segment_lengths.get(index)?;
        let start: usize = self.segment_lengths[..index].iter().sum();
        self.cells.get(start..start + len)
    }
}

/// Connect every consecutive pair of `ring`, wrapping around to close it.
///
/// Usage counts and turn cells of each accepted segment are committed
/// before the next search starts. Any failing segment discards the whole
/// assembly.
pub fn assemble_track<R: Rng + ?Sized>(
    ring: &[Cell],
    config: &TrackConfig,
    rng: &mut R,
) -> Result<Track, TrackError> {
    let nearby = nearby_mask(config.grid_size, ring);
    let mut usage = UsageGrid::new(config.grid_size);
    let mut turns = Mask::new(config.grid_size);
    let mut crossings_used = 0;
    let mut cells = Vec::new();
    let mut segment_lengths = Vec::with_capacity(ring.len());

    for (i, &from) in ring.iter().enumerate() {
        let to = ring[(i + 1) % ring.len()];
        let grids = SearchGrids {
            usage: &usage,
            nearby: &nearby,
            turns: &turns,
        };
        let segment = find_segment(from, to, grids, crossings_used, config, rng)?;
        trace!(
            "segment {} -> {}: {} cells, {} turns, {} expansions",
            from,
            to,
            segment.len(),
            segment.turns.len(),
            segment.expansions
        );

        crossings_used = segment.crossings_used;
        for cell in segment.cells() {
            usage.increment(cell);
            cells.push(cell);
        }
        for &turn in &segment.turns {
            turns.mark(turn);
        }
        segment_lengths.push(segment.len());
    }

    Ok(Track {
        cells,
        ring: ring.to_vec(),
        segment_lengths,
        usage,
        turns,
        crossings_used,
        attempts: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;
    use crate::ring::order_ring;
    use crate::waypoints::sample_waypoints;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn build(config: &TrackConfig, seed: u64) -> Option<Track> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let points = sample_waypoints(config, &mut rng);
        let ring = order_ring(&points, config, &mut rng).ok()?;
        assemble_track(&ring, config, &mut rng).ok()
    }

    #[test]
    fn test_empty_ring_gives_empty_track() {
        let config = TrackConfig::default();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let track = assemble_track(&[], &config, &mut rng).unwrap();
        assert!(track.is_empty());
        assert!(!track.is_closed());
        assert!(track.segment_lengths.is_empty());
    }

    #[test]
    fn test_assembled_tracks_hold_invariants() {
        let config = TrackConfig::default();
        let mut built = 0;
        for seed in 0..40 {
            let Some(track) = build(&config, seed) else { continue };
            built += 1;

            assert!(track.is_closed(), "seed {seed} not closed");
            assert_eq!(track.len(), track.segment_lengths.iter().sum::<usize>());
            assert_eq!(track.segment_lengths.len(), track.ring.len());

            for (i, &waypoint) in track.ring.iter().enumerate() {
                let prev = (i + track.ring.len() - 1) % track.ring.len();
                let segment = track.segment(prev).unwrap();
                assert_eq!(segment.last(), Some(&waypoint));
            }

            for &cell in &track.cells {
                let occurrences = track.cells.iter().filter(|&&c| c == cell).count();
                assert_eq!(track.usage.at(cell) as usize, occurrences);
                assert!(occurrences <= config.max_crossings + 1);
            }
            let total: usize = track.usage.iter().map(|(_, &v)| v as usize).sum();
            assert_eq!(total, track.len());
        }
        assert!(built >= 10, "only {built} of 40 seeds assembled");
    }

    #[test]
    fn test_segments_respect_straight_cap() {
        let config = TrackConfig::default();
        for seed in 0..30 {
            let Some(track) = build(&config, seed) else { continue };
            for (i, &from) in track.ring.iter().enumerate() {
                let segment = track.segment(i).unwrap();
                let mut prev = from;
                let mut last_dir = None;
                let mut run = 0;
                for &cell in segment {
                    let dir = Direction::between(prev, cell);
                    run = if dir == last_dir { run + 1 } else { 1 };
                    assert!(run <= config.max_straight, "seed {seed}: run of {run}");
                    last_dir = dir;
                    prev = cell;
                }
            }
        }
    }

    #[test]
    fn test_turn_mask_covers_segment_turns() {
        let config = TrackConfig::default();
        let track = (0..20).find_map(|seed| build(&config, seed)).expect("a track");
        for (i, &from) in track.ring.iter().enumerate() {
            let segment = track.segment(i).unwrap();
            let mut path = vec![from];
            path.extend_from_slice(segment);
            for w in path.windows(3) {
                if Direction::between(w[0], w[1]) != Direction::between(w[1], w[2]) {
                    assert!(track.turns.at(w[1]), "turn at {} not marked", w[1]);
                }
            }
        }
    }
}
