//! Ordering waypoints into a ring with few self-intersections.

use log::debug;
use rand::prelude::*;

use crate::config::TrackConfig;
use crate::error::TrackError;
use crate::geometry::{segments_cross, Cell};

/// Count crossing pairs of non-adjacent edges of the closed polygon `ring`.
pub fn count_crossings(ring: &[Cell]) -> usize {
    let n = ring.len();
    let mut crossings = 0;

    for i in 0..n {
        for j in (i + 1)..n {
            // Edges sharing an endpoint never count.
            if (i + 1) % n == j || (j + 1) % n == i {
                continue;
            }
            let (a1, a2) = (ring[i], ring[(i + 1) % n]);
            let (b1, b2) = (ring[j], ring[(j + 1) % n]);
            if segments_cross(a1, a2, b1, b2) {
                crossings += 1;
            }
        }
    }

    crossings
}

/// Shuffle `points` until the ring has at most `config.max_crossings`
/// crossings.
pub fn order_ring<R: Rng + ?Sized>(
    points: &[Cell],
    config: &TrackConfig,
    rng: &mut R,
) -> Result<Vec<Cell>, TrackError> {
    let mut ring = points.to_vec();

    for attempt in 1..=config.max_retries {
        ring.shuffle(rng);
        let crossings = count_crossings(&ring);
        if crossings <= config.max_crossings {
            debug!("ring accepted after {} shuffles ({} crossings)", attempt, crossings);
            return Ok(ring);
        }
    }

    Err(TrackError::NoValidRing { attempts: config.max_retries })
}
