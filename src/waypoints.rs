//! Waypoint sampling.
//!
//! Waypoints are drawn from a shrunken square and every coordinate past
//! its midpoint is pushed outward, which keeps them off the exact center.
//! Candidates too close to an accepted waypoint are rejected and redrawn
//! until the retry budget runs out.

use log::debug;
use rand::prelude::*;

use crate::config::TrackConfig;
use crate::geometry::Cell;

/// Draw one candidate coordinate pair.
fn draw_candidate<R: Rng + ?Sized>(config: &TrackConfig, rng: &mut R) -> Cell {
    let size = config.grid_size as f64;
    let span = size * config.center_bias;
    let shift = (size * (1.0 - config.center_bias)).floor();
    let max = config.grid_size.saturating_sub(1) as f64;

    let mut coord = || {
        let v = (rng.gen::<f64>() * span).floor();
        let v = if v > span / 2.0 { v + shift } else { v };
        v.clamp(0.0, max) as i32
    };
    let x = coord();
    let y = coord();
    Cell::new(x, y)
}

/// Sample one waypoint that keeps its distance from `accepted`.
///
/// Falls back to the last candidate when the budget is exhausted, so the
/// result may sit closer than requested.
pub fn sample_point<R: Rng + ?Sized>(accepted: &[Cell], config: &TrackConfig, rng: &mut R) -> Cell {
    let min_distance = config.grid_size as f64 * config.min_separation;
    let mut candidate = Cell::ZERO;

    for _ in 0..config.max_retries.max(1) {
        candidate = draw_candidate(config, rng);
        if accepted.iter().all(|p| p.distance(&candidate) >= min_distance) {
            return candidate;
        }
    }

    debug!(
        "waypoint {} kept below separation {:.2} after {} tries",
        candidate, min_distance, config.max_retries
    );
    candidate
}

/// Sample `config.point_count` waypoints.
pub fn sample_waypoints<R: Rng + ?Sized>(config: &TrackConfig, rng: &mut R) -> Vec<Cell> {
    let mut points = Vec::with_capacity(config.point_count);
    for _ in 0..config.point_count {
        let point = sample_point(&points, config, rng);
        points.push(point);
    }
    points
}
