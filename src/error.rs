//! Failure modes of track generation.
//!
//! Every variant is recoverable by retrying a higher stage; none of them
//! abort the process.

use crate::geometry::Cell;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// No waypoint ordering with few enough crossings was found.
    #[error("no valid ring found after {attempts} shuffles")]
    NoValidRing { attempts: usize },
    /// The path search ran out of frontier before reaching the next waypoint.
    #[error("no path from {from} to {to} (expanded {expansions} nodes)")]
    SegmentUnreachable {
        from: Cell,
        to: Cell,
        expansions: usize,
    },
    /// The whole pipeline failed on every attempt.
    #[error("track generation failed after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
