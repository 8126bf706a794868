//! Batch generation report.
//!
//! Run with: cargo run --bin track_report -- --runs 100
//!
//! Generates a series of tracks with consecutive seeds, prints the first
//! one as text and summarizes how reliably the configuration succeeds.

use clap::Parser;
use log::{debug, info};
use trackgen::glyph::render_ascii;
use trackgen::{generate_track, print_track_report, track_stats, TrackConfig};

#[derive(Parser, Debug)]
#[command(name = "track_report", version, about = "Generate tracks and report statistics")]
struct Cli {
    /// Number of tracks to generate
    #[arg(long, default_value_t = 50)]
    runs: u64,
    /// Seed of the first track; later runs use consecutive seeds
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Grid side length
    #[arg(long, default_value_t = 10)]
    grid_size: usize,
    /// Waypoints per track
    #[arg(long, default_value_t = 4)]
    point_count: usize,
    /// Fraction of the grid the waypoint sampler draws from
    #[arg(long, default_value_t = 0.6)]
    center_bias: f64,
    /// Minimum waypoint distance as a fraction of the grid size
    #[arg(long, default_value_t = 0.2)]
    min_separation: f64,
    /// Retry budget for sampling, ordering and whole attempts
    #[arg(long, default_value_t = 1000)]
    max_retries: usize,
    /// Allowed crossings
    #[arg(long, default_value_t = 0)]
    max_crossings: usize,
    /// Cap on consecutive moves in one direction
    #[arg(long, default_value_t = 3)]
    max_straight: u32,
    /// Probability of shuffling the search frontier on insertion
    #[arg(long, default_value_t = 0.5)]
    randomness: f64,
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> TrackConfig {
        TrackConfig {
            grid_size: self.grid_size,
            seed: self.seed,
            point_count: self.point_count,
            center_bias: self.center_bias,
            min_separation: self.min_separation,
            max_retries: self.max_retries,
            max_crossings: self.max_crossings,
            max_straight: self.max_straight,
            randomness: self.randomness,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let base = cli.config();
    if let Err(e) = base.validate() {
        eprintln!("{e}");
        std::process::exit(2);
    }

    info!("generating {} tracks from seed {}", cli.runs, cli.seed);

    let mut successes = 0u64;
    let mut total_length = 0usize;
    let mut total_turns = 0usize;
    let mut total_attempts = 0usize;
    let mut longest_straight = 0usize;
    let mut shown = false;

    for run in 0..cli.runs {
        let config = TrackConfig {
            seed: cli.seed.wrapping_add(run),
            ..base.clone()
        };
        let track = generate_track(&config);
        if track.is_empty() {
            debug!("seed {}: no track", config.seed);
            continue;
        }

        let stats = track_stats(&track);
        if !shown {
            println!("Seed {}:\n", config.seed);
            print!("{}", render_ascii(&track, config.grid_size));
            print_track_report(&stats);
            shown = true;
        }

        successes += 1;
        total_length += stats.length;
        total_turns += stats.turns;
        total_attempts += stats.attempts;
        longest_straight = longest_straight.max(stats.longest_straight);
    }

    println!("=== Batch Summary ===");
    println!(
        "Success: {}/{} ({:.1}%)",
        successes,
        cli.runs,
        if cli.runs > 0 { successes as f64 / cli.runs as f64 * 100.0 } else { 0.0 }
    );
    if successes > 0 {
        let n = successes as f64;
        println!("Mean length: {:.1}", total_length as f64 / n);
        println!("Mean turns: {:.1}", total_turns as f64 / n);
        println!("Mean attempts: {:.2}", total_attempts as f64 / n);
        println!("Longest straight: {}", longest_straight);
    }
    println!("=====================");
}
