//! Track Generator - Main Application
//!
//! Interactive view of procedurally generated circuits.

use log::{info, warn};
use macroquad::prelude::*;
use trackgen::visualizer::{Visualizer, ViewerAction};
use trackgen::{generate_track, Track, TrackConfig};

fn window_conf() -> Conf {
    Conf {
        window_title: "Track Generator".to_string(),
        window_width: 1100,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

struct AppState {
    track: Track,
    visualizer: Visualizer,
    config: TrackConfig,
    generation_count: u64,
}

impl AppState {
    fn new() -> Self {
        let config = TrackConfig::default();
        let track = generate_track(&config);
        let visualizer = Visualizer::new(config.grid_size);

        Self {
            track,
            visualizer,
            config,
            generation_count: 0,
        }
    }

    fn regenerate(&mut self) {
        self.generation_count += 1;

        // Change seed for variety
        self.config.seed = 12345 + self.generation_count * 1000;

        info!("regenerating track #{} (seed {})", self.generation_count, self.config.seed);
        self.track = generate_track(&self.config);

        if self.track.is_empty() {
            warn!("no track for seed {}", self.config.seed);
        } else {
            info!(
                "generated {} cells through {} waypoints in {} attempts",
                self.track.len(),
                self.track.ring.len(),
                self.track.attempts
            );
        }
    }

    fn update(&mut self) {
        if self.visualizer.handle_input() == ViewerAction::Regenerate {
            self.regenerate();
        }
    }

    fn draw(&self) {
        self.visualizer.draw(&self.track);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("=== Track Generator ===");
    info!("controls: click or R regenerates, WASD/arrows pan, wheel zooms, Home resets view");

    let mut state = AppState::new();
    info!("initial track: {} cells", state.track.len());

    loop {
        state.update();
        state.draw();
        next_frame().await
    }
}
