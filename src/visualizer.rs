//! Macroquad-based viewer for generated tracks.
//!
//! Provides an interactive view with:
//! - Cells colored along the loop, with index labels and direction arrows
//! - Zoom (mouse wheel) and pan (WASD/arrow keys)
//! - Track regeneration (click or R key)

use macroquad::color::hsl_to_rgb;
use macroquad::prelude::*;

use crate::geometry::{Cell, Direction};
use crate::glyph::{track_hue, Glyph};
use crate::track::Track;
use crate::track_stats;

/// Side of one grid cell in world units before zoom.
const CELL_SIZE: f32 = 64.0;

/// What the viewer asks the application to do after input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    None,
    Regenerate,
}

/// Visualization state.
pub struct Visualizer {
    /// Camera offset (pan).
    pub camera_offset: Vec2,
    /// Zoom level.
    pub zoom: f32,
    /// Show cell indices.
    pub show_indices: bool,
    /// Show direction arrows.
    pub show_glyphs: bool,
    /// Highlight waypoints.
    pub show_waypoints: bool,
    /// Grid side length in cells.
    pub grid_size: usize,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self {
            camera_offset: Vec2::ZERO,
            zoom: 1.0,
            show_indices: true,
            show_glyphs: true,
            show_waypoints: true,
            grid_size: 10,
        }
    }
}

/// Screen-space unit vector for a grid move (`x` is the row).
fn screen_dir(dir: Direction) -> Vec2 {
    let d = dir.delta();
    Vec2::new(d.y as f32, d.x as f32)
}

impl Visualizer {
    pub fn new(grid_size: usize) -> Self {
        // Fit the grid to the window, leaving room for the side panel.
        let world = grid_size.max(1) as f32 * CELL_SIZE;
        let avail_w = screen_width() - 260.0;
        let avail_h = screen_height();
        let zoom = (avail_w / world).min(avail_h / world) * 0.9;

        let offset_x = 260.0 + (avail_w - world * zoom) / 2.0;
        let offset_y = (avail_h - world * zoom) / 2.0;

        Self {
            camera_offset: Vec2::new(offset_x, offset_y),
            zoom,
            grid_size,
            ..Default::default()
        }
    }

    /// Screen position of the top-left corner of `cell`.
    pub fn cell_to_screen(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            cell.y as f32 * CELL_SIZE * self.zoom + self.camera_offset.x,
            cell.x as f32 * CELL_SIZE * self.zoom + self.camera_offset.y,
        )
    }

    fn cell_center(&self, cell: Cell) -> Vec2 {
        self.cell_to_screen(cell) + Vec2::splat(self.cell_px() / 2.0)
    }

    fn cell_px(&self) -> f32 {
        CELL_SIZE * self.zoom
    }

    /// Handle input for camera control and regeneration.
    pub fn handle_input(&mut self) -> ViewerAction {
        let mut action = ViewerAction::None;

        // Zoom with mouse wheel, toward the cursor
        let (_, wheel_y) = mouse_wheel();
        if wheel_y != 0.0 {
            let mouse_pos = Vec2::new(mouse_position().0, mouse_position().1);
            let world = (mouse_pos - self.camera_offset) / self.zoom;

            self.zoom *= 1.0 + wheel_y.signum() * 0.05;
            self.zoom = self.zoom.clamp(0.1, 10.0);

            self.camera_offset = mouse_pos - world * self.zoom;
        }

        // Pan with WASD or arrow keys
        let pan_speed = 10.0;
        if is_key_down(KeyCode::W) || is_key_down(KeyCode::Up) {
            self.camera_offset.y += pan_speed;
        }
        if is_key_down(KeyCode::S) || is_key_down(KeyCode::Down) {
            self.camera_offset.y -= pan_speed;
        }
        if is_key_down(KeyCode::A) || is_key_down(KeyCode::Left) {
            self.camera_offset.x += pan_speed;
        }
        if is_key_down(KeyCode::D) || is_key_down(KeyCode::Right) {
            self.camera_offset.x -= pan_speed;
        }

        // Toggle displays
        if is_key_pressed(KeyCode::I) {
            self.show_indices = !self.show_indices;
        }
        if is_key_pressed(KeyCode::G) {
            self.show_glyphs = !self.show_glyphs;
        }
        if is_key_pressed(KeyCode::P) {
            self.show_waypoints = !self.show_waypoints;
        }

        // Regenerate with R or a click outside the panel
        if is_key_pressed(KeyCode::R) {
            action = ViewerAction::Regenerate;
        }
        if is_mouse_button_pressed(MouseButton::Left) && mouse_position().0 > 260.0 {
            action = ViewerAction::Regenerate;
        }

        // Reset view with Home
        if is_key_pressed(KeyCode::Home) {
            *self = Self::new(self.grid_size);
        }

        action
    }

    /// Draw the grid and the track.
    pub fn draw(&self, track: &Track) {
        clear_background(Color::from_rgba(20, 30, 40, 255));

        self.draw_grid();

        let glyphs = Glyph::for_track(track);
        for (i, &cell) in track.cells.iter().enumerate() {
            let hue = track_hue(i, track.len()) / 360.0;
            let color = hsl_to_rgb(hue, 1.0, 0.6);
            let corner = self.cell_to_screen(cell);
            draw_rectangle(corner.x, corner.y, self.cell_px(), self.cell_px(), color);
        }

        if self.show_waypoints {
            for &waypoint in &track.ring {
                let corner = self.cell_to_screen(waypoint);
                draw_rectangle_lines(corner.x, corner.y, self.cell_px(), self.cell_px(), 4.0, WHITE);
            }
        }

        for (i, &cell) in track.cells.iter().enumerate() {
            if self.show_glyphs {
                if let Some(glyph) = glyphs[i] {
                    self.draw_glyph(cell, glyph);
                }
            }
            if self.show_indices {
                let corner = self.cell_to_screen(cell);
                let font_size = (self.cell_px() * 0.3).max(8.0);
                draw_text(&i.to_string(), corner.x + 3.0, corner.y + font_size, font_size, BLACK);
            }
        }

        self.draw_ui(track);
    }

    fn draw_grid(&self) {
        let color = Color::from_rgba(60, 60, 60, 255);
        let size = self.grid_size as i32;
        let px = self.cell_px();
        for x in 0..size {
            for y in 0..size {
                let corner = self.cell_to_screen(Cell::new(x, y));
                draw_rectangle_lines(corner.x, corner.y, px, px, 1.0, color);
            }
        }
    }

    /// Draw a glyph as lines: an arrow for straights, an elbow for turns.
    fn draw_glyph(&self, cell: Cell, glyph: Glyph) {
        let center = self.cell_center(cell);
        let half = self.cell_px() * 0.35;
        let thickness = (self.cell_px() * 0.06).max(1.5);
        let color = Color::from_rgba(20, 20, 20, 255);

        match glyph {
            Glyph::Start => {
                draw_circle(center.x, center.y, half * 0.5, color);
            }
            Glyph::Straight(dir) => {
                let v = screen_dir(dir) * half;
                let (tail, tip) = (center - v, center + v);
                draw_line(tail.x, tail.y, tip.x, tip.y, thickness, color);
                self.draw_arrow_head(tip, dir, half * 0.4, color);
            }
            Glyph::Turn(turn) => {
                let (incoming, outgoing) = turn.moves();
                // Enter from the side we came from, leave through the exit side.
                let entry = center - screen_dir(incoming) * half;
                let exit = center + screen_dir(outgoing) * half;
                draw_line(entry.x, entry.y, center.x, center.y, thickness, color);
                draw_line(center.x, center.y, exit.x, exit.y, thickness, color);
                self.draw_arrow_head(exit, outgoing, half * 0.4, color);
            }
        }
    }

    fn draw_arrow_head(&self, tip: Vec2, dir: Direction, size: f32, color: Color) {
        let forward = screen_dir(dir);
        let side = forward.perp() * size * 0.6;
        let base = tip - forward * size;
        draw_triangle(tip, base + side, base - side, color);
    }

    /// Draw UI overlay.
    fn draw_ui(&self, track: &Track) {
        let mut y = 20.0;
        let line_height = 18.0;
        let font_size = 16.0;

        draw_text("Track Generator", 10.0, y, font_size + 4.0, WHITE);
        y += line_height + 5.0;

        // Controls
        draw_text("Controls:", 10.0, y, font_size, GRAY);
        y += line_height;
        for line in [
            "  WASD/Arrows: Pan",
            "  Mouse Wheel: Zoom",
            "  Click / R: Regenerate",
            "  Home: Reset view",
        ] {
            draw_text(line, 10.0, y, font_size, GRAY);
            y += line_height;
        }
        y += 5.0;

        // Toggles
        draw_text("Toggles:", 10.0, y, font_size, GRAY);
        y += line_height;
        for (label, on) in [
            ("I: Indices", self.show_indices),
            ("G: Arrows", self.show_glyphs),
            ("P: Waypoints", self.show_waypoints),
        ] {
            let text = format!("  {} [{}]", label, if on { "ON" } else { "OFF" });
            draw_text(&text, 10.0, y, font_size, if on { GREEN } else { GRAY });
            y += line_height;
        }
        y += 5.0;

        // Stats
        draw_text("Stats:", 10.0, y, font_size, GRAY);
        y += line_height;
        if track.is_empty() {
            draw_text("  No track generated", 10.0, y, font_size, RED);
            return;
        }
        let stats = track_stats(track);
        for line in [
            format!("  Length: {}", stats.length),
            format!("  Waypoints: {}", stats.waypoints),
            format!("  Turns: {}", stats.turns),
            format!("  Crossings: {}", stats.crossings),
            format!("  Longest straight: {}", stats.longest_straight),
            format!("  Attempts: {}", stats.attempts),
            format!("  Zoom: {:.1}x", self.zoom),
            format!("  FPS: {}", get_fps()),
        ] {
            draw_text(&line, 10.0, y, font_size, GRAY);
            y += line_height;
        }
    }
}
