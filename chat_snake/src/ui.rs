// ui.rs - Draws the snake board with egui's painter

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, Vec2};
use snake_state::{CELL_SIZE, Cell};

use crate::SnakeApp;

const BORDER_COLOR: Color32 = Color32::from_rgba_premultiplied(44, 5, 144, 204);
const HEAD_COLOR: Color32 = Color32::from_rgb(230, 195, 11);
const BODY_COLOR: Color32 = Color32::from_rgb(200, 175, 5);
const FOOD_COLOR: Color32 = Color32::from_rgb(255, 0, 0);
const FONT_SIZE: f32 = 60.0;

pub fn cell_color(cell: Cell) -> Option<Color32> {
    match cell {
        Cell::Border => Some(BORDER_COLOR),
        Cell::Head => Some(HEAD_COLOR),
        Cell::Body => Some(BODY_COLOR),
        Cell::Food => Some(FOOD_COLOR),
        Cell::Empty => None,
    }
}

/// Whole seconds left before restart, rounded up so "0" never shows early.
pub fn countdown_seconds(remaining: Duration) -> u128 {
    remaining.as_millis().div_ceil(1000)
}

/// Top-left of the game-over block. The first line's baseline sits at a
/// third of the board height, so the block starts one line above it.
pub fn game_over_offset(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 5.0, height / 3.0 - FONT_SIZE)
}

pub fn game_over_text(score: u32, remaining: Duration) -> String {
    format!(
        "You lost the game.\nYour score is {}.\nRestarting in {} seconds.",
        score,
        countdown_seconds(remaining)
    )
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update runs to completion before anything is painted.
        let now = Instant::now();
        self.game.update(now - self.last_update);
        self.last_update = now;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let painter = ui.painter();
                let grid = self.game.grid();
                let cell = CELL_SIZE as f32;

                for (index, &state) in grid.cells().iter().enumerate() {
                    let Some(color) = cell_color(state) else { continue };
                    let (x, y) = grid.coords(index);
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(x as f32 * cell, y as f32 * cell),
                        Vec2::splat(cell),
                    );
                    painter.rect_filled(rect, 0.0, color);
                }

                let width = grid.width() as f32 * cell;
                let height = grid.height() as f32 * cell;

                if let Some(remaining) = self.game.restart_countdown() {
                    painter.text(
                        origin + game_over_offset(width, height),
                        Align2::LEFT_TOP,
                        game_over_text(self.game.score(), remaining),
                        FontId::proportional(FONT_SIZE),
                        Color32::WHITE,
                    );
                }

                painter.text(
                    origin + Vec2::new(width - 100.0, 70.0),
                    Align2::LEFT_BOTTOM,
                    self.game.score().to_string(),
                    FontId::proportional(FONT_SIZE),
                    Color32::WHITE,
                );
            });

        // Keep ticking even without input events
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_state::RESET_DELAY;

    #[test]
    fn cell_colors_match_palette() {
        let rgba = |cell| cell_color(cell).map(|c: Color32| c.to_array());
        assert_eq!(rgba(Cell::Empty), None);
        assert_eq!(rgba(Cell::Border), Some([44, 5, 144, 204]));
        assert_eq!(rgba(Cell::Head), Some([230, 195, 11, 255]));
        assert_eq!(rgba(Cell::Body), Some([200, 175, 5, 255]));
        assert_eq!(rgba(Cell::Food), Some([255, 0, 0, 255]));
    }

    #[test]
    fn game_over_block_starts_one_line_above_baseline() {
        let offset = game_over_offset(920.0, 920.0);
        assert_eq!(offset.x, 184.0);
        assert!((offset.y - (920.0 / 3.0 - 60.0)).abs() < 1e-3);
    }

    #[test]
    fn countdown_rounds_up() {
        assert_eq!(countdown_seconds(RESET_DELAY), 5);
        assert_eq!(countdown_seconds(Duration::from_millis(4001)), 5);
        assert_eq!(countdown_seconds(Duration::from_millis(4000)), 4);
        assert_eq!(countdown_seconds(Duration::from_millis(1)), 1);
        assert_eq!(countdown_seconds(Duration::ZERO), 0);
    }

    #[test]
    fn game_over_message_lists_score_and_countdown() {
        let text = game_over_text(7, Duration::from_millis(2500));
        assert_eq!(
            text,
            "You lost the game.\nYour score is 7.\nRestarting in 3 seconds."
        );
    }
}
