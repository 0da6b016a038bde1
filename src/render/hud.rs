//! 2D overlay drawn after the 3D pass.
use raylib::prelude::*;

use maze_viewer::core::session::completion_message;

/// Seconds the completion banner stays up.
pub const BANNER_SECS: f32 = 4.0;

/// Timed completion message.
#[derive(Clone, Debug, Default)]
pub struct Banner {
    text: Option<String>,
    remaining: f32,
}

impl Banner {
    pub fn show_completion(&mut self, moves: u32) {
        self.text = Some(completion_message(moves));
        self.remaining = BANNER_SECS;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.text.is_none() {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.text = None;
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Left edge that centres a line `text_w` pixels wide, clamped on screen.
fn centered_x(screen_w: i32, text_w: i32) -> i32 {
    ((screen_w - text_w) / 2).max(0)
}

pub fn draw_hud(d: &mut RaylibDrawHandle<'_>, width: i32, moves: u32, banner: &Banner) {
    d.draw_fps(10, 10);
    d.draw_text(&format!("Moves: {moves}"), 10, 36, 20, Color::WHITE);
    d.draw_text("Arrows: roll   Drag: orbit   R: restart", 10, 60, 14, Color::LIGHTGRAY);

    if let Some(text) = banner.text() {
        let size = 24;
        let tw = d.measure_text(text, size);
        let x = centered_x(width, tw);
        d.draw_rectangle(x - 10, 90, tw + 20, size + 16, Color::new(0, 0, 0, 170));
        d.draw_text(text, x, 98, size, Color::GOLD);
    }
}
