//! Game Board Screen
//!
//! The screen the Start button switches to. It paints the playfield frame and a hint for
//! getting back to the menu; ball and brick play are not part of this crate.

use super::Drawable;
use crate::canvas::{MenuCanvas, Stroke};
use crate::text::{text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const HINT: &str = "Press ESC for menu";

/// Configuration for board appearance
#[derive(Debug, Clone)]
pub struct GameBoardStyle {
    pub background_color: Color,
    pub wall_color: Color,
    pub wall_thickness: u32,
    pub hint_color: Color,
    pub hint_scale: u32,
}

impl Default for GameBoardStyle {
    fn default() -> Self {
        GameBoardStyle {
            background_color: Color::RGB(255, 255, 255),
            wall_color: Color::RGB(60, 60, 60),
            wall_thickness: 4,
            hint_color: Color::RGB(120, 120, 120),
            hint_scale: 2,
        }
    }
}

pub struct GameBoard {
    area: Rect,
    style: GameBoardStyle,
}

impl GameBoard {
    pub fn new(width: u32, height: u32) -> Self {
        GameBoard {
            area: Rect::new(0, 0, width, height),
            style: GameBoardStyle::default(),
        }
    }
}

impl Drawable for GameBoard {
    fn draw(&self, canvas: &mut dyn MenuCanvas) -> Result<(), String> {
        canvas.set_color(self.style.background_color);
        canvas.fill_rect(self.area)?;

        canvas.set_color(self.style.wall_color);
        canvas.stroke_rect(self.area, &Stroke::solid(self.style.wall_thickness))?;

        // Hint centred in the lower third
        let scale = self.style.hint_scale;
        let x = self.area.x() + (self.area.width() as i32 - text_width(HINT, scale) as i32) / 2;
        let y = self.area.y() + (self.area.height() * 2 / 3) as i32 - text_height(scale) as i32 / 2;
        canvas.set_color(self.style.hint_color);
        canvas.draw_text(HINT, x, y, scale)
    }
}
