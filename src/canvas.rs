//! Drawing Surface
//!
//! Screens draw through the [`MenuCanvas`] trait instead of an SDL2 canvas directly. The
//! SDL2 canvas implements it for the real window; tests use a recording canvas and assert
//! on the draw calls rather than on pixels.

use crate::text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget};

/// Outline style for [`MenuCanvas::stroke_rect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    /// Line thickness in pixels, centred on the rectangle edge
    pub width: u32,

    /// `(on, off)` dash lengths in pixels, `None` for a solid line
    pub dash: Option<(u32, u32)>,
}

impl Stroke {
    pub fn solid(width: u32) -> Self {
        Stroke { width, dash: None }
    }

    pub fn dashed(width: u32, on: u32, off: u32) -> Self {
        Stroke {
            width,
            dash: Some((on, off)),
        }
    }
}

/// A surface the screens can paint into
pub trait MenuCanvas {
    /// Sets the colour used by every following draw call
    fn set_color(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect) -> Result<(), String>;

    /// One pixel outline
    fn draw_rect(&mut self, rect: Rect) -> Result<(), String>;

    /// Bitmap text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32) -> Result<(), String>;

    /// Thick (optionally dashed) outline, composed from filled rectangles
    ///
    /// The dash pattern restarts at each corner. Sizes saturate instead of overflowing.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) -> Result<(), String> {
        if stroke.width == 0 {
            return Ok(());
        }
        let half = (stroke.width / 2) as i32;
        let w = stroke.width;
        let (left, top) = (rect.x().saturating_sub(half), rect.y().saturating_sub(half));
        let (right, bottom) = (
            rect.right().saturating_sub(half),
            rect.bottom().saturating_sub(half),
        );
        let horizontal = rect.width().saturating_add(w);
        let vertical = rect.height().saturating_add(w);

        let (on, off) = stroke.dash.unwrap_or((horizontal.max(vertical), 0));

        for (start, len) in dash_segments(horizontal, on, off) {
            let x = left.saturating_add_unsigned(start);
            self.fill_rect(Rect::new(x, top, len, w))?;
            self.fill_rect(Rect::new(x, bottom, len, w))?;
        }
        for (start, len) in dash_segments(vertical, on, off) {
            let y = top.saturating_add_unsigned(start);
            self.fill_rect(Rect::new(left, y, w, len))?;
            self.fill_rect(Rect::new(right, y, w, len))?;
        }
        Ok(())
    }
}

/// Splits an edge of `length` pixels into `(offset, length)` dash runs
///
/// A zero `on` length yields no runs; a zero `off` length yields one solid run.
pub fn dash_segments(length: u32, on: u32, off: u32) -> Vec<(u32, u32)> {
    if on == 0 || length == 0 {
        return Vec::new();
    }
    if off == 0 {
        return vec![(0, length)];
    }

    let mut segments = Vec::new();
    let mut offset = 0;
    while offset < length {
        segments.push((offset, on.min(length - offset)));
        offset = offset.saturating_add(on.saturating_add(off));
    }
    segments
}

impl<T: RenderTarget> MenuCanvas for Canvas<T> {
    fn set_color(&mut self, color: Color) {
        self.set_draw_color(color);
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), String> {
        Canvas::fill_rect(self, rect)
    }

    fn draw_rect(&mut self, rect: Rect) -> Result<(), String> {
        Canvas::draw_rect(self, rect)
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32) -> Result<(), String> {
        text::draw_simple_text(self, text, x, y, scale)
    }
}
