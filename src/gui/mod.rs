//! Screen GUI
//!
//! Every screen the frame can show lives here. Screens are plain state-holding structs:
//! they paint through [`MenuCanvas`] and receive pointer coordinates from the frame
//! instead of owning any window callbacks.
//!
//! # Available Screens
//!
//! - [`HomeMenu`] - Start / Exit / Info menu shown at launch
//! - [`GameBoard`] - Playfield the Start button switches to
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::gui::{Drawable, HomeMenu, MenuIntent, PointerEventSink};
//!
//! let mut menu = HomeMenu::new(600, 450);
//!
//! menu.on_pointer_pressed(x, y);
//! menu.on_pointer_released(x, y);
//! if let Some(MenuIntent::StartRequested) = menu.on_clicked(x, y) {
//!     // switch to the board
//! }
//!
//! menu.draw(&mut canvas)?;
//! ```

pub mod game_board;
pub mod home_menu;

pub use game_board::GameBoard;
pub use home_menu::{HomeMenu, MenuIntent, MenuOwner};

use crate::canvas::MenuCanvas;
use crate::input_system::PointerEvent;
use sdl2::rect::Rect;

/// Mouse cursor a screen asks the window to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    Hand,
}

/// Something that can paint itself
pub trait Drawable {
    fn draw(&self, canvas: &mut dyn MenuCanvas) -> Result<(), String>;
}

/// What a screen asks of its owner after one pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerResponse {
    /// Region that needs repainting
    pub redraw: Option<Rect>,
    pub intent: Option<MenuIntent>,
}

/// Receives pointer events in window coordinates
pub trait PointerEventSink {
    /// Returns the region to repaint if the press changed anything
    fn on_pointer_pressed(&mut self, x: i32, y: i32) -> Option<Rect>;

    /// Returns the region to repaint if the release changed anything
    fn on_pointer_released(&mut self, x: i32, y: i32) -> Option<Rect>;

    fn on_pointer_moved(&mut self, x: i32, y: i32) -> CursorShape;

    /// A completed click, correlated by the input layer
    fn on_clicked(&mut self, x: i32, y: i32) -> Option<MenuIntent>;

    /// Routes one pointer event to the matching handler
    ///
    /// Cursor changes from moves are kept by the screen, not returned.
    fn on_pointer_event(&mut self, event: PointerEvent) -> PointerResponse {
        match event {
            PointerEvent::Pressed(x, y) => PointerResponse {
                redraw: self.on_pointer_pressed(x, y),
                ..Default::default()
            },
            PointerEvent::Released(x, y) => PointerResponse {
                redraw: self.on_pointer_released(x, y),
                ..Default::default()
            },
            PointerEvent::Moved(x, y) => {
                self.on_pointer_moved(x, y);
                PointerResponse::default()
            }
            PointerEvent::Clicked(x, y) => PointerResponse {
                intent: self.on_clicked(x, y),
                ..Default::default()
            },
        }
    }
}
