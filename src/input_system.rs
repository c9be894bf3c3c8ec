use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::rect::Point;

/// Pointer events delivered to a screen, in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Pressed(i32, i32),
    Released(i32, i32),
    Moved(i32, i32),
    /// Press and release correlated into one click, reported at the press position
    Clicked(i32, i32),
}

/// Actions the frame reacts to
///
/// This decouples SDL2 events from what the screens do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Pointer(PointerEvent),
    /// Escape: leave the current screen
    Back,
    /// Window close requested
    Quit,
    /// Window contents were lost and need repainting
    Redraw,
}

/// Translates one SDL2 event into an action, ignoring everything the game doesn't use
///
/// Only the left mouse button drives the pointer.
pub fn translate_event(event: &Event) -> Option<InputAction> {
    match *event {
        Event::Quit { .. } => Some(InputAction::Quit),
        Event::KeyDown {
            keycode: Some(Keycode::Escape),
            repeat: false,
            ..
        } => Some(InputAction::Back),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(InputAction::Pointer(PointerEvent::Pressed(x, y))),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(InputAction::Pointer(PointerEvent::Released(x, y))),
        Event::MouseMotion { x, y, .. } => Some(InputAction::Pointer(PointerEvent::Moved(x, y))),
        Event::Window {
            win_event: WindowEvent::Exposed,
            ..
        } => Some(InputAction::Redraw),
        _ => None,
    }
}

/// Correlates presses and releases into clicks
///
/// SDL2 only reports raw button transitions, so this synthesises the discrete click the
/// menu uses for its intents. Order matches the usual toolkit order: pressed, released,
/// clicked.
#[derive(Debug, Default)]
pub struct ClickTracker {
    pressed_at: Option<Point>,
}

impl ClickTracker {
    pub fn new() -> Self {
        ClickTracker { pressed_at: None }
    }

    /// Feeds one action through, returning it plus a synthesised click when a release
    /// completes a press
    pub fn process(&mut self, action: InputAction) -> Vec<InputAction> {
        match action {
            InputAction::Pointer(PointerEvent::Pressed(x, y)) => {
                self.pressed_at = Some(Point::new(x, y));
                vec![action]
            }
            InputAction::Pointer(PointerEvent::Released(..)) => match self.pressed_at.take() {
                Some(p) => vec![
                    action,
                    InputAction::Pointer(PointerEvent::Clicked(p.x(), p.y())),
                ],
                None => vec![action],
            },
            _ => vec![action],
        }
    }

    /// Translates an SDL2 event and runs it through the tracker
    pub fn translate(&mut self, event: &Event) -> Vec<InputAction> {
        translate_event(event)
            .map(|action| self.process(action))
            .unwrap_or_default()
    }
}
