//! Home Menu Screen
//!
//! The menu shown at launch: a bordered panel with the game title and three buttons
//! (Start, Exit, Info). Pressing a button highlights it until the mouse is released;
//! a completed click on Start or Exit produces a [`MenuIntent`] for the owner.

use super::{CursorShape, Drawable, PointerEventSink};
use crate::canvas::{MenuCanvas, Stroke};
use crate::config::MenuConfig;
use crate::text::{text_height, text_width, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const GREETINGS: &str = "Welcome to:";
const GAME_TITLE: &str = "Brick Destroy";

/// Configuration for home menu appearance
#[derive(Debug, Clone)]
pub struct HomeMenuStyle {
    /// Panel fill colour
    pub background_color: Color,

    /// Dashed border drawn on top
    pub border_color: Color,

    /// Solid border drawn underneath the dashes
    pub dash_border_color: Color,

    /// Title text and idle button colour
    pub text_color: Color,

    /// Outline colour of a pressed button
    pub clicked_button_color: Color,

    /// Label colour of a pressed button
    pub clicked_text_color: Color,

    /// Border stroke width in pixels
    pub border_size: u32,

    /// `(on, off)` dash lengths
    pub dashes: (u32, u32),

    pub greeting_scale: u32,
    pub title_scale: u32,
    pub credits_scale: u32,

    /// Version line under the title
    pub credits: String,
}

impl From<&MenuConfig> for HomeMenuStyle {
    fn from(config: &MenuConfig) -> Self {
        HomeMenuStyle {
            background_color: config.background.into(),
            border_color: config.border.into(),
            dash_border_color: config.dash_border.into(),
            text_color: config.text.into(),
            clicked_button_color: config.clicked_button.into(),
            clicked_text_color: config.clicked_text.into(),
            border_size: config.border_size,
            dashes: (config.dashes[0], config.dashes[1]),
            greeting_scale: 3,
            title_scale: 5,
            credits_scale: 2,
            credits: format!("Version {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for HomeMenuStyle {
    fn default() -> Self {
        HomeMenuStyle::from(&MenuConfig::default())
    }
}

/// The three menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    Start,
    Exit,
    Info,
}

impl MenuButton {
    /// Hit-test priority order
    pub const ALL: [MenuButton; 3] = [MenuButton::Start, MenuButton::Exit, MenuButton::Info];

    pub fn label(self) -> &'static str {
        match self {
            MenuButton::Start => "Start",
            MenuButton::Exit => "Exit",
            MenuButton::Info => "Info",
        }
    }

    /// Info is laid out and drawn but has no action
    pub fn is_clickable(self) -> bool {
        !matches!(self, MenuButton::Info)
    }

    fn intent(self) -> Option<MenuIntent> {
        match self {
            MenuButton::Start => Some(MenuIntent::StartRequested),
            MenuButton::Exit => Some(MenuIntent::ExitRequested),
            MenuButton::Info => None,
        }
    }
}

/// Requests the menu sends to whoever owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    StartRequested,
    ExitRequested,
}

/// The owner of the home menu (the window frame)
///
/// The menu never switches screens or ends the process itself; it only reports intents.
pub trait MenuOwner {
    /// Switch to the game board
    fn on_start_requested(&mut self);

    /// Shut the game down
    fn on_exit_requested(&mut self);

    fn handle_intent(&mut self, intent: MenuIntent) {
        match intent {
            MenuIntent::StartRequested => self.on_start_requested(),
            MenuIntent::ExitRequested => self.on_exit_requested(),
        }
    }
}

/// Panel and button rectangles, in window coordinates
///
/// Buttons are a third of the panel wide and a twelfth tall. Start sits horizontally
/// centred at 80% of the free vertical space; Exit is 1.2x Start's offset and Info 0.6x
/// Exit's. Offsets are truncated with integer arithmetic.
///
/// `Rect` can't be empty, so `button_size` holds the real size; on panels under 3 px wide
/// or 12 px tall it has a zero side and the buttons are neither hit nor drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub panel: Rect,
    pub button_size: (u32, u32),
    pub start: Rect,
    pub exit: Rect,
    pub info: Rect,
}

impl MenuLayout {
    pub fn new(panel: Rect) -> Self {
        let (width, height) = (panel.width(), panel.height());
        let (button_w, button_h) = (width / 3, height / 12);

        let x = ((width - button_w) / 2) as i32;
        let start_y = ((height - button_h) * 4 / 5) as i32;
        let exit_y = start_y * 6 / 5;
        let info_y = exit_y * 3 / 5;

        let button = |offset_y: i32| {
            Rect::new(panel.x() + x, panel.y() + offset_y, button_w, button_h)
        };

        MenuLayout {
            panel,
            button_size: (button_w, button_h),
            start: button(start_y),
            exit: button(exit_y),
            info: button(info_y),
        }
    }

    pub fn bounds(&self, button: MenuButton) -> Rect {
        match button {
            MenuButton::Start => self.start,
            MenuButton::Exit => self.exit,
            MenuButton::Info => self.info,
        }
    }

    /// False when the panel is too small for a button to have any area
    pub fn has_buttons(&self) -> bool {
        self.button_size.0 > 0 && self.button_size.1 > 0
    }

    /// First button (Start, Exit, Info) containing the point
    pub fn button_at(&self, x: i32, y: i32) -> Option<MenuButton> {
        if !self.has_buttons() {
            return None;
        }
        MenuButton::ALL
            .into_iter()
            .find(|&button| self.bounds(button).contains_point((x, y)))
    }
}

/// Home menu state
///
/// Layout is fixed at construction. The only mutable state is which button (if any) is
/// held down and the cursor shape from the last move.
pub struct HomeMenu {
    layout: MenuLayout,
    pressed: Option<MenuButton>,
    cursor: CursorShape,
    style: HomeMenuStyle,
}

impl HomeMenu {
    /// Creates a menu filling a `width` x `height` panel at the window origin
    #[allow(dead_code)] // The frame always passes its configured style
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_style(width, height, HomeMenuStyle::default())
    }

    pub fn with_style(width: u32, height: u32, style: HomeMenuStyle) -> Self {
        HomeMenu {
            layout: MenuLayout::new(Rect::new(0, 0, width, height)),
            pressed: None,
            cursor: CursorShape::Default,
            style,
        }
    }

    #[cfg(test)]
    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn is_pressed(&self, button: MenuButton) -> bool {
        self.pressed == Some(button)
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Button rectangle grown by one pixel right and down, so the outline is covered
    fn repaint_region(&self, button: MenuButton) -> Rect {
        let bounds = self.layout.bounds(button);
        Rect::new(bounds.x(), bounds.y(), bounds.width() + 1, bounds.height() + 1)
    }

    fn draw_container(&self, canvas: &mut dyn MenuCanvas) -> Result<(), String> {
        let panel = self.layout.panel;
        let (on, off) = self.style.dashes;

        canvas.set_color(self.style.background_color);
        canvas.fill_rect(panel)?;

        canvas.set_color(self.style.dash_border_color);
        canvas.stroke_rect(panel, &Stroke::solid(self.style.border_size))?;

        canvas.set_color(self.style.border_color);
        canvas.stroke_rect(panel, &Stroke::dashed(self.style.border_size, on, off))
    }

    /// Greeting, title and version, centred, starting a quarter of the way down
    fn draw_text(&self, canvas: &mut dyn MenuCanvas) -> Result<(), String> {
        let panel = self.layout.panel;
        let lines = [
            (GREETINGS, self.style.greeting_scale),
            (GAME_TITLE, self.style.title_scale),
            (self.style.credits.as_str(), self.style.credits_scale),
        ];

        canvas.set_color(self.style.text_color);

        // Baseline of each line; the next one sits 10% of its own height lower
        let mut baseline = panel.y() + (panel.height() / 4) as i32;
        for (i, (text, scale)) in lines.into_iter().enumerate() {
            let height = text_height(scale) as i32;
            if i > 0 {
                baseline += height * 11 / 10;
            }
            let x = panel.x() + (panel.width() as i32 - text_width(text, scale) as i32) / 2;
            canvas.draw_text(text, x, baseline - height, scale)?;
        }
        Ok(())
    }

    /// Largest label scale that fits every label inside a button
    fn label_scale(&self) -> u32 {
        let bounds = self.layout.start;
        let by_height = bounds.height().saturating_sub(2) / GLYPH_HEIGHT;
        let by_width = MenuButton::ALL
            .iter()
            .map(|b| bounds.width() / text_width(b.label(), 1))
            .min()
            .unwrap_or(1);
        by_height.min(by_width).max(1)
    }

    fn draw_buttons(&self, canvas: &mut dyn MenuCanvas) -> Result<(), String> {
        if !self.layout.has_buttons() {
            return Ok(());
        }
        let scale = self.label_scale();

        for button in MenuButton::ALL {
            let bounds = self.layout.bounds(button);
            let label = button.label();
            let x = bounds.x() + (bounds.width() as i32 - text_width(label, scale) as i32) / 2;
            let y = bounds.y() + (bounds.height() as i32 - text_height(scale) as i32) / 2;

            let (outline, text) = if self.is_pressed(button) {
                (self.style.clicked_button_color, self.style.clicked_text_color)
            } else {
                (self.style.text_color, self.style.text_color)
            };

            canvas.set_color(outline);
            canvas.draw_rect(bounds)?;
            canvas.set_color(text);
            canvas.draw_text(label, x, y, scale)?;
        }
        Ok(())
    }
}

impl Drawable for HomeMenu {
    fn draw(&self, canvas: &mut dyn MenuCanvas) -> Result<(), String> {
        self.draw_container(canvas)?;
        self.draw_text(canvas)?;
        self.draw_buttons(canvas)
    }
}

impl PointerEventSink for HomeMenu {
    fn on_pointer_pressed(&mut self, x: i32, y: i32) -> Option<Rect> {
        let button = self.layout.button_at(x, y).filter(|b| b.is_clickable())?;
        self.pressed = Some(button);
        Some(self.repaint_region(button))
    }

    // Position is ignored: releasing anywhere clears the highlight
    fn on_pointer_released(&mut self, _x: i32, _y: i32) -> Option<Rect> {
        let button = self.pressed.take()?;
        Some(self.repaint_region(button))
    }

    fn on_pointer_moved(&mut self, x: i32, y: i32) -> CursorShape {
        self.cursor = match self.layout.button_at(x, y) {
            Some(button) if button.is_clickable() => CursorShape::Hand,
            _ => CursorShape::Default,
        };
        self.cursor
    }

    fn on_clicked(&mut self, x: i32, y: i32) -> Option<MenuIntent> {
        let button = self.layout.button_at(x, y)?;
        let intent = button.intent();
        log::debug!("{} clicked at ({}, {})", button.label(), x, y);
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawCall, RecordingCanvas};
    use crate::gui::PointerResponse;
    use crate::input_system::{ClickTracker, InputAction, PointerEvent};

    fn centre(r: Rect) -> (i32, i32) {
        (r.x() + r.width() as i32 / 2, r.y() + r.height() as i32 / 2)
    }

    /// A point inside no button
    const OUTSIDE: (i32, i32) = (5, 5);

    #[test]
    fn test_button_size_is_third_by_twelfth() {
        for (w, h) in [(600, 450), (640, 360), (301, 97), (1000, 12), (3, 12), (2, 450), (600, 11)] {
            let layout = MenuLayout::new(Rect::new(0, 0, w, h));
            assert_eq!(layout.button_size, (w / 3, h / 12), "button size for {}x{}", w, h);
            if layout.has_buttons() {
                for button in MenuButton::ALL {
                    let bounds = layout.bounds(button);
                    assert_eq!(bounds.width(), w / 3, "{:?} width for {}x{}", button, w, h);
                    assert_eq!(bounds.height(), h / 12, "{:?} height for {}x{}", button, w, h);
                }
            }
        }
    }

    #[test]
    fn test_zero_height_buttons_cannot_be_hit() {
        let layout = MenuLayout::new(Rect::new(0, 0, 600, 11));
        assert!(!layout.has_buttons());
        assert_eq!(layout.button_at(layout.start.x(), layout.start.y()), None);

        let mut menu = HomeMenu::new(600, 11);
        let (x, y) = (menu.layout().start.x(), menu.layout().start.y());
        assert_eq!(menu.on_pointer_pressed(x, y), None);
        assert!(!menu.is_pressed(MenuButton::Start));
        assert_eq!(menu.on_clicked(x, y), None);
        assert_eq!(menu.on_pointer_moved(x, y), CursorShape::Default);
    }

    #[test]
    fn test_zero_width_buttons_are_not_drawn() {
        let menu = HomeMenu::new(2, 450);
        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas).unwrap();

        for button in MenuButton::ALL {
            assert_eq!(canvas.text_color(button.label()), None);
            assert_eq!(canvas.outline_color(menu.layout().bounds(button)), None);
        }
    }

    #[test]
    fn test_press_outside_then_release_through_click_tracker_requests_start_once() {
        let mut menu = HomeMenu::new(600, 450);
        let mut tracker = ClickTracker::new();
        let (x, y) = centre(menu.layout().start);

        let mut intents = Vec::new();
        for raw in [
            PointerEvent::Pressed(x, y),
            PointerEvent::Moved(OUTSIDE.0, OUTSIDE.1),
            PointerEvent::Released(OUTSIDE.0, OUTSIDE.1),
        ] {
            for action in tracker.process(InputAction::Pointer(raw)) {
                if let InputAction::Pointer(event) = action {
                    intents.extend(menu.on_pointer_event(event).intent);
                }
            }
        }

        assert_eq!(intents, vec![MenuIntent::StartRequested]);
        assert!(!menu.is_pressed(MenuButton::Start));
    }

    #[test]
    fn test_layout_positions_600x450() {
        let layout = MenuLayout::new(Rect::new(0, 0, 600, 450));

        // 413 * 0.8 = 330.4, 330 * 1.2 = 396, 396 * 0.6 = 237.6
        assert_eq!(layout.start, Rect::new(200, 330, 200, 37));
        assert_eq!(layout.exit, Rect::new(200, 396, 200, 37));
        assert_eq!(layout.info, Rect::new(200, 237, 200, 37));
    }

    #[test]
    fn test_layout_follows_panel_origin() {
        let layout = MenuLayout::new(Rect::new(50, 20, 600, 450));
        assert_eq!(layout.start, Rect::new(250, 350, 200, 37));
        assert_eq!(layout.info.x(), layout.exit.x());
    }

    #[test]
    fn test_hit_test_corners_and_edges() {
        let layout = MenuLayout::new(Rect::new(0, 0, 600, 450));
        let start = layout.start;
        let (left, top) = (start.x(), start.y());
        let (right, bottom) = (start.right() - 1, start.bottom() - 1);
        let (cx, cy) = centre(start);

        for (x, y) in [(left, top), (right, top), (left, bottom), (right, bottom), (cx, cy)] {
            assert_eq!(layout.button_at(x, y), Some(MenuButton::Start), "({}, {})", x, y);
        }
        for (x, y) in [(left - 1, cy), (right + 1, cy), (cx, top - 1), (cx, bottom + 1)] {
            assert_ne!(layout.button_at(x, y), Some(MenuButton::Start), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_press_then_click_requests_start() {
        let mut menu = HomeMenu::new(600, 450);
        let (x, y) = centre(menu.layout().start);

        assert!(menu.on_pointer_pressed(x, y).is_some());
        assert!(menu.is_pressed(MenuButton::Start));

        assert!(menu.on_pointer_released(OUTSIDE.0, OUTSIDE.1).is_some());
        assert_eq!(menu.on_clicked(x, y), Some(MenuIntent::StartRequested));
        assert!(!menu.is_pressed(MenuButton::Start));
    }

    #[test]
    fn test_exit_click_requests_exit() {
        let mut menu = HomeMenu::new(600, 450);
        let (x, y) = centre(menu.layout().exit);

        menu.on_pointer_pressed(x, y);
        assert!(menu.is_pressed(MenuButton::Exit));
        menu.on_pointer_released(x, y);
        assert_eq!(menu.on_clicked(x, y), Some(MenuIntent::ExitRequested));
        assert!(!menu.is_pressed(MenuButton::Exit));
    }

    #[test]
    fn test_release_after_moving_away_clears_press() {
        let mut menu = HomeMenu::new(600, 450);
        let (x, y) = centre(menu.layout().start);

        menu.on_pointer_pressed(x, y);
        assert_eq!(menu.on_pointer_moved(OUTSIDE.0, OUTSIDE.1), CursorShape::Default);
        assert!(menu.is_pressed(MenuButton::Start));

        menu.on_pointer_released(OUTSIDE.0, OUTSIDE.1);
        assert!(!menu.is_pressed(MenuButton::Start));
    }

    #[test]
    fn test_repaint_region_covers_outline() {
        let mut menu = HomeMenu::new(600, 450);
        let (x, y) = centre(menu.layout().start);

        assert_eq!(menu.on_pointer_pressed(x, y), Some(Rect::new(200, 330, 201, 38)));
        assert_eq!(menu.on_pointer_released(x, y), Some(Rect::new(200, 330, 201, 38)));
    }

    #[test]
    fn test_release_without_press_changes_nothing() {
        let mut menu = HomeMenu::new(600, 450);
        assert_eq!(menu.on_pointer_released(OUTSIDE.0, OUTSIDE.1), None);
    }

    #[test]
    fn test_press_outside_buttons_changes_nothing() {
        let mut menu = HomeMenu::new(600, 450);
        assert_eq!(menu.on_pointer_pressed(OUTSIDE.0, OUTSIDE.1), None);
        assert!(MenuButton::ALL.iter().all(|&b| !menu.is_pressed(b)));
    }

    #[test]
    fn test_info_is_inert() {
        let mut menu = HomeMenu::new(600, 450);
        let (x, y) = centre(menu.layout().info);

        assert_eq!(menu.on_pointer_pressed(x, y), None);
        assert!(!menu.is_pressed(MenuButton::Info));
        assert_eq!(menu.on_pointer_released(x, y), None);
        assert_eq!(menu.on_clicked(x, y), None);
        assert_eq!(menu.on_pointer_moved(x, y), CursorShape::Default);
    }

    #[test]
    fn test_click_outside_buttons_has_no_intent() {
        let mut menu = HomeMenu::new(600, 450);
        assert_eq!(menu.on_clicked(OUTSIDE.0, OUTSIDE.1), None);
    }

    #[test]
    fn test_cursor_follows_clickable_buttons() {
        let mut menu = HomeMenu::new(600, 450);
        let (sx, sy) = centre(menu.layout().start);
        let (ex, ey) = centre(menu.layout().exit);

        assert_eq!(menu.on_pointer_moved(sx, sy), CursorShape::Hand);
        assert_eq!(menu.cursor(), CursorShape::Hand);
        assert_eq!(menu.on_pointer_moved(ex, ey), CursorShape::Hand);
        assert_eq!(menu.on_pointer_moved(OUTSIDE.0, OUTSIDE.1), CursorShape::Default);
        assert_eq!(menu.cursor(), CursorShape::Default);
    }

    #[test]
    fn test_pointer_event_routing() {
        let mut menu = HomeMenu::new(600, 450);
        let (x, y) = centre(menu.layout().start);

        let pressed = menu.on_pointer_event(PointerEvent::Pressed(x, y));
        assert!(pressed.redraw.is_some());
        assert_eq!(pressed.intent, None);

        let moved = menu.on_pointer_event(PointerEvent::Moved(x, y));
        assert_eq!(moved, PointerResponse::default());
        assert_eq!(menu.cursor(), CursorShape::Hand);

        menu.on_pointer_event(PointerEvent::Released(x, y));
        let clicked = menu.on_pointer_event(PointerEvent::Clicked(x, y));
        assert_eq!(clicked.intent, Some(MenuIntent::StartRequested));
        assert_eq!(clicked.redraw, None);
    }

    #[test]
    fn test_pressed_button_draws_highlighted() {
        let style = HomeMenuStyle::default();
        let mut menu = HomeMenu::new(600, 450);
        let (x, y) = centre(menu.layout().start);
        menu.on_pointer_pressed(x, y);

        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas).unwrap();

        assert_eq!(canvas.outline_color(menu.layout().start), Some(style.clicked_button_color));
        assert_eq!(canvas.text_color("Start"), Some(style.clicked_text_color));
        assert_eq!(canvas.outline_color(menu.layout().exit), Some(style.text_color));
        assert_eq!(canvas.text_color("Exit"), Some(style.text_color));
    }

    #[test]
    fn test_idle_buttons_draw_default_colours() {
        let style = HomeMenuStyle::default();
        let menu = HomeMenu::new(600, 450);

        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas).unwrap();

        for button in MenuButton::ALL {
            assert_eq!(canvas.outline_color(menu.layout().bounds(button)), Some(style.text_color));
            assert_eq!(canvas.text_color(button.label()), Some(style.text_color));
        }
    }

    #[test]
    fn test_container_draws_fill_then_solid_then_dashed_border() {
        let style = HomeMenuStyle::default();
        let menu = HomeMenu::new(600, 450);
        let panel = menu.layout().panel;

        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas).unwrap();

        assert_eq!(
            canvas.calls[..3],
            [
                DrawCall::Fill { rect: panel, color: style.background_color },
                DrawCall::Stroke {
                    rect: panel,
                    stroke: Stroke::solid(5),
                    color: style.dash_border_color,
                },
                DrawCall::Stroke {
                    rect: panel,
                    stroke: Stroke::dashed(5, 12, 6),
                    color: style.border_color,
                },
            ]
        );
    }

    #[test]
    fn test_title_lines_are_centred_and_stacked() {
        let menu = HomeMenu::new(600, 450);
        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas).unwrap();

        let texts: Vec<(String, i32, i32, u32)> = canvas
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, x, y, scale, .. } => Some((text.clone(), *x, *y, *scale)),
                _ => None,
            })
            .collect();

        assert_eq!(texts[0].0, "Welcome to:");
        assert_eq!(texts[1].0, "Brick Destroy");
        assert!(texts[2].0.starts_with("Version "));

        for (text, x, _, scale) in &texts[..3] {
            let width = text_width(text, *scale) as i32;
            assert!((x + width / 2 - 300).abs() <= 1, "{} not centred", text);
        }

        // Greeting baseline at height / 4, each following line strictly lower
        assert_eq!(texts[0].2 + text_height(texts[0].3) as i32, 450 / 4);
        assert!(texts[0].2 < texts[1].2 && texts[1].2 < texts[2].2);
    }

    #[test]
    fn test_button_labels_fit_inside_buttons() {
        let menu = HomeMenu::new(600, 450);
        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas).unwrap();

        for button in MenuButton::ALL {
            let bounds = menu.layout().bounds(button);
            let (x, y, scale) = canvas
                .calls
                .iter()
                .find_map(|call| match call {
                    DrawCall::Text { text, x, y, scale, .. } if text == button.label() => {
                        Some((*x, *y, *scale))
                    }
                    _ => None,
                })
                .unwrap();

            assert!(x >= bounds.x() && x + text_width(button.label(), scale) as i32 <= bounds.right());
            assert!(y >= bounds.y() && y + text_height(scale) as i32 <= bounds.bottom());
        }
    }
}
