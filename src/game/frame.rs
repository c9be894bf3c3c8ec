// GameFrame
//
// Owns whichever screen is showing and acts on the home menu's intents. It is the only
// place that switches screens or stops the game.

use crate::canvas::MenuCanvas;
use crate::config::GameConfig;
use crate::gui::home_menu::HomeMenuStyle;
use crate::gui::{CursorShape, Drawable, GameBoard, HomeMenu, MenuOwner, PointerEventSink};
use crate::input_system::{InputAction, PointerEvent};

/// The screen currently shown in the window
///
/// A screen is dropped when the frame switches away from it, so returning to the menu
/// always starts from a fresh, unpressed state.
pub enum Screen {
    HomeMenu(HomeMenu),
    GameBoard(GameBoard),
}

pub struct GameFrame {
    screen: Screen,
    width: u32,
    height: u32,
    menu_style: HomeMenuStyle,
    needs_redraw: bool,
    running: bool,
}

impl GameFrame {
    /// Creates the frame showing the home menu, sized to the configured window
    pub fn new(config: &GameConfig) -> Self {
        let (width, height) = (config.window.width, config.window.height);
        let menu_style = HomeMenuStyle::from(&config.menu);

        GameFrame {
            screen: Screen::HomeMenu(HomeMenu::with_style(width, height, menu_style.clone())),
            width,
            height,
            menu_style,
            needs_redraw: true,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Cursor the window should show
    pub fn cursor(&self) -> CursorShape {
        match &self.screen {
            Screen::HomeMenu(menu) => menu.cursor(),
            Screen::GameBoard(_) => CursorShape::Default,
        }
    }

    /// Returns whether a repaint is pending, clearing the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Pointer(event) => self.handle_pointer(event),
            InputAction::Back => {
                if matches!(self.screen, Screen::GameBoard(_)) {
                    self.show_home_menu();
                }
            }
            InputAction::Quit => {
                log::info!("Window closed");
                self.running = false;
            }
            InputAction::Redraw => self.needs_redraw = true,
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        let Screen::HomeMenu(menu) = &mut self.screen else {
            return;
        };

        let response = menu.on_pointer_event(event);
        if response.redraw.is_some() {
            self.needs_redraw = true;
        }
        if let Some(intent) = response.intent {
            self.handle_intent(intent);
        }
    }

    fn show_home_menu(&mut self) {
        log::info!("Returning to home menu");
        self.screen = Screen::HomeMenu(HomeMenu::with_style(
            self.width,
            self.height,
            self.menu_style.clone(),
        ));
        self.needs_redraw = true;
    }

    pub fn render(&self, canvas: &mut dyn MenuCanvas) -> Result<(), String> {
        match &self.screen {
            Screen::HomeMenu(menu) => menu.draw(canvas),
            Screen::GameBoard(board) => board.draw(canvas),
        }
    }
}

impl MenuOwner for GameFrame {
    fn on_start_requested(&mut self) {
        log::info!("Starting game board");
        self.screen = Screen::GameBoard(GameBoard::new(self.width, self.height));
        self.needs_redraw = true;
    }

    fn on_exit_requested(&mut self) {
        log::info!("Goodbye {}", user_name());
        self.running = false;
    }
}

/// OS login name for the goodbye line; "player" when neither variable is set
fn user_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "player".to_string())
}
