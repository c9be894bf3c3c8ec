use sdl2::mouse::{Cursor, SystemCursor};

mod canvas;
mod config;
mod game;
mod gui;
mod input_system;
mod logger;
mod text;

use config::GameConfig;
use game::GameFrame;
use gui::CursorShape;
use input_system::ClickTracker;

/// How long to block waiting for input before checking the frame again
const EVENT_WAIT_MS: u32 = 250;

/// Reads `--config <path>` from the command line, falling back to the search paths
fn load_config() -> Result<GameConfig, String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| "--config needs a file path".to_string())?;
            log::info!("Loading config from {}", path);
            return Ok(GameConfig::load_from_file(&path)?);
        }
        log::warn!("Ignoring unknown argument '{}'", arg);
    }
    Ok(GameConfig::load_or_default())
}

fn main() -> Result<(), String> {
    logger::init();
    let config = load_config()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    // Cursors must outlive their use, so both are created up front
    let hand_cursor = Cursor::from_system(SystemCursor::Hand)?;
    let arrow_cursor = Cursor::from_system(SystemCursor::Arrow)?;
    let mut shown_cursor = CursorShape::Default;
    arrow_cursor.set();

    let mut frame = GameFrame::new(&config);
    let mut clicks = ClickTracker::new();

    log::info!(
        "Window {}x{} ready",
        config.window.width,
        config.window.height
    );

    while frame.is_running() {
        if frame.take_redraw() {
            frame.render(&mut canvas)?;
            canvas.present();
        }

        // Block until something happens, then drain whatever else is queued
        let Some(first) = event_pump.wait_event_timeout(EVENT_WAIT_MS) else {
            continue;
        };
        let pending: Vec<_> = std::iter::once(first).chain(event_pump.poll_iter()).collect();

        for event in &pending {
            for action in clicks.translate(event) {
                frame.handle_action(action);
            }
            if !frame.is_running() {
                break;
            }
        }

        let cursor = frame.cursor();
        if cursor != shown_cursor {
            match cursor {
                CursorShape::Hand => hand_cursor.set(),
                CursorShape::Default => arrow_cursor.set(),
            }
            shown_cursor = cursor;
        }
    }

    Ok(())
}
