mod app;
mod event;
mod input;
mod sim;
mod ui;

use std::io;

use crossterm::{
    event::{
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use event::{Event, EventHandler};

// ~60 simulation ticks per second.
const TICK_RATE_MS: u64 = 16;

fn main() -> io::Result<()> {
    env_logger::init();
    info!(
        "starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Key release events need the kitty protocol; without it held keys
    // still work through the hold-timeout fallback.
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app and event handler
    let mut app = App::new();
    let event_handler = EventHandler::new(TICK_RATE_MS);

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("quit with final score {}", app.sim.score);
    Ok(())
}
