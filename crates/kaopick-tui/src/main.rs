//! kaopick — a terminal kaomoji picker built with ratatui.
//!
//! This binary loads the catalog and locales, runs the picker event loop,
//! and restores the terminal on exit or panic.

mod app;
mod input;
mod render;
mod setup;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kaopick_core::{Catalog, CommandClipboard, CommandNotifier, Config, Exporter, Locales};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::input::{handle_key, InputAction};
use crate::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableFocusChange, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs to a file in the temp directory so output never lands on the picker.
fn init_tracing() {
    let path = std::env::temp_dir().join("kaopick.log");
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .init(),
        Err(e) => eprintln!("kaopick: logging disabled, cannot open {}: {e}", path.display()),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cfg_dir = setup::config_dir();
    let config = setup::load_config(&cfg_dir);

    let locales = Locales::load(
        &setup::locale_dir(&config, &cfg_dir),
        &config.general.language,
        &config.general.default_language,
    );

    let arg = std::env::args_os().nth(1).map(PathBuf::from);
    let catalog_path = setup::catalog_path(arg, &config, &cfg_dir);
    setup::ensure_catalog(&catalog_path)?;
    let catalog = match Catalog::load(&catalog_path) {
        Ok(catalog) => catalog.localized(&locales),
        Err(e) => {
            tracing::error!(path = %catalog_path.display(), error = %e, "cannot load catalog");
            eprintln!("Error: {}: {e}", catalog_path.display());
            std::process::exit(1);
        }
    };

    let exporter = Exporter::from_config(&config.commands, config.behavior.show_notifications);

    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, App::new(&catalog, &locales, &config), &exporter);

    restore_terminal(&mut terminal)?;

    match result {
        Ok(Some(text)) => tracing::info!(text = %text, "picker closed after copy"),
        Ok(None) => tracing::info!("picker closed"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Runs the event loop until the user quits. Returns the last copied text.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<'_>,
    exporter: &Exporter<CommandClipboard, CommandNotifier>,
) -> anyhow::Result<Option<String>> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        app = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handle_key(key, app.mode()) {
                    InputAction::Command(cmd) => app.with_clear_status().handle_command(cmd),
                    InputAction::QueryChar(c) => app.with_clear_status().query_push_char(c),
                    InputAction::QueryBackspace => app.with_clear_status().query_pop_char(),
                    InputAction::QueryClear => app.with_clear_status().query_clear(),
                    InputAction::Copy => app.copy_selected(exporter),
                    InputAction::Escape => app.with_clear_status().escape(),
                    InputAction::Quit => app.quit(),
                    InputAction::DismissNotice => app.dismiss_notice(),
                    InputAction::None => app,
                }
            }
            Event::FocusLost => app.focus_lost(),
            _ => app,
        };

        if app.should_quit() {
            return Ok(app.copied().map(str::to_string));
        }
    }
}
