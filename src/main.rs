// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Book Catalog TUI.
//!
//! A terminal browser for a remote book catalog.
//!
//! The catalog is fetched once at startup from a JSON endpoint, listed in a
//! table, narrowed with a free-text search over title and author, and any book
//! can be opened in a detail panel.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns all application state, handles events one at a
//!   time and redraws the UI after each of them.
//! * A **Task Worker** performs the one network request off the main thread
//!   and posts its outcome back as an event.
//! * **Input** and **Tick** threads feed keyboard events and animation ticks
//!   into the same event channel.
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even when the event loop fails.

mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod repository;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    components::{BookTableState, SearchBar},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{
        catalog::Catalog,
        transition::{PANEL_TRANSITION, PanelTransition},
    },
    repository::HttpBookRepository,
    tasks::AppTask,
    theme::Theme,
};

/// Interval between ticks, fast enough for a smooth panel transition.
const TICK_RATE: Duration = Duration::from_millis(40);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub catalog: Catalog,

    pub search_bar: SearchBar,
    pub book_table: BookTableState,
    pub panel_transition: PanelTransition,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            catalog: Catalog::new(),
            search_bar: SearchBar::new(),
            book_table: BookTableState::new(),
            panel_transition: PanelTransition::new(PANEL_TRANSITION),
        }
    }

    /// Asks the task worker to retrieve the catalog. Called once at startup.
    pub fn request_books(&self) -> Result<()> {
        self.task_tx
            .send(AppTask::FetchBooks)
            .context("Failed to request books")
    }
}

/// The entry point of the application.
///
/// Loads configuration, starts logging, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let loaded = config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let log_path = config.log_path();
    if let Err(e) = logging::init_logging(&log_path) {
        eprintln!("Logging disabled, cannot write {}: {}", log_path.display(), e);
    }
    if let Err(e) = &loaded {
        warn!("Using default configuration: {}", e);
    }
    info!("Starting with catalog endpoint {}", config.endpoint);

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort and
/// does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns:
/// * A task worker that retrieves the book catalog.
/// * An input thread to poll for terminal events.
/// * A tick thread that drives the detail panel transition.
///
/// It then requests the catalog and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    let repository = HttpBookRepository::from_config(&app.config);
    tasks::spawn_task_worker(Box::new(repository), task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw terminal events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Tick,
                Ok(_) => continue,
                Err(e) => {
                    warn!("Terminal input failed: {}", e);
                    break;
                }
            };
            if tx_keys.send(event).is_err() {
                break;
            }
        }
    });

    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    app.request_books()?;

    process_events(terminal, app)
}
