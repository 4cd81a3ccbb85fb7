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

//! Application event distribution and orchestration.
//!
//! Every state change in the application arrives here as an [`AppEvent`]:
//! keyboard input, the result of the startup retrieval, and the higher level
//! events that key handling produces (search changed, book picked, panel
//! closed). Events are handled strictly one at a time on the main thread and
//! the UI is re-drawn after each one.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::Book, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    BooksLoaded(Vec<Book>),
    BooksFailed(String),

    SearchChanged(String),

    /// Index into the currently filtered books.
    PickBook(usize),
    ClosePanel,

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !handle_event(app, event)? {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns `false` once the application should exit.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<bool> {
    match event {
        AppEvent::ExitApplication => return Ok(false),

        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::BooksLoaded(books) => handle_books_loaded(app, books),
        AppEvent::BooksFailed(message) => handle_books_failed(app, message),
        AppEvent::SearchChanged(term) => handle_search_changed(app, term),
        AppEvent::PickBook(index) => handle_pick_book(app, index),
        AppEvent::ClosePanel => handle_close_panel(app),
        AppEvent::Tick => handle_tick(app),
    }

    Ok(true)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{sync::mpsc, time::Duration};

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{
        config::AppConfig,
        model::{
            catalog::{ALL_BOOKS_TITLE, LoadState, SEARCH_RESULTS_TITLE},
            transition::{PanelTransition, TransitionPhase},
        },
        tasks::AppTask,
    };

    pub(crate) fn test_app() -> (App, mpsc::Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);
        app.panel_transition = PanelTransition::new(Duration::ZERO);
        (app, task_rx)
    }

    pub(crate) fn loaded_app() -> App {
        let (mut app, _) = test_app();
        handle_event(
            &mut app,
            AppEvent::BooksLoaded(vec![Book::new("Dune", "Herbert"), Book::new("Emma", "Austen")]),
        )
        .unwrap();
        app
    }

    /// Feeds a key through the event loop, including any events it causes.
    /// Returns `false` if the application asked to exit.
    pub(crate) fn press(app: &mut App, code: KeyCode) -> bool {
        let mut running = handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
        while let Ok(event) = app.event_rx.try_recv() {
            running &= handle_event(app, event).unwrap();
        }
        running
    }

    pub(crate) fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn titles(app: &App) -> Vec<String> {
        app.catalog.filtered().iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn startup_requests_books_exactly_once() {
        let (app, task_rx) = test_app();

        app.request_books().unwrap();

        let tasks: Vec<AppTask> = task_rx.try_iter().collect();
        assert_eq!(tasks.len(), 1);
        assert!(matches!(tasks[0], AppTask::FetchBooks));
    }

    #[test]
    fn loaded_books_fill_the_table() {
        let app = loaded_app();

        assert_eq!(titles(&app), vec!["Dune", "Emma"]);
        assert_eq!(app.catalog.title(), ALL_BOOKS_TITLE);
        assert_eq!(app.book_table.selected(), Some(0));
    }

    #[test]
    fn failed_retrieval_is_recorded_not_raised() {
        let (mut app, _) = test_app();

        let running = handle_event(&mut app, AppEvent::BooksFailed("timed out".to_string())).unwrap();

        assert!(running);
        assert_eq!(app.catalog.load_state(), &LoadState::Failed("timed out".to_string()));
        assert!(app.catalog.filtered().is_empty());
    }

    #[test]
    fn typing_in_the_search_bar_filters_incrementally() {
        let mut app = loaded_app();

        press(&mut app, KeyCode::Char('/'));
        assert!(app.search_bar.focused());

        type_text(&mut app, "e");
        assert_eq!(titles(&app), vec!["Dune", "Emma"]);
        assert_eq!(app.catalog.title(), ALL_BOOKS_TITLE);

        type_text(&mut app, "m");
        assert_eq!(titles(&app), vec!["Emma"]);
        assert_eq!(app.catalog.title(), SEARCH_RESULTS_TITLE);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(titles(&app), vec!["Dune", "Emma"]);
    }

    #[test]
    fn quit_key_is_text_while_searching() {
        let mut app = loaded_app();

        press(&mut app, KeyCode::Char('/'));
        assert!(press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.catalog.search_term(), "q");

        press(&mut app, KeyCode::Esc);
        assert!(!app.search_bar.focused());
        assert_eq!(app.catalog.search_term(), "q");
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn clearing_the_search_restores_all_books() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        assert!(titles(&app).is_empty());
        assert_eq!(app.book_table.selected(), None);

        handle_event(
            &mut app,
            AppEvent::Key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        while let Ok(event) = app.event_rx.try_recv() {
            handle_event(&mut app, event).unwrap();
        }

        assert_eq!(app.catalog.search_term(), "");
        assert_eq!(titles(&app), vec!["Dune", "Emma"]);
        assert_eq!(app.book_table.selected(), Some(0));
    }

    #[test]
    fn enter_picks_highlighted_book_and_escape_closes() {
        let mut app = loaded_app();

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        let (book, open) = app.catalog.selected();
        assert_eq!(book.unwrap().title, "Emma");
        assert!(open);

        press(&mut app, KeyCode::Esc);
        let (book, open) = app.catalog.selected();
        assert_eq!(book.unwrap().title, "Emma");
        assert!(!open);
    }

    #[test]
    fn open_panel_captures_navigation_and_quit() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.book_table.selected(), Some(0));

        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(!app.catalog.panel_open());
        assert_eq!(app.book_table.selected(), Some(0));
    }

    #[test]
    fn ticks_drive_the_panel_transition() {
        let mut app = loaded_app();
        assert_eq!(app.panel_transition.phase(), TransitionPhase::Closed);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.panel_transition.phase(), TransitionPhase::Opening);

        handle_event(&mut app, AppEvent::Tick).unwrap();
        assert_eq!(app.panel_transition.phase(), TransitionPhase::Open);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.panel_transition.phase(), TransitionPhase::Closing);
        assert!(app.panel_transition.is_visible());

        handle_event(&mut app, AppEvent::Tick).unwrap();
        assert_eq!(app.panel_transition.phase(), TransitionPhase::Closed);
    }

    #[test]
    fn enter_on_empty_results_does_nothing() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.catalog.selected(), (None, false));
    }

    #[test]
    fn exit_event_stops_the_loop() {
        let mut app = loaded_app();
        assert!(!handle_event(&mut app, AppEvent::ExitApplication).unwrap());
    }
}
