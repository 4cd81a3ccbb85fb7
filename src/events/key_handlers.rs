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

//! Keyboard routing.
//!
//! Keys go to the first interested party: the detail panel while it is open,
//! then the search bar while it has focus, then the book table, and finally
//! the global bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{App, components::BookTableAction, events::AppEvent};

/// Maps keyboard input to application events.
///
/// # Errors
///
/// Returns an error if an event cannot be posted back to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.catalog.panel_open() {
        return process_panel_key_event(app, key);
    }

    let event = Event::Key(key);

    if app.search_bar.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    let action = app
        .book_table
        .as_widget(app.catalog.filtered())
        .process_event(&event);
    if let Some(BookTableAction::Pick(index)) = action {
        app.event_tx.send(AppEvent::PickBook(index))?;
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_panel_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ClosePanel)?;
        }

        _ => {}
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        _ => {}
    }

    Ok(())
}
