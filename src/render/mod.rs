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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event, so the screen always reflects the latest state.

mod status;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{App, components::DetailPanel, render::status::draw_status, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the search bar, the book table and a one line
/// status bar. When the detail panel is visible, or still animating closed,
/// it is drawn over the table.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    app.search_bar.draw(f, outer[0], &app.theme);

    let catalog = &app.catalog;
    app.book_table
        .as_widget(catalog.filtered())
        .title(catalog.title())
        .load_state(catalog.load_state())
        .search_term(catalog.search_term())
        .dimmed(catalog.panel_open())
        .draw(f, outer[1], &app.theme);

    if app.panel_transition.is_visible() {
        if let (Some(book), _) = catalog.selected() {
            let progress = app.panel_transition.progress(Instant::now());
            DetailPanel::new(&book, progress).draw(f, outer[1], &app.theme);
        }
    }

    draw_status(f, outer[2], app);
}
