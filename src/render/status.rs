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

//! Render the status line.
//!
//! Shows the load state on the left and the key bindings that apply in the
//! current mode on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, model::catalog::LoadState};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let catalog = &app.catalog;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Min(0)])
        .horizontal_margin(1)
        .split(area);

    let (state, colour) = match catalog.load_state() {
        LoadState::Loading => ("Loading...".to_string(), theme.dimmed_fg),
        LoadState::Loaded => (format!("{} books", catalog.books().len()), theme.dimmed_fg),
        LoadState::Failed(_) => ("Load failed".to_string(), theme.error_fg),
    };

    let hints = if catalog.panel_open() {
        "Esc close"
    } else if app.search_bar.focused() {
        "Enter/Esc done  Ctrl-u clear"
    } else {
        "/ search  j/k move  Enter details  q quit"
    };

    let background = Style::default().bg(theme.status_bg);
    f.render_widget(Paragraph::new("").style(background), area);
    f.render_widget(
        Paragraph::new(state).style(background.fg(colour)),
        container[0],
    );
    f.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .style(background.fg(theme.dimmed_fg)),
        container[1],
    );
}
