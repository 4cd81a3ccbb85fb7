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

//! UI rendering logic for the detail panel.
//!
//! Lists the selected book's title, author, identifier and passthrough fields
//! in a panel cleared over the right side of the book table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{components::DetailPanel, render::Render, theme::Theme};

const MIN_PANEL_WIDTH: u16 = 30;

impl Render for DetailPanel<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let panel = self.panel_area(area);
        if panel.width < 2 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::new(2, 2, 1, 1))
            .title(Line::from(" Details ").style(Style::default().fg(theme.accent_colour)))
            .title_bottom(Line::from(" Esc close ").style(Style::default().fg(theme.dimmed_fg)));

        let paragraph = Paragraph::new(self.lines(theme))
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(theme.panel_bg))
            .block(block);

        f.render_widget(Clear, panel);
        f.render_widget(paragraph, panel);
    }
}

impl DetailPanel<'_> {
    fn panel_area(&self, area: Rect) -> Rect {
        let full = (area.width / 2).max(MIN_PANEL_WIDTH).min(area.width);
        let width = (f64::from(full) * self.progress).round() as u16;

        let [_, panel] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(width)])
            .areas(area);

        panel
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'_>> {
        let label = Style::default().fg(theme.dimmed_fg);

        let mut lines = vec![
            Line::from(Span::styled(
                self.book.title.as_str(),
                Style::default().fg(theme.title_fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.book.author.as_str(), Style::default().fg(theme.author_fg))),
            Line::default(),
        ];

        if let Some(id) = self.book.display_id() {
            lines.push(Line::from(vec![
                Span::styled("id: ", label),
                Span::raw(id),
            ]));
        }

        for (key, value) in self.book.extra_fields() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", key), label),
                Span::raw(value),
            ]));
        }

        lines
    }
}
