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

//! UI rendering logic for the book table.
//!
//! Draws the titled book list, or a placeholder message while books are
//! loading, after a failed load, or when a search matches nothing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, Wrap},
};

use crate::{components::BookTable, model::catalog::LoadState, render::Render, theme::Theme};

impl Render for BookTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1))
            .title(
                Line::from(format!(" {} ({}) ", self.title, self.books.len()))
                    .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
            );

        if self.books.is_empty() {
            self.draw_placeholder(f, area, block, theme);
        } else {
            self.draw_table(f, area, block, theme);
        }
    }
}

impl BookTable<'_> {
    fn draw_placeholder(&self, f: &mut Frame, area: Rect, block: Block, theme: &Theme) {
        let (message, colour) = match self.load_state {
            Some(LoadState::Loading) => ("Loading books...".to_string(), theme.dimmed_fg),
            Some(LoadState::Failed(message)) => {
                (format!("Could not load books: {}", message), theme.error_fg)
            }
            _ if !self.search_term.trim().is_empty() => {
                (format!("No books match \"{}\"", self.search_term), theme.dimmed_fg)
            }
            _ => ("No books".to_string(), theme.dimmed_fg),
        };

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(colour))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        f.render_widget(paragraph, area);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, block: Block, theme: &Theme) {
        let (title_style, author_style) = if self.dimmed {
            (Style::default().fg(theme.dimmed_fg), Style::default().fg(theme.dimmed_fg))
        } else {
            (Style::default().fg(theme.title_fg), Style::default().fg(theme.author_fg))
        };

        let rows = self.books.iter().map(|book| {
            Row::new(vec![
                Cell::from(Line::from(book.title.as_str()).style(title_style)),
                Cell::from(Line::from(book.author.as_str()).style(author_style)),
            ])
        });

        let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
            .header(
                Row::new(vec![Cell::from("Title"), Cell::from("Author")])
                    .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
                    .bottom_margin(1),
            )
            .row_highlight_style(if self.dimmed {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg)
            })
            .column_spacing(2)
            .block(block);

        // Borders plus the header and its margin.
        *self.page_size = area.height.saturating_sub(4) as usize;

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
