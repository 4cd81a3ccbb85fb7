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

//! Render the search input line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchBar, render::Render, theme::Theme};

const PROMPT: &str = "Search: ";

impl Render for SearchBar {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1))
            .title(Line::from(" Books ").style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)));

        let inner = block.inner(area);
        let prompt_width = PROMPT.len() as u16;
        let text_width = inner.width.saturating_sub(prompt_width);
        let scroll = self.input.visual_scroll(text_width as usize);

        let line = if self.input.value().is_empty() && !self.focused {
            Line::from(vec![
                Span::styled(PROMPT, Style::default().fg(theme.dimmed_fg)),
                Span::styled("press / to search", Style::default().fg(theme.dimmed_fg)),
            ])
        } else {
            let visible: String = self.input.value().chars().skip(scroll).collect();
            Line::from(vec![
                Span::styled(PROMPT, Style::default().fg(theme.dimmed_fg)),
                Span::styled(visible, Style::default().fg(theme.search_fg)),
            ])
        };

        f.render_widget(Paragraph::new(line).block(block), area);

        if self.focused {
            let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + prompt_width + cursor, inner.y));
        }
    }
}
