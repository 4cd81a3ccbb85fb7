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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) panel_bg: Color,
    pub(crate) status_bg: Color,

    pub(crate) title_fg: Color,
    pub(crate) author_fg: Color,
    pub(crate) search_fg: Color,
    pub(crate) dimmed_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(28, 32, 40),
            accent_colour: Color::Rgb(240, 165, 80),
            border_colour: Color::Rgb(96, 102, 112),
            panel_bg: Color::Rgb(38, 44, 54),
            status_bg: Color::Rgb(44, 50, 62),

            title_fg: Color::Rgb(245, 245, 240),
            author_fg: Color::Rgb(160, 190, 220),
            search_fg: Color::Rgb(255, 255, 255),
            dimmed_fg: Color::Rgb(128, 132, 140),
            error_fg: Color::Rgb(230, 100, 90),

            highlight_bg: Color::Rgb(70, 90, 140),
            highlight_fg: Color::Rgb(255, 255, 255),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, or `None` if it is not an `Rgb` colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
