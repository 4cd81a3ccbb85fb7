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

use std::time::Instant;

use log::{error, info};

use crate::{App, model::Book};

pub(super) fn handle_books_loaded(app: &mut App, books: Vec<Book>) {
    info!("Loaded {} books", books.len());
    app.catalog.set_books(books);
    app.book_table.reset_selection(app.catalog.filtered().len());
}

pub(super) fn handle_books_failed(app: &mut App, message: String) {
    error!("Books could not be loaded: {}", message);
    app.catalog.set_load_failed(message);
    app.book_table.reset_selection(0);
}

pub(super) fn handle_search_changed(app: &mut App, term: String) {
    app.catalog.set_search_term(term);
    app.book_table.reset_selection(app.catalog.filtered().len());
}

pub(super) fn handle_pick_book(app: &mut App, index: usize) {
    if app.catalog.pick_filtered(index) {
        update_panel_transition(app);
    }
}

pub(super) fn handle_close_panel(app: &mut App) {
    app.catalog.close_panel();
    update_panel_transition(app);
}

pub(super) fn handle_tick(app: &mut App) {
    update_panel_transition(app);
}

fn update_panel_transition(app: &mut App) {
    app.panel_transition
        .update(app.catalog.panel_open(), Instant::now());
}
