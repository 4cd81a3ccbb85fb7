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

//! Background task processing.
//!
//! Network access is kept off the main UI thread. A dedicated worker receives
//! [`AppTask`] requests, performs them and reports the outcome back to the
//! application as an [`AppEvent`], where it is handled in the same sequential
//! loop as user input.

use anyhow::Result;
use log::{error, warn};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{events::AppEvent, repository::BookSource};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchBooks,
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `source` - Where books are retrieved from.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    source: Box<dyn BookSource>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || run_task_worker(source.as_ref(), task_rx, event_tx));
}

/// Processes tasks until the task channel is closed.
fn run_task_worker(source: &dyn BookSource, task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>) {
    while let Ok(task) = task_rx.recv() {
        let ctx = TaskContext {
            source,
            event_tx: &event_tx,
        };

        if let Err(e) = handle_task(task, &ctx) {
            // The only failure is a closed event channel, nobody is listening.
            error!("Task result could not be delivered: {}", e);
            break;
        }
    }
}

struct TaskContext<'a> {
    source: &'a dyn BookSource,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchBooks => fetch_books(ctx),
    }
}

fn fetch_books(ctx: &TaskContext) -> Result<()> {
    let event = match ctx.source.fetch_all() {
        Ok(books) => AppEvent::BooksLoaded(books),
        Err(e) => {
            warn!("Book retrieval failed: {}", e);
            AppEvent::BooksFailed(e.to_string())
        }
    };

    ctx.event_tx.send(event)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
        mpsc,
    };

    use super::*;
    use crate::{model::Book, repository::RepositoryError};

    struct StubSource {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl BookSource for StubSource {
        fn fetch_all(&self) -> Result<Vec<Book>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(RepositoryError::Retrieval("503 Service Unavailable".to_string()))
            } else {
                Ok(vec![Book::new("Dune", "Herbert")])
            }
        }
    }

    fn run_fetch(fail: bool) -> (Vec<AppEvent>, usize) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = StubSource {
            calls: Arc::clone(&calls),
            fail,
        };
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        task_tx.send(AppTask::FetchBooks).unwrap();
        drop(task_tx);
        run_task_worker(&source, task_rx, event_tx);

        (event_rx.try_iter().collect(), calls.load(Ordering::SeqCst))
    }

    #[test]
    fn fetch_reports_loaded_books() {
        let (events, calls) = run_fetch(false);

        assert_eq!(calls, 1);
        assert_eq!(events.len(), 1);
        match &events[0] {
            AppEvent::BooksLoaded(books) => assert_eq!(books[0].title, "Dune"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn fetch_failure_becomes_an_event() {
        let (events, calls) = run_fetch(true);

        assert_eq!(calls, 1);
        match &events[..] {
            [AppEvent::BooksFailed(message)] => assert!(message.contains("503")),
            other => panic!("unexpected events {:?}", other),
        }
    }

    #[test]
    fn worker_stops_when_events_are_no_longer_received() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = StubSource {
            calls: Arc::clone(&calls),
            fail: false,
        };
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        drop(event_rx);

        task_tx.send(AppTask::FetchBooks).unwrap();
        task_tx.send(AppTask::FetchBooks).unwrap();
        run_task_worker(&source, task_rx, event_tx);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
