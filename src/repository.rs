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

//! Remote book retrieval.
//!
//! The catalog lives behind a single read-only HTTP endpoint that returns a
//! JSON array of book records. [`HttpBookRepository`] fetches and decodes it in
//! one call. Nothing is cached, the caller keeps the result.
//!
//! The body is read as raw bytes, up to [`MAX_BODY_BYTES`]. Bytes that are not
//! valid JSON text, including invalid UTF-8, are a parse failure rather than a
//! retrieval failure.

use std::time::Duration;

use log::{debug, info};
use thiserror::Error;
use ureq::Agent;

use crate::{config::AppConfig, model::Book};

/// Upper bound on the catalog response size, the whole collection arrives in
/// one response.
pub(crate) const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Debug, Error)]
pub(crate) enum RepositoryError {
    /// The request failed in transport or the server answered with a
    /// non-success status.
    #[error("failed to retrieve books: {0}")]
    Retrieval(String),

    /// The response body was not an array of book records.
    #[error("malformed book data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ureq::Error> for RepositoryError {
    fn from(err: ureq::Error) -> Self {
        RepositoryError::Retrieval(err.to_string())
    }
}

/// A source of the complete book collection.
pub(crate) trait BookSource: Send {
    fn fetch_all(&self) -> Result<Vec<Book>, RepositoryError>;
}

pub(crate) struct HttpBookRepository {
    agent: Agent,
    endpoint: String,
}

impl HttpBookRepository {
    pub(crate) fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self::new(config.endpoint.clone(), Duration::from_secs(config.timeout_secs))
    }
}

impl BookSource for HttpBookRepository {
    fn fetch_all(&self) -> Result<Vec<Book>, RepositoryError> {
        info!("Fetching books from {}", self.endpoint);

        let mut response = self.agent.get(self.endpoint.as_str()).call()?;
        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()?;
        debug!("Received {} bytes", body.len());

        let books = parse_books(&body)?;
        info!("Retrieved {} books", books.len());

        Ok(books)
    }
}

/// Decodes a JSON array of book records.
pub(crate) fn parse_books(body: &[u8]) -> Result<Vec<Book>, RepositoryError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        thread,
    };

    use super::*;

    /// Serves a single canned HTTP response on a local port.
    fn serve_once(status: &str, body: impl AsRef<[u8]>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let body = body.as_ref();
        let mut response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);

        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                let mut reader = BufReader::new(stream);
                let mut line = String::new();
                while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                    if line == "\r\n" {
                        break;
                    }
                    line.clear();
                }
                let mut stream = reader.into_inner();
                stream.write_all(&response).ok();
            }
        });

        format!("http://{}/books", address)
    }

    #[test]
    fn parses_an_array_of_books() {
        let body = r#"[
            {"id": 1, "title": "Dune", "author": "Frank Herbert", "published": 1965},
            {"id": 2, "title": "Emma", "author": "Jane Austen"}
        ]"#;

        let books = parse_books(body.as_bytes()).unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[1].author, "Jane Austen");
        assert_eq!(books[0].extra.get("published"), Some(&serde_json::json!(1965)));
    }

    #[test]
    fn empty_array_is_an_empty_collection() {
        assert!(parse_books(b"[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_payload_is_a_parse_error() {
        let result = parse_books(br#"{"title": "Dune", "author": "Herbert"}"#);
        assert!(matches!(result, Err(RepositoryError::Parse(_))));

        let result = parse_books(b"<html>Application Error</html>");
        assert!(matches!(result, Err(RepositoryError::Parse(_))));
    }

    #[test]
    fn record_missing_title_is_a_parse_error() {
        let result = parse_books(br#"[{"id": 1, "author": "Herbert"}]"#);
        assert!(matches!(result, Err(RepositoryError::Parse(_))));
    }

    #[test]
    fn fetches_books_over_http() {
        let url = serve_once("200 OK", r#"[{"id": 1, "title": "Dune", "author": "Herbert"}]"#);
        let repository = HttpBookRepository::new(url, Duration::from_secs(5));

        let books = repository.fetch_all().unwrap();

        assert_eq!(books, vec![Book {
            id: Some(serde_json::json!(1)),
            ..Book::new("Dune", "Herbert")
        }]);
    }

    #[test]
    fn unusual_identifiers_do_not_reject_the_catalog() {
        let body = br#"[
            {"id": 1.5, "title": "Dune", "author": "Herbert"},
            {"id": {"isbn": "x"}, "title": "Emma", "author": "Austen"},
            {"id": 18446744073709551615, "title": "Beloved", "author": "Morrison"}
        ]"#;

        let books = parse_books(body).unwrap();

        assert_eq!(books.len(), 3);
        assert_eq!(books[0].display_id(), Some("1.5".to_string()));
        assert_eq!(books[1].id, Some(serde_json::json!({"isbn": "x"})));
        assert_eq!(books[2].display_id(), Some("18446744073709551615".to_string()));
    }

    #[test]
    fn invalid_utf8_over_http_is_a_parse_error() {
        let url = serve_once("200 OK", b"[\xff\xfe]");
        let repository = HttpBookRepository::new(url, Duration::from_secs(5));

        let result = repository.fetch_all();

        assert!(matches!(result, Err(RepositoryError::Parse(_))));
    }

    #[test]
    fn catalog_above_ten_megabytes_is_read_in_full() {
        let title = "x".repeat(11 * 1024 * 1024);
        let url = serve_once(
            "200 OK",
            format!(r#"[{{"title": "{}", "author": "Austen"}}]"#, title),
        );
        let repository = HttpBookRepository::new(url, Duration::from_secs(30));

        let books = repository.fetch_all().unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title.len(), title.len());
    }

    #[test]
    fn error_status_is_a_retrieval_error() {
        let url = serve_once("503 Service Unavailable", "[]");
        let repository = HttpBookRepository::new(url, Duration::from_secs(5));

        let result = repository.fetch_all();

        assert!(matches!(result, Err(RepositoryError::Retrieval(_))));
    }

    #[test]
    fn malformed_body_over_http_is_a_parse_error() {
        let url = serve_once("200 OK", r#"{"books": []}"#);
        let repository = HttpBookRepository::new(url, Duration::from_secs(5));

        let result = repository.fetch_all();

        assert!(matches!(result, Err(RepositoryError::Parse(_))));
    }

    #[test]
    fn unreachable_endpoint_is_a_retrieval_error() {
        let address = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let repository =
            HttpBookRepository::new(format!("http://{}/books", address), Duration::from_secs(5));

        let result = repository.fetch_all();

        assert!(matches!(result, Err(RepositoryError::Retrieval(_))));
    }
}
