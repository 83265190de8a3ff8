// Bookstore
// Copyright 2026 The Bookstore Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Entry point to the REST server.

use crate::db::BooksTx;
use crate::driver::Driver;
use crate::model::{Book, BookFields, BookId};
use axum::{Json, Router};
use axum::extract::rejection::JsonRejection;
use bookstore_core::db::Db;
use bookstore_core::model::{ModelError, ModelResult};
use bookstore_core::rest::{RestError, RestResult};
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

mod book_delete;
mod book_get;
mod book_put;
mod books_get;
mod books_post;
mod index_get;
mod script_get;
#[cfg(test)]
mod testutils;

/// Type of the payload extractor for APIs that receive the fields of a book.
///
/// The rejection is kept instead of being propagated so that handlers decide when a malformed
/// payload is reported.
pub(crate) type BookPayload = Result<Json<Map<String, Value>>, JsonRejection>;

/// Response for APIs that return a book alongside a human-readable message.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct BookResponse {
    /// Description of the outcome of the operation.
    pub(crate) message: String,

    /// The book affected by the operation.
    pub(crate) book: Book,
}

/// Response for APIs that only return a human-readable message.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct MessageResponse {
    /// Description of the outcome of the operation.
    pub(crate) message: String,
}

/// Parses the book identifier `raw` given in a request path.
///
/// Identifiers that cannot possibly exist are reported as missing books.
fn parse_book_id(raw: &str) -> RestResult<BookId> {
    BookId::parse(raw).map_err(|e| {
        debug!("{}", e);
        RestError::NotFound("Book not found".to_owned())
    })
}

/// Extracts the fields of a book from a request `payload`.
fn decode_fields(payload: BookPayload) -> ModelResult<BookFields> {
    match payload {
        Ok(Json(object)) => Ok(BookFields::from(object)),
        Err(e) => {
            debug!("Rejected book payload: {}", e.body_text());
            Err(ModelError("Request must be JSON".to_owned()))
        }
    }
}

/// Creates the router for the application.
pub(crate) fn app<D>(driver: Driver<D>) -> Router
where
    D: Db + Send + Sync + 'static,
    D::Tx: BooksTx + Send + 'static,
{
    use axum::routing::get;
    Router::new()
        .route("/", get(index_get::handler))
        .route("/static/main.js", get(script_get::handler))
        .route("/books", get(books_get::handler).post(books_post::handler))
        .route(
            "/books/:id",
            get(book_get::handler).put(book_put::handler).delete(book_delete::handler),
        )
        .with_state(driver)
}
