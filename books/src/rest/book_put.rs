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

//! API to update an existing book.

use crate::db::BooksTx;
use crate::driver::Driver;
use crate::rest::{BookPayload, BookResponse, decode_fields, parse_book_id};
use axum::Json;
use axum::extract::{Path, State};
use bookstore_core::db::Db;
use bookstore_core::rest::RestResult;

/// API handler.
pub(crate) async fn handler<D>(
    State(driver): State<Driver<D>>,
    Path(id): Path<String>,
    payload: BookPayload,
) -> RestResult<Json<BookResponse>>
where
    D: Db + Send + Sync + 'static,
    D::Tx: BooksTx + Send + 'static,
{
    let id = parse_book_id(&id)?;
    let book = driver.update_book(id, decode_fields(payload)).await?;
    Ok(Json(BookResponse { message: "Book updated".to_owned(), book }))
}
