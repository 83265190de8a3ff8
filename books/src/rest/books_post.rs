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

//! API to add a new book.

use crate::db::BooksTx;
use crate::driver::Driver;
use crate::rest::{BookPayload, BookResponse, decode_fields};
use axum::extract::State;
use axum::{Json, http};
use bookstore_core::db::Db;
use bookstore_core::rest::RestResult;

/// API handler.
pub(crate) async fn handler<D>(
    State(driver): State<Driver<D>>,
    payload: BookPayload,
) -> RestResult<(http::StatusCode, Json<BookResponse>)>
where
    D: Db + Send + Sync + 'static,
    D::Tx: BooksTx + Send + 'static,
{
    let new_book = decode_fields(payload)?.into_new_book()?;
    let book = driver.create_book(new_book).await?;
    let response = BookResponse { message: "Book added".to_owned(), book };
    Ok((http::StatusCode::CREATED, Json(response)))
}
