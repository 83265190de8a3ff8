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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::*;
use async_trait::async_trait;
use bookstore_core::db::{BareTx, DbResult};

#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod sqlite;

/// A transaction with high-level operations that deal with our types.
#[async_trait]
pub(crate) trait BooksTx: BareTx {
    /// Gets all existing books sorted by their identifier.
    async fn get_books(&mut self) -> DbResult<Vec<Book>>;

    /// Gets the book identified by `id`.
    async fn get_book(&mut self, id: BookId) -> DbResult<Book>;

    /// Stores a `new_book` and returns it with the freshly-assigned identifier.
    ///
    /// Identifiers are never reused, even after the book that held them is deleted.
    async fn create_book(&mut self, new_book: NewBook) -> DbResult<Book>;

    /// Replaces the stored contents of the book with the same identifier as `book`.
    async fn update_book(&mut self, book: &Book) -> DbResult<()>;

    /// Deletes the book identified by `id`.
    async fn delete_book(&mut self, id: BookId) -> DbResult<()>;
}
