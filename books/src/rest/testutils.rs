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

//! Test utilities for the REST API.

use crate::db::BooksTx;
use crate::db::sqlite::SqliteBooksTx;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use bookstore_core::db::sqlite::{self, SqliteDb, SqliteOptions, testutils};
use bookstore_core::db::{BareTx, Db, DbError};
use std::path::Path;
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// Direct access to the database backing the app.
    db: Arc<SqliteDb<SqliteBooksTx>>,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app with an empty in-memory database.
    pub(crate) async fn setup() -> Self {
        Self::with_db(testutils::setup::<SqliteBooksTx>().await)
    }

    /// Initializes the app with a database stored in the file at `path`.
    pub(crate) async fn setup_file(path: &Path) -> Self {
        let opts = SqliteOptions::new(path.to_string_lossy());
        let pool = sqlite::connect(&opts).await.unwrap();
        Self::with_db(SqliteDb::attach(pool).await.unwrap())
    }

    /// Wires the app on top of `db`.
    fn with_db(db: SqliteDb<SqliteBooksTx>) -> Self {
        let db = Arc::new(db);
        let driver = Driver::new(db.clone());
        let app = app(driver);
        Self { db, app }
    }

    /// Closes the database backing the app.
    pub(crate) async fn close(self) {
        drop(self.app);
        self.db.close().await;
    }

    /// Returns a copy of the app to issue one request.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app to issue one request.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Stores a book with the given contents directly in the database.
    pub(crate) async fn create_book(&self, title: &str, author: &str, price: f64) -> Book {
        let mut tx = self.db.begin().await.unwrap();
        let book = tx
            .create_book(NewBook::new(title.to_owned(), author.to_owned(), price))
            .await
            .unwrap();
        tx.commit().await.unwrap();
        book
    }

    /// Fetches the book identified by `id` directly from the database, if it exists.
    pub(crate) async fn get_book(&self, id: BookId) -> Option<Book> {
        let mut tx = self.db.begin().await.unwrap();
        let book = match tx.get_book(id).await {
            Ok(book) => Some(book),
            Err(DbError::NotFound) => None,
            Err(e) => panic!("{}", e),
        };
        tx.commit().await.unwrap();
        book
    }

    /// Fetches all books directly from the database.
    pub(crate) async fn get_books(&self) -> Vec<Book> {
        let mut tx = self.db.begin().await.unwrap();
        let books = tx.get_books().await.unwrap();
        tx.commit().await.unwrap();
        books
    }
}
