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

//! Test utilities for the business layer.

use crate::db::BooksTx;
use crate::db::memory::MemoryDb;
use crate::driver::Driver;
use crate::model::*;
use bookstore_core::db::{BareTx, Db};
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// Direct access to the database backing the driver.
    db: MemoryDb,

    /// The driver under test.
    driver: Driver<MemoryDb>,
}

impl TestContext {
    /// Initializes the driver with an empty in-memory database.
    pub(crate) async fn setup() -> Self {
        let _can_fail = env_logger::builder().is_test(true).try_init();
        let db = MemoryDb::default();
        let driver = Driver::new(Arc::new(db.clone()));
        Self { db, driver }
    }

    /// Returns a copy of the driver to issue one operation.
    pub(crate) fn driver(&self) -> Driver<MemoryDb> {
        self.driver.clone()
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

    /// Fetches all books directly from the database.
    pub(crate) async fn get_books(&self) -> Vec<Book> {
        let mut tx = self.db.begin().await.unwrap();
        let books = tx.get_books().await.unwrap();
        tx.commit().await.unwrap();
        books
    }
}
