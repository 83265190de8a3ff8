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

//! In-memory implementation of the database abstraction for tests.

use crate::db::BooksTx;
use crate::model::*;
use async_trait::async_trait;
use bookstore_core::db::{BareTx, Db, DbError, DbResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Contents of a stored book, indexed by its identifier in `State`.
#[derive(Clone)]
struct Row {
    title: String,
    author: String,
    price: f64,
}

/// Contents of the whole database.
#[derive(Clone, Default)]
struct State {
    /// All books keyed by their identifier.
    books: BTreeMap<BookId, Row>,

    /// Last identifier handed out.  Never decreases, so identifiers are never reused.
    last_id: i64,
}

/// A database that keeps all data in memory.
///
/// Transactions are serialized: only one can be active at any given time.
#[derive(Clone, Default)]
pub(crate) struct MemoryDb {
    /// The committed state of the database.
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl Db for MemoryDb {
    type Tx = MemoryBooksTx;

    async fn begin(&self) -> DbResult<Self::Tx> {
        let committed = self.state.clone().lock_owned().await;
        let staged = committed.clone();
        Ok(MemoryBooksTx { committed, staged })
    }

    async fn close(&self) {}
}

/// A transaction against a `MemoryDb`.
///
/// Changes are applied to a private copy of the state that replaces the committed state only
/// when the transaction is committed.
pub(crate) struct MemoryBooksTx {
    /// Exclusive access to the committed state for the lifetime of the transaction.
    committed: OwnedMutexGuard<State>,

    /// Copy of the state with the changes done by this transaction.
    staged: State,
}

#[async_trait]
impl BareTx for MemoryBooksTx {
    async fn commit(self) -> DbResult<()> {
        let MemoryBooksTx { mut committed, staged } = self;
        *committed = staged;
        Ok(())
    }

    async fn migrate(&mut self) -> DbResult<()> {
        Ok(())
    }
}

#[async_trait]
impl BooksTx for MemoryBooksTx {
    async fn get_books(&mut self) -> DbResult<Vec<Book>> {
        Ok(self
            .staged
            .books
            .iter()
            .map(|(id, row)| Book::new(*id, row.title.clone(), row.author.clone(), row.price))
            .collect())
    }

    async fn get_book(&mut self, id: BookId) -> DbResult<Book> {
        match self.staged.books.get(&id) {
            Some(row) => Ok(Book::new(id, row.title.clone(), row.author.clone(), row.price)),
            None => Err(DbError::NotFound),
        }
    }

    async fn create_book(&mut self, new_book: NewBook) -> DbResult<Book> {
        self.staged.last_id += 1;
        let id = BookId::new(self.staged.last_id);
        let row = Row {
            title: new_book.title().clone(),
            author: new_book.author().clone(),
            price: *new_book.price(),
        };
        self.staged.books.insert(id, row);
        Ok(new_book.with_id(id))
    }

    async fn update_book(&mut self, book: &Book) -> DbResult<()> {
        match self.staged.books.get_mut(book.id()) {
            Some(row) => {
                row.title = book.title().clone();
                row.author = book.author().clone();
                row.price = *book.price();
                Ok(())
            }
            None => Err(DbError::NotFound),
        }
    }

    async fn delete_book(&mut self, id: BookId) -> DbResult<()> {
        match self.staged.books.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::generate_db_tests;

    generate_db_tests!(MemoryDb::default());
}
