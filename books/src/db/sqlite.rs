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

//! Implementation of the database abstraction using SQLite.

use crate::db::BooksTx;
use crate::model::*;
use async_trait::async_trait;
use bookstore_core::db::sqlite::{map_sqlx_error, run_schema};
use bookstore_core::db::{BareTx, DbError, DbResult};
use futures::TryStreamExt;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, Transaction};

/// Schema to use to initialize the database.
const SCHEMA: &str = include_str!("sqlite.sql");

/// Converts a row with all the columns of the `books` table into a `Book`.
fn book_from_row(row: SqliteRow) -> DbResult<Book> {
    let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
    let title: String = row.try_get("title").map_err(map_sqlx_error)?;
    let author: String = row.try_get("author").map_err(map_sqlx_error)?;
    let price: f64 = row.try_get("price").map_err(map_sqlx_error)?;
    Ok(Book::new(BookId::new(id), title, author, price))
}

/// A transaction backed by a SQLite database.
pub(crate) struct SqliteBooksTx {
    /// Inner transaction type to obtain access to the raw sqlx transaction.
    tx: Transaction<'static, Sqlite>,
}

impl From<Transaction<'static, Sqlite>> for SqliteBooksTx {
    fn from(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl BareTx for SqliteBooksTx {
    async fn commit(self) -> DbResult<()> {
        self.tx.commit().await.map_err(map_sqlx_error)
    }

    async fn migrate(&mut self) -> DbResult<()> {
        run_schema(&mut self.tx, SCHEMA).await
    }
}

#[async_trait]
impl BooksTx for SqliteBooksTx {
    async fn get_books(&mut self) -> DbResult<Vec<Book>> {
        let query_str = "SELECT id, title, author, price FROM books ORDER BY id";
        let mut rows = sqlx::query(query_str).fetch(&mut *self.tx);

        let mut books = vec![];
        while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
            books.push(book_from_row(row)?);
        }
        Ok(books)
    }

    async fn get_book(&mut self, id: BookId) -> DbResult<Book> {
        let query_str = "SELECT id, title, author, price FROM books WHERE id = ?";
        let row = sqlx::query(query_str)
            .bind(id.as_i64())
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;
        book_from_row(row)
    }

    async fn create_book(&mut self, new_book: NewBook) -> DbResult<Book> {
        let query_str = "INSERT INTO books (title, author, price) VALUES (?, ?, ?)";
        let done = sqlx::query(query_str)
            .bind(new_book.title())
            .bind(new_book.author())
            .bind(new_book.price())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;
        if done.rows_affected() != 1 {
            return Err(DbError::BackendError("Insertion affected more than one row".to_owned()));
        }
        Ok(new_book.with_id(BookId::new(done.last_insert_rowid())))
    }

    async fn update_book(&mut self, book: &Book) -> DbResult<()> {
        let query_str = "UPDATE books SET title = ?, author = ?, price = ? WHERE id = ?";
        let done = sqlx::query(query_str)
            .bind(book.title())
            .bind(book.author())
            .bind(book.price())
            .bind(book.id().as_i64())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;
        if done.rows_affected() == 0 {
            return Err(DbError::NotFound);
        } else if done.rows_affected() != 1 {
            return Err(DbError::BackendError("Update affected more than one row".to_owned()));
        }
        Ok(())
    }

    async fn delete_book(&mut self, id: BookId) -> DbResult<()> {
        let query_str = "DELETE FROM books WHERE id = ?";
        let done = sqlx::query(query_str)
            .bind(id.as_i64())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;
        if done.rows_affected() == 0 {
            return Err(DbError::NotFound);
        } else if done.rows_affected() != 1 {
            return Err(DbError::BackendError("Deletion affected more than one row".to_owned()));
        }
        Ok(())
    }
}
