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

//! Operations on one book.

use crate::db::BooksTx;
use crate::driver::{Driver, book_error};
use crate::model::*;
use bookstore_core::db::{BareTx, Db};
use bookstore_core::driver::DriverResult;
use bookstore_core::model::ModelResult;
use log::info;

impl<D> Driver<D>
where
    D: Db + Send + Sync + 'static,
    D::Tx: BooksTx + Send + 'static,
{
    /// Gets the book identified by `id`.
    pub(crate) async fn get_book(self, id: BookId) -> DriverResult<Book> {
        let mut tx = self.db.begin().await?;
        let book = tx.get_book(id).await.map_err(book_error)?;
        tx.commit().await?;
        Ok(book)
    }

    /// Updates the book identified by `id` with the values present in `fields`.
    ///
    /// `fields` carries the result of decoding the request payload.  It is only inspected after
    /// confirming that the book exists, so a missing book is reported before a bad payload.
    pub(crate) async fn update_book(
        self,
        id: BookId,
        fields: ModelResult<BookFields>,
    ) -> DriverResult<Book> {
        let mut tx = self.db.begin().await?;
        let book = tx.get_book(id).await.map_err(book_error)?;

        let update = fields?.into_update()?;
        let book = update.apply(book);
        tx.update_book(&book).await.map_err(book_error)?;

        tx.commit().await?;
        info!("Updated book {}", id.as_i64());
        Ok(book)
    }

    /// Deletes the book identified by `id`.
    pub(crate) async fn delete_book(self, id: BookId) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        tx.delete_book(id).await.map_err(book_error)?;
        tx.commit().await?;
        info!("Deleted book {}", id.as_i64());
        Ok(())
    }
}
