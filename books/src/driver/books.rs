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

//! Operations on the collection of books.

use crate::db::BooksTx;
use crate::driver::Driver;
use crate::model::*;
use bookstore_core::db::{BareTx, Db};
use bookstore_core::driver::DriverResult;
use log::info;

impl<D> Driver<D>
where
    D: Db + Send + Sync + 'static,
    D::Tx: BooksTx + Send + 'static,
{
    /// Gets all existing books in creation order.
    pub(crate) async fn get_books(self) -> DriverResult<Vec<Book>> {
        let mut tx = self.db.begin().await?;
        let books = tx.get_books().await?;
        tx.commit().await?;
        Ok(books)
    }

    /// Adds `new_book` to the catalog and returns it with its assigned identifier.
    pub(crate) async fn create_book(self, new_book: NewBook) -> DriverResult<Book> {
        let mut tx = self.db.begin().await?;
        let book = tx.create_book(new_book).await?;
        tx.commit().await?;
        info!("Created book {} with title '{}'", book.id().as_i64(), book.title());
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_get_books_none() {
        let context = TestContext::setup().await;

        let books = context.driver().get_books().await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_some() {
        let context = TestContext::setup().await;

        let book1 = context.create_book("First", "Author 1", 1.0).await;
        let book2 = context.create_book("Second", "Author 2", 2.0).await;
        let book3 = context.create_book("Third", "Author 1", 3.0).await;

        let books = context.driver().get_books().await.unwrap();
        assert_eq!(vec![book1, book2, book3], books);
    }

    #[tokio::test]
    async fn test_create_book_ok() {
        let context = TestContext::setup().await;

        let book = context
            .driver()
            .create_book(NewBook::new("Dune".to_owned(), "Frank Herbert".to_owned(), 9.99))
            .await
            .unwrap();
        assert_eq!("Dune", book.title());
        assert_eq!("Frank Herbert", book.author());
        assert_eq!(9.99, *book.price());

        assert_eq!(vec![book], context.get_books().await);
    }

    #[tokio::test]
    async fn test_create_book_assigns_fresh_ids() {
        let context = TestContext::setup().await;

        let book1 = context
            .driver()
            .create_book(NewBook::new("Same".to_owned(), "Same".to_owned(), 1.0))
            .await
            .unwrap();
        let book2 = context
            .driver()
            .create_book(NewBook::new("Same".to_owned(), "Same".to_owned(), 1.0))
            .await
            .unwrap();
        assert_ne!(book1.id(), book2.id());

        assert_eq!(2, context.get_books().await.len());
    }
}
