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

//! API to list all books.

use crate::db::BooksTx;
use crate::driver::Driver;
use crate::model::Book;
use axum::Json;
use axum::extract::State;
use bookstore_core::db::Db;
use bookstore_core::rest::{EmptyBody, RestResult};

/// API handler.
pub(crate) async fn handler<D>(
    State(driver): State<Driver<D>>,
    _: EmptyBody,
) -> RestResult<Json<Vec<Book>>>
where
    D: Db + Send + Sync + 'static,
    D::Tx: BooksTx + Send + 'static,
{
    let books = driver.get_books().await?;
    Ok(Json(books))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use bookstore_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/books".to_owned())
    }

    #[tokio::test]
    async fn test_empty() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<Book>>()
            .await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_some() {
        let context = TestContext::setup().await;

        let book1 = context.create_book("Dune", "Frank Herbert", 9.99).await;
        let book2 = context.create_book("Emma", "Jane Austen", 4.0).await;
        let book3 = context.create_book("Ulysses", "James Joyce", 12.5).await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<Book>>()
            .await;
        assert_eq!(vec![book1, book2, book3], response);
    }

    #[tokio::test]
    async fn test_exact_keys() {
        let context = TestContext::setup().await;

        let book = context.create_book("Dune", "Frank Herbert", 9.5).await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        assert_eq!(
            serde_json::json!([{
                "id": book.id().as_i64(),
                "title": "Dune",
                "author": "Frank Herbert",
                "price": 9.5,
            }]),
            response
        );
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route());
}
