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

//! API to serve the index page.

use axum::response::Html;
use bookstore_core::rest::EmptyBody;

/// Contents of the index page.
const INDEX_HTML: &str = include_str!("index.html");

/// API handler.
pub(crate) async fn handler(_: EmptyBody) -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use bookstore_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_text("<script src=\"/static/main.js\">")
            .await;
    }

    #[tokio::test]
    async fn test_content_type() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .take_response()
            .await;
        let content_type = response.headers().get(http::header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route());
}
