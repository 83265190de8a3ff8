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

//! API to serve the script that drives the index page.

use axum::http;
use axum::response::IntoResponse;
use bookstore_core::rest::EmptyBody;

/// Contents of the script.
const MAIN_JS: &str = include_str!("main.js");

/// API handler.
pub(crate) async fn handler(_: EmptyBody) -> impl IntoResponse {
    ([(http::header::CONTENT_TYPE, mime::APPLICATION_JAVASCRIPT.to_string())], MAIN_JS)
}
