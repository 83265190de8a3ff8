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

//! Generic code for REST handlers.
//!
//! Services implement an `app` function in their `rest` module that returns the `Router` for the
//! application, and put every API in its own `<entity>_<method>.rs` file next to it.
//!
//! The `tests` module of each API defines a `route` function that returns the HTTP method and the
//! path under test, and all tests in the module send their requests to `route`.  This keeps the
//! tests of an API from accidentally exercising a different one.  A `TestContext` in a sibling
//! `testutils` module gives the tests direct access to the database using simplified types.

use crate::driver::DriverError;
use crate::model::ModelError;
use async_trait::async_trait;
use axum::Json;
use axum::body::HttpBody;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Frontend errors.  These are the errors that are visible to the user on failed requests.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RestError {
    /// Catch-all error type for all unexpected errors.
    #[error("{0}")]
    InternalError(String),

    /// Indicates an error in the contents of the request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Indicates that a requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Indicates that a request that should have empty content did not.
    #[error("Content should be empty")]
    PayloadNotEmpty,
}

impl RestError {
    /// Returns the HTTP status code that represents this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::PayloadNotEmpty => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl From<DriverError> for RestError {
    fn from(e: DriverError) -> Self {
        match e {
            DriverError::BackendError(msg) => RestError::InternalError(msg),
            DriverError::InvalidInput(msg) => RestError::InvalidRequest(msg),
            DriverError::NotFound(msg) => RestError::NotFound(msg),
        }
    }
}

impl From<ModelError> for RestError {
    fn from(e: ModelError) -> Self {
        RestError::InvalidRequest(e.0)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

/// Result type for this module.
pub type RestResult<T> = Result<T, RestError>;

/// Body of every error response.
#[derive(Debug, Deserialize, Serialize)]
struct ErrorBody {
    /// Human-readable description of the error.
    message: String,
}

/// A request body extractor that forbids any content.
///
/// APIs that take no input use this to reject requests that carry a payload, which would
/// otherwise be silently ignored.
pub struct EmptyBody {}

#[async_trait]
impl<S> FromRequest<S> for EmptyBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        if req.into_body().is_end_stream() {
            Ok(EmptyBody {})
        } else {
            Err(RestError::PayloadNotEmpty)
        }
    }
}

/// Common test code for the REST server.
#[cfg(feature = "testutils")]
pub mod testutils {
    use super::*;
    use axum::Router;
    use axum::body::{Body, Bytes};
    use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
    use http::{Method, request};
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    /// Maximum body size that tests accept in responses.
    const MAX_BODY_SIZE: usize = 64 * 1024;

    /// Type of the responses returned by the app.
    type HttpResponse = http::Response<Body>;

    /// Builder for a single request against an app.
    #[must_use]
    pub struct OneShotBuilder {
        /// The app that will process the request.
        app: Router,

        /// The request being built.
        builder: request::Builder,
    }

    impl OneShotBuilder {
        /// Starts building a request for the `method`/`uri` pair served by `app`.
        pub fn new<U: AsRef<str>>(app: Router, (method, uri): (Method, U)) -> Self {
            let builder = http::Request::builder().method(method).uri(uri.as_ref());
            Self { app, builder }
        }

        /// Adds a `name: value` header to the request.
        pub fn with_header<K, V>(mut self, name: K, value: V) -> Self
        where
            HeaderName: TryFrom<K>,
            <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
            HeaderValue: TryFrom<V>,
            <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
        {
            self.builder = self.builder.header(name, value);
            self
        }

        /// Returns true if the request already has a content type.
        fn has_content_type(&self) -> bool {
            self.builder.headers_ref().is_some_and(|headers| headers.contains_key(CONTENT_TYPE))
        }

        /// Sends the request with the given `body` and waits for the response.
        async fn send(self, body: Body) -> ResponseChecker {
            let request = self.builder.body(body).unwrap();
            let response = self.app.oneshot(request).await.unwrap();
            ResponseChecker { response, exp_status: StatusCode::OK }
        }

        /// Sends the request without a payload.
        pub async fn send_empty(self) -> ResponseChecker {
            self.send(Body::empty()).await
        }

        /// Sends the request with a `text` payload.
        ///
        /// The content type defaults to `text/plain` but a content type set via `with_header` is
        /// respected, which allows sending malformed payloads that claim to be of other types.
        pub async fn send_text<T: Into<String>>(mut self, text: T) -> ResponseChecker {
            if !self.has_content_type() {
                self.builder = self.builder.header(CONTENT_TYPE, mime::TEXT_PLAIN.as_ref());
            }
            self.send(Body::from(text.into())).await
        }

        /// Sends the request with `value` serialized as a JSON payload.
        pub async fn send_json<T: Serialize>(mut self, value: T) -> ResponseChecker {
            self.builder = self.builder.header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref());
            self.send(Body::from(serde_json::to_vec(&value).unwrap())).await
        }
    }

    /// Validator for the response to a request sent by a `OneShotBuilder`.
    #[must_use]
    pub struct ResponseChecker {
        /// Response returned by the app.
        response: HttpResponse,

        /// Status code that the response must carry.
        exp_status: StatusCode,
    }

    impl ResponseChecker {
        /// Expects the response to carry `status` instead of 200.
        pub fn expect_status(mut self, status: StatusCode) -> Self {
            self.exp_status = status;
            self
        }

        /// Checks the status of the response and consumes it to return its body.
        async fn into_body(self) -> Bytes {
            assert_eq!(self.exp_status, self.response.status());
            axum::body::to_bytes(self.response.into_body(), MAX_BODY_SIZE).await.unwrap()
        }

        /// Expects the body to be an error message that matches `exp_re`.
        pub async fn expect_error(self, exp_re: &str) {
            let body = self.into_body().await;
            let error: ErrorBody = match serde_json::from_slice(&body) {
                Ok(error) => error,
                Err(e) => panic!(
                    "Invalid error response due to {}; content was {}",
                    e,
                    String::from_utf8_lossy(&body)
                ),
            };
            let re = regex::Regex::new(exp_re).unwrap();
            assert!(
                re.is_match(&error.message),
                "Error message '{}' does not match re '{}'",
                error.message,
                exp_re
            );
        }

        /// Expects the body to be a JSON document that deserializes into a `T` and returns it.
        pub async fn expect_json<T: DeserializeOwned>(self) -> T {
            let body = self.into_body().await;
            match serde_json::from_slice::<T>(&body) {
                Ok(value) => value,
                Err(e) => panic!(
                    "Cannot deserialize response due to {}; content was {}",
                    e,
                    String::from_utf8_lossy(&body)
                ),
            }
        }

        /// Expects the body to be UTF-8 text that matches `exp_re`.
        pub async fn expect_text(self, exp_re: &str) {
            let body = self.into_body().await;
            let body = String::from_utf8(body.to_vec()).unwrap();
            let re = regex::Regex::new(exp_re).unwrap();
            assert!(re.is_match(&body), "Body '{}' does not match re '{}'", body, exp_re);
        }

        /// Checks the status of the response and returns the raw response for validation of
        /// properties that this checker does not cover.
        pub async fn take_response(self) -> HttpResponse {
            assert_eq!(self.exp_status, self.response.status());
            self.response
        }
    }

    /// Generates a test to verify that an API that does not expect a payload rejects one.
    #[macro_export]
    macro_rules! test_payload_must_be_empty {
        ( $app:expr, $route:expr ) => {
            #[tokio::test]
            async fn test_payload_must_be_empty() {
                $crate::rest::testutils::OneShotBuilder::new($app, $route)
                    .send_text("should not be here")
                    .await
                    .expect_status(axum::http::StatusCode::PAYLOAD_TOO_LARGE)
                    .expect_error("should be empty")
                    .await;
            }
        };
    }

    pub use test_payload_must_be_empty;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_driver_error() {
        assert_eq!(
            RestError::NotFound("Book not found".to_owned()),
            RestError::from(DriverError::NotFound("Book not found".to_owned()))
        );
        assert_eq!(
            RestError::InvalidRequest("Bad input".to_owned()),
            RestError::from(DriverError::InvalidInput("Bad input".to_owned()))
        );
        assert_eq!(
            RestError::InternalError("Database error: oops".to_owned()),
            RestError::from(DriverError::BackendError("Database error: oops".to_owned()))
        );
    }

    #[test]
    fn test_from_model_error() {
        assert_eq!(
            RestError::InvalidRequest("Price must be a number".to_owned()),
            RestError::from(ModelError("Price must be a number".to_owned()))
        );
    }

    #[test]
    fn test_into_response_status() {
        let cases = [
            (RestError::InternalError("x".to_owned()), StatusCode::INTERNAL_SERVER_ERROR),
            (RestError::InvalidRequest("x".to_owned()), StatusCode::BAD_REQUEST),
            (RestError::NotFound("x".to_owned()), StatusCode::NOT_FOUND),
            (RestError::PayloadNotEmpty, StatusCode::PAYLOAD_TOO_LARGE),
        ];
        for (error, exp_status) in cases {
            assert_eq!(exp_status, error.status());
            assert_eq!(exp_status, error.into_response().status());
        }
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = RestError::NotFound("Book not found".to_owned()).into_response();
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!("Book not found", error.message);
    }
}
