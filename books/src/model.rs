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

//! High-level data types.

use bookstore_core::model::{ModelError, ModelResult};
use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a book.  Assigned by the database when the book is created and never reused.
#[derive(Clone, Copy, Constructor, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(transparent)]
pub(crate) struct BookId(i64);

impl BookId {
    /// Parses a book identifier from a path segment.
    ///
    /// Only plain sequences of ASCII digits are accepted: signs, whitespace and any other
    /// decorations are rejected.
    pub(crate) fn parse(s: &str) -> ModelResult<BookId> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError(format!("Invalid book identifier '{}'", s)));
        }
        match s.parse::<i64>() {
            Ok(id) => Ok(BookId(id)),
            Err(e) => Err(ModelError(format!("Invalid book identifier '{}': {}", s, e))),
        }
    }

    /// Returns the identifier as an `i64`.
    pub(crate) fn as_i64(&self) -> i64 {
        self.0
    }
}

/// A book as stored in the catalog.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Clone, Debug, Deserialize, PartialEq))]
pub(crate) struct Book {
    /// Identifier of the book.
    id: BookId,

    /// Title of the book.  Never empty.
    title: String,

    /// Author of the book.  Never empty.
    author: String,

    /// Price of the book.  Always finite but not necessarily positive.
    price: f64,
}

/// The validated contents of a book that has not been stored yet.
#[derive(Constructor, Getters)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct NewBook {
    /// Title of the book.
    title: String,

    /// Author of the book.
    author: String,

    /// Price of the book.
    price: f64,
}

impl NewBook {
    /// Attaches the `id` assigned by the database to this book.
    pub(crate) fn with_id(self, id: BookId) -> Book {
        Book { id, title: self.title, author: self.author, price: self.price }
    }
}

/// The validated contents of a partial update to a book.  Fields set to `None` are left as is.
#[derive(Default)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct BookUpdate {
    /// New title for the book, if any.
    title: Option<String>,

    /// New author for the book, if any.
    author: Option<String>,

    /// New price for the book, if any.
    price: Option<f64>,
}

impl BookUpdate {
    /// Returns a copy of `book` with the fields in this update replaced.
    pub(crate) fn apply(self, book: Book) -> Book {
        Book {
            id: book.id,
            title: self.title.unwrap_or(book.title),
            author: self.author.unwrap_or(book.author),
            price: self.price.unwrap_or(book.price),
        }
    }
}

/// The untrusted fields of a book as received in a request payload.
///
/// Every field is optional and keeps the raw JSON value so that validation can tell apart a
/// missing key (`None`) from a key that is present with an unusable value, such as `null`.
#[cfg_attr(test, derive(Debug))]
pub(crate) struct BookFields {
    /// Raw value of the `title` key.
    title: Option<Value>,

    /// Raw value of the `author` key.
    author: Option<Value>,

    /// Raw value of the `price` key.
    price: Option<Value>,
}

impl From<Map<String, Value>> for BookFields {
    fn from(mut object: Map<String, Value>) -> Self {
        Self {
            title: object.remove("title"),
            author: object.remove("author"),
            price: object.remove("price"),
        }
    }
}

/// Extracts a non-empty string out of a raw JSON value.
fn non_empty_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Converts a raw JSON value into a finite price.
///
/// Prices can be given as JSON numbers or as strings that contain a number.  Booleans count as 1
/// and 0.
fn parse_price(value: Value) -> ModelResult<f64> {
    let price = match value {
        Value::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match price {
        Some(price) if price.is_finite() => Ok(price),
        _ => Err(ModelError("Price must be a number".to_owned())),
    }
}

impl BookFields {
    /// Validates the fields for the creation of a new book, which requires all of them.
    pub(crate) fn into_new_book(self) -> ModelResult<NewBook> {
        let title = self.title.and_then(non_empty_string);
        let author = self.author.and_then(non_empty_string);
        let price = self.price.filter(|price| !price.is_null());
        match (title, author, price) {
            (Some(title), Some(author), Some(price)) => {
                Ok(NewBook::new(title, author, parse_price(price)?))
            }
            _ => Err(ModelError("Missing title, author or price".to_owned())),
        }
    }

    /// Validates the fields for a partial update of an existing book.
    ///
    /// All present fields are validated before returning so that an invalid payload never
    /// results in a partially-applied update.
    pub(crate) fn into_update(self) -> ModelResult<BookUpdate> {
        let text = |value: Option<Value>| match value {
            None => Ok(None),
            Some(value) => match non_empty_string(value) {
                Some(s) => Ok(Some(s)),
                None => Err(ModelError("Title and author must be non-empty strings".to_owned())),
            },
        };

        let title = text(self.title)?;
        let author = text(self.author)?;
        let price = match self.price {
            None => None,
            Some(price) => Some(parse_price(price)?),
        };
        Ok(BookUpdate { title, author, price })
    }
}
