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

//! Business logic for the service.

use crate::db::BooksTx;
use bookstore_core::db::{Db, DbError};
use bookstore_core::driver::DriverError;
use derivative::Derivative;
use std::sync::Arc;

mod book;
mod books;
#[cfg(test)]
mod testutils;

/// Converts a database error `e` raised while accessing a single book into a driver error.
fn book_error(e: DbError) -> DriverError {
    match e {
        DbError::NotFound => DriverError::NotFound("Book not found".to_owned()),
        e => DriverError::from(e),
    }
}

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": they start and commit a
/// transaction, so it's incorrect for the caller to use two separate calls.  For this reason,
/// these operations consume the driver in an attempt to minimize the possibility of executing
/// two operations.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub(crate) struct Driver<D>
where
    D: Db + Send + Sync + 'static,
    D::Tx: BooksTx + Send + 'static,
{
    /// The database that the driver uses for persistence.
    db: Arc<D>,
}

impl<D> Driver<D>
where
    D: Db + Send + Sync + 'static,
    D::Tx: BooksTx + Send + 'static,
{
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<D>) -> Self {
        Self { db }
    }
}
