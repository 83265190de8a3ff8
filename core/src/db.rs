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

//! Generic code to interact with a database.
//!
//! Every service should implement a `db` module that extends `BareTx` with a `Tx` trait of its
//! own.  The `Tx` trait lists the high-level operations that the service needs from the database,
//! expressed in terms of the types of its `model`.  Each database backend then provides a type
//! that implements `Tx`, and the business logic layer is parameterized on the `Db` whose
//! transactions implement it.
//!
//! Tests for the `Tx` operations should be written once, generically, and instantiated for every
//! backend using the `generate_tests` macro in the `testutils` module.

use crate::model::ModelError;
use async_trait::async_trait;

#[cfg(feature = "sqlite")]
pub mod sqlite;

/// Database errors.  Failures that the database layer knows how to interpret get their own
/// variant and everything else ends up as a `BackendError`.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DbError {
    /// Catch-all error type for unexpected database errors.
    #[error("Database error: {0}")]
    BackendError(String),

    /// Indicates that stored data cannot be turned into the expected types.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),

    /// Indicates that a requested entry does not exist.
    #[error("Entity not found")]
    NotFound,

    /// Indicates that the database is not available (maybe because of too many active concurrent
    /// connections).
    #[error("Unavailable")]
    Unavailable,
}

impl From<ModelError> for DbError {
    fn from(e: ModelError) -> Self {
        DbError::DataIntegrityError(e.to_string())
    }
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// Operations that every transaction supports regardless of the service it belongs to.
///
/// Dropping a transaction without calling `commit` must roll back any changes done through it.
#[async_trait]
pub trait BareTx: Send {
    /// Commits the transaction.
    async fn commit(self) -> DbResult<()>;

    /// Ensures the schema required by the service exists, creating it if necessary.
    async fn migrate(&mut self) -> DbResult<()>;
}

/// Abstraction over a database connection with transactions of type `Tx`.
#[async_trait]
pub trait Db {
    /// Type of the transactions that this database hands out.
    type Tx: BareTx;

    /// Begins a transaction.
    ///
    /// It is the responsibility of the caller to call `commit` on the returned transaction.
    /// Otherwise the transaction is rolled back on drop.
    async fn begin(&self) -> DbResult<Self::Tx>;

    /// Closes the connection to the database, waiting for in-flight operations to complete.
    async fn close(&self);
}

/// Test utilities to run backend-agnostic database tests against specific backends.
#[cfg(any(test, feature = "testutils"))]
pub mod testutils {
    pub use paste::paste;

    /// Defines a `#[tokio::test]` called `name` that calls `module::name` with the database
    /// returned by `setup`.
    #[macro_export]
    macro_rules! generate_one_test [
        ( $name:ident, $setup:expr, $module:path ) => {
            #[tokio::test]
            async fn $name() {
                $crate::db::testutils::paste! {
                    $module :: [< $name >]($setup).await;
                }
            }
        }
    ];

    pub use generate_one_test;

    /// Defines one `#[tokio::test]` per `name` that calls `module::name` with the database
    /// returned by `setup`.
    ///
    /// `setup` is evaluated once per test, so every test gets a fresh database.  The database
    /// must already contain the schema that the tests need.
    #[macro_export]
    macro_rules! generate_tests [
        ( $setup:expr, $module:path $(, $name:ident)+ ) => {
            $(
                $crate::db::testutils::generate_one_test!($name, $setup, $module);
            )+
        };
    ];

    pub use generate_tests;
}
