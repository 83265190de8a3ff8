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

//! Common utilities to interact with an SQLite database.

use crate::db::{BareTx, Db, DbError, DbResult};
use crate::env::get_optional_var;
use async_trait::async_trait;
use log::warn;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Transaction;
use std::marker::PhantomData;
use std::str::FromStr;

/// Takes a raw SQLx error `e` and converts it to our generic error type.
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    match e {
        sqlx::Error::ColumnDecode { source, .. } => DbError::DataIntegrityError(source.to_string()),
        sqlx::Error::PoolTimedOut => DbError::Unavailable,
        sqlx::Error::RowNotFound => DbError::NotFound,
        e => DbError::BackendError(e.to_string()),
    }
}

/// Options to establish a connection to an SQLite database.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct SqliteOptions {
    /// Path to the database file, or `:memory:` for a transient in-memory database.  The file is
    /// created if it does not exist yet.
    pub path: String,

    /// Maximum number of connections to allow against the database.
    pub max_connections: Option<u32>,
}

impl SqliteOptions {
    /// Creates a set of options to open the database at `path` with default settings.
    pub fn new<P: Into<String>>(path: P) -> Self {
        Self { path: path.into(), max_connections: None }
    }

    /// Initializes a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_PATH` and `<prefix>_MAX_CONNECTIONS`.  All of
    /// them are optional and `default_path` is used when the path is not set.
    pub fn from_env(prefix: &str, default_path: &str) -> Result<SqliteOptions, String> {
        Ok(SqliteOptions {
            path: get_optional_var::<String>(prefix, "PATH")?
                .unwrap_or_else(|| default_path.to_owned()),
            max_connections: get_optional_var::<u32>(prefix, "MAX_CONNECTIONS")?,
        })
    }
}

/// Opens a connection pool to the database described by `opts`.
pub async fn connect(opts: &SqliteOptions) -> DbResult<SqlitePool> {
    let conn_opts = SqliteConnectOptions::from_str(&opts.path)
        .map_err(map_sqlx_error)?
        .create_if_missing(true);

    let mut pool_opts = SqlitePoolOptions::new();
    if let Some(max_connections) = opts.max_connections {
        pool_opts = pool_opts.max_connections(max_connections);
    }
    pool_opts.connect_with(conn_opts).await.map_err(map_sqlx_error)
}

/// A database instance backed by an SQLite database whose transactions are of type `T`.
pub struct SqliteDb<T> {
    /// Shared SQLite connection pool.  This is a cloneable type that all concurrent
    /// transactions can use concurrently.
    pool: SqlitePool,

    /// Marker for the transaction type handed out by `begin`.
    _tx: PhantomData<fn() -> T>,
}

impl<T> SqliteDb<T>
where
    T: BareTx + From<Transaction<'static, Sqlite>> + 'static,
{
    /// Wraps an existing connection `pool` and ensures the schema required by `T` exists.
    pub async fn attach(pool: SqlitePool) -> DbResult<Self> {
        let db = Self { pool, _tx: PhantomData };
        let mut tx = db.begin().await?;
        tx.migrate().await?;
        tx.commit().await?;
        Ok(db)
    }
}

impl<T> Drop for SqliteDb<T> {
    fn drop(&mut self) {
        if !self.pool.is_closed() {
            warn!("Dropping connection without having called close() first");
        }
    }
}

#[async_trait]
impl<T> Db for SqliteDb<T>
where
    T: BareTx + From<Transaction<'static, Sqlite>> + 'static,
{
    type Tx = T;

    /// Starts an immediate transaction, which takes the write lock upfront.  A transaction that
    /// reads before writing would otherwise fail with `SQLITE_BUSY` when upgrading its lock
    /// while another one writes, instead of waiting for the busy timeout.
    async fn begin(&self) -> DbResult<Self::Tx> {
        let tx = self.pool.begin_with("BEGIN IMMEDIATE").await.map_err(map_sqlx_error)?;
        Ok(T::from(tx))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Executes all statements in `schema` within the transaction `tx`.
///
/// The schema is expected to be idempotent, typically by using `CREATE ... IF NOT EXISTS`.
pub async fn run_schema(tx: &mut Transaction<'static, Sqlite>, schema: &str) -> DbResult<()> {
    sqlx::query(schema).execute(&mut **tx).await.map_err(map_sqlx_error)?;
    Ok(())
}

/// Test utilities for SQLite-backed databases.
#[cfg(any(feature = "testutils", test))]
pub mod testutils {
    use super::*;

    /// Initializes a fresh in-memory test database whose transactions are of type `T`.
    ///
    /// The pool is limited to a single connection so that the test sees a consistent view of
    /// the in-memory database across operations.
    pub async fn setup<T>() -> SqliteDb<T>
    where
        T: BareTx + From<Transaction<'static, Sqlite>> + 'static,
    {
        let _can_fail = env_logger::builder().is_test(true).try_init();
        let opts = SqliteOptions { path: ":memory:".to_owned(), max_connections: Some(1) };
        let pool = connect(&opts).await.unwrap();
        SqliteDb::attach(pool).await.unwrap()
    }
}
