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

//! Entry point to the books service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use bookstore::serve;
use bookstore_core::db::sqlite::SqliteOptions;
use bookstore_core::env::get_optional_var;
use log::error;
use std::net::Ipv4Addr;
use std::process::ExitCode;

/// Default port to listen on when `BOOKS_PORT` is not set.
const DEFAULT_PORT: u16 = 5000;

/// Default path to the database file when `BOOKS_DB_PATH` is not set.
const DEFAULT_DB_PATH: &str = "books.db";

/// Loads the configuration from the environment and runs the service until it is stopped.
async fn run() -> Result<(), String> {
    let port = get_optional_var::<u16>("BOOKS", "PORT")?.unwrap_or(DEFAULT_PORT);
    let addr = (Ipv4Addr::LOCALHOST, port);

    let db_opts = SqliteOptions::from_env("BOOKS_DB", DEFAULT_DB_PATH)?;

    serve(addr, db_opts).await.map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
