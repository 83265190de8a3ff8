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

//! Utilities to read the configuration of a service from environment variables.
//!
//! Variables follow a `<prefix>_<suffix>` naming scheme so that a service can group all of its
//! settings, and the settings of each of its components, under common prefixes.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Gets an optional environment variable whose name is `<prefix>_<suffix>`, parsed as a `T`.
///
/// Returns `None` if the variable is not set.  A variable that is set but cannot be parsed as `T`
/// is an error, not an absent value, so that typos in the configuration are not silently ignored.
pub fn get_optional_var<T>(prefix: &str, suffix: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    let name = format!("{}_{}", prefix, suffix);
    let raw = match env::var(&name) {
        Ok(raw) => raw,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(format!("Environment variable {} is not valid UTF-8", name));
        }
    };
    match raw.parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(e) => Err(format!("Invalid value '{}' in environment variable {}: {}", raw, name, e)),
    }
}
