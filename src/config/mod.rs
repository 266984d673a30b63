// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitrc.
//!
//! This module handles finding, parsing and resolving rule configuration
//! files (`commitlint.toml`, `.commitlintrc.toml`, `.commitlintrc.json`).

mod loader;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    to_toml, ConfigFormat,
};
pub use schema::{parse_rule, ConfigFile, RawValue};
