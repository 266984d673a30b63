// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The rules this repository enforces on its own commits.
//!
//! Both tables are built once per process and handed out by reference.

mod default;

use lazy_static::lazy_static;

use crate::base;
use crate::error::RuleError;
use crate::rules::names::{HEADER_MAX_LENGTH, SUBJECT_CASE, TYPE_ENUM};
use crate::rules::{Applicability, RuleSpec, RuleTable, Severity};

pub use default::example_config;

/// Commit types accepted in this repository.
pub const COMMIT_TYPES: &[&str] = &[
    "change",
    "chore",
    "ci",
    "deprecated",
    "doc",
    "feat",
    "fix",
    "perf",
    "refactor",
    "revert",
    "style",
    "test",
];

/// Maximum header length before a warning.
pub const HEADER_LIMIT: usize = 72;

/// Subject casing styles accepted without a warning.
pub const SUBJECT_CASES: &[&str] = &["lower-case", "sentence-case", "start-case"];

lazy_static! {
    static ref LOCAL: RuleTable = build_local().expect("project rules are valid");
    static ref EFFECTIVE: RuleTable =
        base::resolve(&LOCAL).expect("project rules extend a built-in base");
}

/// The rules defined by this repository, before merging with the base.
pub fn local_rules() -> &'static RuleTable {
    &LOCAL
}

/// The project rules merged over `@commitlint/config-conventional`.
pub fn effective_rules() -> &'static RuleTable {
    &EFFECTIVE
}

// An invalid type is a hard error; header length and subject case only warn.
fn build_local() -> Result<RuleTable, RuleError> {
    RuleTable::builder()
        .extends(base::CONFIG_CONVENTIONAL)
        .rule(
            TYPE_ENUM,
            RuleSpec::enumerated(Severity::Error, Applicability::Always, COMMIT_TYPES.iter().copied()),
        )
        .rule(
            HEADER_MAX_LENGTH,
            RuleSpec::bound(Severity::Warning, Applicability::Always, HEADER_LIMIT),
        )
        .rule(
            SUBJECT_CASE,
            RuleSpec::enumerated(Severity::Warning, Applicability::Always, SUBJECT_CASES.iter().copied()),
        )
        .build()
}
