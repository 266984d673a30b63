// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitrc - conventional-commit rule table
//!
//! The rules a commit-message linter applies to this repository, as an
//! immutable, validated table.
//!
//! # Features
//!
//! - **Rule Table**: Immutable name-to-rule mapping with typed severities,
//!   applicabilities and parameters
//! - **Validation**: Malformed rules are rejected when the table is built,
//!   never when it is read
//! - **Base Rulesets**: Tables extend `@commitlint/config-conventional` and
//!   override it rule by rule
//! - **Config Files**: `commitlint.toml`, `.commitlintrc.toml` and
//!   `.commitlintrc.json` in the commitlint tuple encoding
//!
//! # Example
//!
//! ```
//! use commitrc::rules::Severity;
//!
//! let rules = commitrc::project::effective_rules();
//!
//! let header = rules.get("header-max-length").unwrap();
//! assert_eq!(header.severity, Severity::Warning);
//! assert_eq!(header.limit(), Some(72));
//!
//! assert!(rules.get("nonexistent-rule").is_none());
//! ```

// Module declarations
pub mod base;
pub mod config;
pub mod error;
pub mod project;
pub mod rules;

// Re-exports for convenience
pub use error::{CommitrcError, Result};
pub use rules::{Applicability, Condition, RuleSpec, RuleTable, Severity};
