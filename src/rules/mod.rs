// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule table schema.
//!
//! This module defines what a rule looks like, how rule definitions are
//! validated, and the immutable [`RuleTable`] an external linter reads.

mod spec;
mod table;
mod validator;

pub use spec::{Applicability, CaseStyle, Condition, ConditionKind, RuleSpec, Severity};
pub use table::{RuleTable, RuleTableBuilder};
pub use validator::{validate_name, validate_rule};

/// Names of the rules configured by this crate.
pub mod names {
    pub const BODY_LEADING_BLANK: &str = "body-leading-blank";
    pub const BODY_MAX_LINE_LENGTH: &str = "body-max-line-length";
    pub const FOOTER_LEADING_BLANK: &str = "footer-leading-blank";
    pub const FOOTER_MAX_LINE_LENGTH: &str = "footer-max-line-length";
    pub const HEADER_MAX_LENGTH: &str = "header-max-length";
    pub const HEADER_TRIM: &str = "header-trim";
    pub const SUBJECT_CASE: &str = "subject-case";
    pub const SUBJECT_EMPTY: &str = "subject-empty";
    pub const SUBJECT_FULL_STOP: &str = "subject-full-stop";
    pub const TYPE_CASE: &str = "type-case";
    pub const TYPE_EMPTY: &str = "type-empty";
    pub const TYPE_ENUM: &str = "type-enum";

    use super::ConditionKind;

    /// Parameter shapes a known rule accepts. `None` for rules this crate
    /// does not know, which are accepted with any shape.
    pub fn expected_kinds(name: &str) -> Option<&'static [ConditionKind]> {
        use super::ConditionKind::{Bound, Enumerated, Flag, Token};

        let kinds: &'static [ConditionKind] = match name {
            BODY_LEADING_BLANK | FOOTER_LEADING_BLANK | HEADER_TRIM | SUBJECT_EMPTY
            | TYPE_EMPTY => &[Flag],
            BODY_MAX_LINE_LENGTH | FOOTER_MAX_LINE_LENGTH | HEADER_MAX_LENGTH => &[Bound],
            SUBJECT_FULL_STOP => &[Token],
            // Case rules take one style or a list of styles.
            SUBJECT_CASE | TYPE_CASE => &[Enumerated, Token],
            TYPE_ENUM => &[Enumerated],
            _ => return None,
        };
        Some(kinds)
    }
}
