// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The conventional-commits base ruleset.

use crate::error::RuleError;
use crate::rules::names::*;
use crate::rules::{RuleSpec, RuleTable};

use crate::rules::Applicability::{Always, Never};
use crate::rules::Severity::{Error, Warning};

/// Build the `@commitlint/config-conventional` rules.
pub(super) fn rules() -> Result<RuleTable, RuleError> {
    RuleTable::builder()
        .rule(BODY_LEADING_BLANK, RuleSpec::flag(Warning, Always))
        .rule(BODY_MAX_LINE_LENGTH, RuleSpec::bound(Error, Always, 100))
        .rule(FOOTER_LEADING_BLANK, RuleSpec::flag(Warning, Always))
        .rule(FOOTER_MAX_LINE_LENGTH, RuleSpec::bound(Error, Always, 100))
        .rule(HEADER_MAX_LENGTH, RuleSpec::bound(Error, Always, 100))
        .rule(HEADER_TRIM, RuleSpec::flag(Error, Always))
        .rule(
            SUBJECT_CASE,
            RuleSpec::enumerated(
                Error,
                Never,
                ["sentence-case", "start-case", "pascal-case", "upper-case"],
            ),
        )
        .rule(SUBJECT_EMPTY, RuleSpec::flag(Error, Never))
        .rule(SUBJECT_FULL_STOP, RuleSpec::token(Error, Never, "."))
        .rule(TYPE_CASE, RuleSpec::token(Error, Always, "lower-case"))
        .rule(TYPE_EMPTY, RuleSpec::flag(Error, Never))
        .rule(
            TYPE_ENUM,
            RuleSpec::enumerated(
                Error,
                Always,
                [
                    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert",
                    "style", "test",
                ],
            ),
        )
        .build()
}
