// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Construction-time validation of rule definitions.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::RuleError;

use super::names;
use super::spec::{CaseStyle, Condition, ConditionKind, RuleSpec, Severity};

lazy_static! {
    /// Rule names are kebab-case.
    static ref RULE_NAME_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$").unwrap();

    /// A token is any non-empty run without whitespace.
    static ref TOKEN_REGEX: Regex = Regex::new(r"^\S+$").unwrap();
}

/// Check that a rule name is well formed.
pub fn validate_name(name: &str) -> Result<(), RuleError> {
    if RULE_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(RuleError::InvalidName {
            rule: name.to_string(),
        })
    }
}

/// Check a rule definition against the invariants for its name and kind.
pub fn validate_rule(name: &str, spec: &RuleSpec) -> Result<(), RuleError> {
    validate_name(name)?;
    check_kind(name, spec)?;

    match &spec.condition {
        Condition::Flag => Ok(()),
        Condition::Bound(limit) => {
            if *limit == 0 {
                Err(RuleError::invalid(name, "limit", "must be a positive integer"))
            } else {
                Ok(())
            }
        }
        Condition::Token(token) => {
            check_token(name, "value", token)?;
            if is_case_rule(name) {
                check_case_style(name, "value", token)?;
            }
            Ok(())
        }
        Condition::Enumerated(values) => validate_values(name, values),
    }
}

/// Known rules must carry the parameter shape they are defined with. A
/// disabled rule may omit its parameter (`[0]`).
fn check_kind(name: &str, spec: &RuleSpec) -> Result<(), RuleError> {
    let Some(expected) = names::expected_kinds(name) else {
        return Ok(());
    };

    let kind = spec.condition.kind();
    if expected.contains(&kind) || (spec.severity == Severity::Off && kind == ConditionKind::Flag) {
        return Ok(());
    }

    let wanted: Vec<_> = expected.iter().map(|k| k.describe()).collect();
    Err(RuleError::invalid(
        name,
        "value",
        format!("expected {}, found {}", wanted.join(" or "), kind.describe()),
    ))
}

fn validate_values(name: &str, values: &[String]) -> Result<(), RuleError> {
    if values.is_empty() {
        return Err(RuleError::invalid(name, "allowed values", "must not be empty"));
    }

    let mut seen = HashSet::new();
    for value in values {
        check_token(name, "allowed values", value)?;

        if !seen.insert(value.as_str()) {
            return Err(RuleError::invalid(
                name,
                "allowed values",
                format!("duplicate value '{}'", value),
            ));
        }

        if name == names::TYPE_ENUM && value.to_lowercase() != *value {
            return Err(RuleError::invalid(
                name,
                "allowed values",
                format!("'{}' must be lowercase", value),
            ));
        }

        if is_case_rule(name) {
            check_case_style(name, "allowed values", value)?;
        }
    }

    Ok(())
}

fn check_token(name: &str, field: &'static str, token: &str) -> Result<(), RuleError> {
    if TOKEN_REGEX.is_match(token) {
        Ok(())
    } else {
        Err(RuleError::invalid(
            name,
            field,
            format!("'{}' must be non-empty and contain no whitespace", token),
        ))
    }
}

fn is_case_rule(name: &str) -> bool {
    name.ends_with("-case")
}

fn check_case_style(name: &str, field: &'static str, value: &str) -> Result<(), RuleError> {
    value.parse::<CaseStyle>().map(|_| ()).map_err(|_| {
        let known: Vec<_> = CaseStyle::all().iter().map(|s| s.as_str()).collect();
        RuleError::invalid(
            name,
            field,
            format!("unknown case style '{}' (expected one of: {})", value, known.join(", ")),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Applicability, Severity};

    fn types(values: &[&str]) -> RuleSpec {
        RuleSpec::enumerated(Severity::Error, Applicability::Always, values.iter().copied())
    }

    #[test]
    fn test_rule_names() {
        assert!(validate_name("type-enum").is_ok());
        assert!(validate_name("body-max-line-length").is_ok());
        assert!(validate_name("Type-Enum").is_err());
        assert!(validate_name("type_enum").is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name("type-").is_err());
    }

    #[test]
    fn test_type_enum_accepts_lowercase_tokens() {
        assert!(validate_rule("type-enum", &types(&["feat", "fix", "chore"])).is_ok());
    }

    #[test]
    fn test_type_enum_rejects_empty_set() {
        let err = validate_rule("type-enum", &types(&[])).unwrap_err();
        assert_eq!(
            err,
            RuleError::invalid("type-enum", "allowed values", "must not be empty")
        );
    }

    #[test]
    fn test_type_enum_rejects_uppercase() {
        let err = validate_rule("type-enum", &types(&["feat", "Fix"])).unwrap_err();
        assert!(err.to_string().contains("'Fix' must be lowercase"));
    }

    #[test]
    fn test_enumerated_rejects_whitespace_and_empty() {
        assert!(validate_rule("type-enum", &types(&["new feat"])).is_err());
        assert!(validate_rule("type-enum", &types(&[""])).is_err());
        assert!(validate_rule("scope-enum", &types(&["core", " "])).is_err());
    }

    #[test]
    fn test_enumerated_rejects_duplicates() {
        let err = validate_rule("type-enum", &types(&["feat", "fix", "feat"])).unwrap_err();
        assert!(err.to_string().contains("duplicate value 'feat'"));
    }

    #[test]
    fn test_scope_enum_allows_uppercase() {
        assert!(validate_rule("scope-enum", &types(&["API", "core"])).is_ok());
    }

    #[test]
    fn test_case_rules_require_known_styles() {
        let spec = RuleSpec::enumerated(
            Severity::Warning,
            Applicability::Always,
            ["lower-case", "title-case"],
        );
        let err = validate_rule("subject-case", &spec).unwrap_err();
        assert!(err.to_string().contains("unknown case style 'title-case'"));

        let spec = RuleSpec::token(Severity::Error, Applicability::Always, "lower-case");
        assert!(validate_rule("type-case", &spec).is_ok());

        let spec = RuleSpec::token(Severity::Error, Applicability::Always, "loud-case");
        let err = validate_rule("type-case", &spec).unwrap_err();
        assert!(matches!(err, RuleError::InvalidSpec { field: "value", .. }));
    }

    #[test]
    fn test_type_enum_requires_value_list() {
        for spec in [
            RuleSpec::flag(Severity::Error, Applicability::Always),
            RuleSpec::bound(Severity::Error, Applicability::Always, 72),
            RuleSpec::token(Severity::Error, Applicability::Always, "feat"),
        ] {
            let err = validate_rule("type-enum", &spec).unwrap_err();
            assert!(
                matches!(err, RuleError::InvalidSpec { ref rule, field: "value", .. } if rule == "type-enum"),
                "{:?} gave {:?}",
                spec,
                err
            );
        }
    }

    #[test]
    fn test_length_rules_require_bound() {
        let spec = RuleSpec::enumerated(Severity::Warning, Applicability::Always, ["x"]);
        let err = validate_rule("header-max-length", &spec).unwrap_err();
        assert!(err.to_string().contains("expected a positive integer, found a list of strings"));

        let spec = RuleSpec::token(Severity::Error, Applicability::Always, "100");
        assert!(validate_rule("body-max-line-length", &spec).is_err());
    }

    #[test]
    fn test_flag_rules_reject_values() {
        let spec = RuleSpec::bound(Severity::Warning, Applicability::Always, 1);
        assert!(validate_rule("body-leading-blank", &spec).is_err());

        let spec = RuleSpec::flag(Severity::Error, Applicability::Never);
        assert!(validate_rule("subject-full-stop", &spec).is_err());
    }

    #[test]
    fn test_disabled_rule_may_omit_value() {
        let spec = RuleSpec::flag(Severity::Off, Applicability::Always);
        assert!(validate_rule("type-enum", &spec).is_ok());
        assert!(validate_rule("header-max-length", &spec).is_ok());

        // Disabling does not excuse a wrong value.
        let spec = RuleSpec::bound(Severity::Off, Applicability::Always, 72);
        assert!(validate_rule("type-enum", &spec).is_err());
    }

    #[test]
    fn test_case_rules_accept_token_or_list() {
        let spec = RuleSpec::token(Severity::Warning, Applicability::Always, "lower-case");
        assert!(validate_rule("subject-case", &spec).is_ok());

        let spec = RuleSpec::enumerated(Severity::Error, Applicability::Always, ["lower-case"]);
        assert!(validate_rule("type-case", &spec).is_ok());
    }

    #[test]
    fn test_unknown_rules_accept_any_shape() {
        let spec = RuleSpec::bound(Severity::Error, Applicability::Always, 3);
        assert!(validate_rule("scope-max-length", &spec).is_ok());
    }

    #[test]
    fn test_bound_must_be_positive() {
        let spec = RuleSpec::bound(Severity::Warning, Applicability::Always, 0);
        let err = validate_rule("header-max-length", &spec).unwrap_err();
        assert_eq!(err.rule(), "header-max-length");
        assert!(matches!(err, RuleError::InvalidSpec { field: "limit", .. }));

        let spec = RuleSpec::bound(Severity::Warning, Applicability::Always, 72);
        assert!(validate_rule("header-max-length", &spec).is_ok());
    }

    #[test]
    fn test_flag_rule_is_valid() {
        let spec = RuleSpec::flag(Severity::Warning, Applicability::Always);
        assert!(validate_rule("body-leading-blank", &spec).is_ok());
    }
}
