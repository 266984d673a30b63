// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule specification types.

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// How a linter reports a violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Off = 0,
    Warning = 1,
    Error = 2,
}

impl Severity {
    /// Parse a numeric level. Only 0, 1 and 2 are valid.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    /// The numeric level used in configuration files.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Whether violations are reported at all.
    pub fn is_enabled(self) -> bool {
        self != Severity::Off
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

/// Whether the rule's condition must hold (`always`) or must not hold (`never`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Applicability {
    Always,
    Never,
}

impl Applicability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }
}

impl std::str::FromStr for Applicability {
    type Err = ();

    /// Exact match only; `"Always"` is rejected rather than coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Applicability::Always),
            "never" => Ok(Applicability::Never),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Applicability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Casing styles accepted by `*-case` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl CaseStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Lower => "lower-case",
            CaseStyle::Upper => "upper-case",
            CaseStyle::Camel => "camel-case",
            CaseStyle::Kebab => "kebab-case",
            CaseStyle::Pascal => "pascal-case",
            CaseStyle::Sentence => "sentence-case",
            CaseStyle::Snake => "snake-case",
            CaseStyle::Start => "start-case",
        }
    }

    /// Get all case styles.
    pub fn all() -> &'static [CaseStyle] {
        &[
            CaseStyle::Lower,
            CaseStyle::Upper,
            CaseStyle::Camel,
            CaseStyle::Kebab,
            CaseStyle::Pascal,
            CaseStyle::Sentence,
            CaseStyle::Snake,
            CaseStyle::Start,
        ]
    }
}

impl std::str::FromStr for CaseStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::all()
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The parameter a rule is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// No parameter (`body-leading-blank`, `subject-empty`).
    Flag,
    /// An ordered list of accepted tokens (`type-enum`, `subject-case`).
    Enumerated(Vec<String>),
    /// A single token (`subject-full-stop`, `type-case`).
    Token(String),
    /// A numeric bound (`header-max-length`).
    Bound(usize),
}

impl Condition {
    /// The parameter shape, without its value.
    pub fn kind(&self) -> ConditionKind {
        match self {
            Condition::Flag => ConditionKind::Flag,
            Condition::Enumerated(_) => ConditionKind::Enumerated,
            Condition::Token(_) => ConditionKind::Token,
            Condition::Bound(_) => ConditionKind::Bound,
        }
    }
}

/// Parameter shape of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    Flag,
    Enumerated,
    Token,
    Bound,
}

impl ConditionKind {
    /// How the parameter is written in a configuration entry.
    pub fn describe(&self) -> &'static str {
        match self {
            ConditionKind::Flag => "no value",
            ConditionKind::Enumerated => "a list of strings",
            ConditionKind::Token => "a string",
            ConditionKind::Bound => "a positive integer",
        }
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Condition::Flag => serializer.serialize_unit(),
            Condition::Enumerated(values) => values.serialize(serializer),
            Condition::Token(token) => serializer.serialize_str(token),
            Condition::Bound(limit) => serializer.serialize_u64(*limit as u64),
        }
    }
}

/// A single rule definition: `[severity, applicability, value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub severity: Severity,
    pub applicability: Applicability,
    pub condition: Condition,
}

impl RuleSpec {
    /// A rule without a parameter.
    pub fn flag(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            condition: Condition::Flag,
        }
    }

    /// A rule accepting one of several tokens.
    pub fn enumerated<I, S>(severity: Severity, applicability: Applicability, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            severity,
            applicability,
            condition: Condition::Enumerated(values.into_iter().map(Into::into).collect()),
        }
    }

    /// A rule with a single token parameter.
    pub fn token(severity: Severity, applicability: Applicability, token: impl Into<String>) -> Self {
        Self {
            severity,
            applicability,
            condition: Condition::Token(token.into()),
        }
    }

    /// A rule with a numeric bound.
    pub fn bound(severity: Severity, applicability: Applicability, limit: usize) -> Self {
        Self {
            severity,
            applicability,
            condition: Condition::Bound(limit),
        }
    }

    /// The accepted tokens of an enumerated rule.
    pub fn allowed_values(&self) -> Option<&[String]> {
        match &self.condition {
            Condition::Enumerated(values) => Some(values),
            _ => None,
        }
    }

    /// The bound of a numeric rule.
    pub fn limit(&self) -> Option<usize> {
        match self.condition {
            Condition::Bound(limit) => Some(limit),
            _ => None,
        }
    }

    /// The parameter of a single-token rule.
    pub fn token_value(&self) -> Option<&str> {
        match &self.condition {
            Condition::Token(token) => Some(token),
            _ => None,
        }
    }
}

impl Serialize for RuleSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.condition == Condition::Flag { 2 } else { 3 };
        let mut tuple = serializer.serialize_tuple(len)?;
        tuple.serialize_element(&self.severity)?;
        tuple.serialize_element(&self.applicability)?;
        if self.condition != Condition::Flag {
            tuple.serialize_element(&self.condition)?;
        }
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels() {
        assert_eq!(Severity::from_level(0), Some(Severity::Off));
        assert_eq!(Severity::from_level(1), Some(Severity::Warning));
        assert_eq!(Severity::from_level(2), Some(Severity::Error));
        assert_eq!(Severity::from_level(3), None);
        assert_eq!(Severity::from_level(-1), None);
        assert_eq!(Severity::Error.level(), 2);
        assert!(!Severity::Off.is_enabled());
        assert!(Severity::Warning.is_enabled());
    }

    #[test]
    fn test_applicability_from_str() {
        assert_eq!("always".parse::<Applicability>(), Ok(Applicability::Always));
        assert_eq!("never".parse::<Applicability>(), Ok(Applicability::Never));
        assert!("Always".parse::<Applicability>().is_err());
        assert!("sometimes".parse::<Applicability>().is_err());
    }

    #[test]
    fn test_case_style_from_str() {
        assert_eq!("sentence-case".parse::<CaseStyle>(), Ok(CaseStyle::Sentence));
        assert_eq!(CaseStyle::Start.to_string(), "start-case");
        assert!("title-case".parse::<CaseStyle>().is_err());
    }

    #[test]
    fn test_accessors() {
        let spec = RuleSpec::bound(Severity::Warning, Applicability::Always, 72);
        assert_eq!(spec.limit(), Some(72));
        assert!(spec.allowed_values().is_none());

        let spec = RuleSpec::enumerated(Severity::Error, Applicability::Always, ["feat", "fix"]);
        assert_eq!(spec.allowed_values(), Some(&["feat".to_string(), "fix".to_string()][..]));
        assert!(spec.limit().is_none());

        let spec = RuleSpec::token(Severity::Error, Applicability::Never, ".");
        assert_eq!(spec.token_value(), Some("."));
        assert_eq!(spec.condition.kind(), ConditionKind::Token);
    }

    #[test]
    fn test_spec_serializes_as_tuple() {
        let spec = RuleSpec::bound(Severity::Warning, Applicability::Always, 72);
        assert_eq!(serde_json::to_string(&spec).unwrap(), r#"[1,"always",72]"#);

        let spec = RuleSpec::flag(Severity::Error, Applicability::Never);
        assert_eq!(serde_json::to_string(&spec).unwrap(), r#"[2,"never"]"#);

        let spec = RuleSpec::enumerated(Severity::Error, Applicability::Always, ["feat"]);
        assert_eq!(serde_json::to_string(&spec).unwrap(), r#"[2,"always",["feat"]]"#);
    }
}
