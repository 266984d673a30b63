// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration file schema.
//!
//! Rules use the tuple encoding shared by commit linters:
//!
//! ```toml
//! extends = ["@commitlint/config-conventional"]
//!
//! [rules]
//! type-enum = [2, "always", ["feat", "fix"]]
//! header-max-length = [1, "always", 72]
//! body-leading-blank = [1, "always"]
//! footer-leading-blank = [0]
//! ```

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::RuleError;
use crate::rules::{validate_rule, Applicability, RuleSpec, RuleTable, Severity};

/// A configuration file as written on disk, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base rulesets to extend, in order.
    #[serde(default, deserialize_with = "one_or_many")]
    pub extends: Vec<String>,

    /// Rule entries in file order. Duplicates are kept so they can be reported.
    #[serde(default, deserialize_with = "rule_entries")]
    pub rules: Vec<(String, RawValue)>,
}

/// Any value that can appear in a rule entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<RawValue>),
}

impl RawValue {
    fn describe(&self) -> String {
        match self {
            RawValue::Integer(i) => format!("integer {}", i),
            RawValue::Float(f) => format!("float {}", f),
            RawValue::Bool(b) => format!("boolean {}", b),
            RawValue::Text(s) => format!("string '{}'", s),
            RawValue::List(items) => format!("list of {} items", items.len()),
        }
    }
}

impl TryFrom<ConfigFile> for RuleTable {
    type Error = RuleError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let mut builder = RuleTable::builder();
        for name in file.extends {
            builder = builder.extends(name);
        }
        for (name, value) in file.rules {
            let spec = parse_rule(&name, &value)?;
            builder = builder.rule(name, spec);
        }
        builder.build()
    }
}

/// Convert one raw entry into a [`RuleSpec`].
///
/// Problems are reported against the field they occur in, including a value
/// whose shape does not fit the rule (a number for `type-enum`).
pub fn parse_rule(name: &str, value: &RawValue) -> Result<RuleSpec, RuleError> {
    let items = match value {
        RawValue::List(items) => items,
        other => {
            return Err(RuleError::invalid(
                name,
                "entry",
                format!("expected [level, applicability, value], found {}", other.describe()),
            ))
        }
    };

    if items.is_empty() || items.len() > 3 {
        return Err(RuleError::invalid(
            name,
            "entry",
            format!("expected 1 to 3 elements, found {}", items.len()),
        ));
    }

    let severity = match &items[0] {
        RawValue::Integer(level) => Severity::from_level(*level),
        _ => None,
    }
    .ok_or_else(|| {
        RuleError::invalid(
            name,
            "severity",
            format!("expected 0, 1 or 2, found {}", items[0].describe()),
        )
    })?;

    let applicability = match items.get(1) {
        None => Applicability::Always,
        Some(RawValue::Text(text)) => text.parse::<Applicability>().map_err(|_| {
            RuleError::invalid(
                name,
                "applicability",
                format!("expected 'always' or 'never', found '{}'", text),
            )
        })?,
        Some(other) => {
            return Err(RuleError::invalid(
                name,
                "applicability",
                format!("expected 'always' or 'never', found {}", other.describe()),
            ))
        }
    };

    let spec = match items.get(2) {
        None => RuleSpec::flag(severity, applicability),
        Some(RawValue::Integer(limit)) => {
            let limit = usize::try_from(*limit)
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| {
                    RuleError::invalid(
                        name,
                        "limit",
                        format!("must be a positive integer, found {}", limit),
                    )
                })?;
            RuleSpec::bound(severity, applicability, limit)
        }
        Some(RawValue::Text(token)) => RuleSpec::token(severity, applicability, token.clone()),
        Some(RawValue::List(values)) => {
            let values = values
                .iter()
                .map(|value| match value {
                    RawValue::Text(text) => Ok(text.clone()),
                    other => Err(RuleError::invalid(
                        name,
                        "allowed values",
                        format!("expected strings, found {}", other.describe()),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?;
            RuleSpec::enumerated(severity, applicability, values)
        }
        Some(other) => {
            return Err(RuleError::invalid(
                name,
                "value",
                format!("unsupported {}", other.describe()),
            ))
        }
    };

    validate_rule(name, &spec)?;
    Ok(spec)
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}

/// Collect rule entries without collapsing repeated keys.
fn rule_entries<'de, D>(deserializer: D) -> Result<Vec<(String, RawValue)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, RawValue)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of rule names to rule entries")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, value)) = map.next_entry::<String, RawValue>()? {
                entries.push((name, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}
