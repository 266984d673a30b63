// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The immutable rule table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

use super::spec::RuleSpec;
use super::validator::validate_rule;

/// An immutable mapping from rule name to [`RuleSpec`].
///
/// A table is only built through [`RuleTableBuilder`], which validates every
/// rule, or through [`RuleTable::merge`] of two already valid tables. There
/// are no mutating methods, so a table can be shared by reference across
/// threads for the life of the process.
///
/// Deserializing a table validates it the same way; `extends` is recorded but
/// not resolved (see [`crate::base::resolve`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "crate::config::ConfigFile")]
pub struct RuleTable {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extends: Vec<String>,
    rules: BTreeMap<String, RuleSpec>,
}

impl RuleTable {
    /// Start building a table.
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// Look up a rule. `None` means the rule is not configured.
    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the base rulesets this table extends, in declaration order.
    pub fn extends(&self) -> &[String] {
        &self.extends
    }

    /// Rule names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Rules in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSpec)> {
        self.rules.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Merge two tables. Rules in `overlay` replace rules of the same name in
    /// `base`; every other base rule is kept as is. The result extends what
    /// `overlay` extends.
    pub fn merge(base: &RuleTable, overlay: &RuleTable) -> RuleTable {
        let mut rules = base.rules.clone();
        for (name, spec) in &overlay.rules {
            if let Some(previous) = rules.insert(name.clone(), spec.clone()) {
                tracing::debug!("Rule '{}' overrides {:?}", name, previous);
            }
        }

        RuleTable {
            extends: overlay.extends.clone(),
            rules,
        }
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = (&'a String, &'a RuleSpec);
    type IntoIter = std::collections::btree_map::Iter<'a, String, RuleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Builder for [`RuleTable`]. Nothing is checked until [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct RuleTableBuilder {
    extends: Vec<String>,
    rules: Vec<(String, RuleSpec)>,
}

impl RuleTableBuilder {
    /// Extend a named base ruleset.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extends.push(name.into());
        self
    }

    /// Define a rule.
    pub fn rule(mut self, name: impl Into<String>, spec: RuleSpec) -> Self {
        self.rules.push((name.into(), spec));
        self
    }

    /// Validate every rule and freeze the table.
    pub fn build(self) -> Result<RuleTable, RuleError> {
        let mut rules = BTreeMap::new();

        for (name, spec) in self.rules {
            validate_rule(&name, &spec)?;
            if rules.contains_key(&name) {
                return Err(RuleError::Duplicate { rule: name });
            }
            rules.insert(name, spec);
        }

        Ok(RuleTable {
            extends: self.extends,
            rules,
        })
    }
}
