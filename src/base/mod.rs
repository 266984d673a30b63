// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in base rulesets and `extends` resolution.
//!
//! A table that extends a base is resolved in two steps: the bases are
//! merged in declaration order, then the table's own rules are applied on
//! top, replacing base rules of the same name.

mod conventional;

use lazy_static::lazy_static;

use crate::error::ConfigError;
use crate::rules::RuleTable;

/// Name of the conventional-commits base ruleset.
pub const CONFIG_CONVENTIONAL: &str = "@commitlint/config-conventional";

/// Short alias for [`CONFIG_CONVENTIONAL`].
pub const CONFIG_CONVENTIONAL_ALIAS: &str = "config-conventional";

lazy_static! {
    static ref CONVENTIONAL: RuleTable =
        conventional::rules().expect("built-in conventional rules are valid");
}

/// Look up a base ruleset by name.
pub fn ruleset(name: &str) -> Option<&'static RuleTable> {
    match name {
        CONFIG_CONVENTIONAL | CONFIG_CONVENTIONAL_ALIAS => Some(&*CONVENTIONAL),
        _ => None,
    }
}

/// Names accepted by [`ruleset`].
pub fn known_names() -> &'static [&'static str] {
    &[CONFIG_CONVENTIONAL, CONFIG_CONVENTIONAL_ALIAS]
}

/// Produce the effective table for `local`.
pub fn resolve(local: &RuleTable) -> Result<RuleTable, ConfigError> {
    let mut inherited = RuleTable::default();

    for name in local.extends() {
        let base = ruleset(name).ok_or_else(|| ConfigError::UnknownBase { name: name.clone() })?;
        tracing::debug!("Extending base ruleset '{}' ({} rules)", name, base.len());
        inherited = RuleTable::merge(&inherited, base);
    }

    let overridden = local.names().filter(|name| inherited.contains(name)).count();
    if !local.extends().is_empty() && overridden == 0 {
        tracing::warn!("Configuration extends {:?} but overrides none of its rules", local.extends());
    }

    Ok(RuleTable::merge(&inherited, local))
}
