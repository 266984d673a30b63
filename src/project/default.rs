// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The shipped configuration file.

/// The repository's `commitlint.toml`, the persisted form of
/// [`local_rules`](super::local_rules).
pub fn example_config() -> &'static str {
    include_str!("../../commitlint.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, ConfigFormat};
    use crate::rules::RuleTable;

    #[test]
    fn test_example_config_matches_local_rules() {
        let parsed = parse_config(example_config(), ConfigFormat::Toml).unwrap();
        assert_eq!(&parsed, crate::project::local_rules());
    }

    #[test]
    fn test_example_config_deserializes_directly() {
        let table: RuleTable = toml::from_str(example_config()).unwrap();
        assert_eq!(&table, crate::project::local_rules());
    }

    #[test]
    fn test_parsing_twice_is_idempotent() {
        let first = parse_config(example_config(), ConfigFormat::Toml).unwrap();
        let second = parse_config(example_config(), ConfigFormat::Toml).unwrap();
        assert_eq!(first, second);
    }
}
