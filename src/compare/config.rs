//! Comparator configuration
//!
//! Immutable after construction. Loadable from JSON; absent fields take
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event};

/// How two regular expressions order against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegexOrdering {
    /// Pattern text first, then normalized option flags
    #[default]
    PatternThenOptions,
    /// Fail with `UnsupportedComparison`
    Reject,
}

impl RegexOrdering {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegexOrdering::PatternThenOptions => "pattern_then_options",
            RegexOrdering::Reject => "reject",
        }
    }
}

/// Comparator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Ordering rule for regular expressions (default: pattern then options)
    #[serde(default)]
    pub regex_ordering: RegexOrdering,
}

impl ComparatorConfig {
    /// Configuration that rejects regex-to-regex comparison
    pub fn reject_regex() -> Self {
        Self {
            regex_ordering: RegexOrdering::Reject,
        }
    }

    /// Parses a configuration from JSON
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        log_event_with_fields(
            Event::ConfigLoaded,
            &[("regex_ordering", config.regex_ordering.as_str())],
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orders_regex() {
        let config = ComparatorConfig::default();
        assert_eq!(config.regex_ordering, RegexOrdering::PatternThenOptions);
    }

    #[test]
    fn test_from_json_defaults() {
        let config = ComparatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ComparatorConfig::default());
    }

    #[test]
    fn test_from_json_reject() {
        let config = ComparatorConfig::from_json_str(r#"{"regex_ordering": "reject"}"#).unwrap();
        assert_eq!(config, ComparatorConfig::reject_regex());
    }

    #[test]
    fn test_from_json_unknown_rule() {
        assert!(ComparatorConfig::from_json_str(r#"{"regex_ordering": "random"}"#).is_err());
    }
}
