//! Regular expression values

use std::fmt;

use regex::{Regex, RegexBuilder};

use super::errors::{ConversionError, ConversionResult};

const SUPPORTED_OPTIONS: &[char] = &['i', 'm', 's', 'x'];

/// A regular expression stored as pattern text plus option flags.
///
/// Options are kept sorted and de-duplicated so that two expressions with
/// the same flags in a different order are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegularExpression {
    pattern: String,
    options: String,
}

impl RegularExpression {
    /// Creates a regular expression, normalizing the option flags
    pub fn new(pattern: impl Into<String>, options: &str) -> Self {
        let mut flags: Vec<char> = options.chars().collect();
        flags.sort_unstable();
        flags.dedup();
        Self {
            pattern: pattern.into(),
            options: flags.into_iter().collect(),
        }
    }

    /// Pattern text
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Normalized option flags
    pub fn options(&self) -> &str {
        &self.options
    }

    /// Compiles the expression, honoring the `i`, `m`, `s` and `x` flags
    pub fn compile(&self) -> ConversionResult<Regex> {
        let mut builder = RegexBuilder::new(&self.pattern);
        for flag in self.options.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                other => return Err(ConversionError::UnknownRegexOption(other)),
            };
        }
        builder
            .build()
            .map_err(|e| ConversionError::InvalidRegex(e.to_string()))
    }

    /// Returns true if every option flag is supported
    pub fn has_supported_options(&self) -> bool {
        self.options.chars().all(|c| SUPPORTED_OPTIONS.contains(&c))
    }
}

impl fmt::Display for RegularExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.options)
    }
}
