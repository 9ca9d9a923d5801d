//! Regex facet
//!
//! Patterns are always matched against the *whole* input. `[0-9]{3}` and
//! `^[0-9]{3}$` behave identically: both reject `"1234"`.

use std::fmt;

use regex::Regex;
use regex_automata::meta;
use regex_syntax::hir::{Hir, Look};

use crate::foundation::{ConfigError, Validate, ValidationError};

/// A compiled, full-match regular expression.
///
/// The caller's pattern is checked with [`Regex::new`], so it is accepted
/// exactly when the `regex` crate accepts it. Matching runs on the parsed
/// pattern wrapped between start-of-text and end-of-text assertions. The
/// anchors are added to the syntax tree, never to the pattern text, so
/// inline flags such as `(?x)` comments cannot reach them.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: String,
    anchored: meta::Regex,
}

impl RegexPattern {
    /// Compiles `pattern`, failing fast on malformed input.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern).map_err(|e| ConfigError::invalid_pattern(pattern, e))?;

        let hir = regex_syntax::Parser::new().parse(pattern).map_err(|e| {
            ConfigError::invalid_pattern(pattern, regex::Error::Syntax(e.to_string()))
        })?;
        let anchored_hir = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        let anchored = meta::Regex::builder()
            .build_from_hir(&anchored_hir)
            .map_err(|e| {
                ConfigError::invalid_pattern(pattern, regex::Error::Syntax(e.to_string()))
            })?;

        Ok(Self {
            source: pattern.to_owned(),
            anchored,
        })
    }

    /// The pattern as supplied by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the pattern matches the entire input.
    #[must_use]
    pub fn is_full_match(&self, input: &str) -> bool {
        self.anchored.is_match(input)
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for RegexPattern {}

impl fmt::Display for RegexPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Validate for RegexPattern {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.is_full_match(input) {
            Ok(())
        } else {
            Err(ValidationError::pattern(self.source.clone()))
        }
    }

    fn is_valid(&self, input: &Self::Input) -> bool {
        self.is_full_match(input)
    }
}

/// Compiles a full-match pattern.
pub fn full_match(pattern: &str) -> Result<RegexPattern, ConfigError> {
    RegexPattern::new(pattern)
}
