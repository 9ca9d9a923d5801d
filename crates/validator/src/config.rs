//! Validator configuration
//!
//! [`ValidationRules`] is the plain-data form of a validator's constraints.
//! It deserializes from JSON (or anything serde speaks) and compiles into the
//! facet validators a [`StringValidator`](crate::StringValidator) runs.
//!
//! ```rust
//! use textguard::ValidationRules;
//!
//! let rules = ValidationRules::from_json(r#"{ "min_length": 3, "pattern": "[a-z]+" }"#)?;
//! assert_eq!(rules.min_length, Some(3));
//! # Ok::<(), textguard::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigResult;
use crate::validators::{LengthBounds, LengthMode, RegexPattern};

/// Constraints for a string validator. Every field is optional; an absent
/// field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationRules {
    /// Minimum length (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum length (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regex the whole string must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Unit for both length bounds.
    pub length_mode: LengthMode,
}

impl ValidationRules {
    /// Rules with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length.
    #[must_use]
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets the pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the length counting mode.
    #[must_use]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Parses rules from a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compiles the rules. Fails if the pattern does not compile.
    pub fn compile(&self) -> ConfigResult<CompiledRules> {
        let pattern = self.pattern.as_deref().map(RegexPattern::new).transpose()?;
        let length = LengthBounds::new(self.min_length, self.max_length).with_mode(self.length_mode);
        if length.is_inverted() {
            tracing::warn!(
                min_length = ?self.min_length,
                max_length = ?self.max_length,
                "inverted length range: no string will satisfy it"
            );
        }
        Ok(CompiledRules { length, pattern })
    }
}

/// Rules after pattern compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledRules {
    /// Length facet.
    pub length: LengthBounds,
    /// Regex facet; `None` means no pattern constraint.
    pub pattern: Option<RegexPattern>,
}

impl CompiledRules {
    /// Recovers the plain-data form.
    #[must_use]
    pub fn to_rules(&self) -> ValidationRules {
        ValidationRules {
            min_length: self.length.min,
            max_length: self.length.max,
            pattern: self.pattern.as_ref().map(|p| p.as_str().to_owned()),
            length_mode: self.length.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_means_no_constraints() {
        let rules = ValidationRules::from_json("{}").unwrap();
        assert_eq!(rules, ValidationRules::new());

        let compiled = rules.compile().unwrap();
        assert!(compiled.length.is_unbounded());
        assert!(compiled.pattern.is_none());
    }

    #[test]
    fn json_round_trips_through_compile() {
        let json = r#"{ "min_length": 2, "max_length": 8, "pattern": "[a-z]+", "length_mode": "utf16" }"#;
        let rules = ValidationRules::from_json(json).unwrap();
        assert_eq!(
            rules,
            ValidationRules::new()
                .with_min_length(2)
                .with_max_length(8)
                .with_pattern("[a-z]+")
                .with_length_mode(LengthMode::Utf16)
        );
        assert_eq!(rules.compile().unwrap().to_rules(), rules);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ValidationRules::from_json(r#"{ "minLength": 2 }"#).unwrap_err();
        assert!(matches!(err, crate::ConfigError::Parse(_)));
    }

    #[test]
    fn bad_pattern_fails_compile() {
        let err = ValidationRules::new().with_pattern("[").compile().unwrap_err();
        assert_eq!(err.pattern(), Some("["));
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let json = serde_json::to_string(&ValidationRules::new().with_min_length(1)).unwrap();
        assert_eq!(json, r#"{"min_length":1,"length_mode":"chars"}"#);
    }
}
