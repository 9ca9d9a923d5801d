//! Length facet
//!
//! By default, length is measured in Unicode scalar values (chars). The
//! other modes exist for hosts whose text APIs count differently: `Utf16`
//! matches platforms that report UTF-16 code units, `Bytes` is the raw UTF-8
//! length. A validator uses exactly one mode for both of its bounds.

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count UTF-8 bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
    /// Count UTF-16 code units (astral characters count as two).
    Utf16,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Utf16 => input.encode_utf16().count(),
        }
    }
}

// ============================================================================
// LENGTH BOUNDS
// ============================================================================

/// Optional inclusive lower and upper length bounds.
///
/// An absent bound imposes no constraint on its side. An inverted range
/// (`min > max`) is accepted as-is and simply rejects every string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LengthBounds {
    /// Minimum length (inclusive).
    pub min: Option<usize>,
    /// Maximum length (inclusive).
    pub max: Option<usize>,
    /// How to count length.
    pub mode: LengthMode,
}

impl LengthBounds {
    /// Creates bounds measured in chars.
    #[must_use]
    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min,
            max,
            mode: LengthMode::Chars,
        }
    }

    /// Bounds that accept every string.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Switches the counting mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns true when no bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Returns true when both bounds are set and `min > max`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    fn admits(&self, len: usize) -> bool {
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}

impl Validate for LengthBounds {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = self.mode.measure(input);
        if let Some(min) = self.min.filter(|&min| len < min) {
            return Err(ValidationError::min_length(min, len));
        }
        if let Some(max) = self.max.filter(|&max| len > max) {
            return Err(ValidationError::max_length(max, len));
        }
        Ok(())
    }

    fn is_valid(&self, input: &Self::Input) -> bool {
        if self.is_unbounded() {
            return true;
        }
        self.admits(self.mode.measure(input))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_accepts_everything() {
        let bounds = LengthBounds::unbounded();
        assert!(bounds.is_valid(""));
        assert!(bounds.is_valid(&"x".repeat(10_000)));
    }

    #[test]
    fn test_min_only() {
        let bounds = LengthBounds::new(Some(3), None);
        assert!(!bounds.is_valid("ab"));
        assert!(bounds.is_valid("abc"));
        assert!(bounds.is_valid("abcdefgh"));
    }

    #[test]
    fn test_max_only() {
        let bounds = LengthBounds::new(None, Some(3));
        assert!(bounds.is_valid(""));
        assert!(bounds.is_valid("abc"));
        assert!(!bounds.is_valid("abcd"));
    }

    #[test]
    fn test_boundaries_inclusive() {
        let bounds = LengthBounds::new(Some(3), Some(5));
        assert!(bounds.is_valid("abc"));
        assert!(bounds.is_valid("abcde"));
        assert!(!bounds.is_valid("ab"));
        assert!(!bounds.is_valid("abcdef"));
    }

    #[test]
    fn test_inverted_range_rejects_everything() {
        let bounds = LengthBounds::new(Some(5), Some(3));
        assert!(bounds.is_inverted());
        for s in ["", "abc", "abcd", "abcde", "abcdefg"] {
            assert!(!bounds.is_valid(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_reports_which_side() {
        let bounds = LengthBounds::new(Some(3), Some(5));
        let short = bounds.validate("ab").unwrap_err();
        assert_eq!(short.code, "min_length");
        assert_eq!(short.param("actual"), Some("2"));

        let long = bounds.validate("abcdef").unwrap_err();
        assert_eq!(long.code, "max_length");
        assert_eq!(long.param("max"), Some("5"));
    }

    #[test]
    fn test_unicode_modes() {
        // "h\u{e9}llo": 5 chars, 6 bytes, 5 UTF-16 units
        // "\u{1f44b}\u{1f30d}": 2 chars, 8 bytes, 4 UTF-16 units
        assert_eq!(LengthMode::Chars.measure("h\u{e9}llo"), 5);
        assert_eq!(LengthMode::Bytes.measure("h\u{e9}llo"), 6);
        assert_eq!(LengthMode::Utf16.measure("\u{1f44b}\u{1f30d}"), 4);

        let emoji = "\u{1f44b}\u{1f30d}";
        assert!(!LengthBounds::new(Some(3), None).is_valid(emoji));
        assert!(
            LengthBounds::new(Some(3), None)
                .with_mode(LengthMode::Utf16)
                .is_valid(emoji)
        );
        assert!(
            !LengthBounds::new(None, Some(6))
                .with_mode(LengthMode::Bytes)
                .is_valid(emoji)
        );
    }

    #[test]
    fn test_mode_serde_names() {
        let mode: LengthMode = serde_json::from_str("\"utf16\"").unwrap();
        assert_eq!(mode, LengthMode::Utf16);
        assert_eq!(serde_json::to_string(&LengthMode::Chars).unwrap(), "\"chars\"");
    }
}
