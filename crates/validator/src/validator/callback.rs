//! Callback and observer contracts
//!
//! Two kinds of listener hang off a [`StringValidator`]:
//!
//! - a [`ValidityCallback`] per direction (`on_valid`, `on_invalid`), fired
//!   only when overall validity flips, plus once on assignment if the current
//!   state already matches;
//! - any number of [`FacetObserver`]s, told about every individual facet
//!   value that changes during an update.
//!
//! Both are blanket-implemented for closures.

use std::fmt;

use super::StringValidator;

/// Called when a validator's overall validity flips.
///
/// The validator is passed in so one callback can serve several validators
/// and tell them apart.
pub trait ValidityCallback {
    /// Invoked synchronously from `update` or callback assignment.
    fn on_transition(&mut self, validator: &StringValidator);
}

impl<F> ValidityCallback for F
where
    F: FnMut(&StringValidator),
{
    fn on_transition(&mut self, validator: &StringValidator) {
        self(validator);
    }
}

/// One of the three observable booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// `is_length_valid`
    Length,
    /// `is_regex_valid`
    Regex,
    /// `is_valid`
    Overall,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Regex => write!(f, "regex"),
            Self::Overall => write!(f, "overall"),
        }
    }
}

/// Notified when a single facet changes value.
pub trait FacetObserver {
    /// Invoked once per changed facet, in `Length`, `Regex`, `Overall` order.
    fn on_facet_change(&mut self, facet: Facet, value: bool);
}

impl<F> FacetObserver for F
where
    F: FnMut(Facet, bool),
{
    fn on_facet_change(&mut self, facet: Facet, value: bool) {
        self(facet, value);
    }
}

/// Handle returned by [`StringValidator::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// Snapshot of a validator's three booleans.
///
/// `valid == length && regex` holds for every value built through
/// [`ValidityState::from_facets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidityState {
    /// Result of the last length check.
    pub length: bool,
    /// Result of the last regex check.
    pub regex: bool,
    /// `length && regex`.
    pub valid: bool,
}

impl ValidityState {
    /// State before any string has been submitted: vacuously valid.
    pub const INITIAL: Self = Self::from_facets(true, true);

    /// Derives the combined facet.
    #[must_use]
    pub const fn from_facets(length: bool, regex: bool) -> Self {
        Self {
            length,
            regex,
            valid: length && regex,
        }
    }

    /// Facets whose value differs between `self` and `next`.
    pub(crate) fn changed(self, next: Self) -> impl Iterator<Item = (Facet, bool)> {
        [
            (Facet::Length, self.length, next.length),
            (Facet::Regex, self.regex, next.regex),
            (Facet::Overall, self.valid, next.valid),
        ]
        .into_iter()
        .filter(|(_, before, after)| before != after)
        .map(|(facet, _, after)| (facet, after))
    }
}

impl Default for ValidityState {
    fn default() -> Self {
        Self::INITIAL
    }
}
