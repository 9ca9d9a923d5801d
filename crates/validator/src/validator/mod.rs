//! The stateful string validator
//!
//! [`StringValidator`] tracks the validity of the *last submitted* string
//! across three facets and fires edge-triggered callbacks when overall
//! validity flips.
//!
//! # State machine
//!
//! ```text
//!            update(s) with test(s) == false
//!   ┌───────┐ ─────────────────────────────▶ ┌─────────┐
//!   │ valid │        fires on_invalid         │ invalid │
//!   └───────┘ ◀───────────────────────────── └─────────┘
//!            update(s) with test(s) == true
//!                    fires on_valid
//! ```
//!
//! Updates that keep the overall value where it was fire nothing, even when
//! the length or regex facet changes underneath. Before any update the
//! validator is valid on every facet.
//!
//! # Callbacks
//!
//! Callbacks run synchronously on the calling thread. A panicking callback
//! unwinds out of [`StringValidator::update`] and is dropped; the validator's
//! state has already been updated at that point.

mod callback;

pub use callback::{Facet, FacetObserver, ObserverId, ValidityCallback, ValidityState};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::config::{CompiledRules, ValidationRules};
use crate::foundation::{ConfigResult, Validate, ValidationErrors};
use crate::validators::LengthMode;

/// A validator shared between its owner and widget bindings.
pub type SharedValidator = Rc<RefCell<StringValidator>>;

type BoxedCallback = Box<dyn ValidityCallback>;

/// Length and regex validator with edge-triggered validity callbacks.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use textguard::StringValidator;
///
/// let mut validator = StringValidator::new(Some(3), Some(5), None)?;
/// let flips = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&flips);
/// validator.set_on_invalid(move |_: &StringValidator| counter.set(counter.get() + 1));
///
/// validator.update("ab");
/// validator.update("a");
/// assert!(!validator.is_valid());
/// assert_eq!(flips.get(), 1);
/// # Ok::<(), textguard::ConfigError>(())
/// ```
pub struct StringValidator {
    rules: CompiledRules,
    state: ValidityState,
    on_valid: Option<BoxedCallback>,
    on_invalid: Option<BoxedCallback>,
    observers: SmallVec<[(ObserverId, Box<dyn FacetObserver>); 2]>,
    next_observer: u64,
}

impl StringValidator {
    /// Creates a validator. Absent values impose no constraint.
    pub fn new(
        min_length: Option<usize>,
        max_length: Option<usize>,
        regex_pattern: Option<&str>,
    ) -> ConfigResult<Self> {
        Self::from_rules(rules_from_parts(
            min_length,
            max_length,
            regex_pattern,
            LengthMode::default(),
        ))
    }

    /// Creates a validator from a rules value.
    pub fn from_rules(rules: ValidationRules) -> ConfigResult<Self> {
        Ok(Self::from_compiled(rules.compile()?))
    }

    fn from_compiled(rules: CompiledRules) -> Self {
        Self {
            rules,
            state: ValidityState::INITIAL,
            on_valid: None,
            on_invalid: None,
            observers: SmallVec::new(),
            next_observer: 0,
        }
    }

    /// Wraps the validator for sharing with widget bindings.
    #[must_use]
    pub fn into_shared(self) -> SharedValidator {
        Rc::new(RefCell::new(self))
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Replaces all three constraints at once.
    ///
    /// Keeps the current length mode. Stored state is left alone until the
    /// next [`update`](Self::update). On error nothing changes.
    pub fn set_validation(
        &mut self,
        min_length: Option<usize>,
        max_length: Option<usize>,
        regex_pattern: Option<&str>,
    ) -> ConfigResult<()> {
        self.set_rules(rules_from_parts(
            min_length,
            max_length,
            regex_pattern,
            self.rules.length.mode,
        ))
    }

    /// Replaces the whole configuration, length mode included.
    pub fn set_rules(&mut self, rules: ValidationRules) -> ConfigResult<()> {
        let compiled = rules.compile()?;
        tracing::debug!(
            min_length = ?rules.min_length,
            max_length = ?rules.max_length,
            pattern = ?rules.pattern,
            length_mode = ?rules.length_mode,
            "validator reconfigured"
        );
        self.rules = compiled;
        Ok(())
    }

    /// Current configuration as plain data.
    #[must_use]
    pub fn rules(&self) -> ValidationRules {
        self.rules.to_rules()
    }

    /// Minimum length, if any.
    #[must_use]
    pub fn min_length(&self) -> Option<usize> {
        self.rules.length.min
    }

    /// Maximum length, if any.
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.rules.length.max
    }

    /// The pattern as supplied, if any.
    #[must_use]
    pub fn regex_pattern(&self) -> Option<&str> {
        self.rules.pattern.as_ref().map(|p| p.as_str())
    }

    /// Unit used for length bounds.
    #[must_use]
    pub fn length_mode(&self) -> LengthMode {
        self.rules.length.mode
    }

    // ------------------------------------------------------------------
    // Stateless tests
    // ------------------------------------------------------------------

    /// Checks the length bounds. Does not touch stored state.
    #[must_use]
    pub fn test_length(&self, s: &str) -> bool {
        self.rules.length.is_valid(s)
    }

    /// Checks the pattern (full match). Does not touch stored state.
    #[must_use]
    pub fn test_regex(&self, s: &str) -> bool {
        self.rules.pattern.as_ref().is_none_or(|p| p.is_valid(s))
    }

    /// `test_length(s) && test_regex(s)`. Does not touch stored state.
    #[must_use]
    pub fn test(&self, s: &str) -> bool {
        self.test_length(s) && self.test_regex(s)
    }

    /// Like [`test`](Self::test) but reports every failed facet.
    pub fn explain(&self, s: &str) -> Result<(), ValidationErrors> {
        let length = self.rules.length.validate(s).err();
        let pattern = self.rules.pattern.as_ref().and_then(|p| p.validate(s).err());
        length
            .into_iter()
            .chain(pattern)
            .collect::<ValidationErrors>()
            .into_result(())
    }

    // ------------------------------------------------------------------
    // Stored state
    // ------------------------------------------------------------------

    /// Whether the last submitted string was valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state.valid
    }

    /// Whether the last submitted string satisfied the length bounds.
    #[must_use]
    pub fn is_length_valid(&self) -> bool {
        self.state.length
    }

    /// Whether the last submitted string matched the pattern.
    #[must_use]
    pub fn is_regex_valid(&self) -> bool {
        self.state.regex
    }

    /// All three facets at once.
    #[must_use]
    pub fn state(&self) -> ValidityState {
        self.state
    }

    /// Submits a string and updates stored state.
    ///
    /// Facet observers hear about every facet that changed. If overall
    /// validity flipped, exactly one of `on_valid` / `on_invalid` fires
    /// afterwards. The string itself is not retained.
    pub fn update(&mut self, s: &str) {
        let previous = self.state;
        let next = ValidityState::from_facets(self.test_length(s), self.test_regex(s));
        self.state = next;

        tracing::trace!(
            length_valid = next.length,
            regex_valid = next.regex,
            valid = next.valid,
            "validity updated"
        );

        if previous == next {
            return;
        }

        for (facet, value) in previous.changed(next) {
            for (_, observer) in &mut self.observers {
                observer.on_facet_change(facet, value);
            }
        }

        if previous.valid != next.valid {
            tracing::debug!(valid = next.valid, "validity flipped");
            self.fire(next.valid);
        }
    }

    // ------------------------------------------------------------------
    // Callbacks
    // ------------------------------------------------------------------

    /// Sets the callback fired when validity flips to valid.
    ///
    /// Fires once immediately if the validator is currently valid.
    pub fn set_on_valid(&mut self, callback: impl ValidityCallback + 'static) {
        self.on_valid = Some(Box::new(callback));
        if self.state.valid {
            self.fire(true);
        }
    }

    /// Sets the callback fired when validity flips to invalid.
    ///
    /// Fires once immediately if the validator is currently invalid.
    pub fn set_on_invalid(&mut self, callback: impl ValidityCallback + 'static) {
        self.on_invalid = Some(Box::new(callback));
        if !self.state.valid {
            self.fire(false);
        }
    }

    /// Removes the valid callback.
    pub fn clear_on_valid(&mut self) {
        self.on_valid = None;
    }

    /// Removes the invalid callback.
    pub fn clear_on_invalid(&mut self) {
        self.on_invalid = None;
    }

    /// Returns true if a valid callback is set.
    #[must_use]
    pub fn has_on_valid(&self) -> bool {
        self.on_valid.is_some()
    }

    /// Returns true if an invalid callback is set.
    #[must_use]
    pub fn has_on_invalid(&self) -> bool {
        self.on_invalid.is_some()
    }

    /// Registers a facet observer.
    pub fn observe(&mut self, observer: impl FacetObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a facet observer. Returns false if `id` was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn slot(&mut self, valid: bool) -> &mut Option<BoxedCallback> {
        if valid {
            &mut self.on_valid
        } else {
            &mut self.on_invalid
        }
    }

    // The callback is taken out for the call so it can borrow `self`.
    fn fire(&mut self, valid: bool) {
        let Some(mut callback) = self.slot(valid).take() else {
            return;
        };
        callback.on_transition(self);
        *self.slot(valid) = Some(callback);
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::from_compiled(CompiledRules::default())
    }
}

impl fmt::Debug for StringValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringValidator")
            .field("rules", &self.rules)
            .field("state", &self.state)
            .field("on_valid", &self.on_valid.is_some())
            .field("on_invalid", &self.on_invalid.is_some())
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn rules_from_parts(
    min_length: Option<usize>,
    max_length: Option<usize>,
    regex_pattern: Option<&str>,
    length_mode: LengthMode,
) -> ValidationRules {
    ValidationRules {
        min_length,
        max_length,
        pattern: regex_pattern.map(str::to_owned),
        length_mode,
    }
}

// ============================================================================
// TESTS
// ============================================================================
