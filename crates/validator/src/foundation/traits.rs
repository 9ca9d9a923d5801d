//! Core traits for the validation system

use crate::foundation::ValidationError;

/// A stateless check over an input value.
///
/// Facet validators ([`LengthBounds`](crate::validators::LengthBounds),
/// [`RegexPattern`](crate::validators::RegexPattern)) implement this trait;
/// the stateful [`StringValidator`](crate::StringValidator) composes them.
///
/// # Examples
///
/// ```rust
/// use textguard::foundation::{Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("not_blank", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.is_valid("x"));
/// assert!(!NotBlank.is_valid("  "));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean form of [`validate`](Self::validate).
    ///
    /// Implementors with a cheaper predicate than building the error should
    /// override this.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn is_valid(&self, input: &Self::Input) -> bool {
        (**self).is_valid(input)
    }
}
