//! Facet validators
//!
//! Each facet is a stateless [`Validate`](crate::foundation::Validate)
//! implementation over `str`:
//!
//! - [`LengthBounds`] — optional min / max length in a chosen [`LengthMode`]
//! - [`RegexPattern`] — full-match regular expression

pub mod length;
pub mod pattern;

pub use length::{LengthBounds, LengthMode};
pub use pattern::{RegexPattern, full_match};
