//! # textguard
//!
//! Edge-triggered validation for text fields.
//!
//! A [`StringValidator`] checks strings against optional length bounds and an
//! optional full-match regex, remembers whether the *last submitted* string
//! was valid, and calls back only when that answer flips.
//!
//! ## Quick Start
//!
//! ```rust
//! use textguard::prelude::*;
//!
//! let mut validator = StringValidator::new(Some(3), Some(5), None)?;
//! assert!(validator.test("abcd"));
//! assert!(validator.is_valid()); // nothing submitted yet
//!
//! validator.update("ab");
//! assert!(!validator.is_valid());
//! assert!(!validator.is_length_valid());
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Widget bindings
//!
//! [`binding::TextValidation`] binds a shared validator to a
//! [`widget::Label`] or [`widget::TextField`]; every text change is forwarded
//! to [`StringValidator::update`].
//!
//! ## Threading
//!
//! Everything here is single-threaded. Validators are shared through
//! `Rc<RefCell<_>>` and the binding table is thread-local.

pub mod binding;
pub mod config;
pub mod foundation;
pub mod prelude;
pub mod validator;
pub mod validators;
pub mod widget;

pub use config::ValidationRules;
pub use foundation::{ConfigError, ValidationError, ValidationErrors};
pub use validator::{SharedValidator, StringValidator};
