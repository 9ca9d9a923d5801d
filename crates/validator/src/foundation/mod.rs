//! Foundation types shared by every validator
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ConfigError`], [`ValidationError`], [`ValidationErrors`]

pub mod error;
pub mod traits;

pub use error::{ConfigError, ValidationError, ValidationErrors};
pub use traits::Validate;

/// Result of a configuration step.
pub type ConfigResult<T> = Result<T, ConfigError>;
