//! Prelude module for convenient imports.
//!
//! ```rust
//! use textguard::prelude::*;
//!
//! let field = TextField::new();
//! let validator = StringValidator::from_rules(ValidationRules::new().with_min_length(1))?;
//! # let _ = (field, validator);
//! # Ok::<(), ConfigError>(())
//! ```

pub use crate::binding::TextValidation;
pub use crate::config::ValidationRules;
pub use crate::foundation::{ConfigError, Validate, ValidationError, ValidationErrors};
pub use crate::validator::{
    Facet, FacetObserver, ObserverId, SharedValidator, StringValidator, ValidityCallback,
    ValidityState,
};
pub use crate::validators::{LengthBounds, LengthMode, RegexPattern, full_match};
pub use crate::widget::{Label, TextField, TextWidget, WidgetId};
