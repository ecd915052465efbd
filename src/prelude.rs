//! One-stop imports for schema construction and validation.
//!
//! ```
//! use vouch::prelude::*;
//! ```

pub use crate::combinators::{not, Each, If, Not, Then};
pub use crate::engine::validate;
pub use crate::foundation::{
    ErrorEntry, ErrorMap, FieldErrors, Predicate, Report, SchemaError, FALLBACK_MESSAGE,
    MUST_BE_PRESENT,
};
pub use crate::predicates::*;
pub use crate::schema::{IntoRule, Required, Rule, Schema};
pub use crate::{each, schema};
