//! # vouch
//!
//! Declarative validation of JSON-shaped dictionaries.
//!
//! A schema maps field names to ordered lists of composable rules;
//! [`validate`] walks the schema against a data mapping and produces a
//! structured [`Report`](foundation::Report) of which fields failed
//! which rules and why. Fields are optional unless marked
//! [`Required`](schema::Required); failures accumulate instead of
//! short-circuiting; a rule that blows up against malformed data
//! becomes an ordinary failure message, never a crash.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use vouch::prelude::*;
//!
//! let rules = schema! {
//!     "name" => [Required, length(1, 40).unwrap()],
//!     "age" => [range(0, 130)],
//! };
//!
//! let data = json!({ "name": "Ada", "age": 36 });
//! let report = validate(&rules, data.as_object().unwrap());
//! assert!(report.is_valid());
//!
//! let data = json!({ "age": 217 });
//! let report = validate(&rules, data.as_object().unwrap());
//! assert!(!report.is_valid());
//! assert!(report.field("name").unwrap().is_missing());
//! ```
//!
//! ## Building blocks
//!
//! - **Predicates** ([`predicates`]): single-value checks such as
//!   [`Equals`](predicates::Equals), [`Range`](predicates::Range),
//!   [`Pattern`](predicates::Pattern), [`Length`](predicates::Length).
//! - **Combinators** ([`combinators`]): [`Not`](combinators::Not)
//!   negation, [`If`](combinators::If)/[`Then`](combinators::Then)
//!   cross-field dependencies, [`Each`](combinators::Each) per-element
//!   validation.
//! - **Schemas** ([`schema`]): rule lists per field, nestable for
//!   structural validation of inner mappings.
//!
//! Custom checks plug in through the
//! [`Predicate`](foundation::Predicate) trait or the
//! [`custom`](predicates::custom) adapter; the evaluator treats them
//! exactly like the built-ins.

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod predicates;
pub mod prelude;
pub mod schema;

pub use engine::validate;
pub use foundation::{Predicate, Report, SchemaError};
pub use schema::{Required, Rule, Schema};
