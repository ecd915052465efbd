//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Traits**: [`Predicate`] — the capability every check implements
//! - **Reports**: [`Report`], [`FieldErrors`], [`ErrorEntry`] — the
//!   error tree mirroring schema nesting
//! - **Configuration errors**: [`SchemaError`] — raised at schema
//!   construction time, never folded into a report
//!
//! # Architecture
//!
//! Validation failures are plain data, not `Err` values: running a
//! schema against data always yields a [`Report`], and the report is
//! valid exactly when its error map is empty. Only *building* an
//! invalid schema (for example a [`Length`](crate::predicates::Length)
//! that admits nothing) returns a [`SchemaError`].

pub mod error;
pub mod traits;

pub use error::{Entries, ErrorEntry, ErrorMap, FieldErrors, Report, SchemaError, MUST_BE_PRESENT};
pub use traits::{Predicate, FALLBACK_MESSAGE};
