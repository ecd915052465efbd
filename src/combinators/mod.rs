//! Rule combinators: negation, conditional dependencies, per-element
//! validation.

mod conditional;
mod each;
mod not;

pub use conditional::{If, Then};
pub use each::Each;
pub(crate) use each::EachOutcome;
pub use not::{not, Not};
