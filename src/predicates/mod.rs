//! Built-in predicate catalog.
//!
//! Every predicate here is a pure function-object: constructed with
//! its parameters, carrying both failure messages built once at
//! construction time, and free of state across invocations.
//!
//! A value of an unexpected JSON type simply fails the test — a length
//! check against a number reports the length message, it does not
//! crash. Predicates whose configuration can be invalid (bounds that
//! admit nothing, a regex that does not compile) return
//! [`SchemaError`](crate::foundation::SchemaError) from their
//! constructors instead.

mod custom;
mod equals;
mod kind;
mod length;
mod membership;
mod pattern;
mod range;
mod truthy;

pub use custom::{custom, Custom};
pub use equals::{blank, equals, Blank, Equals};
pub use kind::{instance_of, subclass_of, InstanceOf, Kind, SubclassOf};
pub use length::{length, Length};
pub use membership::{contains, one_of, Contains, In};
pub use pattern::{pattern, Pattern};
pub use range::{exclusive_range, greater_than, range, GreaterThan, Range};
pub use truthy::{truthy, Truthy};

macro_rules! impl_into_rule {
    ($($predicate:ty),+ $(,)?) => {
        $(
            impl $crate::schema::IntoRule for $predicate {
                fn into_rule(self) -> $crate::schema::Rule {
                    $crate::schema::Rule::check(self)
                }
            }
        )+
    };
}

impl_into_rule!(
    Blank,
    Contains,
    Custom,
    Equals,
    GreaterThan,
    In,
    InstanceOf,
    Length,
    Pattern,
    Range,
    SubclassOf,
    Truthy,
);
