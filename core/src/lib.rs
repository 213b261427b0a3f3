//! Tagged two-variant containers and their combinators.
//!
//! - [`Maybe`]: a value that is present or absent, with no reason for absence.
//! - [`Outcome`]: a computation that is done with a value or failed with an error.
//! - [`Either`]: [`Outcome`] with left/right vocabulary.
//! - [`Pair`] and [`Triple`]: immutable fixed-arity tuples.
//!
//! Values are immutable: every combinator consumes its input and produces a new value. Combinators never catch panics
//! raised by the functions passed to them; only the `from_throwable` and `catch_future` conversions do.

pub mod panic;
pub mod maybe;
pub mod outcome;
pub mod either;
pub mod pair;
pub mod triple;

pub mod future;
pub mod iter;

pub mod app;

pub use either::{Cases as EitherCases, Either, left, right};
pub use future::OutcomeFutureExt;
pub use iter::FirstExt;
pub use maybe::{Cases as MaybeCases, Maybe, none, some};
pub use outcome::{Cases as OutcomeCases, done, fail, Outcome};
pub use pair::{pair, Pair};
pub use panic::Panic;
pub use triple::{triple, Triple};
