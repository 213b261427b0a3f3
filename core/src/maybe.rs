use std::any::Any;
use std::future::Future;

use futures::{FutureExt, TryFuture, TryFutureExt};
use tracing::{debug, trace};

use crate::outcome::Outcome;
use crate::panic::catch;

/// An optional value: either [`Some`](Maybe::Some) value of `T` or [`None`](Maybe::None).
///
/// Absence carries no reason. Use [`Outcome`] when callers need to know why a value is missing.
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
  #[default]
  None,
  Some(T),
}

/// Handlers for [`Maybe::match_with`].
#[derive(Copy, Clone, Debug)]
pub struct Cases<S, N> {
  pub some: S,
  pub none: N,
}

#[inline]
pub const fn none<T>() -> Maybe<T> { Maybe::None }
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> { Maybe::Some(value) }

impl<T> Maybe<T> {
  /// Creates [`Some`](Self::Some) if `value` is present, [`None`](Self::None) otherwise.
  #[inline]
  pub fn new(value: Option<T>) -> Self { Self::from_nullable(value) }

  #[inline]
  pub fn from_nullable(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Some(value),
      None => Self::None,
    }
  }

  #[inline]
  pub fn from_predicate(value: T, predicate: impl FnOnce(&T) -> bool) -> Self {
    if predicate(&value) { Self::Some(value) } else { Self::None }
  }

  /// Runs `f`, returning [`Some`](Self::Some) with its return value, or [`None`](Self::None) if it panics. The panic
  /// is discarded; use [`Outcome::from_throwable`] to keep it.
  pub fn from_throwable(f: impl FnOnce() -> T) -> Self {
    match catch(f) {
      Ok(value) => Self::Some(value),
      Err(panic) => {
        debug!(%panic, "discarding captured panic");
        Self::None
      }
    }
  }

  /// Waits for `future` to settle: [`Some`](Self::Some) when it succeeds, [`None`](Self::None) when it fails.
  pub async fn from_future<F>(future: F) -> Self where
    F: TryFuture<Ok=T>,
  {
    match future.into_future().await {
      Ok(value) => Self::Some(value),
      Err(_) => {
        trace!("future failed; discarding its error");
        Self::None
      }
    }
  }

  /// Waits for `future` to complete: [`Some`](Self::Some) with its output, or [`None`](Self::None) if polling it
  /// panics.
  pub async fn catch_future<F>(future: F) -> Self where
    F: Future<Output=T>,
  {
    match std::panic::AssertUnwindSafe(future).catch_unwind().await {
      Ok(value) => Self::Some(value),
      Err(payload) => {
        debug!(panic = %crate::panic::Panic::new(payload), "discarding panic captured while polling future");
        Self::None
      }
    }
  }


  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Self::Some(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { matches!(self, Self::None) }

  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Self::Some(value) => Maybe::Some(value),
      Self::None => Maybe::None,
    }
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
    match self {
      Self::Some(value) => Maybe::Some(f(value)),
      Self::None => Maybe::None,
    }
  }

  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self {
      Self::Some(value) => f(value),
      Self::None => Maybe::None,
    }
  }

  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Some(value) => Self::from_predicate(value, predicate),
      Self::None => Self::None,
    }
  }

  /// Exhaustive case analysis: runs `cases.some` on the value if present, `cases.none` otherwise.
  #[inline]
  pub fn match_with<U>(self, cases: Cases<impl FnOnce(T) -> U, impl FnOnce() -> U>) -> U {
    match self {
      Self::Some(value) => (cases.some)(value),
      Self::None => (cases.none)(),
    }
  }


  #[inline]
  pub fn get_or_else(self, default: T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => default,
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Some(value) => Some(value),
      Self::None => None,
    }
  }

  /// Gets the value, or raises `error` as the panic payload if absent.
  ///
  /// The payload can be recovered from a surrounding [`Outcome::from_throwable`] with
  /// [`Panic::downcast`](crate::panic::Panic::downcast).
  #[track_caller]
  pub fn get_or_throw<E: Any + Send>(self, error: E) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => std::panic::panic_any(error),
    }
  }


  /// Pairs both values if both are present; absent if either is.
  #[inline]
  pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
    match (self, other) {
      (Self::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
      _ => Maybe::None,
    }
  }

  /// Returns `self` if present, `other` otherwise. `other` is already evaluated.
  #[inline]
  pub fn or_else(self, other: Self) -> Self {
    match self {
      Self::Some(_) => self,
      Self::None => other,
    }
  }


  #[inline]
  pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
    match self {
      Self::Some(value) => Outcome::Done(value),
      Self::None => Outcome::Fail(error),
    }
  }
}

impl<F> Maybe<F> {
  /// Applies the wrapped function to the wrapped argument; absent if either is.
  #[inline]
  pub fn apply<T, U>(self, argument: Maybe<T>) -> Maybe<U> where
    F: FnOnce(T) -> U,
  {
    match (self, argument) {
      (Self::Some(f), Maybe::Some(argument)) => Maybe::Some(f(argument)),
      _ => Maybe::None,
    }
  }
}

impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::from_nullable(value) }
}

impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(value: Maybe<T>) -> Self { value.into_option() }
}
