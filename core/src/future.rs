use std::future::Future;

use futures::{FutureExt, TryFuture, TryFutureExt};

use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Converts the settlement of a fallible future into a tagged value, at the call site.
pub trait OutcomeFutureExt: TryFuture + Sized {
  /// Creates a future producing [`Done`](Outcome::Done) when `self` succeeds, or [`Fail`](Outcome::Fail) with its
  /// error mapped through `on_error` when it fails.
  fn into_outcome<E>(self, on_error: impl FnOnce(Self::Error) -> E) -> impl Future<Output=Outcome<Self::Ok, E>>;

  /// Like [`into_outcome`](Self::into_outcome), with the error on the left.
  #[inline]
  fn into_either<L>(self, on_error: impl FnOnce(Self::Error) -> L) -> impl Future<Output=Either<L, Self::Ok>> {
    self.into_outcome(on_error)
  }

  /// Creates a future producing [`Some`](Maybe::Some) when `self` succeeds, or [`None`](Maybe::None) when it fails.
  fn into_maybe(self) -> impl Future<Output=Maybe<Self::Ok>>;
}

impl<F: TryFuture> OutcomeFutureExt for F {
  #[inline]
  fn into_outcome<E>(self, on_error: impl FnOnce(Self::Error) -> E) -> impl Future<Output=Outcome<Self::Ok, E>> {
    self.into_future().map(|result| Outcome::from(result).map_error(on_error))
  }

  #[inline]
  fn into_maybe(self) -> impl Future<Output=Maybe<Self::Ok>> {
    self.into_future().map(|result| Maybe::from(result.ok()))
  }
}
