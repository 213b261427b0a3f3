use std::convert::Infallible;
use std::future::Future;

use futures::{FutureExt, TryFuture, TryFutureExt};
use tracing::{debug, trace};

use crate::maybe::Maybe;
use crate::panic::{catch, Panic};

/// The outcome of a computation: either [`Done`](Outcome::Done) with a value of `T`, or [`Fail`](Outcome::Fail) with
/// an error of `E`.
///
/// Every operation taking two positional handlers ([`fold`](Self::fold), [`bimap`](Self::bimap)) takes the failure
/// handler first. [`match_with`](Self::match_with) takes named [`Cases`] instead.
///
/// [`Either`](crate::either::Either) is this same type with the sides renamed.
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
  Done(T),
  Fail(E),
}

/// Handlers for [`Outcome::match_with`].
#[derive(Copy, Clone, Debug)]
pub struct Cases<D, F> {
  pub done: D,
  pub fail: F,
}

#[inline]
pub const fn done<T, E>(value: T) -> Outcome<T, E> { Outcome::Done(value) }
#[inline]
pub const fn fail<T, E>(error: E) -> Outcome<T, E> { Outcome::Fail(error) }

impl<T, E> Outcome<T, E> {
  /// Creates [`Done`](Self::Done) if `value` is present, [`Fail`](Self::Fail) with `error` otherwise.
  #[inline]
  pub fn new(value: Option<T>, error: E) -> Self { Self::from_nullable(value, error) }

  #[inline]
  pub fn from_nullable(value: Option<T>, error: E) -> Self {
    match value {
      Some(value) => Self::Done(value),
      None => Self::Fail(error),
    }
  }

  /// Runs `f`, returning [`Done`](Self::Done) with its return value, or [`Fail`](Self::Fail) with the panic mapped
  /// through `on_error`.
  pub fn from_throwable(f: impl FnOnce() -> T, on_error: impl FnOnce(Panic) -> E) -> Self {
    match catch(f) {
      Ok(value) => Self::Done(value),
      Err(panic) => {
        debug!(%panic, "mapping captured panic into failure");
        Self::Fail(on_error(panic))
      }
    }
  }

  /// Waits for `future` to settle: [`Done`](Self::Done) when it succeeds, [`Fail`](Self::Fail) with its error mapped
  /// through `on_error` when it fails.
  pub async fn from_future<F>(future: F, on_error: impl FnOnce(F::Error) -> E) -> Self where
    F: TryFuture<Ok=T>,
  {
    match future.into_future().await {
      Ok(value) => Self::Done(value),
      Err(error) => {
        trace!("future failed; mapping its error into failure");
        Self::Fail(on_error(error))
      }
    }
  }

  /// Waits for `future` to complete: [`Done`](Self::Done) with its output, or [`Fail`](Self::Fail) with the panic
  /// mapped through `on_error` if polling it panics.
  pub async fn catch_future<F>(future: F, on_error: impl FnOnce(Panic) -> E) -> Self where
    F: Future<Output=T>,
  {
    match std::panic::AssertUnwindSafe(future).catch_unwind().await {
      Ok(value) => Self::Done(value),
      Err(payload) => {
        let panic = Panic::new(payload);
        debug!(%panic, "mapping panic captured while polling future into failure");
        Self::Fail(on_error(panic))
      }
    }
  }


  #[inline]
  pub const fn is_done(&self) -> bool { matches!(self, Self::Done(_)) }
  #[inline]
  pub const fn is_fail(&self) -> bool { matches!(self, Self::Fail(_)) }

  #[inline]
  pub const fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Self::Done(value) => Outcome::Done(value),
      Self::Fail(error) => Outcome::Fail(error),
    }
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self {
      Self::Done(value) => Outcome::Done(f(value)),
      Self::Fail(error) => Outcome::Fail(error),
    }
  }

  #[inline]
  pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self {
      Self::Done(value) => Outcome::Done(value),
      Self::Fail(error) => Outcome::Fail(f(error)),
    }
  }

  /// Maps whichever side is populated: `on_fail` for failures, `on_done` for values.
  #[inline]
  pub fn bimap<U, F>(self, on_fail: impl FnOnce(E) -> F, on_done: impl FnOnce(T) -> U) -> Outcome<U, F> {
    match self {
      Self::Done(value) => Outcome::Done(on_done(value)),
      Self::Fail(error) => Outcome::Fail(on_fail(error)),
    }
  }

  /// Chains into another outcome with the same error type. Failures short-circuit without calling `f`.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Done(value) => f(value),
      Self::Fail(error) => Outcome::Fail(error),
    }
  }

  #[inline]
  pub fn match_with<U>(self, cases: Cases<impl FnOnce(T) -> U, impl FnOnce(E) -> U>) -> U {
    match self {
      Self::Done(value) => (cases.done)(value),
      Self::Fail(error) => (cases.fail)(error),
    }
  }

  /// Collapses into a single value: `on_fail` for failures, `on_done` for values.
  #[inline]
  pub fn fold<U>(self, on_fail: impl FnOnce(E) -> U, on_done: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Done(value) => on_done(value),
      Self::Fail(error) => on_fail(error),
    }
  }

  /// Turns a failure into a value with `f`. The result can no longer fail.
  #[inline]
  pub fn recover(self, f: impl FnOnce(E) -> T) -> Outcome<T, Infallible> {
    match self {
      Self::Done(value) => Outcome::Done(value),
      Self::Fail(error) => Outcome::Done(f(error)),
    }
  }


  #[inline]
  pub fn get_or_else(self, default: T) -> T {
    match self {
      Self::Done(value) => value,
      Self::Fail(_) => default,
    }
  }

  /// Gets the value, or hands the error to `on_error`, which cannot return normally.
  #[inline]
  pub fn get_or_throw(self, on_error: impl FnOnce(E) -> Infallible) -> T {
    match self {
      Self::Done(value) => value,
      Self::Fail(error) => {
        let never = on_error(error);
        match never {}
      }
    }
  }

  #[inline]
  pub fn into_result(self) -> Result<T, E> {
    match self {
      Self::Done(value) => Ok(value),
      Self::Fail(error) => Err(error),
    }
  }


  /// Pairs both values if both are done; otherwise the first failure, checking `self` first.
  #[inline]
  pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
    match (self, other) {
      (Self::Fail(error), _) => Outcome::Fail(error),
      (_, Outcome::Fail(error)) => Outcome::Fail(error),
      (Self::Done(a), Outcome::Done(b)) => Outcome::Done((a, b)),
    }
  }

  /// Returns `self` if done, `other` otherwise. `other` is already evaluated.
  #[inline]
  pub fn or_else(self, other: Self) -> Self {
    match self {
      Self::Done(_) => self,
      Self::Fail(_) => other,
    }
  }

  /// Keeps a value for which `predicate` holds; turns any other value into a failure with `on_false`.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool, on_false: E) -> Self {
    match self {
      Self::Done(value) => if predicate(&value) { Self::Done(value) } else { Self::Fail(on_false) },
      Self::Fail(error) => Self::Fail(error),
    }
  }

  #[inline]
  pub fn tap(self, f: impl FnOnce(&T)) -> Self {
    if let Self::Done(value) = &self {
      f(value);
    }
    self
  }

  #[inline]
  pub fn tap_error(self, f: impl FnOnce(&E)) -> Self {
    if let Self::Fail(error) = &self {
      f(error);
    }
    self
  }


  /// Converts into a [`Maybe`], discarding the error.
  #[inline]
  pub fn to_maybe(self) -> Maybe<T> {
    match self {
      Self::Done(value) => Maybe::Some(value),
      Self::Fail(_) => Maybe::None,
    }
  }
}

impl<F, E> Outcome<F, E> {
  /// Applies the wrapped function to the wrapped argument; otherwise the first failure, checking the function first.
  #[inline]
  pub fn apply<T, U>(self, argument: Outcome<T, E>) -> Outcome<U, E> where
    F: FnOnce(T) -> U,
  {
    match (self, argument) {
      (Self::Fail(error), _) => Outcome::Fail(error),
      (_, Outcome::Fail(error)) => Outcome::Fail(error),
      (Self::Done(f), Outcome::Done(argument)) => Outcome::Done(f(argument)),
    }
  }
}

impl<T> Outcome<T, Infallible> {
  /// Gets the value of an outcome that cannot fail.
  #[inline]
  pub fn into_done(self) -> T {
    match self {
      Self::Done(value) => value,
      Self::Fail(never) => match never {},
    }
  }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Done(value),
      Err(error) => Self::Fail(error),
    }
  }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self { outcome.into_result() }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;
  use std::future::ready;

  use crate::maybe::{none, some};

  use super::*;

  #[test]
  fn test_from_nullable() {
    assert_eq!(Outcome::from_nullable(Some(1), "absent"), done(1));
    assert_eq!(Outcome::<i32, _>::from_nullable(None, "absent"), fail("absent"));
    assert_eq!(Outcome::new(Some(1), "absent"), done(1));
  }

  #[test]
  fn test_from_throwable_preserves_panic() {
    assert_eq!(Outcome::from_throwable(|| 3, |_| "unused"), done::<_, &str>(3));
    let outcome = Outcome::<i32, _>::from_throwable(|| panic!("bad input"), |panic| panic.to_string());
    assert_eq!(outcome, fail("bad input".to_string()));
  }

  #[test]
  fn test_as_ref_borrows_either_side() {
    let outcome = done::<_, String>(vec![1, 2]);
    assert_eq!(outcome.as_ref().map(Vec::len), done(2));
    assert_eq!(outcome, done(vec![1, 2]));
    let outcome = fail::<Vec<i32>, _>("kept".to_string());
    assert_eq!(outcome.as_ref().map_error(String::as_str), fail("kept"));
    assert!(outcome.is_fail());
  }

  #[test]
  fn test_map_map_error_bimap() {
    assert_eq!(done::<_, &str>(2).map(|v| v + 1), done(3));
    assert_eq!(fail::<i32, _>("e").map(|v| v + 1), fail("e"));
    assert_eq!(fail::<i32, _>("e").map_error(str::len), fail(1));
    assert_eq!(done::<_, &str>(2).map_error(str::len), done(2));
    assert_eq!(done::<_, &str>(2).bimap(str::len, |v| v * 2), done(4));
    assert_eq!(fail::<i32, _>("err").bimap(str::len, |v| v * 2), fail(3));
  }

  #[test]
  fn test_flat_map_short_circuits() {
    let calls = Cell::new(0);
    let half = |v: i32| {
      calls.set(calls.get() + 1);
      if v % 2 == 0 { done(v / 2) } else { fail("odd") }
    };
    assert_eq!(done(8).flat_map(half).flat_map(half), done(2));
    assert_eq!(done(6).flat_map(half).flat_map(half), fail("odd"));
    assert_eq!(calls.get(), 4);
    assert_eq!(fail("early").flat_map(half), fail("early"));
    assert_eq!(calls.get(), 4);
  }

  #[test]
  fn test_match_with_and_fold() {
    assert_eq!(done::<_, ()>(3).match_with(Cases { done: |x| x + 1, fail: |_| 0 }), 4);
    assert_eq!(fail::<i32, _>(()).match_with(Cases { done: |x| x + 1, fail: |_| 0 }), 0);
    assert_eq!(done::<_, &str>(3).fold(|e| e.len(), |v| v as usize * 10), 30);
    assert_eq!(fail::<i32, _>("four").fold(|e| e.len(), |v| v as usize * 10), 4);
  }

  #[test]
  fn test_recover() {
    assert_eq!(fail::<usize, _>("four").recover(str::len), done(4));
    assert_eq!(done::<_, &str>(1).recover(|_| 99).into_done(), 1);
  }

  #[test]
  fn test_get_or_else() {
    assert_eq!(done::<_, ()>(1).get_or_else(0), 1);
    assert_eq!(fail::<_, ()>(()).get_or_else(0), 0);
  }

  #[test]
  fn test_get_or_throw_done() {
    assert_eq!(done::<_, &str>(5).get_or_throw(|e| panic!("{}", e)), 5);
  }

  #[test]
  #[should_panic(expected = "failed: nope")]
  fn test_get_or_throw_fail() {
    fail::<i32, _>("nope").get_or_throw(|e| panic!("failed: {}", e));
  }

  #[test]
  fn test_zip_picks_first_failure() {
    assert_eq!(done::<_, &str>(1).zip(done("a")), done((1, "a")));
    assert_eq!(fail::<i32, _>("left").zip(done::<i32, _>(2)), fail("left"));
    assert_eq!(done(1).zip(fail::<i32, _>("right")), fail("right"));
    assert_eq!(fail::<i32, _>("left").zip(fail::<i32, _>("right")), fail("left"));
  }

  #[test]
  fn test_apply_picks_function_failure_first() {
    assert_eq!(done::<_, &str>(|v: i32| v * 3).apply(done(2)), done(6));
    assert_eq!(fail::<fn(i32) -> i32, _>("fn").apply(fail("arg")), fail("fn"));
    assert_eq!(done(|v: i32| v * 3).apply(fail("arg")), fail("arg"));
  }

  #[test]
  fn test_or_else_and_filter() {
    assert_eq!(done::<_, &str>(1).or_else(done(2)), done(1));
    assert_eq!(fail("a").or_else(done(2)), done(2));
    assert_eq!(fail::<i32, _>("a").or_else(fail("b")), fail("b"));

    assert_eq!(done(4).filter(|v| *v > 3, "small"), done(4));
    assert_eq!(done(2).filter(|v| *v > 3, "small"), fail("small"));
    assert_eq!(fail::<i32, _>("earlier").filter(|_| true, "small"), fail("earlier"));
  }

  #[test]
  fn test_tap_observes_without_changing() {
    let seen = Cell::new(0);
    let failures = Cell::new(0);
    let outcome = done::<_, &str>(7).tap(|v| seen.set(*v)).tap_error(|_| failures.set(failures.get() + 1));
    assert_eq!(outcome, done(7));
    assert_eq!(seen.get(), 7);
    assert_eq!(failures.get(), 0);

    let outcome = fail::<i32, _>("e").tap(|v| seen.set(*v)).tap_error(|_| failures.set(failures.get() + 1));
    assert_eq!(outcome, fail("e"));
    assert_eq!(seen.get(), 7);
    assert_eq!(failures.get(), 1);
  }

  #[test]
  fn test_to_maybe_round_trip() {
    assert_eq!(some(1).to_outcome("e").to_maybe(), some(1));
    assert_eq!(none::<i32>().to_outcome("e").to_maybe(), none());
  }

  #[test]
  fn test_result_interop() {
    fn parse(input: &str) -> Result<i32, std::num::ParseIntError> {
      let outcome: Outcome<i32, _> = input.parse::<i32>().into();
      let value = outcome.map(|v| v * 2).into_result()?;
      Ok(value)
    }
    assert_eq!(parse("21"), Ok(42));
    assert!(parse("x").is_err());

    let result: Result<i32, &str> = fail("e").into();
    assert_eq!(result, Err("e"));
  }

  #[tokio::test]
  async fn test_from_future() {
    let outcome = Outcome::from_future(ready(Ok::<_, std::io::Error>(5)), |e| e.to_string()).await;
    assert_eq!(outcome, done(5));
    let rejection = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
    let outcome = Outcome::<i32, _>::from_future(ready(Err(rejection)), |e| e.to_string()).await;
    assert_eq!(outcome, fail("connection reset".to_string()));
  }

  #[tokio::test]
  async fn test_from_future_settles_after_suspension() {
    let future = async {
      tokio::time::sleep(std::time::Duration::from_millis(1)).await;
      Err::<i32, _>("late")
    };
    assert_eq!(Outcome::from_future(future, str::len).await, fail(4));
  }

  #[tokio::test]
  async fn test_catch_future() {
    let outcome = Outcome::catch_future(async {
      if true {
        panic!("polled into a panic");
      }
      1
    }, |panic| panic.to_string()).await;
    assert_eq!(outcome, fail("polled into a panic".to_string()));
  }
}
