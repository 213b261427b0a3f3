//! Left/right vocabulary over [`Outcome`].
//!
//! [`Either<L, R>`] is not a separate type: it is [`Outcome<R, L>`] where [`Left`](Outcome::Fail) is the failure side
//! and [`Right`](Outcome::Done) is the success side. Every [`Outcome`] operation applies to it unchanged, so the two
//! vocabularies cannot drift apart.

use crate::outcome::Outcome;

pub type Either<L, R> = Outcome<R, L>;

/// Handlers for [`Outcome::match_either`].
#[derive(Copy, Clone, Debug)]
pub struct Cases<L, R> {
  pub left: L,
  pub right: R,
}

#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> { Outcome::Fail(value) }
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> { Outcome::Done(value) }

impl<R, L> Outcome<R, L> {
  #[inline]
  pub const fn is_left(&self) -> bool { self.is_fail() }
  #[inline]
  pub const fn is_right(&self) -> bool { self.is_done() }

  #[inline]
  pub fn map_left<M>(self, f: impl FnOnce(L) -> M) -> Either<M, R> { self.map_error(f) }

  /// Same as [`flat_map`](Self::flat_map).
  #[inline]
  pub fn chain<S>(self, f: impl FnOnce(R) -> Either<L, S>) -> Either<L, S> { self.flat_map(f) }

  #[inline]
  pub fn tap_left(self, f: impl FnOnce(&L)) -> Self { self.tap_error(f) }

  /// Exchanges the sides: left becomes right and right becomes left.
  #[inline]
  pub fn swap(self) -> Outcome<L, R> {
    match self {
      Self::Done(value) => Outcome::Fail(value),
      Self::Fail(value) => Outcome::Done(value),
    }
  }

  #[inline]
  pub fn match_either<U>(self, cases: Cases<impl FnOnce(L) -> U, impl FnOnce(R) -> U>) -> U {
    self.fold(cases.left, cases.right)
  }

  #[inline]
  pub fn left_value(self) -> Option<L> {
    match self {
      Self::Fail(value) => Some(value),
      Self::Done(_) => None,
    }
  }
  #[inline]
  pub fn right_value(self) -> Option<R> {
    match self {
      Self::Done(value) => Some(value),
      Self::Fail(_) => None,
    }
  }
}
