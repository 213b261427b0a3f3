use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// An immutable ordered pair.
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
  fst: A,
  snd: B,
}

#[inline]
pub const fn pair<A, B>(fst: A, snd: B) -> Pair<A, B> { Pair::new(fst, snd) }

impl<A, B> Pair<A, B> {
  #[inline]
  pub const fn new(fst: A, snd: B) -> Self { Self { fst, snd } }

  /// Takes the first component now and returns a function that takes the second.
  #[inline]
  pub fn curry(fst: A) -> impl FnOnce(B) -> Self { move |snd| Self::new(fst, snd) }

  #[inline]
  pub const fn fst(&self) -> &A { &self.fst }
  #[inline]
  pub const fn snd(&self) -> &B { &self.snd }

  #[inline]
  pub fn into_tuple(self) -> (A, B) { (self.fst, self.snd) }


  #[inline]
  pub fn map_first<C>(self, f: impl FnOnce(A) -> C) -> Pair<C, B> { Pair::new(f(self.fst), self.snd) }
  #[inline]
  pub fn map_second<C>(self, f: impl FnOnce(B) -> C) -> Pair<A, C> { Pair::new(self.fst, f(self.snd)) }
  #[inline]
  pub fn map<C, D>(self, f_fst: impl FnOnce(A) -> C, f_snd: impl FnOnce(B) -> D) -> Pair<C, D> {
    Pair::new(f_fst(self.fst), f_snd(self.snd))
  }

  #[inline]
  pub fn swap(self) -> Pair<B, A> { Pair::new(self.snd, self.fst) }

  #[inline]
  pub fn reduce<C>(self, f: impl FnOnce(A, B) -> C) -> C { f(self.fst, self.snd) }

  /// Compares component-wise with custom equality functions.
  #[inline]
  pub fn equals_by(&self, other: &Self, eq_fst: impl FnOnce(&A, &A) -> bool, eq_snd: impl FnOnce(&B, &B) -> bool) -> bool {
    eq_fst(&self.fst, &other.fst) && eq_snd(&self.snd, &other.snd)
  }

  /// Pairs the first components and nests the second components as a pair.
  #[inline]
  pub fn zip<C, D>(self, other: Pair<C, D>) -> Pair<(A, C), Pair<B, D>> {
    Pair::new((self.fst, other.fst), Pair::new(self.snd, other.snd))
  }
}

impl<F, C> Pair<F, C> {
  /// Applies the function in the first slot to `value`, keeping the second slot.
  #[inline]
  pub fn apply<A, B>(self, value: A) -> Pair<B, C> where
    F: FnOnce(A) -> B,
  {
    Pair::new((self.fst)(value), self.snd)
  }
}

impl<F, G> Pair<F, G> {
  /// Applies each function to the component in the same slot of `values`.
  #[inline]
  pub fn apply_both<A, B, C, D>(self, values: Pair<A, B>) -> Pair<C, D> where
    F: FnOnce(A) -> C,
    G: FnOnce(B) -> D,
  {
    Pair::new((self.fst)(values.fst), (self.snd)(values.snd))
  }
}

impl<A, B> Pair<A, Maybe<B>> {
  /// Combines both components with `f` when the second is present; absent otherwise.
  #[inline]
  pub fn traverse_maybe<C>(self, f: impl FnOnce(&A, B) -> C) -> Maybe<Pair<A, C>> {
    match self.snd {
      Maybe::Some(snd) => {
        let snd = f(&self.fst, snd);
        Maybe::Some(Pair::new(self.fst, snd))
      }
      Maybe::None => Maybe::None,
    }
  }
}

impl<A, B, E> Pair<A, Outcome<B, E>> {
  /// Combines both components with `f` when the second is done; its failure otherwise.
  #[inline]
  pub fn traverse_outcome<C>(self, f: impl FnOnce(&A, B) -> C) -> Outcome<Pair<A, C>, E> {
    match self.snd {
      Outcome::Done(snd) => {
        let snd = f(&self.fst, snd);
        Outcome::Done(Pair::new(self.fst, snd))
      }
      Outcome::Fail(error) => Outcome::Fail(error),
    }
  }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
  #[inline]
  fn from((fst, snd): (A, B)) -> Self { Self::new(fst, snd) }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
  #[inline]
  fn from(pair: Pair<A, B>) -> Self { pair.into_tuple() }
}
