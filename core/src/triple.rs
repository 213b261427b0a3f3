/// An immutable ordered triple.
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple<A, B, C> {
  fst: A,
  snd: B,
  thd: C,
}

#[inline]
pub const fn triple<A, B, C>(fst: A, snd: B, thd: C) -> Triple<A, B, C> { Triple::new(fst, snd, thd) }

impl<A, B, C> Triple<A, B, C> {
  #[inline]
  pub const fn new(fst: A, snd: B, thd: C) -> Self { Self { fst, snd, thd } }

  /// Takes the components one at a time.
  #[inline]
  pub fn curry(fst: A) -> impl FnOnce(B) -> Box<dyn FnOnce(C) -> Self> where
    A: 'static,
    B: 'static,
    C: 'static,
  {
    move |snd: B| -> Box<dyn FnOnce(C) -> Self> { Box::new(move |thd| Self::new(fst, snd, thd)) }
  }

  #[inline]
  pub const fn fst(&self) -> &A { &self.fst }
  #[inline]
  pub const fn snd(&self) -> &B { &self.snd }
  #[inline]
  pub const fn thd(&self) -> &C { &self.thd }

  #[inline]
  pub fn into_tuple(self) -> (A, B, C) { (self.fst, self.snd, self.thd) }


  #[inline]
  pub fn map<D, E, F>(
    self,
    f_fst: impl FnOnce(A) -> D,
    f_snd: impl FnOnce(B) -> E,
    f_thd: impl FnOnce(C) -> F,
  ) -> Triple<D, E, F> {
    Triple::new(f_fst(self.fst), f_snd(self.snd), f_thd(self.thd))
  }

  /// Compares component-wise with custom equality functions.
  #[inline]
  pub fn equals_by(
    &self,
    other: &Self,
    eq_fst: impl FnOnce(&A, &A) -> bool,
    eq_snd: impl FnOnce(&B, &B) -> bool,
    eq_thd: impl FnOnce(&C, &C) -> bool,
  ) -> bool {
    eq_fst(&self.fst, &other.fst) && eq_snd(&self.snd, &other.snd) && eq_thd(&self.thd, &other.thd)
  }

  /// Pairs up the components in the same slots.
  #[inline]
  pub fn zip<D, E, F>(self, other: Triple<D, E, F>) -> Triple<(A, D), (B, E), (C, F)> {
    Triple::new((self.fst, other.fst), (self.snd, other.snd), (self.thd, other.thd))
  }
}

impl<F, G, H> Triple<F, G, H> {
  /// Runs the functions as a pipeline starting at `value`, keeping every intermediate: the first slot holds the first
  /// function's result, the second slot the second function applied to that, and so on.
  pub fn apply<A, B, C, D>(self, value: A) -> Triple<B, C, D> where
    F: FnOnce(A) -> B,
    G: FnOnce(B) -> C,
    H: FnOnce(C) -> D,
    B: Clone,
    C: Clone,
  {
    let fst = (self.fst)(value);
    let snd = (self.snd)(fst.clone());
    let thd = (self.thd)(snd.clone());
    Triple::new(fst, snd, thd)
  }
}

impl<A, B, C> From<(A, B, C)> for Triple<A, B, C> {
  #[inline]
  fn from((fst, snd, thd): (A, B, C)) -> Self { Self::new(fst, snd, thd) }
}

impl<A, B, C> From<Triple<A, B, C>> for (A, B, C) {
  #[inline]
  fn from(triple: Triple<A, B, C>) -> Self { triple.into_tuple() }
}
