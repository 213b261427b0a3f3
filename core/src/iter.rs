use crate::maybe::Maybe;

pub trait FirstExt: IntoIterator + Sized {
  /// Gets the first item, or [`None`](Maybe::None) if there are no items.
  #[inline]
  fn first_maybe(self) -> Maybe<Self::Item> {
    Maybe::from(self.into_iter().next())
  }
}

impl<I: IntoIterator> FirstExt for I {}
