use std::{marker::PhantomData, ops::Range};

use crate::{
  observable::Observable, observer::Observer, subscriber::Subscriber,
  subscription::SubscriptionLike,
};

/// Creates an observable producing multiple values.
///
/// Completes immediately after emitting the values given. Never emits an
/// error.
///
/// ```
/// use rxlite::prelude::*;
///
/// let mut seen = vec![];
/// of!(1, 3, 10).subscribe(FnMutObserver(|v| seen.push(v)));
/// assert_eq!(seen, vec![1, 3, 10]);
/// ```
#[macro_export]
macro_rules! of {
  ($($item:expr),* $(,)?) => {
    $crate::observable::of([$($item),*])
  };
}

/// Observable emitting every item of an iterator, then completing.
///
/// The iterator is cloned for each subscription, so every subscriber sees the
/// full sequence.
pub struct FromIter<I, Err> {
  iter: I,
  _marker: PhantomData<fn() -> Err>,
}

impl<I: Clone, Err> Clone for FromIter<I, Err> {
  fn clone(&self) -> Self { FromIter { iter: self.iter.clone(), _marker: PhantomData } }
}

/// Creates an observable that emits each of `values` in order and then
/// completes.
pub fn of<I, Err>(values: I) -> FromIter<I, Err>
where
  I: IntoIterator + Clone,
{
  FromIter { iter: values, _marker: PhantomData }
}

/// Creates an observable that emits every integer `i` with
/// `start <= i < end`, ascending, then completes. Emits nothing when
/// `start >= end`.
///
/// ```
/// use rxlite::prelude::*;
///
/// let mut seen = vec![];
/// range(0, 5).subscribe(FnMutObserver(|v| seen.push(v)));
/// assert_eq!(seen, vec![0, 1, 2, 3, 4]);
/// ```
pub fn range<T, Err>(start: T, end: T) -> FromIter<Range<T>, Err>
where
  Range<T>: Iterator<Item = T> + Clone,
{
  of(start..end)
}

/// Creates an observable that completes without emitting anything.
pub fn empty<Item, Err>() -> FromIter<std::iter::Empty<Item>, Err> { of(std::iter::empty()) }

impl<I, Err> Observable for FromIter<I, Err>
where
  I: IntoIterator + Clone,
{
  type Item = I::Item;
  type Err = Err;

  fn actual_subscribe<O>(&self, subscriber: Subscriber<O>)
  where
    O: Observer<I::Item, Err>,
  {
    subscriber.run(|emitter| {
      for v in self.iter.clone() {
        if emitter.is_cancelled() {
          break;
        }
        emitter.next(v);
      }
      emitter.complete();
    });
  }
}
