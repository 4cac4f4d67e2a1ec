use std::convert::Infallible;

use crate::{
  notification::Payload,
  observable::Observable,
  observer::Observer,
  subscriber::Subscriber,
  subscription::LocalSubscription,
};

/// Merges the error channel into the value channel.
///
/// ```
/// use rxlite::prelude::*;
///
/// let mut merged = vec![];
/// create::<i32, i32, _>(|s| {
///   s.next(1);
///   s.throw_error(10);
///   s.complete();
/// })
/// .fold(|e| e + 10, |x| x + 3)
/// .subscribe(FnMutObserver(|v| merged.push(v)));
/// assert_eq!(merged, vec![4, 20]);
/// ```
#[derive(Clone)]
pub struct FoldOp<S, FE, FV> {
  pub(crate) source: S,
  pub(crate) on_err: FE,
  pub(crate) on_val: FV,
}

impl<R, S, FE, FV> Observable for FoldOp<S, FE, FV>
where
  S: Observable,
  FE: Fn(S::Err) -> R,
  FV: Fn(S::Item) -> R,
{
  type Item = R;
  type Err = Infallible;

  fn actual_subscribe<O>(&self, subscriber: Subscriber<O>)
  where
    O: Observer<R, Infallible>,
  {
    let (on_err, on_val) = (&self.on_err, &self.on_val);
    self
      .source
      .actual_subscribe(subscriber.transform(|observer| FoldObserver { observer, on_err, on_val }))
  }
}

pub struct FoldObserver<'a, O, FE, FV> {
  observer: O,
  on_err: &'a FE,
  on_val: &'a FV,
}

impl<'a, Item, Err, R, O, FE, FV> Observer<Item, Err> for FoldObserver<'a, O, FE, FV>
where
  O: Observer<R, Infallible>,
  FE: Fn(Err) -> R,
  FV: Fn(Item) -> R,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next((self.on_val)(value)) }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.next((self.on_err)(err)) }

  #[inline]
  fn complete(&mut self, subscription: &LocalSubscription, payload: Option<Payload>) {
    self.observer.complete(subscription, payload)
  }
}

#[cfg(test)]
mod test {
  use std::cell::{Cell, RefCell};

  use crate::prelude::*;

  #[test]
  fn increment_both_channels() {
    let values = RefCell::new(vec![]);
    let completed = Cell::new(0);
    create::<i32, i32, _>(|s| {
      s.next(1);
      s.next(3);
      s.throw_error(10);
      s.throw_error(5);
      s.complete();
    })
    .fold(|e| e + 10, |x| x + 3)
    .subscribe(
      Callbacks::new()
        .on_next(|v| values.borrow_mut().push(v))
        .on_complete(|_, _| completed.set(completed.get() + 1)),
    );
    assert_eq!(*values.borrow(), vec![4, 6, 20, 15]);
    assert_eq!(completed.get(), 1);
  }

  #[derive(Debug, PartialEq)]
  enum Grouped {
    Str(&'static str),
    Error(String),
  }

  #[test]
  fn group_both_channels() {
    let mut values = vec![];
    create::<&'static str, String, _>(|s| {
      s.next("Hello");
      s.throw_error("Break".to_owned());
      s.next("world");
      s.complete();
    })
    .fold(Grouped::Error, Grouped::Str)
    .subscribe(FnMutObserver(|v| values.push(v)));
    assert_eq!(
      values,
      vec![
        Grouped::Str("Hello"),
        Grouped::Error("Break".to_owned()),
        Grouped::Str("world"),
      ]
    );
  }

  #[test]
  fn completion_payload_passes() {
    let got = RefCell::new(None);
    create::<i32, i32, _>(|s| s.complete_with(Payload::new(42u8)))
      .fold(|e| e, |v| v)
      .subscribe(
        Callbacks::new().on_complete(|_, p| *got.borrow_mut() = Payload::extract::<u8>(p).ok()),
      );
    assert_eq!(*got.borrow(), Some(42));
  }
}
