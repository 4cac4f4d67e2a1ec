use crate::{
  notification::Payload,
  observable::Observable,
  observer::Observer,
  subscriber::Subscriber,
  subscription::LocalSubscription,
};

#[derive(Clone)]
pub struct TapOp<S, F> {
  pub(crate) source: S,
  pub(crate) func: F,
}

impl<S, F> Observable for TapOp<S, F>
where
  S: Observable,
  F: Fn(&S::Item),
{
  type Item = S::Item;
  type Err = S::Err;

  fn actual_subscribe<O>(&self, subscriber: Subscriber<O>)
  where
    O: Observer<S::Item, S::Err>,
  {
    let func = &self.func;
    self
      .source
      .actual_subscribe(subscriber.transform(|observer| TapObserver { observer, func }))
  }
}

pub struct TapObserver<'a, O, F> {
  observer: O,
  func: &'a F,
}

impl<'a, Item, Err, O, F> Observer<Item, Err> for TapObserver<'a, O, F>
where
  O: Observer<Item, Err>,
  F: Fn(&Item),
{
  fn next(&mut self, value: Item) {
    (self.func)(&value);
    self.observer.next(value)
  }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err) }

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
  fn primitive_type() {
    let mut i = 0;
    let v = Cell::new(0);
    range(100, 101).tap(|i| v.set(*i)).subscribe(FnMutObserver(|v| i += v));
    assert_eq!(i, 100);
    assert_eq!(v.get(), 100);
  }

  #[test]
  fn tap_runs_before_downstream() {
    let log = RefCell::new(vec![]);
    of::<_, ()>([1, 2])
      .tap(|v| log.borrow_mut().push(format!("tap {v}")))
      .subscribe(Callbacks::new().on_next(|v| log.borrow_mut().push(format!("next {v}"))));
    assert_eq!(*log.borrow(), vec!["tap 1", "next 1", "tap 2", "next 2"]);
  }

  #[test]
  fn errors_skip_tap() {
    let tapped = Cell::new(0);
    let errors = Cell::new(0);
    create::<i32, (), _>(|s| {
      s.throw_error(());
      s.next(1);
      s.throw_error(());
      s.complete();
    })
    .tap(|_| tapped.set(tapped.get() + 1))
    .subscribe(Callbacks::new().on_error(|_| errors.set(errors.get() + 1)));
    assert_eq!(tapped.get(), 1);
    assert_eq!(errors.get(), 2);
  }
}
