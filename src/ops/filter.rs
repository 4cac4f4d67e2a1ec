use crate::{
  notification::Payload,
  observable::Observable,
  observer::Observer,
  subscriber::Subscriber,
  subscription::LocalSubscription,
};

#[derive(Clone)]
pub struct FilterOp<S, F> {
  pub(crate) source: S,
  pub(crate) predicate: F,
}

impl<S, F> Observable for FilterOp<S, F>
where
  S: Observable,
  F: Fn(&S::Item) -> bool,
{
  type Item = S::Item;
  type Err = S::Err;

  fn actual_subscribe<O>(&self, subscriber: Subscriber<O>)
  where
    O: Observer<S::Item, S::Err>,
  {
    let predicate = &self.predicate;
    self
      .source
      .actual_subscribe(subscriber.transform(|observer| FilterObserver { observer, predicate }))
  }
}

pub struct FilterObserver<'a, O, F> {
  observer: O,
  predicate: &'a F,
}

impl<'a, Item, Err, O, F> Observer<Item, Err> for FilterObserver<'a, O, F>
where
  O: Observer<Item, Err>,
  F: Fn(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    if (self.predicate)(&value) {
      self.observer.next(value)
    }
  }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(&mut self, subscription: &LocalSubscription, payload: Option<Payload>) {
    self.observer.complete(subscription, payload)
  }
}
