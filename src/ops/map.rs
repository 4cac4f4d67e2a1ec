use crate::{
  notification::Payload,
  observable::Observable,
  observer::Observer,
  subscriber::Subscriber,
  subscription::LocalSubscription,
};

#[derive(Clone)]
pub struct MapOp<S, F> {
  pub(crate) source: S,
  pub(crate) func: F,
}

impl<B, S, F> Observable for MapOp<S, F>
where
  S: Observable,
  F: Fn(S::Item) -> B,
{
  type Item = B;
  type Err = S::Err;

  fn actual_subscribe<O>(&self, subscriber: Subscriber<O>)
  where
    O: Observer<B, S::Err>,
  {
    let func = &self.func;
    self
      .source
      .actual_subscribe(subscriber.transform(|observer| MapObserver { observer, func }))
  }
}

pub struct MapObserver<'a, O, F> {
  observer: O,
  func: &'a F,
}

impl<'a, Item, Err, B, O, F> Observer<Item, Err> for MapObserver<'a, O, F>
where
  O: Observer<B, Err>,
  F: Fn(Item) -> B,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next((self.func)(value)) }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(&mut self, subscription: &LocalSubscription, payload: Option<Payload>) {
    self.observer.complete(subscription, payload)
  }
}
