use crate::{
  logging::trace,
  notification::Payload,
  observable::Observable,
  observer::Observer,
  subscriber::Subscriber,
  subscription::{LocalSubscription, SubscriptionLike},
};

/// Flat-maps every value into an inner observable.
///
/// Inner streams are subscribed one at a time: a new upstream value cancels
/// the inner subscription still active, if any, before subscribing to the
/// next one. Each inner subscription is also attached to the outer one, so
/// cancelling or completing the outer stream cancels it too.
#[derive(Clone)]
pub struct ChainOp<S, F> {
  pub(crate) source: S,
  pub(crate) func: F,
}

impl<Inner, S, F> Observable for ChainOp<S, F>
where
  S: Observable,
  F: Fn(S::Item) -> Inner,
  Inner: Observable<Err = S::Err>,
{
  type Item = Inner::Item;
  type Err = S::Err;

  fn actual_subscribe<O>(&self, subscriber: Subscriber<O>)
  where
    O: Observer<Inner::Item, S::Err>,
  {
    let func = &self.func;
    let outer = subscriber.subscription.clone();
    self
      .source
      .actual_subscribe(subscriber.transform(|observer| ChainObserver {
        observer,
        func,
        outer,
        active: None,
      }))
  }
}

pub struct ChainObserver<'a, O, F> {
  observer: O,
  func: &'a F,
  outer: LocalSubscription,
  active: Option<LocalSubscription>,
}

impl<'a, Item, Err, Inner, O, F> Observer<Item, Err> for ChainObserver<'a, O, F>
where
  O: Observer<Inner::Item, Err>,
  F: Fn(Item) -> Inner,
  Inner: Observable<Err = Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(mut previous) = self.active.take() {
      if !previous.is_cancelled() {
        trace!("chain switching away from an unfinished inner subscription");
        previous.cancel();
      }
    }

    let inner = (self.func)(value);
    let state = LocalSubscription::default();
    self.outer.add(state.clone());
    self.active = Some(state.clone());
    inner.actual_subscribe(Subscriber::with_subscription(InnerObserver(&mut self.observer), state));
  }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self, subscription: &LocalSubscription, payload: Option<Payload>) {
    if let Some(mut active) = self.active.take() {
      active.cancel();
    }
    self.observer.complete(subscription, payload)
  }
}

/// Forwards an inner stream's values and errors to the chain's downstream,
/// dropping its completion.
struct InnerObserver<'a, O>(&'a mut O);

impl<'a, Item, Err, O> Observer<Item, Err> for InnerObserver<'a, O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.0.next(value) }

  #[inline]
  fn error(&mut self, err: Err) { self.0.error(err) }

  fn complete(&mut self, _: &LocalSubscription, _: Option<Payload>) {
    trace!("chain inner subscription completed");
  }
}
