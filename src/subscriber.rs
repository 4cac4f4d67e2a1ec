use crate::{
  observer::Observer,
  subscription::{LocalSubscription, Subscription},
};

/// An observer together with the cancellation state of the subscription it
/// belongs to. This is what operators pass upstream, each one wrapping
/// `observer` in its own adapter while keeping `subscription` shared.
pub struct Subscriber<O> {
  pub observer: O,
  pub subscription: LocalSubscription,
}

impl<O> Subscriber<O> {
  pub fn new(observer: O) -> Self { Self { observer, subscription: LocalSubscription::default() } }

  pub fn with_subscription(observer: O, subscription: LocalSubscription) -> Self {
    Self { observer, subscription }
  }

  /// Wraps the observer, keeping the subscription.
  #[inline]
  pub fn transform<O2>(self, f: impl FnOnce(O) -> O2) -> Subscriber<O2> {
    Subscriber { observer: f(self.observer), subscription: self.subscription }
  }

  /// Hands a producer the emission handle for this subscriber and runs it to
  /// the end.
  pub fn run<Item, Err>(self, producer: impl FnOnce(&mut Subscription<'_, Item, Err>))
  where
    O: Observer<Item, Err>,
  {
    let Subscriber { mut observer, subscription } = self;
    let mut emitter = Subscription::new(&mut observer, subscription);
    producer(&mut emitter);
  }
}
