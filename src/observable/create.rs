use std::marker::PhantomData;

use crate::{
  observable::Observable, observer::Observer, subscriber::Subscriber,
  subscription::Subscription,
};

/// Observable created from a producer function.
///
/// This struct is created by [`create`].
pub struct Create<F, Item, Err> {
  producer: F,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

impl<F, Item, Err> Create<F, Item, Err> {
  pub fn new(producer: F) -> Self { Self { producer, _marker: PhantomData } }
}

impl<F: Clone, Item, Err> Clone for Create<F, Item, Err> {
  fn clone(&self) -> Self { Self::new(self.producer.clone()) }
}

/// Creates an observable from a producer.
///
/// The producer runs once per subscription and drives the stream through the
/// [`Subscription`] it receives.
///
/// ```
/// use rxlite::prelude::*;
///
/// let mut sum = 0;
/// create::<i32, (), _>(|s| {
///   s.next(1);
///   s.next(2);
///   s.complete();
/// })
/// .subscribe(Callbacks::new().on_next(|v| sum += v));
/// assert_eq!(sum, 3);
/// ```
pub fn create<Item, Err, F>(producer: F) -> Create<F, Item, Err>
where
  F: Fn(&mut Subscription<'_, Item, Err>),
{
  Create::new(producer)
}

impl<F, Item, Err> Observable for Create<F, Item, Err>
where
  F: Fn(&mut Subscription<'_, Item, Err>),
{
  type Item = Item;
  type Err = Err;

  fn actual_subscribe<O>(&self, subscriber: Subscriber<O>)
  where
    O: Observer<Item, Err>,
  {
    subscriber.run(|emitter| (self.producer)(emitter));
  }
}
