//! The [`Observable`] trait and the ways to create one.

use crate::{
  logging::debug,
  observer::Observer,
  ops::{chain::ChainOp, filter::FilterOp, fold::FoldOp, map::MapOp, tap::TapOp},
  subscriber::Subscriber,
  subscription::LocalSubscription,
};

mod create;
pub use create::*;
mod of;
pub use of::*;

/// A representation of any set of values over any amount of time.
///
/// Observables are cold: nothing runs until [`Observable::subscribe`] is
/// called, and every call runs the producer again from scratch. `Item` is the
/// type of the value channel and `Err` the type of the error channel; the two
/// are independent and a stream may emit any number of either before it
/// completes.
pub trait Observable: Sized {
  type Item;
  type Err;

  /// Subscribes `subscriber` to this stream, running the producer
  /// synchronously. Operators implement this by wrapping
  /// `subscriber.observer` and subscribing to their source.
  fn actual_subscribe<O>(&self, subscriber: Subscriber<O>)
  where
    O: Observer<Self::Item, Self::Err>;

  /// Runs the stream into `observer` and returns the subscription handle.
  ///
  /// Every event has been delivered by the time this returns. A panic raised
  /// by the producer or by a callback is not caught: it unwinds through here
  /// and never shows up on the error channel.
  fn subscribe<O>(&self, observer: O) -> LocalSubscription
  where
    O: Observer<Self::Item, Self::Err>,
  {
    let subscriber = Subscriber::new(observer);
    let subscription = subscriber.subscription.clone();
    debug!(item = std::any::type_name::<Self::Item>(), "subscribe");
    self.actual_subscribe(subscriber);
    subscription
  }

  /// Creates a new stream which calls a closure on each value and emits its
  /// return. Errors pass through untouched.
  fn map<B, F>(self, f: F) -> MapOp<Self, F>
  where
    F: Fn(Self::Item) -> B,
  {
    MapOp { source: self, func: f }
  }

  /// Emits only the values that satisfy `predicate`. Errors and completion
  /// always pass.
  fn filter<F>(self, predicate: F) -> FilterOp<Self, F>
  where
    F: Fn(&Self::Item) -> bool,
  {
    FilterOp { source: self, predicate }
  }

  /// Merges both channels into the value channel: values go through
  /// `on_val`, errors through `on_err`, in their original order. The result
  /// never emits an error.
  fn fold<R, FE, FV>(self, on_err: FE, on_val: FV) -> FoldOp<Self, FE, FV>
  where
    FE: Fn(Self::Err) -> R,
    FV: Fn(Self::Item) -> R,
  {
    FoldOp { source: self, on_err, on_val }
  }

  /// Maps every value to an inner stream and forwards the inner values and
  /// errors. Inner completions are swallowed; the result completes when this
  /// stream does.
  fn chain<Inner, F>(self, f: F) -> ChainOp<Self, F>
  where
    F: Fn(Self::Item) -> Inner,
    Inner: Observable<Err = Self::Err>,
  {
    ChainOp { source: self, func: f }
  }

  /// Calls `f` with a reference to every value before forwarding it.
  fn tap<F>(self, f: F) -> TapOp<Self, F>
  where
    F: Fn(&Self::Item),
  {
    TapOp { source: self, func: f }
  }
}
