use std::{
  cell::RefCell,
  fmt::{Debug, Formatter},
  rc::Rc,
};

use smallvec::SmallVec;

use crate::{
  logging::trace,
  notification::{Notification, Payload},
  observer::Observer,
};

/// Cancellation state of a subscription.
pub trait SubscriptionLike {
  /// Stops the subscription. Nothing is delivered afterwards, not even a
  /// completion.
  fn cancel(&mut self);

  fn is_cancelled(&self) -> bool;
}

/// Shared handle onto the cancellation state of one `subscribe` call.
///
/// Every operator layer of a subscription sees the same handle, and it is what
/// `subscribe` returns. Other subscriptions can be attached with
/// [`LocalSubscription::add`] and are cancelled together with this one.
#[derive(Clone, Debug, Default)]
pub struct LocalSubscription(Rc<RefCell<Inner>>);

impl LocalSubscription {
  /// Attaches `subscription` so it is cancelled when `self` is. If `self` is
  /// already cancelled, `subscription` is cancelled right away.
  pub fn add(&self, mut subscription: LocalSubscription) {
    if self.is_same(&subscription) {
      return;
    }
    if self.is_cancelled() {
      subscription.cancel();
    } else {
      let mut inner = self.0.borrow_mut();
      inner.teardown.retain(|t| !t.is_cancelled());
      inner.teardown.push(subscription);
    }
  }

  pub fn teardown_size(&self) -> usize { self.0.borrow().teardown.len() }

  #[inline]
  fn is_same(&self, other: &LocalSubscription) -> bool { Rc::ptr_eq(&self.0, &other.0) }
}

impl SubscriptionLike for LocalSubscription {
  fn cancel(&mut self) {
    let teardown = {
      let mut inner = self.0.borrow_mut();
      if inner.cancelled {
        return;
      }
      inner.cancelled = true;
      std::mem::take(&mut inner.teardown)
    };
    trace!(teardown = teardown.len(), "subscription cancelled");
    for mut t in teardown {
      t.cancel();
    }
  }

  #[inline]
  fn is_cancelled(&self) -> bool { self.0.borrow().cancelled }
}

#[derive(Default)]
struct Inner {
  cancelled: bool,
  teardown: SmallVec<[LocalSubscription; 1]>,
}

impl Debug for Inner {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Inner")
      .field("cancelled", &self.cancelled)
      .field("teardown_count", &self.teardown.len())
      .finish()
  }
}

/// The emission handle a producer receives.
///
/// `next` and `throw_error` may be called any number of times and in any
/// order; `throw_error` does not end the stream. `complete` delivers the final
/// event and cancels the subscription, after which every call is a no-op.
pub struct Subscription<'a, Item, Err> {
  observer: &'a mut dyn Observer<Item, Err>,
  state: LocalSubscription,
}

impl<'a, Item, Err> Subscription<'a, Item, Err> {
  pub fn new(observer: &'a mut dyn Observer<Item, Err>, state: LocalSubscription) -> Self {
    Self { observer, state }
  }

  /// Dispatches one event, unless the subscription is already cancelled.
  /// A completion cancels the subscription before it is delivered.
  pub fn emit(&mut self, notification: Notification<Item, Err>) {
    if self.state.is_cancelled() {
      trace!(complete = notification.is_complete(), "emission after cancellation dropped");
      return;
    }
    if notification.is_complete() {
      self.state.cancel();
    }
    notification.accept(&mut *self.observer, &self.state);
  }

  #[inline]
  pub fn next(&mut self, value: Item) { self.emit(Notification::Next(value)) }

  #[inline]
  pub fn throw_error(&mut self, err: Err) { self.emit(Notification::Error(err)) }

  #[inline]
  pub fn complete(&mut self) { self.emit(Notification::Complete(None)) }

  #[inline]
  pub fn complete_with(&mut self, payload: Payload) {
    self.emit(Notification::Complete(Some(payload)))
  }

  /// A handle onto this subscription's cancellation state.
  pub fn state(&self) -> LocalSubscription { self.state.clone() }
}

impl<'a, Item, Err> SubscriptionLike for Subscription<'a, Item, Err> {
  #[inline]
  fn cancel(&mut self) { self.state.cancel() }

  #[inline]
  fn is_cancelled(&self) -> bool { self.state.is_cancelled() }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, rc::Rc};

  use super::*;
  use crate::observer::Callbacks;

  #[test]
  fn add_teardown() {
    let local = LocalSubscription::default();
    local.add(LocalSubscription::default());
    assert_eq!(local.teardown_size(), 1);
    local.add(LocalSubscription::default());
    assert_eq!(local.teardown_size(), 2);
    local.add(local.clone());
    assert_eq!(local.teardown_size(), 2);
  }

  #[test]
  fn cancelled_teardown_pruned_on_add() {
    let local = LocalSubscription::default();
    let mut l1 = LocalSubscription::default();
    local.add(l1.clone());
    l1.cancel();
    local.add(LocalSubscription::default());
    assert_eq!(local.teardown_size(), 1);
  }

  #[test]
  fn cancel_propagates_to_teardown() {
    let mut local = LocalSubscription::default();
    let inner = LocalSubscription::default();
    let nested = LocalSubscription::default();
    local.add(inner.clone());
    inner.add(nested.clone());

    local.cancel();
    assert!(local.is_cancelled());
    assert!(inner.is_cancelled());
    assert!(nested.is_cancelled());
    assert_eq!(local.teardown_size(), 0);
  }

  #[test]
  fn add_to_cancelled() {
    let mut local = LocalSubscription::default();
    local.cancel();
    let late = LocalSubscription::default();
    local.add(late.clone());
    assert!(late.is_cancelled());
    assert_eq!(local.teardown_size(), 0);
  }

  #[test]
  fn emit_after_complete_is_dropped() {
    let events = Rc::new(RefCell::new(vec![]));
    let (e1, e2, e3) = (events.clone(), events.clone(), events.clone());
    let mut observer = Callbacks::new()
      .on_next(move |v: i32| e1.borrow_mut().push(format!("next {v}")))
      .on_error(move |e: &str| e2.borrow_mut().push(format!("error {e}")))
      .on_complete(move |_, _| e3.borrow_mut().push("complete".to_owned()));

    let state = LocalSubscription::default();
    let mut subscription = Subscription::new(&mut observer, state.clone());
    subscription.next(1);
    subscription.throw_error("a");
    subscription.next(2);
    subscription.complete();
    subscription.next(3);
    subscription.throw_error("b");
    subscription.complete();

    assert!(subscription.is_cancelled());
    assert!(state.is_cancelled());
    assert_eq!(*events.borrow(), vec!["next 1", "error a", "next 2", "complete"]);
  }

  #[test]
  fn cancel_suppresses_complete() {
    let completed = Rc::new(RefCell::new(false));
    let c = completed.clone();
    let mut observer = Callbacks::new()
      .on_next(|_: i32| {})
      .on_error(|_: ()| {})
      .on_complete(move |_, _| *c.borrow_mut() = true);

    let mut subscription = Subscription::new(&mut observer, LocalSubscription::default());
    subscription.cancel();
    subscription.next(1);
    subscription.complete();
    assert!(!*completed.borrow());
  }
}
