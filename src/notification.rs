//! The events flowing through a subscription.
//!
//! Every call a producer makes on its
//! [`Subscription`](crate::subscription::Subscription) is turned into one
//! [`Notification`] and dispatched in call order, so the value channel and
//! the error channel can never drift apart.

use std::{
  any::{type_name, Any},
  fmt::{Debug, Formatter},
};

use crate::{
  error::{Result, RxError},
  observer::Observer,
  subscription::LocalSubscription,
};

/// One event of a stream.
#[derive(Debug)]
pub enum Notification<Item, Err> {
  /// A value on the value channel.
  Next(Item),
  /// A value on the error channel. Does not end the stream.
  Error(Err),
  /// The end of the stream, with an optional payload.
  Complete(Option<Payload>),
}

impl<Item, Err> Notification<Item, Err> {
  #[inline]
  pub fn is_complete(&self) -> bool { matches!(self, Notification::Complete(_)) }

  /// Delivers this event to `observer`. No cancellation bookkeeping happens
  /// here, the caller decides whether the event may still be delivered.
  pub fn accept<O>(self, observer: &mut O, subscription: &LocalSubscription)
  where
    O: Observer<Item, Err> + ?Sized,
  {
    match self {
      Notification::Next(value) => observer.next(value),
      Notification::Error(err) => observer.error(err),
      Notification::Complete(payload) => observer.complete(subscription, payload),
    }
  }
}

/// Opaque value a producer may attach to its completion.
///
/// Producers pick the type, consumers get it back with [`Payload::downcast`]
/// or [`Payload::extract`].
pub struct Payload(Box<dyn Any>);

impl Payload {
  pub fn new<T: Any>(value: T) -> Self { Self(Box::new(value)) }

  #[inline]
  pub fn is<T: Any>(&self) -> bool { self.0.is::<T>() }

  #[inline]
  pub fn downcast_ref<T: Any>(&self) -> Option<&T> { self.0.downcast_ref() }

  pub fn downcast<T: Any>(self) -> Result<T> {
    self
      .0
      .downcast::<T>()
      .map(|value| *value)
      .map_err(|_| RxError::PayloadType { expected: type_name::<T>() })
  }

  /// Takes the payload handed to an `on_complete` callback and downcasts it.
  pub fn extract<T: Any>(payload: Option<Payload>) -> Result<T> {
    payload.ok_or(RxError::MissingPayload)?.downcast()
  }
}

impl Debug for Payload {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str("Payload(..)") }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn payload_downcast() {
    let payload = Payload::new("Hello");
    assert!(payload.is::<&str>());
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"Hello"));
    assert_eq!(payload.downcast::<&str>(), Ok("Hello"));
  }

  #[test]
  fn payload_wrong_type() {
    let err = Payload::new(1u8).downcast::<String>().unwrap_err();
    assert!(matches!(err, RxError::PayloadType { expected } if expected.contains("String")));
  }

  #[test]
  fn extract_missing() {
    assert_eq!(Payload::extract::<i32>(None), Err(RxError::MissingPayload));
    assert_eq!(Payload::extract::<i32>(Some(Payload::new(7))), Ok(7));
  }

  #[test]
  fn complete_flag() {
    assert!(Notification::<i32, ()>::Complete(None).is_complete());
    assert!(!Notification::<i32, ()>::Next(1).is_complete());
    assert!(!Notification::<i32, ()>::Error(()).is_complete());
  }
}
