//! Prelude module for convenient imports
//!
//! Re-exports the types, traits and creation functions most code needs. The
//! point-free functions live in [`crate::pointfree`] and are not included,
//! since they share their names with the [`Observable`] methods.

pub use crate::{
  error::{Result, RxError},
  notification::{Notification, Payload},
  observable::{create, empty, of, range, Create, FromIter, Observable},
  observer::{Callbacks, FnMutObserver, Noop, Observer},
  subscriber::Subscriber,
  subscription::{LocalSubscription, Subscription, SubscriptionLike},
};
// Macros
pub use crate::{compose, of};
