//! # rxlite: a minimal synchronous Observable
//!
//! Describe a producer of values and errors, transform it with operators and
//! consume it with callbacks. Everything runs synchronously inside
//! `subscribe`: no scheduler, no buffering, no sharing between subscribers.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxlite::prelude::*;
//!
//! let mut values = vec![];
//! let mut errors = vec![];
//! create::<i32, &str, _>(|s| {
//!   s.next(1);
//!   s.throw_error("not fatal");
//!   s.next(2);
//!   s.complete();
//! })
//! .map(|v| v * 10)
//! .subscribe(
//!   Callbacks::new()
//!     .on_next(|v| values.push(v))
//!     .on_error(|e| errors.push(e)),
//! );
//!
//! assert_eq!(values, vec![10, 20]);
//! assert_eq!(errors, vec!["not fatal"]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A cold stream and the operators on it |
//! | [`Subscription`] | The handle a producer emits through |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`LocalSubscription`] | Cancellation state, returned by `subscribe` |
//!
//! The error channel is data: an error never ends a stream, and only
//! [`Observable::fold`] turns errors into values.
//!
//! ## Feature Flags
//!
//! - **`tracing`** (default): emit `tracing` events for subscription
//!   lifecycle changes.
//!
//! [`Observable`]: observable::Observable
//! [`Observable::fold`]: observable::Observable::fold
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription
//! [`LocalSubscription`]: subscription::LocalSubscription

mod logging;

pub mod error;
pub mod function;
pub mod notification;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod pointfree;
pub mod prelude;
pub mod subscriber;
pub mod subscription;

// Compile the README example as a doctest.
#[cfg(doctest)]
mod __markdown_doctests {
  mod readme {
    #![doc = include_str!("../README.md")]
  }
}
