//! Observer trait and implementations
//!
//! An Observer consumes the three kinds of events of a stream: values
//! (`next`), errors (`error`) and the final completion (`complete`).

use std::convert::Infallible;

use crate::{notification::Payload, subscription::LocalSubscription};

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: The consumer of data in reactive programming
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Receive a value on the error channel.
  ///
  /// Unlike a fault, an error does not end the stream: more values and errors
  /// may follow it.
  fn error(&mut self, err: Err);

  /// Handle completion of the observable
  ///
  /// Called at most once, always as the last event. `subscription` is already
  /// cancelled at this point.
  fn complete(&mut self, subscription: &LocalSubscription, payload: Option<Payload>);
}

// ============================================================================
// Callbacks - optional closures per channel
// ============================================================================

/// Placeholder for a callback that was not supplied. Ignores its input.
#[derive(Clone, Copy, Debug, Default)]
pub struct Noop;

/// Handler for the value or error channel of [`Callbacks`].
pub trait ValueHandler<T> {
  fn handle(&mut self, value: T);
}

impl<T, F> ValueHandler<T> for F
where
  F: FnMut(T),
{
  #[inline]
  fn handle(&mut self, value: T) { self(value) }
}

impl<T> ValueHandler<T> for Noop {
  #[inline]
  fn handle(&mut self, _: T) {}
}

/// Handler for the completion of [`Callbacks`].
pub trait CompleteHandler {
  fn handle(&mut self, subscription: &LocalSubscription, payload: Option<Payload>);
}

impl<F> CompleteHandler for F
where
  F: FnMut(&LocalSubscription, Option<Payload>),
{
  #[inline]
  fn handle(&mut self, subscription: &LocalSubscription, payload: Option<Payload>) {
    self(subscription, payload)
  }
}

impl CompleteHandler for Noop {
  #[inline]
  fn handle(&mut self, _: &LocalSubscription, _: Option<Payload>) {}
}

/// An observer assembled from optional closures.
///
/// Any callback left out ignores its events, so a consumer that never sets
/// `on_error` silently drops the error channel.
///
/// ```
/// use rxlite::prelude::*;
///
/// let mut values = vec![];
/// let mut errors = vec![];
/// create::<i32, &str, _>(|s| {
///   s.next(1);
///   s.throw_error("boom");
///   s.next(2);
///   s.complete();
/// })
/// .subscribe(
///   Callbacks::new()
///     .on_next(|v| values.push(v))
///     .on_error(|e| errors.push(e)),
/// );
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(errors, vec!["boom"]);
/// ```
#[derive(Clone, Default)]
pub struct Callbacks<N = Noop, E = Noop, C = Noop> {
  on_next: N,
  on_error: E,
  on_complete: C,
}

impl Callbacks {
  pub fn new() -> Self { Self::default() }
}

impl<N, E, C> Callbacks<N, E, C> {
  pub fn on_next<N2>(self, on_next: N2) -> Callbacks<N2, E, C> {
    Callbacks { on_next, on_error: self.on_error, on_complete: self.on_complete }
  }

  pub fn on_error<E2>(self, on_error: E2) -> Callbacks<N, E2, C> {
    Callbacks { on_next: self.on_next, on_error, on_complete: self.on_complete }
  }

  pub fn on_complete<C2>(self, on_complete: C2) -> Callbacks<N, E, C2>
  where
    C2: FnMut(&LocalSubscription, Option<Payload>),
  {
    Callbacks { on_next: self.on_next, on_error: self.on_error, on_complete }
  }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for Callbacks<N, E, C>
where
  N: ValueHandler<Item>,
  E: ValueHandler<Err>,
  C: CompleteHandler,
{
  #[inline]
  fn next(&mut self, value: Item) { self.on_next.handle(value) }

  #[inline]
  fn error(&mut self, err: Err) { self.on_error.handle(err) }

  #[inline]
  fn complete(&mut self, subscription: &LocalSubscription, payload: Option<Payload>) {
    self.on_complete.handle(subscription, payload)
  }
}

// ============================================================================
// FnMutObserver - Closure adapter
// ============================================================================

/// Closure as a value-only observer.
///
/// Only streams whose error channel is [`Infallible`] accept it, so errors
/// can't be dropped by accident.
#[derive(Clone)]
pub struct FnMutObserver<F>(pub F);

impl<F, Item> Observer<Item, Infallible> for FnMutObserver<F>
where
  F: FnMut(Item),
{
  #[inline]
  fn next(&mut self, v: Item) { (self.0)(v); }

  #[inline]
  fn error(&mut self, err: Infallible) { match err {} }

  #[inline]
  fn complete(&mut self, _: &LocalSubscription, _: Option<Payload>) {}
}

// ============================================================================
// Tests
// ============================================================================
