//! Curried, data-last versions of the operators.
//!
//! Each function takes the operator arguments and returns a function of the
//! source observable, building exactly what the matching [`Observable`]
//! method builds. Pipelines are assembled with [`compose`] or
//! [`compose!`](crate::compose):
//!
//! ```
//! use rxlite::{compose, pointfree::*, prelude::*};
//!
//! let mut seen = vec![];
//! compose!(
//!   subscribe(FnMutObserver(|v| seen.push(v))),
//!   map(|x: i32| x * 2),
//!   filter(|x: &i32| x % 2 == 1),
//! )(range(0, 6));
//! assert_eq!(seen, vec![2, 6, 10]);
//! ```

pub use crate::function::compose;
use crate::{
  observable::Observable,
  observer::Observer,
  ops::{chain::ChainOp, filter::FilterOp, fold::FoldOp, map::MapOp, tap::TapOp},
  subscription::LocalSubscription,
};

/// Point-free [`Observable::map`].
pub fn map<S, F>(func: F) -> impl FnOnce(S) -> MapOp<S, F> {
  move |source| MapOp { source, func }
}

/// Point-free [`Observable::filter`].
pub fn filter<S, F>(predicate: F) -> impl FnOnce(S) -> FilterOp<S, F> {
  move |source| FilterOp { source, predicate }
}

/// Point-free [`Observable::chain`].
pub fn chain<S, F>(func: F) -> impl FnOnce(S) -> ChainOp<S, F> {
  move |source| ChainOp { source, func }
}

/// Point-free [`Observable::tap`].
pub fn tap<S, F>(func: F) -> impl FnOnce(S) -> TapOp<S, F> {
  move |source| TapOp { source, func }
}

/// Point-free [`Observable::fold`].
pub fn propagate_to<S, FE, FV>(on_err: FE, on_val: FV) -> impl FnOnce(S) -> FoldOp<S, FE, FV> {
  move |source| FoldOp { source, on_err, on_val }
}

/// Point-free [`Observable::subscribe`].
pub fn subscribe<S, O>(observer: O) -> impl FnOnce(S) -> LocalSubscription
where
  S: Observable,
  O: Observer<S::Item, S::Err>,
{
  move |source| source.subscribe(observer)
}
