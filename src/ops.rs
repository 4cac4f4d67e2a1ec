//! Operators.
//!
//! Each operator is a pair: an `XxxOp` observable owning its source and
//! arguments, and an `XxxObserver` adapter that rewrites events on their way
//! downstream. The adapters only borrow the operator arguments, so an
//! operator can be subscribed to any number of times.

pub mod chain;
pub mod filter;
pub mod fold;
pub mod map;
pub mod tap;
