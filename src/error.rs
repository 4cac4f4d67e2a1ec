//! Error types for rxlite.
//!
//! Nothing in the stream protocol itself fails: the error channel of an
//! [`Observable`](crate::observable::Observable) carries plain application
//! values. [`RxError`] only covers the library helpers that can be misused,
//! such as extracting a completion [`Payload`](crate::notification::Payload)
//! as the wrong type.

/// Root error type for the fallible helpers of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RxError {
  /// A completion payload was downcast to a type it does not hold.
  #[error("completion payload is not of type `{expected}`")]
  PayloadType {
    /// Name of the type that was requested
    expected: &'static str,
  },

  /// A completion payload was requested but the stream completed without one.
  #[error("stream completed without a payload")]
  MissingPayload,
}

/// Result alias used by the fallible helpers of this crate.
pub type Result<T> = std::result::Result<T, RxError>;
