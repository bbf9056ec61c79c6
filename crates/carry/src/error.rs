//! Error types for carry
//!
//! Composition itself cannot fail: arity and element types are checked at
//! compile time, and errors raised by steps are their own. The only runtime
//! failure is moving a runtime-sized sequence into a fixed-arity [`Data`].
//!
//! [`Data`]: crate::Data

use thiserror::Error;

/// Result type alias for carry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for carry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Arity mismatch: expected {expected} values, found {found}")]
    ArityMismatch { expected: usize, found: usize },
}
