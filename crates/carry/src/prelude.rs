//! Prelude module for convenient imports
//!
//! ```rust
//! use carry::prelude::*;
//!
//! let t = lift(|x: u8| (x, x + 1)).and_then(|a, b| data!(a + b));
//! assert_eq!(t.call(1).value(), 3);
//! ```

// Re-export core types
pub use crate::data::Data;
pub use crate::transform::Transform;

// Re-export fallible pipelines
pub use crate::fallible::{try_lift, TryTransform};

// Re-export traits
pub use crate::step::Step;
pub use crate::tuple::Tuple;

// Re-export constructors
pub use crate::data;
pub use crate::lift::lift;
