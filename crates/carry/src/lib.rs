//! Carry
//!
//! Typed tuple pipelines. A [`Data`] carries an ordered, heterogeneous tuple of
//! values; a [`Transform`] wraps a function producing a [`Data`] and chains
//! further steps onto it, threading the values positionally from one step to
//! the next without manual unpacking.
//!
//! ```
//! use carry::{data, Data, Transform};
//!
//! fn foo(x: i32, y: f64, z: String) -> Data<(i32, f64, String)> {
//!     data!(2 + x, y / 4.0, z + "foo")
//! }
//!
//! fn bar(x: i32, y: f64, z: String) -> Data<(i32, f64, String)> {
//!     data!(2 + x, y / 4.0, z + "bar")
//! }
//!
//! let baz = Transform::new(foo)
//!     .and_then(bar)
//!     .and_then(bar)
//!     .and_then(|x, y, z| data!(-x, -y, z))
//!     .and_then(bar)
//!     .then(Transform::new(foo));
//!
//! let out = baz.call(1, 2.0, "3".to_string());
//! assert_eq!(out, data!(-3, -0.001953125, "3foobarbarbarfoo".to_string()));
//! ```
//!
//! Steps are plain values. Composing consumes the receiver and returns a new
//! step; nothing is evaluated until [`Transform::call`] (or [`Step::run`]).
//!
//! Arity and element types are checked by the compiler. Tuples of up to eight
//! elements are supported.

/// Number of identifiers in a list.
macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

/// Expands to the given type, discarding the identifier.
macro_rules! replace {
    ($ignored:ident => $ty:ty) => {
        $ty
    };
}

/// Invokes `$mac` once per supported arity with `Type binding` pairs.
macro_rules! for_each_arity {
    ($mac:ident) => {
        $mac!();
        $mac!(T1 v1);
        $mac!(T1 v1, T2 v2);
        $mac!(T1 v1, T2 v2, T3 v3);
        $mac!(T1 v1, T2 v2, T3 v3, T4 v4);
        $mac!(T1 v1, T2 v2, T3 v3, T4 v4, T5 v5);
        $mac!(T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6);
        $mac!(T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7);
        $mac!(T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8);
    };
}

pub mod data;
pub mod error;
pub mod fallible;
pub mod lift;
pub mod prelude;
pub mod step;
pub mod transform;
pub mod tuple;

pub use data::Data;
pub use error::{Error, Result};
pub use fallible::{try_lift, Fallible, TryLifted, TryThen, TryTransform};
pub use lift::{lift, Lifted};
pub use step::Step;
pub use transform::{Then, Transform};
pub use tuple::Tuple;

/// Build a [`Data`] from positional values.
///
/// ```
/// use carry::data;
///
/// let d = data!(1, 2.0, "3");
/// assert_eq!(d.into_inner(), (1, 2.0, "3"));
/// assert_eq!(data!(5).value(), 5);
/// ```
#[macro_export]
macro_rules! data {
    ($($value:expr),* $(,)?) => {
        $crate::Data::new(($($value,)*))
    };
}
