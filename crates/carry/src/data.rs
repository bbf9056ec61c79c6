//! Data
//!
//! An immutable, fixed-arity container of ordered values. The tuple type `T`
//! fixes both the arity and the type of every position.

use crate::error::{Error, Result};
use crate::step::Step;
use crate::tuple::Tuple;

/// Carries a tuple of values through a pipeline.
///
/// Values are only ever read or moved out, never mutated in place. Use
/// [`bind`](Data::bind) to feed them positionally into the next function and
/// [`escape`](Data::escape) to leave the container altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Data<T>(T);

impl<T: Tuple> Data<T> {
    pub const fn new(values: T) -> Self {
        Self(values)
    }

    /// Number of values carried.
    pub const fn arity(&self) -> usize {
        T::ARITY
    }
}

impl<T> Data<T> {
    /// Borrow the underlying tuple.
    pub fn values(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    /// Feed the values into any [`Step`], such as a [`Transform`].
    ///
    /// Returns whatever the step returns; for a `Transform` that is another
    /// `Data`.
    ///
    /// [`Transform`]: crate::Transform
    pub fn then<S>(self, step: &S) -> S::Output
    where
        S: Step<T>,
    {
        step.run(self.0)
    }
}

impl<A> Data<(A,)> {
    /// The sole value. Only single-value containers have one.
    ///
    /// ```compile_fail
    /// let _ = carry::data!(1, 2).value();
    /// ```
    pub fn value(self) -> A {
        self.0.0
    }

    pub fn get(&self) -> &A {
        &self.0.0
    }
}

impl<T: Tuple + Default> Default for Data<T> {
    fn default() -> Self {
        Self(T::default())
    }
}

impl<T: Tuple> From<T> for Data<T> {
    fn from(values: T) -> Self {
        Self(values)
    }
}

macro_rules! impl_data {
    ($($T:ident $v:ident),*) => {
        impl<$($T,)*> Data<($($T,)*)> {
            /// Call `func` with the values as positional arguments and return
            /// the `Data` it produces.
            pub fn bind<Func, R>(self, func: Func) -> Data<R>
            where
                Func: FnOnce($($T),*) -> Data<R>,
            {
                let ($($v,)*) = self.0;
                func($($v),*)
            }

            /// Like [`bind`](Self::bind), but `func` may return anything.
            /// Used to hand the values to code outside the pipeline.
            pub fn escape<Func, R>(self, func: Func) -> R
            where
                Func: FnOnce($($T),*) -> R,
            {
                let ($($v,)*) = self.0;
                func($($v),*)
            }
        }

        impl<Elem> From<[Elem; count!($($T)*)]> for Data<($(replace!($T => Elem),)*)> {
            fn from(values: [Elem; count!($($T)*)]) -> Self {
                let [$($v),*] = values;
                Self(($($v,)*))
            }
        }

        impl<Elem> TryFrom<Vec<Elem>> for Data<($(replace!($T => Elem),)*)> {
            type Error = Error;

            fn try_from(values: Vec<Elem>) -> Result<Self> {
                let found = values.len();
                let values: [Elem; count!($($T)*)] =
                    values.try_into().map_err(|_| Error::ArityMismatch {
                        expected: count!($($T)*),
                        found,
                    })?;
                Ok(Self::from(values))
            }
        }
    };
}

for_each_arity!(impl_data);
