//! Tuple arity marker.

mod sealed {
    pub trait Sealed {}
}

/// A Rust tuple of up to eight elements.
///
/// Sealed: only tuples implement it. `ARITY` is the number of elements.
pub trait Tuple: sealed::Sealed {
    const ARITY: usize;
}

macro_rules! impl_tuple {
    ($($T:ident $v:ident),*) => {
        impl<$($T,)*> sealed::Sealed for ($($T,)*) {}

        impl<$($T,)*> Tuple for ($($T,)*) {
            const ARITY: usize = count!($($T)*);
        }
    };
}

for_each_arity!(impl_tuple);
