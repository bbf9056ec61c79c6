//! Steps
//!
//! The single capability every pipeline piece shares: invocable with an
//! argument tuple, producing an output.

/// A step in a pipeline.
///
/// Consumes an argument tuple `Args` and produces `Output`. Implemented for
/// every `Fn` taking up to eight arguments (the arguments become the tuple),
/// for [`Transform`](crate::Transform), and for the composition adapters.
pub trait Step<Args> {
    type Output;

    fn run(&self, args: Args) -> Self::Output;
}

macro_rules! impl_step_for_fn {
    ($($T:ident $v:ident),*) => {
        impl<Func, R, $($T,)*> Step<($($T,)*)> for Func
        where
            Func: Fn($($T),*) -> R,
        {
            type Output = R;

            fn run(&self, ($($v,)*): ($($T,)*)) -> R {
                self($($v),*)
            }
        }
    };
}

for_each_arity!(impl_step_for_fn);
