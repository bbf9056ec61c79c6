//! Fallible pipelines
//!
//! [`TryTransform`] mirrors [`Transform`] for steps returning
//! `Result<Data<_>, E>`. The first `Err` ends the run and is returned as is;
//! later steps are not called.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::data::Data;
use crate::step::Step;
use crate::transform::{Transform, ANONYMOUS};
use crate::tuple::Tuple;

/// A composable step from `Args` to `Result<Data<Out>, E>`.
pub struct TryTransform<Args, Out, E, S> {
    step: S,
    name: Option<Cow<'static, str>>,
    _shape: PhantomData<fn(Args) -> Result<Out, E>>,
}

impl<Args, Out, E, S> TryTransform<Args, Out, E, S>
where
    S: Step<Args, Output = Result<Data<Out>, E>>,
    Args: Tuple,
{
    /// Wrap a step returning `Result<Data<_>, E>`.
    pub fn new(step: S) -> Self {
        Self {
            step,
            name: None,
            _shape: PhantomData,
        }
    }

    /// Attach a name, reported in logs when this transform runs or fails.
    pub fn named(self, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn arity(&self) -> usize {
        Args::ARITY
    }

    /// Chain any fallible [`Step`] taking this transform's output values.
    pub fn then<Next, P>(self, next: Next) -> TryTransform<Args, P, E, TryThen<Self, Next>>
    where
        Next: Step<Out, Output = Result<Data<P>, E>>,
    {
        TryTransform::new(TryThen {
            first: self,
            second: next,
        })
    }
}

impl<Args, Out, E, S> Step<Args> for TryTransform<Args, Out, E, S>
where
    S: Step<Args, Output = Result<Data<Out>, E>>,
    Args: Tuple,
{
    type Output = Result<Data<Out>, E>;

    fn run(&self, args: Args) -> Self::Output {
        let name = self.name().unwrap_or(ANONYMOUS);
        trace!(step = name, arity = Args::ARITY, "running transform");
        let result = self.step.run(args);
        if result.is_err() {
            debug!(step = name, arity = Args::ARITY, "transform failed");
        }
        result
    }
}

impl<Args, Out, E, S: Clone> Clone for TryTransform<Args, Out, E, S> {
    fn clone(&self) -> Self {
        Self {
            step: self.step.clone(),
            name: self.name.clone(),
            _shape: PhantomData,
        }
    }
}

impl<Args, Out, E, S> fmt::Debug for TryTransform<Args, Out, E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryTransform")
            .field("name", &self.name)
            .field("args", &std::any::type_name::<Args>())
            .field("output", &std::any::type_name::<Out>())
            .field("error", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}

impl<Args, Out, S> Transform<Args, Out, S>
where
    S: Step<Args, Output = Data<Out>>,
    Args: Tuple,
{
    /// View an infallible transform as one failing with `E`.
    pub fn fallible<E>(self) -> TryTransform<Args, Out, E, Fallible<Self, E>> {
        TryTransform::new(Fallible {
            step: self,
            _error: PhantomData,
        })
    }
}

/// Runs `first`; on success feeds its values into `second`.
#[derive(Debug, Clone, Copy)]
pub struct TryThen<A, B> {
    first: A,
    second: B,
}

impl<Args, Mid, R, E, A, B> Step<Args> for TryThen<A, B>
where
    A: Step<Args, Output = Result<Data<Mid>, E>>,
    B: Step<Mid, Output = Result<R, E>>,
{
    type Output = Result<R, E>;

    fn run(&self, args: Args) -> Self::Output {
        self.first.run(args)?.then(&self.second)
    }
}

/// An infallible step whose output is always `Ok`.
pub struct Fallible<S, E> {
    step: S,
    _error: PhantomData<fn() -> E>,
}

impl<Args, S, E> Step<Args> for Fallible<S, E>
where
    S: Step<Args>,
{
    type Output = Result<S::Output, E>;

    fn run(&self, args: Args) -> Self::Output {
        Ok(self.step.run(args))
    }
}

impl<S: Clone, E> Clone for Fallible<S, E> {
    fn clone(&self) -> Self {
        Self {
            step: self.step.clone(),
            _error: PhantomData,
        }
    }
}

impl<S: fmt::Debug, E> fmt::Debug for Fallible<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallible").field("step", &self.step).finish()
    }
}

/// A step that wraps the `Ok` tuple returned by `F` in [`Data`].
#[derive(Debug, Clone, Copy)]
pub struct TryLifted<F>(F);

impl<Args, T, E, F> Step<Args> for TryLifted<F>
where
    F: Step<Args, Output = Result<T, E>>,
    T: Tuple,
{
    type Output = Result<Data<T>, E>;

    fn run(&self, args: Args) -> Self::Output {
        self.0.run(args).map(Data::new)
    }
}

/// Turn a function returning `Result` of a plain tuple into a
/// [`TryTransform`].
///
/// ```
/// use carry::{data, try_lift};
///
/// let parse = try_lift(|s: &'static str| s.parse::<u16>().map(|n| (n, n * 2)));
/// assert_eq!(parse.call("21"), Ok(data!(21, 42)));
/// assert!(parse.call("x").is_err());
/// ```
pub fn try_lift<Args, Out, E, F>(func: F) -> TryTransform<Args, Out, E, TryLifted<F>>
where
    F: Step<Args, Output = Result<Out, E>>,
    Args: Tuple,
    Out: Tuple,
{
    TryTransform::new(TryLifted(func))
}

macro_rules! impl_try_transform {
    ($($T:ident $v:ident),*) => {
        impl<$($T,)* Out, E, S> TryTransform<($($T,)*), Out, E, S>
        where
            S: Step<($($T,)*), Output = Result<Data<Out>, E>>,
        {
            /// Run with positional arguments.
            pub fn call(&self, $($v: $T),*) -> Result<Data<Out>, E> {
                self.run(($($v,)*))
            }
        }

        impl<Args, $($T,)* E, S> TryTransform<Args, ($($T,)*), E, S>
        where
            S: Step<Args, Output = Result<Data<($($T,)*)>, E>>,
            Args: Tuple,
        {
            /// Chain a fallible function taking the output values
            /// positionally.
            pub fn and_then<Func, P>(
                self,
                func: Func,
            ) -> TryTransform<Args, P, E, TryThen<Self, Func>>
            where
                Func: Fn($($T),*) -> Result<Data<P>, E>,
            {
                self.then(func)
            }

            /// Chain a fallible function returning a plain tuple.
            pub fn and_then_lift<Func, P>(
                self,
                func: Func,
            ) -> TryTransform<Args, P, E, TryThen<Self, TryLifted<Func>>>
            where
                Func: Fn($($T),*) -> Result<P, E>,
                P: Tuple,
            {
                self.then(TryLifted(func))
            }
        }
    };
}

for_each_arity!(impl_try_transform);
