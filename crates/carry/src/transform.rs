//! Transformation Pipeline
//!
//! A [`Transform`] wraps a step producing [`Data`] and chains further steps
//! onto it. Chaining only ever changes the output shape; the parameter list
//! stays that of the first step.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::data::Data;
use crate::lift::Lifted;
use crate::step::Step;
use crate::tuple::Tuple;

/// Step name reported in logs for transforms without one.
pub(crate) const ANONYMOUS: &str = "<anonymous>";

/// A composable step from `Args` to `Data<Out>`.
///
/// Immutable: [`and_then`](Self::and_then) and friends consume the transform
/// and return a new one. Clone first to keep the original around.
pub struct Transform<Args, Out, S> {
    step: S,
    name: Option<Cow<'static, str>>,
    _shape: PhantomData<fn(Args) -> Out>,
}

impl<Args, Out, S> Transform<Args, Out, S>
where
    S: Step<Args, Output = Data<Out>>,
    Args: Tuple,
{
    /// Wrap a step that already returns [`Data`].
    pub fn new(step: S) -> Self {
        Self {
            step,
            name: None,
            _shape: PhantomData,
        }
    }

    /// Attach a name, reported in trace logs in place of `<anonymous>`.
    pub fn named(self, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of arguments the transform accepts.
    pub fn arity(&self) -> usize {
        Args::ARITY
    }

    /// Chain any [`Step`] taking this transform's output values, such as
    /// another `Transform` or a [`lift`](crate::lift::lift)ed function.
    pub fn then<Next, P>(self, next: Next) -> Transform<Args, P, Then<Self, Next>>
    where
        Next: Step<Out, Output = Data<P>>,
    {
        Transform::new(Then {
            first: self,
            second: next,
        })
    }
}

impl<Args, Out, S> Step<Args> for Transform<Args, Out, S>
where
    S: Step<Args, Output = Data<Out>>,
    Args: Tuple,
{
    type Output = Data<Out>;

    fn run(&self, args: Args) -> Data<Out> {
        trace!(
            step = self.name().unwrap_or(ANONYMOUS),
            arity = Args::ARITY,
            "running transform"
        );
        self.step.run(args)
    }
}

impl<Args, Out, S: Clone> Clone for Transform<Args, Out, S> {
    fn clone(&self) -> Self {
        Self {
            step: self.step.clone(),
            name: self.name.clone(),
            _shape: PhantomData,
        }
    }
}

impl<Args, Out, S> fmt::Debug for Transform<Args, Out, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("name", &self.name)
            .field("args", &std::any::type_name::<Args>())
            .field("output", &std::any::type_name::<Out>())
            .finish_non_exhaustive()
    }
}

/// Runs `first`, then feeds its values into `second`.
#[derive(Debug, Clone, Copy)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<Args, Mid, A, B> Step<Args> for Then<A, B>
where
    A: Step<Args, Output = Data<Mid>>,
    B: Step<Mid>,
{
    type Output = B::Output;

    fn run(&self, args: Args) -> Self::Output {
        self.first.run(args).then(&self.second)
    }
}

macro_rules! impl_transform {
    ($($T:ident $v:ident),*) => {
        impl<$($T,)* Out, S> Transform<($($T,)*), Out, S>
        where
            S: Step<($($T,)*), Output = Data<Out>>,
        {
            /// Run the transform with positional arguments.
            pub fn call(&self, $($v: $T),*) -> Data<Out> {
                self.run(($($v,)*))
            }
        }

        impl<Args, $($T,)* S> Transform<Args, ($($T,)*), S>
        where
            S: Step<Args, Output = Data<($($T,)*)>>,
            Args: Tuple,
        {
            /// Chain a function taking this transform's output values
            /// positionally and returning new [`Data`].
            pub fn and_then<Func, P>(self, func: Func) -> Transform<Args, P, Then<Self, Func>>
            where
                Func: Fn($($T),*) -> Data<P>,
            {
                self.then(func)
            }

            /// Chain a function returning a plain tuple; it is lifted first.
            pub fn and_then_lift<Func, P>(
                self,
                func: Func,
            ) -> Transform<Args, P, Then<Self, Lifted<Func>>>
            where
                Func: Fn($($T),*) -> P,
                P: Tuple,
            {
                self.then(Lifted::new(func))
            }
        }
    };
}

for_each_arity!(impl_transform);
