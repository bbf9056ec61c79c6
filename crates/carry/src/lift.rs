//! Lifting plain functions into transforms.

use crate::data::Data;
use crate::step::Step;
use crate::transform::Transform;
use crate::tuple::Tuple;

/// A step that wraps the tuple returned by `F` in [`Data`].
#[derive(Debug, Clone, Copy)]
pub struct Lifted<F>(F);

impl<F> Lifted<F> {
    pub(crate) fn new(func: F) -> Self {
        Self(func)
    }
}

impl<Args, F> Step<Args> for Lifted<F>
where
    F: Step<Args>,
    F::Output: Tuple,
{
    type Output = Data<F::Output>;

    fn run(&self, args: Args) -> Self::Output {
        Data::new(self.0.run(args))
    }
}

/// Turn a function returning a plain tuple into a [`Transform`].
///
/// The parameter list is kept as is; the tuple it returns becomes the
/// transform's output values.
///
/// ```
/// use carry::{data, lift};
///
/// let split = lift(|s: &'static str| (s.len(), s.to_uppercase()));
/// assert_eq!(split.call("abc"), data!(3, "ABC".to_string()));
/// ```
pub fn lift<Args, Out, F>(func: F) -> Transform<Args, Out, Lifted<F>>
where
    F: Step<Args, Output = Out>,
    Args: Tuple,
    Out: Tuple,
{
    Transform::new(Lifted(func))
}
