/// A unary real-valued function `f(x)`.
///
/// Every `Fn(f64) -> f64` implements this trait, so closures and plain `fn`
/// items can be passed wherever a `ScalarFunction` is expected.
pub trait ScalarFunction {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A scalar function with a known first derivative.
pub trait Differentiable: ScalarFunction {
    /// Evaluates `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

/// Pairs a function with a separately supplied derivative.
///
/// The pair is trusted as given: nothing checks that `derivative` is really
/// the derivative of `function`.
///
/// ```
/// use compphys_core::{Differentiable, ScalarFunction, WithDerivative};
///
/// let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// assert_eq!(f.eval(2.0), 2.0);
/// assert_eq!(f.derivative(2.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    function: F,
    derivative: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: ScalarFunction,
    D: ScalarFunction,
{
    /// Creates a new function/derivative pair.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
        }
    }
}

impl<F, D> ScalarFunction for WithDerivative<F, D>
where
    F: ScalarFunction,
{
    fn eval(&self, x: f64) -> f64 {
        self.function.eval(x)
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: ScalarFunction,
    D: ScalarFunction,
{
    fn derivative(&self, x: f64) -> f64 {
        self.derivative.eval(x)
    }
}
