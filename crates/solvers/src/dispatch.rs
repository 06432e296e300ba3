//! Entry points that validate caller input and pick a solver by name.

mod method;
mod scalar;


pub use method::{Method, MethodArg};
pub use scalar::Scalar;

use std::convert::Infallible;

use rootline_core::{Args, Function, Inverse, Observer, Signature};

use crate::{
    Error, InvalidArgument,
    equation::{Action, Config, Event, Solution, newton_raphson, secant},
};

/// Placeholder derivative type for solves that have none.
///
/// Uninhabited, so it can never be called.
#[derive(Debug, Clone, Copy)]
pub enum NoDerivative {}

impl Function for NoDerivative {
    type Error = Infallible;

    fn signature(&self) -> Signature {
        match *self {}
    }

    fn call(&self, _x: f64, _args: &Args) -> Result<f64, Self::Error> {
        match *self {}
    }
}

/// Starts a root search for `f`.
///
/// Configure the search with the builder methods, then call
/// [`RootFor::solve`]. A method is required; everything else has a default.
///
/// ```
/// use rootline_core::unary;
/// use rootline_solvers::root_for;
///
/// let f = unary(|x| x * x - 2.0);
/// let df = unary(|x| 2.0 * x);
///
/// let x = root_for(&f).method("newton").derivative(&df).x0(10.0).solve().unwrap();
/// assert!((x - 2f64.sqrt()).abs() < 1e-6);
/// ```
pub fn root_for<F: Function>(f: F) -> RootFor<F> {
    RootFor::new(f, None)
}

/// Starts a search for the `x` where `f(x) = y`.
///
/// Solves `f(x) - y = 0` with the same options as [`root_for`]. Extra
/// arguments are forwarded to `f` as usual. A derivative, if given, must be
/// the derivative of `f` itself.
pub fn inverse_for<F: Function>(f: F, y: impl Into<Scalar>) -> RootFor<F> {
    RootFor::new(f, Some(y.into()))
}

/// Builder for a single root search.
///
/// Values are checked in [`solve`](Self::solve), before the first call of
/// `f` or its derivative.
#[must_use]
pub struct RootFor<F, D = NoDerivative, Obs = ()> {
    f: F,
    target: Option<Scalar>,
    df: Option<D>,
    f_args: Args,
    df_args: Args,
    method: Option<MethodArg>,
    x0: Scalar,
    x1: Scalar,
    num: usize,
    err: f64,
    observer: Obs,
}

impl<F: Function> RootFor<F> {
    fn new(f: F, target: Option<Scalar>) -> Self {
        let config = Config::default();
        Self {
            f,
            target,
            df: None,
            f_args: Args::None,
            df_args: Args::None,
            method: None,
            x0: Scalar::Number(0.0),
            x1: Scalar::Number(1.0),
            num: config.max_iters(),
            err: config.residual_tol(),
            observer: (),
        }
    }
}

impl<F, D, Obs> RootFor<F, D, Obs> {
    /// Sets the method by [`Method`] or by name (`"n"`, `"newton"`,
    /// `"newton_raphson"`, `"s"`, `"sec"`, `"secant"`).
    pub fn method(mut self, method: impl Into<MethodArg>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Sets the initial guess. Defaults to `0.0`.
    pub fn x0(mut self, x0: impl Into<Scalar>) -> Self {
        self.x0 = x0.into();
        self
    }

    /// Sets the second initial guess, used by the secant method. Defaults to `1.0`.
    pub fn x1(mut self, x1: impl Into<Scalar>) -> Self {
        self.x1 = x1.into();
        self
    }

    /// Sets extra arguments forwarded to `f`.
    pub fn f_args(mut self, args: impl Into<Args>) -> Self {
        self.f_args = args.into();
        self
    }

    /// Sets extra arguments forwarded to the derivative.
    pub fn df_args(mut self, args: impl Into<Args>) -> Self {
        self.df_args = args.into();
        self
    }

    /// Sets the iteration budget. Defaults to 100.
    pub fn num(mut self, num: usize) -> Self {
        self.num = num;
        self
    }

    /// Sets the residual tolerance. Defaults to `1e-6`.
    pub fn err(mut self, err: f64) -> Self {
        self.err = err;
        self
    }

    /// Sets the derivative of `f`, required for Newton-Raphson.
    pub fn derivative<D2: Function>(self, df: D2) -> RootFor<F, D2, Obs> {
        RootFor {
            f: self.f,
            target: self.target,
            df: Some(df),
            f_args: self.f_args,
            df_args: self.df_args,
            method: self.method,
            x0: self.x0,
            x1: self.x1,
            num: self.num,
            err: self.err,
            observer: self.observer,
        }
    }

    /// Sets an observer that receives one [`Event`] per iteration.
    pub fn observer<O2>(self, observer: O2) -> RootFor<F, D, O2>
    where
        O2: Observer<Event, Action>,
    {
        RootFor {
            f: self.f,
            target: self.target,
            df: self.df,
            f_args: self.f_args,
            df_args: self.df_args,
            method: self.method,
            x0: self.x0,
            x1: self.x1,
            num: self.num,
            err: self.err,
            observer,
        }
    }
}

impl<F, D, Obs> RootFor<F, D, Obs>
where
    F: Function,
    D: Function,
    Obs: Observer<Event, Action>,
{
    /// Validates the settings and runs the selected solver.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] before iterating if `f` cannot take
    /// its extra arguments, the method is missing or unknown, Newton-Raphson
    /// has no usable derivative, a guess or target is not numeric, or the
    /// tolerance is invalid. Otherwise returns the solver's error, such as
    /// [`Error::NoConvergence`].
    pub fn solve(self) -> Result<f64, Error> {
        let Self {
            f,
            target,
            df,
            f_args,
            df_args,
            method,
            x0,
            x1,
            num,
            err,
            observer,
        } = self;

        if !f.signature().accepts(&f_args) {
            return Err(InvalidArgument::Function(f_args.shape()).into());
        }

        let method = method.ok_or(InvalidArgument::MissingMethod)?.resolve()?;

        if method == Method::NewtonRaphson {
            let df = df.as_ref().ok_or(InvalidArgument::MissingDerivative)?;
            if !df.signature().accepts(&df_args) {
                return Err(InvalidArgument::Derivative(df_args.shape()).into());
            }
        }

        let plan = Plan {
            method,
            df: df.as_ref(),
            f_args: &f_args,
            df_args: &df_args,
            x0: x0.coerce("x0")?,
            x1: x1.coerce("x1")?,
            config: Config::new(num, err).map_err(InvalidArgument::from)?,
        };
        let target = target.map(|y| y.coerce("y")).transpose()?;

        let solution = match target {
            None => plan.run(&f, observer)?,
            Some(y) => {
                log::debug!("inverting for target y = {y}");
                plan.run(&Inverse::new(&f, y), observer)?
            }
        };

        Ok(solution.x)
    }
}

/// Validated settings for one solve.
struct Plan<'a, D> {
    method: Method,
    df: Option<&'a D>,
    f_args: &'a Args,
    df_args: &'a Args,
    x0: f64,
    x1: f64,
    config: Config,
}

impl<D: Function> Plan<'_, D> {
    fn run<G, Obs>(&self, g: &G, observer: Obs) -> Result<Solution, Error>
    where
        G: Function,
        Obs: Observer<Event, Action>,
    {
        log::debug!(
            "solving with {} from x0 = {}, x1 = {} (num = {}, err = {})",
            self.method,
            self.x0,
            self.x1,
            self.config.max_iters(),
            self.config.residual_tol()
        );

        match self.method {
            Method::NewtonRaphson => {
                let df = self.df.ok_or(InvalidArgument::MissingDerivative)?;
                newton_raphson::solve(
                    g,
                    self.f_args,
                    df,
                    self.df_args,
                    self.x0,
                    &self.config,
                    observer,
                )
            }
            Method::Secant => secant::solve(
                g,
                self.f_args,
                self.x0,
                self.x1,
                &self.config,
                observer,
            ),
        }
    }
}
