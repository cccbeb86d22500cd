//! Runtime-arity adapters.

use std::fmt;

use super::arity::Arity;
use super::spread::{Spread, spread};

/// A function adapted to accept any number of arguments.
///
/// Created by [`variadic`]. Each call partitions its arguments with
/// [`spread`] and hands the resulting [`Spread`] to the wrapped function.
#[derive(Clone, Copy)]
pub struct Variadic<F> {
    function: F,
    arity: Arity,
}

impl<F> Variadic<F> {
    /// Wraps `function`, partitioning calls for the given arity.
    pub const fn new(function: F, arity: Arity) -> Self {
        Self { function, arity }
    }

    /// The arity calls are partitioned for.
    #[inline]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Returns the wrapped function.
    pub fn into_inner(self) -> F {
        self.function
    }

    /// Calls the wrapped function with any number of arguments.
    #[inline]
    pub fn call<T, R, I>(&self, arguments: I) -> R
    where
        F: Fn(Spread<T>) -> R,
        I: IntoIterator<Item = T>,
    {
        (self.function)(spread(arguments, self.arity))
    }

    /// Turns the adapter into a plain closure over a collected argument list.
    ///
    /// The closure takes one parameter, so wrapping it again with
    /// [`Arity::ONE`] passes the list through untouched.
    pub fn into_fn<T, R>(self) -> impl Fn(Vec<T>) -> R
    where
        F: Fn(Spread<T>) -> R,
    {
        move |arguments: Vec<T>| self.call(arguments)
    }
}

impl<F> fmt::Debug for Variadic<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Variadic")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Adapts `function` to accept any number of arguments.
///
/// Calls made through the returned [`Variadic`] never fail on argument
/// count. For arity `N`, the function receives a [`Spread`] holding `N - 1`
/// required slots (padded with `None`) and the rest list.
///
/// # Examples
///
/// ```rust
/// use varity::variadic::{variadic, Arity, Spread};
///
/// let describe = variadic(
///     |spread: Spread<&str>| {
///         let (required, rest) = spread.into_parts();
///         format!("{:?} {:?}", required, rest)
///     },
///     Arity::THREE,
/// );
///
/// assert_eq!(describe.call(["a"]), r#"[Some("a"), None] []"#);
/// assert_eq!(describe.call(["a", "b", "c", "d"]), r#"[Some("a"), Some("b")] ["c", "d"]"#);
/// ```
pub const fn variadic<F>(function: F, arity: Arity) -> Variadic<F> {
    Variadic::new(function, arity)
}

/// A variadic adapter for functions that take a receiver.
///
/// Created by [`variadic_method`]. The receiver passed to
/// [`call`](Self::call) reaches the wrapped function unchanged, ahead of the
/// partitioned arguments.
#[derive(Clone, Copy)]
pub struct VariadicMethod<F> {
    function: F,
    arity: Arity,
}

impl<F> VariadicMethod<F> {
    /// The arity calls are partitioned for.
    #[inline]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Returns the wrapped function.
    pub fn into_inner(self) -> F {
        self.function
    }

    /// Calls the wrapped function on `receiver` with any number of arguments.
    #[inline]
    pub fn call<S, T, R, I>(&self, receiver: &S, arguments: I) -> R
    where
        S: ?Sized,
        F: Fn(&S, Spread<T>) -> R,
        I: IntoIterator<Item = T>,
    {
        (self.function)(receiver, spread(arguments, self.arity))
    }
}

impl<F> fmt::Debug for VariadicMethod<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("VariadicMethod")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Adapts a method-shaped function `(&S, Spread<T>) -> R` to accept any
/// number of arguments while keeping its receiver.
///
/// The arity counts the positional parameters only, not the receiver.
///
/// # Examples
///
/// ```rust
/// use varity::variadic::{variadic_method, Arity, Spread};
///
/// struct Greeter {
///     greeting: &'static str,
/// }
///
/// let greet = variadic_method(
///     |greeter: &Greeter, spread: Spread<&str>| {
///         let name = spread.required()[0].unwrap_or("stranger");
///         format!("{}, {}! (+{})", greeter.greeting, name, spread.rest().len())
///     },
///     Arity::TWO,
/// );
///
/// let greeter = Greeter { greeting: "Hello" };
/// assert_eq!(greet.call(&greeter, ["Ada", "Grace"]), "Hello, Ada! (+1)");
/// assert_eq!(greet.call(&greeter, []), "Hello, stranger! (+0)");
/// ```
pub const fn variadic_method<F>(function: F, arity: Arity) -> VariadicMethod<F> {
    VariadicMethod { function, arity }
}
