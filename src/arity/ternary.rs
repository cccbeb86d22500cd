//! Three-argument functions with optional partial application.

use std::fmt;
use std::rc::Rc;

use super::applied::Applied;

/// A three-argument function that can be called in full or one argument at
/// a time.
///
/// Created by [`ternary`]. Fixing the first argument yields a
/// [`TernaryPartial`], which behaves like a binary function over the other
/// two. Fixing the second as well yields a [`TernaryLast`], a unary function
/// over the third.
pub struct Ternary<F> {
    function: Rc<F>,
}

impl<F> Ternary<F> {
    /// Calls the function with all three arguments.
    #[inline]
    pub fn call<A, B, C, R>(&self, first: A, second: B, third: C) -> R
    where
        F: Fn(A, B, C) -> R,
    {
        (self.function)(first, second, third)
    }

    /// Fixes the first argument.
    pub fn apply<A>(&self, first: A) -> TernaryPartial<F, A> {
        TernaryPartial {
            function: Rc::clone(&self.function),
            first,
        }
    }

    /// Calls the function if every argument is present, otherwise returns
    /// the partial application for the arguments that were.
    ///
    /// Absence is positional: when `second` is `None`, `third` is ignored and
    /// the continuation awaits both.
    pub fn invoke<A, B, C, R>(
        &self,
        first: A,
        second: Option<B>,
        third: Option<C>,
    ) -> Applied<R, Remaining<F, A, B>>
    where
        F: Fn(A, B, C) -> R,
    {
        match (second, third) {
            (Some(second), Some(third)) => Applied::Complete(self.call(first, second, third)),
            (Some(second), None) => Applied::Partial(Remaining::One(TernaryLast {
                function: Rc::clone(&self.function),
                first,
                second,
            })),
            (None, _) => Applied::Partial(Remaining::Two(self.apply(first))),
        }
    }
}

impl<F> Clone for Ternary<F> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<F> fmt::Debug for Ternary<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Ternary").finish_non_exhaustive()
    }
}

/// A three-argument function with its first argument fixed.
pub struct TernaryPartial<F, A> {
    function: Rc<F>,
    first: A,
}

impl<F, A: Clone> TernaryPartial<F, A> {
    /// Supplies the remaining two arguments.
    #[inline]
    pub fn call<B, C, R>(&self, second: B, third: C) -> R
    where
        F: Fn(A, B, C) -> R,
    {
        (self.function)(self.first.clone(), second, third)
    }

    /// Fixes the second argument as well.
    pub fn apply<B>(&self, second: B) -> TernaryLast<F, A, B> {
        TernaryLast {
            function: Rc::clone(&self.function),
            first: self.first.clone(),
            second,
        }
    }

    /// Calls the function if `third` is present, otherwise fixes `second`
    /// and awaits the third argument.
    pub fn invoke<B, C, R>(&self, second: B, third: Option<C>) -> Applied<R, TernaryLast<F, A, B>>
    where
        F: Fn(A, B, C) -> R,
    {
        match third {
            Some(third) => Applied::Complete(self.call(second, third)),
            None => Applied::Partial(self.apply(second)),
        }
    }
}

impl<F, A> TernaryPartial<F, A> {
    /// The fixed first argument.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }
}

impl<F, A: Clone> Clone for TernaryPartial<F, A> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            first: self.first.clone(),
        }
    }
}

impl<F, A: fmt::Debug> fmt::Debug for TernaryPartial<F, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TernaryPartial")
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}

/// A three-argument function with its first two arguments fixed.
pub struct TernaryLast<F, A, B> {
    function: Rc<F>,
    first: A,
    second: B,
}

impl<F, A, B> TernaryLast<F, A, B> {
    /// The fixed first argument.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// The fixed second argument.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Supplies the last argument. The fixed arguments are cloned so the
    /// partial application can be called again.
    #[inline]
    pub fn call<C, R>(&self, third: C) -> R
    where
        F: Fn(A, B, C) -> R,
        A: Clone,
        B: Clone,
    {
        (self.function)(self.first.clone(), self.second.clone(), third)
    }

    /// Supplies the last argument, consuming the partial application.
    pub fn call_once<C, R>(self, third: C) -> R
    where
        F: Fn(A, B, C) -> R,
    {
        (self.function)(self.first, self.second, third)
    }
}

impl<F, A: Clone, B: Clone> Clone for TernaryLast<F, A, B> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<F, A: fmt::Debug, B: fmt::Debug> fmt::Debug for TernaryLast<F, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TernaryLast")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}

/// What a partial [`Ternary::invoke`] still waits for.
pub enum Remaining<F, A, B> {
    /// Only the first argument was present.
    Two(TernaryPartial<F, A>),
    /// The first two arguments were present.
    One(TernaryLast<F, A, B>),
}

impl<F, A, B> Remaining<F, A, B> {
    /// Number of arguments still missing.
    pub const fn missing(&self) -> usize {
        match self {
            Self::Two(_) => 2,
            Self::One(_) => 1,
        }
    }
}

impl<F, A: fmt::Debug, B: fmt::Debug> fmt::Debug for Remaining<F, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Two(partial) => formatter.debug_tuple("Two").field(partial).finish(),
            Self::One(last) => formatter.debug_tuple("One").field(last).finish(),
        }
    }
}

/// Wraps a three-argument function for full or partial application.
///
/// # Examples
///
/// ```rust
/// use varity::arity::ternary;
///
/// fn mult(first: i32, second: i32, third: i32) -> i32 {
///     first * second * third
/// }
///
/// let curried = ternary(mult);
/// assert_eq!(curried.apply(1).apply(2).call(3), mult(1, 2, 3));
/// assert_eq!(curried.call(1, 2, 3), mult(1, 2, 3));
/// assert_eq!(curried.apply(1).call(2, 3), mult(1, 2, 3));
/// ```
pub fn ternary<F>(function: F) -> Ternary<F> {
    Ternary {
        function: Rc::new(function),
    }
}
