//! Two-argument functions with optional partial application.

use std::fmt;
use std::rc::Rc;

use super::applied::Applied;

/// A two-argument function that can be called in full or one argument at a
/// time.
///
/// Created by [`binary`]. The function is shared through `Rc`, so partial
/// applications stay cheap to create and can be reused.
pub struct Binary<F> {
    function: Rc<F>,
}

impl<F> Binary<F> {
    /// Calls the function with both arguments.
    #[inline]
    pub fn call<A, B, R>(&self, first: A, second: B) -> R
    where
        F: Fn(A, B) -> R,
    {
        (self.function)(first, second)
    }

    /// Fixes the first argument, returning a function of the second.
    pub fn apply<A>(&self, first: A) -> BinaryPartial<F, A> {
        BinaryPartial {
            function: Rc::clone(&self.function),
            first,
        }
    }

    /// Calls the function if `second` is present, otherwise returns the
    /// partial application awaiting it.
    pub fn invoke<A, B, R>(&self, first: A, second: Option<B>) -> Applied<R, BinaryPartial<F, A>>
    where
        F: Fn(A, B) -> R,
    {
        match second {
            Some(second) => Applied::Complete(self.call(first, second)),
            None => Applied::Partial(self.apply(first)),
        }
    }
}

impl<F> Clone for Binary<F> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<F> fmt::Debug for Binary<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Binary").finish_non_exhaustive()
    }
}

/// A two-argument function with its first argument fixed.
pub struct BinaryPartial<F, A> {
    function: Rc<F>,
    first: A,
}

impl<F, A> BinaryPartial<F, A> {
    /// The fixed first argument.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Supplies the second argument. The fixed argument is cloned so the
    /// partial application can be called again.
    #[inline]
    pub fn call<B, R>(&self, second: B) -> R
    where
        F: Fn(A, B) -> R,
        A: Clone,
    {
        (self.function)(self.first.clone(), second)
    }

    /// Supplies the second argument, consuming the partial application.
    pub fn call_once<B, R>(self, second: B) -> R
    where
        F: Fn(A, B) -> R,
    {
        (self.function)(self.first, second)
    }
}

impl<F, A: Clone> Clone for BinaryPartial<F, A> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            first: self.first.clone(),
        }
    }
}

impl<F, A: fmt::Debug> fmt::Debug for BinaryPartial<F, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BinaryPartial")
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}

/// Wraps a two-argument function for full or partial application.
///
/// # Examples
///
/// ```rust
/// use varity::arity::binary;
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// let curried = binary(add);
/// assert_eq!(curried.apply(1).call(2), add(1, 2));
/// assert_eq!(curried.call(1, 2), add(1, 2));
///
/// let add_ten = curried.apply(10);
/// assert_eq!(add_ten.call(1), 11);
/// assert_eq!(add_ten.call(5), 15);
/// ```
pub fn binary<F>(function: F) -> Binary<F> {
    Binary {
        function: Rc::new(function),
    }
}
