//! Procedural macros for varity.
//!
//! # Available Function-like Macros
//!
//! - [`variadic!`]: Adapts a closure or function to accept any number of
//!   arguments, reading the arity from the closure's parameter list
//!
//! # Example
//!
//! ```rust,ignore
//! use varity::variadic;
//!
//! let layout = variadic!(|first, second, rest| (first, second, rest));
//!
//! assert_eq!(layout(vec![]), (None, None, vec![]));
//! assert_eq!(layout(vec![1]), (Some(1), None, vec![]));
//! assert_eq!(layout(vec![1, 2, 3, 4]), (Some(1), Some(2), vec![3, 4]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod variadic;

use proc_macro::TokenStream;

/// Adapts a closure or function to accept any number of arguments.
///
/// The result is a closure over a collected `Vec<T>` of call arguments. For
/// arity `N`, the first `N - 1` arguments are passed as `Option<T>` slots
/// (`None` when missing) and the remainder as a final `Vec<T>`. With `N == 1`
/// the whole list is passed.
///
/// # Syntax
///
/// ```rust,ignore
/// // Closure form: arity is the number of parameters
/// variadic!(|first, rest| ...)
///
/// // Function name + arity form
/// variadic!(function_name, 3)
/// ```
///
/// Untyped closure parameters are annotated as `Option<_>`, and the last as
/// `Vec<_>`, so their methods resolve inside the closure body.
///
/// # Errors
///
/// Compilation fails for a closure without parameters, a function name
/// without an arity, or an arity that is not a positive integer literal.
///
/// # Example
///
/// ```rust,ignore
/// use varity::variadic;
///
/// fn greet(name: Option<&str>, others: Vec<&str>) -> String {
///     format!("hi {} and {} more", name.unwrap_or("nobody"), others.len())
/// }
///
/// let greet_all = variadic!(greet, 2);
/// assert_eq!(greet_all(vec!["ada", "grace", "linus"]), "hi ada and 2 more");
/// assert_eq!(greet_all(vec![]), "hi nobody and 0 more");
/// ```
#[proc_macro]
pub fn variadic(input: TokenStream) -> TokenStream {
    variadic::variadic_impl(input)
}
