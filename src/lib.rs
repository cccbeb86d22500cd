//! # varity
//!
//! Variadic argument adapters, list traversal helpers and arity combinators.
//!
//! ## Overview
//!
//! - **Variadic adapters**: turn a fixed-arity function into one that accepts
//!   any number of arguments, split into `Option` slots and a rest list
//! - **Traversal**: `map`, `fold`, `fold_first`, `filter`, `reverse`
//! - **Arity combinators**: `unary`, `binary`, `ternary` with tagged partial
//!   application
//! - **Composition**: `compose`, `compose!`, `identity`
//!
//! ## Feature Flags
//!
//! - `variadic`: Variadic adapters
//! - `traversal`: List traversal helpers
//! - `arity`: Arity combinators
//! - `compose`: Function composition (requires `variadic`)
//! - `derive`: The `variadic!` macro, which reads arity from a closure
//! - `serde`: Serialization for `Arity` and `Spread`
//! - `tracing`: Trace events from the variadic adapters
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use varity::prelude::*;
//!
//! let layout = variadic2(|first: Option<char>, rest: Vec<char>| (first, rest));
//! assert_eq!(layout(vec![]), (None, vec![]));
//! assert_eq!(layout(vec!['a', 'b']), (Some('a'), vec!['b']));
//!
//! assert_eq!(reverse(vec![1, 2, 3]), vec![3, 2, 1]);
//! assert_eq!(binary(|a: i32, b: i32| a + b).apply(1).call(2), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `variadic!` expansions name `::varity` from inside this crate too.
extern crate self as varity;

/// Prelude module for convenient imports.
///
/// ```rust
/// use varity::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "variadic")]
    pub use crate::variadic::*;

    #[cfg(feature = "traversal")]
    pub use crate::traversal::*;

    #[cfg(feature = "arity")]
    pub use crate::arity::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "derive")]
    pub use crate::variadic;
}

#[cfg(feature = "variadic")]
pub mod variadic;

#[cfg(feature = "traversal")]
pub mod traversal;

#[cfg(feature = "arity")]
pub mod arity;

#[cfg(feature = "compose")]
pub mod compose;

/// Adapts a closure or function to accept any number of arguments, reading
/// the arity from the closure's parameter list.
///
/// Every parameter but the last becomes an `Option<T>` slot; the last
/// receives the rest list as `Vec<T>`. Unannotated closure parameters get
/// those types filled in. For a named function, pass the arity as an integer
/// literal.
///
/// ```rust
/// use varity::variadic;
///
/// let layout = variadic!(|first, second, rest| (first, second, rest));
/// assert_eq!(layout(vec!['a']), (Some('a'), None, vec![]));
///
/// fn count(first: Option<u8>, rest: Vec<u8>) -> usize {
///     usize::from(first.is_some()) + rest.len()
/// }
/// let counted = variadic!(count, 2);
/// assert_eq!(counted(vec![1, 2, 3]), 3);
/// ```
#[cfg(feature = "derive")]
pub use varity_derive::variadic;
