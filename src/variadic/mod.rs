//! Variadic argument adapters.
//!
//! This module converts fixed-arity functions into functions that accept any
//! number of arguments. A call is split into *required slots* and a *rest*
//! list:
//!
//! - With arity `1` the function receives every argument as one list.
//! - With arity `N > 1` the first `N - 1` arguments fill the required slots,
//!   padded with `None` when the caller supplied fewer, and everything after
//!   them becomes the rest list passed as the final argument.
//!
//! No argument count is an error, including zero.
//!
//! # Overview
//!
//! - [`spread`]: the partition rule, producing a [`Spread`]
//! - [`variadic`]: runtime arity, the function receives a [`Spread`]
//! - [`variadic_method`]: like [`variadic`] but threads a receiver through
//! - [`variadic1`] through [`variadic6`]: fixed arity, the function receives
//!   its slots and rest list as ordinary parameters
//! - `variadic!` (with the `derive` feature): reads the arity from a
//!   closure's parameter list
//!
//! # Examples
//!
//! ```rust
//! use varity::variadic::variadic3;
//!
//! let layout = variadic3(|first: Option<char>, second: Option<char>, rest: Vec<char>| {
//!     (first, second, rest)
//! });
//!
//! assert_eq!(layout(vec![]), (None, None, vec![]));
//! assert_eq!(layout(vec!['a']), (Some('a'), None, vec![]));
//! assert_eq!(layout(vec!['a', 'b', 'c', 'd']), (Some('a'), Some('b'), vec!['c', 'd']));
//! ```
//!
//! # Laws
//!
//! For arity `N` and any `k >= 0` arguments:
//!
//! - the function receives exactly `N` positional values;
//! - the first `min(k, N - 1)` slots hold the supplied arguments in order and
//!   the remaining slots are `None`;
//! - the rest list holds the last `k - min(k, N - 1)` arguments in order;
//! - wrapping an adapter again with arity `1` leaves the partition unchanged.

mod adapter;
mod arity;
mod fixed;
mod spread;

pub use adapter::{Variadic, VariadicMethod, variadic, variadic_method};
pub use arity::{Arity, ArityError};
pub use fixed::{variadic1, variadic2, variadic3, variadic4, variadic5, variadic6};
pub use spread::{Spread, spread};
