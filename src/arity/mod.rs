//! Arity combinators: `unary`, `binary` and `ternary`.
//!
//! These wrappers fix how many arguments a function sees and let binary and
//! ternary functions be applied one argument at a time.
//!
//! - [`unary`]: only the first argument reaches the function
//! - [`binary`]: call with both arguments, or fix the first and wait for the second
//! - [`ternary`]: the same over three arguments, falling back to binary- and
//!   unary-shaped partial applications
//!
//! A call with absent arguments returns [`Applied`], a tagged result that is
//! either the finished value or the continuation awaiting the rest.
//!
//! # Laws
//!
//! - `unary(f).call_with((a, b, c)) == f(a)`
//! - `binary(f).apply(a).call(b) == binary(f).call(a, b) == f(a, b)`
//! - `ternary(f).apply(a).apply(b).call(c) == ternary(f).call(a, b, c) == f(a, b, c)`
//!
//! # Examples
//!
//! ```rust
//! use varity::arity::{binary, ternary, unary, Applied};
//!
//! let first = unary(|value: i32| value);
//! assert_eq!(first.call_with((1, 2, 3)), 1);
//!
//! let add = binary(|left: i32, right: i32| left + right);
//! assert_eq!(add.apply(1).call(2), 3);
//!
//! let mult = ternary(|a: i32, b: i32, c: i32| a * b * c);
//! assert_eq!(mult.apply(2).apply(3).call(4), 24);
//! assert!(matches!(mult.invoke(2, Some(3), None::<i32>), Applied::Partial(_)));
//! ```
//!
//! Partial applications share the wrapped function through `Rc` and are
//! therefore neither `Send` nor `Sync`.

mod applied;
mod binary;
mod positional;
mod ternary;
mod unary;

pub use applied::Applied;
pub use binary::{Binary, BinaryPartial, binary};
pub use positional::Positional;
pub use ternary::{Remaining, Ternary, TernaryLast, TernaryPartial, ternary};
pub use unary::{Unary, unary};

static_assertions::assert_not_impl_any!(Binary<fn(i32, i32) -> i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Ternary<fn(i32, i32, i32) -> i32>: Send, Sync);
static_assertions::assert_impl_all!(Unary<fn(i32) -> i32>: Send, Sync, Copy);
