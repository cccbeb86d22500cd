//! Function composition.
//!
//! - [`compose`]: right-to-left composition of a runtime list of `T -> T`
//!   functions, gathered through the variadic adapter
//! - [`compose!`]: right-to-left composition of functions with differing
//!   types, resolved at compile time
//! - [`identity`]: the unit of composition
//!
//! # Examples
//!
//! ```
//! use varity::compose::{compose, identity};
//!
//! fn add_one(value: i32) -> i32 { value + 1 }
//! fn double(value: i32) -> i32 { value * 2 }
//!
//! let runtime = compose([add_one as fn(i32) -> i32, double]);
//! let static_chain = varity::compose!(add_one, double);
//!
//! assert_eq!(runtime.call(5), 11);
//! assert_eq!(static_chain(5), 11);
//! assert_eq!(varity::compose!(identity, double)(5), double(5));
//! ```
//!
//! # Laws
//!
//! - **Definition**: `compose([f, g, h]).call(x) == f(g(h(x)))`
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`;
//!   `compose([]).call(x) == x`

mod composed;
mod macros;

pub use composed::{Composed, compose, identity};

pub use crate::compose;
