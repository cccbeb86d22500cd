#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! - **Definition**: `compose([f, g, h]).call(x) == f(g(h(x)))`
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Empty**: `compose([]).call(x) == x`

use proptest::prelude::*;
use varity::compose::{compose, identity};

fn increment(value: i32) -> i32 {
    value.wrapping_add(1)
}

fn double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

fn shrink(value: i32) -> i32 {
    value.wrapping_sub(3)
}

proptest! {
    #[test]
    fn prop_compose_definition(x in any::<i32>()) {
        let composed = compose([increment as fn(i32) -> i32, double, shrink]);
        prop_assert_eq!(composed.call(x), increment(double(shrink(x))));
    }

    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let left = compose!(increment, compose!(double, shrink));
        let right = compose!(compose!(increment, double), shrink);
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        prop_assert_eq!(compose!(identity, double)(x), double(x));
    }

    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        prop_assert_eq!(compose!(double, identity)(x), double(x));
    }

    #[test]
    fn prop_compose_empty_is_identity(x in any::<i32>()) {
        let composed = compose(Vec::<fn(i32) -> i32>::new());
        prop_assert_eq!(composed.call(x), x);
    }

    #[test]
    fn prop_runtime_and_macro_agree(x in any::<i32>(), depth in 0_usize..6) {
        let functions: Vec<fn(i32) -> i32> = (0..depth).map(|_| double as fn(i32) -> i32).collect();
        let expected = (0..depth).fold(x, |value, _| double(value));
        prop_assert_eq!(compose(functions).call(x), expected);
    }
}
