#![cfg(feature = "arity")]
//! Property-based tests for the arity combinators.
//!
//! - **Unary**: `unary(f).call_with((a, b, c)) == f(a)`
//! - **Binary**: `binary(f).apply(a).call(b) == binary(f).call(a, b) == f(a, b)`
//! - **Ternary**: `ternary(f).apply(a).apply(b).call(c) == ternary(f).call(a, b, c) == f(a, b, c)`
//! - **Invoke**: a complete `invoke` equals the direct call

use proptest::prelude::*;
use varity::arity::{binary, ternary, unary};

fn subtract(first: i64, second: i64) -> i64 {
    first.wrapping_sub(second)
}

fn combine(first: i64, second: i64, third: i64) -> i64 {
    first.wrapping_mul(31).wrapping_add(second).wrapping_mul(31).wrapping_add(third)
}

proptest! {
    #[test]
    fn prop_unary_ignores_extras(a in any::<i64>(), b in any::<i64>(), c in any::<bool>()) {
        let negate = |value: i64| value.wrapping_neg();
        prop_assert_eq!(unary(negate).call_with((a, b, c)), negate(a));
    }

    #[test]
    fn prop_binary_curry_equivalence(a in any::<i64>(), b in any::<i64>()) {
        let curried = binary(subtract);
        prop_assert_eq!(curried.apply(a).call(b), subtract(a, b));
        prop_assert_eq!(curried.call(a, b), subtract(a, b));
        prop_assert_eq!(curried.invoke(a, Some(b)).complete(), Some(subtract(a, b)));
    }

    #[test]
    fn prop_ternary_curry_equivalence(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let curried = ternary(combine);
        let expected = combine(a, b, c);
        prop_assert_eq!(curried.apply(a).apply(b).call(c), expected);
        prop_assert_eq!(curried.apply(a).call(b, c), expected);
        prop_assert_eq!(curried.call(a, b, c), expected);
        prop_assert_eq!(curried.invoke(a, Some(b), Some(c)).complete(), Some(expected));
    }
}
