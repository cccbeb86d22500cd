#![cfg(feature = "traversal")]
//! Property-based tests for the traversal helpers.
//!
//! - **Map length**: `map(xs, f).len() == xs.len()`
//! - **Map identity**: `map(xs, identity) == xs`
//! - **Map composition**: `map(map(xs, g), f) == map(xs, f . g)`
//! - **Filter subset**: every kept element satisfies the predicate, order kept
//! - **Reverse involution**: `reverse(reverse(xs)) == xs`
//! - **Fold consistency**: `fold_first(xs, f) == fold(tail, f, head)`

use proptest::prelude::*;
use varity::traversal::{filter, fold, fold_first, map, reverse};

proptest! {
    #[test]
    fn prop_map_preserves_length(list in prop::collection::vec(any::<i32>(), 0..64)) {
        let mapped = map(list.clone(), |element| i64::from(element) * 3);
        prop_assert_eq!(mapped.len(), list.len());
    }

    #[test]
    fn prop_map_identity(list in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(map(list.clone(), |element| element), list);
    }

    #[test]
    fn prop_map_composition(list in prop::collection::vec(any::<i32>(), 0..64)) {
        let inner = |element: i32| element.wrapping_add(1);
        let outer = |element: i32| element.wrapping_mul(2);
        let stepwise = map(map(list.clone(), inner), outer);
        let fused = map(list, |element| outer(inner(element)));
        prop_assert_eq!(stepwise, fused);
    }

    #[test]
    fn prop_filter_is_ordered_subset(list in prop::collection::vec(any::<i32>(), 0..64)) {
        let kept = filter(list.clone(), |element| element % 3 == 0);
        prop_assert!(kept.iter().all(|element| element % 3 == 0));
        let expected: Vec<i32> = list.into_iter().filter(|element| element % 3 == 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn prop_reverse_involution(list in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(reverse(reverse(list.clone())), list);
    }

    #[test]
    fn prop_reverse_matches_std(list in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut expected = list.clone();
        expected.reverse();
        prop_assert_eq!(reverse(list), expected);
    }

    #[test]
    fn prop_fold_first_matches_seeded_fold(list in prop::collection::vec(any::<i32>(), 1..64)) {
        let add = |accumulator: i32, element: i32| accumulator.wrapping_add(element);
        let head = list[0];
        let tail = list[1..].to_vec();
        prop_assert_eq!(fold_first(list, add), Some(fold(tail, add, head)));
    }
}
