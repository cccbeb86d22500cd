//! Unit tests for unary, binary and ternary.

#![cfg(feature = "arity")]

use rstest::rstest;
use varity::arity::{Applied, Remaining, binary, ternary, unary};

fn add(first: i32, second: i32) -> i32 {
    first + second
}

fn mult(first: i32, second: i32, third: i32) -> i32 {
    first * second * third
}

fn identity_number(value: i32) -> i32 {
    value
}

// =============================================================================
// unary
// =============================================================================

#[rstest]
#[case((1,))]
#[case((1, 2))]
#[case((1, 2, 3))]
fn unary_discards_extra_arguments<P>(#[case] arguments: P)
where
    P: varity::arity::Positional<First = i32>,
{
    assert_eq!(unary(identity_number).call_with(arguments), identity_number(1));
}

#[rstest]
fn unary_with_mixed_extra_types() {
    let length = unary(|text: &str| text.len());
    assert_eq!(length.call_with(("four", 2.5, 'x', vec![1])), 4);
}

// =============================================================================
// binary
// =============================================================================

#[rstest]
fn binary_curried_equals_direct() {
    let curried = binary(add);
    assert_eq!(curried.apply(1).call(2), add(1, 2));
    assert_eq!(curried.call(1, 2), add(1, 2));
}

#[rstest]
fn binary_partial_is_reusable_with_owned_arguments() {
    let join = binary(|prefix: String, suffix: &str| format!("{prefix}{suffix}"));
    let greet = join.apply(String::from("hello, "));
    assert_eq!(greet.call("ada"), "hello, ada");
    assert_eq!(greet.call("grace"), "hello, grace");
}

#[rstest]
fn binary_invoke_tags_result() {
    let curried = binary(add);
    assert_eq!(curried.invoke(1, Some(2)).complete(), Some(3));

    let pending = curried.invoke(1, None);
    assert!(pending.is_partial());
    let continuation = pending.partial().unwrap();
    assert_eq!(*continuation.first(), 1);
    assert_eq!(continuation.call(41), 42);
}

// =============================================================================
// ternary
// =============================================================================

#[rstest]
fn ternary_curried_equals_direct() {
    let curried = ternary(mult);
    assert_eq!(curried.apply(1).apply(2).call(3), mult(1, 2, 3));
    assert_eq!(curried.call(1, 2, 3), mult(1, 2, 3));
}

#[rstest]
#[case(Some(3), Some(4), 0)]
#[case(Some(3), None, 1)]
#[case(None, None, 2)]
#[case(None, Some(4), 2)]
fn ternary_invoke_reports_missing(
    #[case] second: Option<i32>,
    #[case] third: Option<i32>,
    #[case] missing: usize,
) {
    let curried = ternary(mult);
    let outcome = curried.invoke(2, second, third);
    let reported = outcome.fold(|_| 0, |remaining| remaining.missing());
    assert_eq!(reported, missing);
}

#[rstest]
fn ternary_partial_continuations_finish_the_call() {
    let curried = ternary(mult);

    let Applied::Partial(Remaining::Two(partial)) = curried.invoke(2, None, None) else {
        panic!("expected two missing arguments");
    };
    assert_eq!(partial.call(3, 4), 24);

    let Applied::Partial(Remaining::One(last)) = curried.invoke(2, Some(3), None) else {
        panic!("expected one missing argument");
    };
    assert_eq!(last.call(4), 24);
}

#[rstest]
fn ternary_partial_invoke_mirrors_binary() {
    let with_first = ternary(mult).apply(5);
    assert_eq!(with_first.invoke(2, Some(3)).complete(), Some(30));
    let last = with_first.invoke(2, None).partial().unwrap();
    assert_eq!(last.call(10), 100);
}
