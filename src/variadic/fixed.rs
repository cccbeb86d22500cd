//! Fixed-arity adapters, `variadic1` through `variadic6`.
//!
//! Each adapter takes a function whose leading parameters are `Option<T>`
//! slots and whose last parameter is the rest list, and returns a closure
//! over a collected `Vec<T>` of call arguments.

use super::arity::Arity;
use super::spread::spread;

/// Adapts a function taking the whole argument list.
///
/// Arity one has no required slots, so every argument lands in the list.
///
/// # Examples
///
/// ```rust
/// use varity::variadic::variadic1;
///
/// let count = variadic1(|arguments: Vec<char>| arguments.len());
/// assert_eq!(count(vec![]), 0);
/// assert_eq!(count(vec!['a', 'b', 'c']), 3);
/// ```
pub fn variadic1<T, R, F>(function: F) -> impl Fn(Vec<T>) -> R
where
    F: Fn(Vec<T>) -> R,
{
    move |arguments: Vec<T>| function(spread(arguments, Arity::ONE).into_rest())
}

macro_rules! slot_type {
    ($slot:ident, $ty:ty) => {
        $ty
    };
}

macro_rules! fixed_variadic {
    ($arity:literal => $constant:ident; $($slot:ident),+) => {
        paste::paste! {
            #[doc = concat!(
                "Adapts a function of arity ", stringify!($arity),
                ": ", stringify!($arity), " - 1 `Option<T>` slots followed by the rest list.\n\n",
                "Slots the caller does not supply are `None`; arguments past the slots land in the rest list."
            )]
            pub fn [<variadic $arity>]<T, R, F>(function: F) -> impl Fn(Vec<T>) -> R
            where
                F: Fn($(slot_type!($slot, Option<T>),)+ Vec<T>) -> R,
            {
                move |arguments: Vec<T>| {
                    let (required, rest) = spread(arguments, Arity::$constant).into_inline_parts();
                    let mut required = required.into_iter();
                    $(let $slot = required.next().flatten();)+
                    function($($slot,)+ rest)
                }
            }
        }
    };
}

fixed_variadic!(2 => TWO; first);
fixed_variadic!(3 => THREE; first, second);
fixed_variadic!(4 => FOUR; first, second, third);
fixed_variadic!(5 => FIVE; first, second, third, fourth);
fixed_variadic!(6 => SIX; first, second, third, fourth, fifth);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Layout = (Option<char>, Vec<char>);

    fn layout2() -> impl Fn(Vec<char>) -> Layout {
        variadic2(|first: Option<char>, rest: Vec<char>| (first, rest))
    }

    #[rstest]
    #[case(vec![], (None, vec![]))]
    #[case(vec!['a'], (Some('a'), vec![]))]
    #[case(vec!['a', 'b'], (Some('a'), vec!['b']))]
    #[case(vec!['a', 'b', 'c'], (Some('a'), vec!['b', 'c']))]
    fn variadic2_layout(#[case] arguments: Vec<char>, #[case] expected: Layout) {
        assert_eq!(layout2()(arguments), expected);
    }

    #[rstest]
    fn variadic3_pads_missing_second_slot() {
        let layout = variadic3(|first: Option<char>, second: Option<char>, rest: Vec<char>| {
            (first, second, rest)
        });
        assert_eq!(layout(vec!['a']), (Some('a'), None, vec![]));
    }

    #[rstest]
    fn variadic6_fills_every_slot_in_order() {
        let join = variadic6(
            |a: Option<u8>, b: Option<u8>, c: Option<u8>, d: Option<u8>, e: Option<u8>, rest: Vec<u8>| {
                (vec![a, b, c, d, e], rest)
            },
        );
        assert_eq!(
            join(vec![1, 2, 3, 4, 5, 6, 7]),
            (
                vec![Some(1), Some(2), Some(3), Some(4), Some(5)],
                vec![6, 7]
            )
        );
        assert_eq!(join(vec![1, 2]).0, vec![Some(1), Some(2), None, None, None]);
    }

    #[rstest]
    fn variadic1_rewraps_collected_list() {
        let inner = variadic2(|first: Option<i32>, rest: Vec<i32>| (first, rest));
        let outer = variadic1(inner);
        assert_eq!(outer(vec![1, 2, 3]), (Some(1), vec![2, 3]));
    }
}
