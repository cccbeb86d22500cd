//! The `compose!` macro.

/// Composes functions from right to left at compile time.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. Unlike [`compose`](crate::compose::compose),
/// each function may have its own input and output type, as long as every
/// output feeds the next function to its left.
///
/// # Syntax
///
/// - `compose!(f)` is `f`
/// - `compose!(f, g)` is `move |x| f(g(x))`
/// - `compose!(f, g, h, ...)` nests to the right
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use varity::compose;
///
/// fn to_text(value: i32) -> String { value.to_string() }
/// fn length(text: String) -> usize { text.len() }
/// fn square(value: i32) -> i32 { value * value }
///
/// let digits_of_square = compose!(length, to_text, square);
/// assert_eq!(digits_of_square(12), 3);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($rest),+);
        move |input| outer(inner(input))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn single_function_is_unchanged() {
        let double = |value: i32| value * 2;
        assert_eq!(compose!(double)(5), 10);
    }

    #[rstest]
    fn types_flow_right_to_left() {
        let parse = |text: &str| text.len();
        let describe = |length: usize| format!("{length} chars");
        assert_eq!(compose!(describe, parse)("four"), "4 chars");
    }
}
