//! List traversal helpers.
//!
//! Thin wrappers over [`Iterator`] that take any [`IntoIterator`] and return
//! a fresh [`Vec`]. The input is consumed; nothing is mutated in place.
//!
//! - [`map`]: transform each element
//! - [`fold`]: left fold with an explicit seed
//! - [`fold_first`]: left fold seeded with the first element
//! - [`filter`]: keep elements matching a predicate
//! - [`reverse`]: reverse order, built on [`fold`]
//!
//! # Examples
//!
//! ```rust
//! use varity::traversal::{filter, fold, map, reverse};
//!
//! let doubled = map(vec![1, 2, 3], |element| element * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let product = fold(vec![1, 2, 3], |accumulator, element| accumulator * element, 1);
//! assert_eq!(product, 6);
//!
//! let even = filter(vec![1, 2, 3, 4, 5, 6], |element| element % 2 == 0);
//! assert_eq!(even, vec![2, 4, 6]);
//!
//! assert_eq!(reverse(vec![1, 2, 3]), vec![3, 2, 1]);
//! ```

use std::collections::VecDeque;

/// Applies `function` to every element, preserving order and length.
///
/// # Examples
///
/// ```rust
/// use varity::traversal::map;
///
/// let lengths = map(["a", "bb", "ccc"], str::len);
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
pub fn map<T, U, I, F>(list: I, function: F) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> U,
{
    list.into_iter().map(function).collect()
}

/// Folds left to right, starting from `initial`.
///
/// `function` receives the accumulator and the next element and returns the
/// new accumulator. An empty list returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use varity::traversal::fold;
///
/// let sentence = fold(["a", "b", "c"], |accumulator, word| accumulator + word, String::new());
/// assert_eq!(sentence, "abc");
/// ```
pub fn fold<T, B, I, F>(list: I, function: F, initial: B) -> B
where
    I: IntoIterator<Item = T>,
    F: FnMut(B, T) -> B,
{
    list.into_iter().fold(initial, function)
}

/// Folds left to right, seeding the accumulator with the first element.
///
/// Returns `None` for an empty list.
///
/// # Examples
///
/// ```rust
/// use varity::traversal::fold_first;
///
/// assert_eq!(fold_first(vec![3, 1, 4], |largest, element| largest.max(element)), Some(4));
/// assert_eq!(fold_first(Vec::<i32>::new(), |left, right| left + right), None);
/// ```
pub fn fold_first<T, I, F>(list: I, function: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    list.into_iter().reduce(function)
}

/// Keeps the elements for which `predicate` returns `true`, in order.
pub fn filter<T, I, P>(list: I, mut predicate: P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    list.into_iter().filter(|element| predicate(element)).collect()
}

/// Reverses the list by folding each element onto the front of an
/// accumulator.
pub fn reverse<T, I>(list: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let reversed = fold(
        list,
        |mut accumulator: VecDeque<T>, element| {
            accumulator.push_front(element);
            accumulator
        },
        VecDeque::new(),
    );
    Vec::from(reversed)
}
