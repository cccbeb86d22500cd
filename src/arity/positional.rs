//! Access to the leading element of an argument tuple.

/// An argument tuple whose first element can be taken on its own.
///
/// Implemented for tuples of one to six elements. [`Unary::call_with`]
/// uses it to drop every argument past the first.
///
/// [`Unary::call_with`]: super::Unary::call_with
pub trait Positional {
    /// Type of the first element.
    type First;

    /// Consumes the tuple, keeping only the first element.
    fn into_first(self) -> Self::First;

    /// Number of elements in the tuple.
    fn len(&self) -> usize;

    /// Always `false`; argument tuples carry at least one element.
    fn is_empty(&self) -> bool {
        false
    }
}

macro_rules! impl_positional {
    ($count:literal; $first:ident $(, $others:ident)*) => {
        impl<$first $(, $others)*> Positional for ($first, $($others,)*) {
            type First = $first;

            #[inline]
            fn into_first(self) -> $first {
                self.0
            }

            #[inline]
            fn len(&self) -> usize {
                $count
            }
        }
    };
}

impl_positional!(1; A);
impl_positional!(2; A, B);
impl_positional!(3; A, B, C);
impl_positional!(4; A, B, C, D);
impl_positional!(5; A, B, C, D, E);
impl_positional!(6; A, B, C, D, E, G);
