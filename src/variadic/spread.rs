//! The partition rule behind every variadic adapter.

use smallvec::SmallVec;

use super::arity::{Arity, ArityError};

/// Required slots kept inline before spilling to the heap. Covers every
/// fixed-arity adapter up to `variadic6`.
pub(crate) const INLINE_SLOTS: usize = 5;

pub(crate) type RequiredSlots<T> = SmallVec<[Option<T>; INLINE_SLOTS]>;

/// A call's arguments split into required slots and a rest list.
///
/// `required` always holds exactly `arity - 1` entries. Slots the caller did
/// not supply are `None`. Everything past the required slots lands in `rest`,
/// in call order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSpread<T>", bound(deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Spread<T> {
    arity: Arity,
    required: RequiredSlots<T>,
    rest: Vec<T>,
}

impl<T> Spread<T> {
    /// Rebuilds a spread from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`ArityError::SlotMismatch`] when `required` does not hold
    /// exactly `arity - 1` slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varity::variadic::{Arity, ArityError, Spread};
    ///
    /// let spread = Spread::from_parts(Arity::TWO, vec![Some(1)], vec![2, 3]).unwrap();
    /// assert_eq!(spread.rest(), &[2, 3]);
    ///
    /// let broken = Spread::<i32>::from_parts(Arity::THREE, vec![None], vec![]);
    /// assert_eq!(broken, Err(ArityError::SlotMismatch { expected: 2, actual: 1 }));
    /// ```
    pub fn from_parts(
        arity: Arity,
        required: Vec<Option<T>>,
        rest: Vec<T>,
    ) -> Result<Self, ArityError> {
        if required.len() != arity.required_slots() {
            return Err(ArityError::SlotMismatch {
                expected: arity.required_slots(),
                actual: required.len(),
            });
        }
        Ok(Self {
            arity,
            required: SmallVec::from_vec(required),
            rest,
        })
    }

    /// The arity this spread was built for.
    #[inline]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// The `arity - 1` leading slots.
    #[inline]
    pub fn required(&self) -> &[Option<T>] {
        &self.required
    }

    /// Arguments past the required slots.
    #[inline]
    pub fn rest(&self) -> &[T] {
        &self.rest
    }

    /// Number of arguments the caller actually supplied.
    pub fn supplied(&self) -> usize {
        self.required.iter().filter(|slot| slot.is_some()).count() + self.rest.len()
    }

    /// Consumes the spread, keeping only the rest list.
    pub fn into_rest(self) -> Vec<T> {
        self.rest
    }

    /// Consumes the spread into `(required, rest)`.
    pub fn into_parts(self) -> (Vec<Option<T>>, Vec<T>) {
        (self.required.into_vec(), self.rest)
    }

    pub(crate) fn into_inline_parts(self) -> (RequiredSlots<T>, Vec<T>) {
        (self.required, self.rest)
    }
}

/// Partitions `arguments` for a function of the given arity.
///
/// The first `arity - 1` arguments fill the required slots, padded with
/// `None` when the caller supplied fewer. The remainder becomes the rest
/// list. Any argument count is accepted, including zero.
///
/// # Examples
///
/// ```rust
/// use varity::variadic::{spread, Arity};
///
/// let (required, rest) = spread(["a"], Arity::THREE).into_parts();
/// assert_eq!(required, vec![Some("a"), None]);
/// assert!(rest.is_empty());
///
/// let (required, rest) = spread(["a", "b", "c"], Arity::TWO).into_parts();
/// assert_eq!(required, vec![Some("a")]);
/// assert_eq!(rest, vec!["b", "c"]);
///
/// // Arity one collects everything into the rest list.
/// let (required, rest) = spread([1, 2, 3], Arity::ONE).into_parts();
/// assert!(required.is_empty());
/// assert_eq!(rest, vec![1, 2, 3]);
/// ```
pub fn spread<T, I>(arguments: I, arity: Arity) -> Spread<T>
where
    I: IntoIterator<Item = T>,
{
    let mut arguments = arguments.into_iter().fuse();
    let required: RequiredSlots<T> = (0..arity.required_slots())
        .map(|_| arguments.next())
        .collect();
    let rest: Vec<T> = arguments.collect();

    let spread = Spread {
        arity,
        required,
        rest,
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "varity::variadic",
        arity = spread.arity.get(),
        supplied = spread.supplied(),
        padded = spread.required.iter().filter(|slot| slot.is_none()).count(),
        rest = spread.rest.len(),
        "spread call arguments"
    );

    spread
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpread<T> {
    arity: Arity,
    required: Vec<Option<T>>,
    rest: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawSpread<T>> for Spread<T> {
    type Error = ArityError;

    fn try_from(raw: RawSpread<T>) -> Result<Self, Self::Error> {
        Self::from_parts(raw.arity, raw.required, raw.rest)
    }
}
