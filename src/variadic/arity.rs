//! Declared arity of a wrapped function.

use std::fmt;
use std::num::NonZeroUsize;

/// Errors produced when building an [`Arity`] or a [`Spread`](super::Spread)
/// from raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ArityError {
    /// An arity of zero was requested. Every adapted function takes at least
    /// the rest list.
    #[error("arity must be at least one, got zero")]
    Zero,
    /// The number of required slots does not match `arity - 1`.
    #[error("expected {expected} required slots, got {actual}")]
    SlotMismatch {
        /// Slots demanded by the arity.
        expected: usize,
        /// Slots actually supplied.
        actual: usize,
    },
}

/// The number of positional parameters a function declares.
///
/// Rust cannot read a function's parameter count at runtime, so the arity is
/// supplied next to the function. The last parameter always receives the rest
/// list, which leaves `arity - 1` required slots in front of it.
///
/// # Examples
///
/// ```rust
/// use varity::variadic::{Arity, ArityError};
///
/// let arity = Arity::new(3).unwrap();
/// assert_eq!(arity.get(), 3);
/// assert_eq!(arity.required_slots(), 2);
///
/// assert_eq!(Arity::new(0), Err(ArityError::Zero));
/// assert_eq!(Arity::of::<2>(), Arity::TWO);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct Arity(NonZeroUsize);

impl Arity {
    /// A function taking only the rest list.
    pub const ONE: Self = Self::of::<1>();
    /// One required slot followed by the rest list.
    pub const TWO: Self = Self::of::<2>();
    /// Two required slots followed by the rest list.
    pub const THREE: Self = Self::of::<3>();
    /// Three required slots followed by the rest list.
    pub const FOUR: Self = Self::of::<4>();
    /// Four required slots followed by the rest list.
    pub const FIVE: Self = Self::of::<5>();
    /// Five required slots followed by the rest list.
    pub const SIX: Self = Self::of::<6>();

    /// Creates an arity, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArityError::Zero`] when `value` is `0`.
    pub const fn new(value: usize) -> Result<Self, ArityError> {
        match NonZeroUsize::new(value) {
            Some(value) => Ok(Self(value)),
            None => Err(ArityError::Zero),
        }
    }

    /// Creates an arity known at compile time. `Arity::of::<0>()` fails to
    /// compile.
    pub const fn of<const N: usize>() -> Self {
        const { assert!(N >= 1, "arity must be at least one") };
        match NonZeroUsize::new(N) {
            Some(value) => Self(value),
            None => panic!("arity must be at least one"),
        }
    }

    /// Returns the arity as a plain number.
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Number of positional slots in front of the rest list.
    #[inline]
    pub const fn required_slots(self) -> usize {
        self.0.get() - 1
    }
}

impl TryFrom<usize> for Arity {
    type Error = ArityError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Arity> for usize {
    fn from(arity: Arity) -> Self {
        arity.get()
    }
}

impl From<NonZeroUsize> for Arity {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

static_assertions::assert_impl_all!(Arity: Send, Sync, Copy);
static_assertions::assert_impl_all!(ArityError: std::error::Error, Send, Sync);
