//! Block height.

use std::ops::{Add, Sub};

use crate::parameters::ParamsError;

/// The length of the chain back to the genesis block.
///
/// Two [`Height`]s can't be added, but they can be *subtracted* to get their difference,
/// represented as an [`HeightDiff`]. This difference can then be added to or subtracted from a
/// [`Height`]. Note the similarity with `chrono::DateTime` and `chrono::Duration`.
///
/// # Invariants
///
/// Users should not construct block heights greater than `Height::MAX`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(pub u32);

impl std::str::FromStr for Height {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u32>() {
            Ok(h) => h.try_into_height(),
            Err(_) => Err(ParamsError::InvalidHeight(s.to_string())),
        }
    }
}

impl Height {
    /// The minimum [`Height`].
    ///
    /// Due to the underlying type, it is impossible to construct block heights
    /// less than [`Height::MIN`].
    pub const MIN: Height = Height(0);

    /// The maximum [`Height`].
    ///
    /// Users should not construct block heights greater than [`Height::MAX`].
    pub const MAX: Height = Height(499_999_999);

    /// The maximum [`Height`] as a [`u32`], for range patterns.
    pub const MAX_AS_U32: u32 = Self::MAX.0;

    /// Returns the next [`Height`], or `None` at [`Height::MAX`].
    pub fn next(self) -> Option<Self> {
        self + 1
    }

    /// Returns the previous [`Height`], or `None` at [`Height::MIN`].
    pub fn previous(self) -> Option<Self> {
        self - 1
    }

    /// Returns `true` if the [`Height`] is at its minimum.
    pub fn is_min(self) -> bool {
        self == Self::MIN
    }
}

/// A difference between two [`Height`]s, possibly negative.
///
/// This can represent the difference between any height values,
/// even if they are outside the valid height range (for example, in buggy RPC code).
pub type HeightDiff = i64;

/// Convenience trait for converting a type into a valid [`Height`].
pub trait TryIntoHeight {
    /// The error type returned by [`Height`] conversion failures.
    type Error;

    /// Convert `self` to a `Height`, if possible.
    fn try_into_height(&self) -> Result<Height, Self::Error>;
}

impl TryIntoHeight for u32 {
    type Error = ParamsError;

    fn try_into_height(&self) -> Result<Height, Self::Error> {
        if *self <= Height::MAX_AS_U32 {
            Ok(Height(*self))
        } else {
            Err(ParamsError::InvalidHeight(self.to_string()))
        }
    }
}

impl TryIntoHeight for HeightDiff {
    type Error = ParamsError;

    fn try_into_height(&self) -> Result<Height, Self::Error> {
        u32::try_from(*self)
            .map_err(|_| ParamsError::InvalidHeight(self.to_string()))?
            .try_into_height()
    }
}

impl Sub<Height> for Height {
    type Output = HeightDiff;

    /// Subtract two heights, returning the result, which can be negative.
    /// Since [`HeightDiff`] is `i64` and [`Height`] is `u32`, the result is always correct.
    fn sub(self, rhs: Height) -> Self::Output {
        HeightDiff::from(self.0) - HeightDiff::from(rhs.0)
    }
}

impl Sub<HeightDiff> for Height {
    type Output = Option<Self>;

    /// Subtract a height difference from a height, returning `None` if the resulting height is
    /// outside the valid `Height` range (this also checks the result is non-negative).
    fn sub(self, rhs: HeightDiff) -> Option<Self> {
        let lhs = HeightDiff::from(self.0);
        let res = lhs.checked_sub(rhs)?;
        res.try_into_height().ok()
    }
}

impl Add<HeightDiff> for Height {
    type Output = Option<Height>;

    /// Add a height difference to a height, returning `None` if the resulting height is
    /// outside the valid `Height` range.
    fn add(self, rhs: HeightDiff) -> Option<Height> {
        let lhs = HeightDiff::from(self.0);
        let res = lhs.checked_add(rhs)?;
        res.try_into_height().ok()
    }
}

#[cfg(any(test, feature = "proptest-impl"))]
impl proptest::arbitrary::Arbitrary for Height {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        use proptest::strategy::Strategy;

        (Height::MIN.0..=Height::MAX.0).prop_map(Height).boxed()
    }

    type Strategy = proptest::strategy::BoxedStrategy<Self>;
}
