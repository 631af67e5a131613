use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::BillSplitError;

/// Number of people splitting a bill.
///
/// Only values from the selectable range `2..100` can be represented, so a
/// `PartySize` is always a safe divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PartySize(u32);

impl PartySize {
    /// Smallest selectable party size.
    pub const MIN: u32 = 2;

    /// Upper bound of the selection range (exclusive).
    pub const MAX_EXCLUSIVE: u32 = 100;

    /// Party size selected when a form is opened.
    pub const DEFAULT: PartySize = PartySize(Self::MIN);

    /// Creates a party size, rejecting values outside `2..100`.
    pub fn new(people: u32) -> Result<Self, BillSplitError> {
        if (Self::MIN..Self::MAX_EXCLUSIVE).contains(&people) {
            Ok(Self(people))
        } else {
            Err(BillSplitError::PartySizeOutOfRange(people))
        }
    }

    /// The number of people, which is also the divisor of the split.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Every selectable party size, smallest first.
    pub fn choices() -> impl Iterator<Item = PartySize> {
        (Self::MIN..Self::MAX_EXCLUSIVE).map(PartySize)
    }
}

impl Default for PartySize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for PartySize {
    type Error = BillSplitError;

    fn try_from(people: u32) -> Result<Self, Self::Error> {
        Self::new(people)
    }
}

impl From<PartySize> for u32 {
    fn from(size: PartySize) -> Self {
        size.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} people", self.0)
    }
}
