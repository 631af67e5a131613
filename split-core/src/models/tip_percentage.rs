use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::BillSplitError;

/// Whole-number tip percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TipPercentage(u32);

impl TipPercentage {
    /// Highest selectable tip (inclusive).
    pub const MAX: u32 = 100;

    /// Tip selected when a form is opened.
    pub const DEFAULT: TipPercentage = TipPercentage(20);

    /// No tip at all.
    pub const ZERO: TipPercentage = TipPercentage(0);

    /// Common quick picks offered ahead of the full range.
    pub const PRESETS: [TipPercentage; 5] = [
        TipPercentage(0),
        TipPercentage(10),
        TipPercentage(15),
        TipPercentage(20),
        TipPercentage(25),
    ];

    /// Creates a tip percentage, rejecting anything above 100.
    pub fn new(percent: u32) -> Result<Self, BillSplitError> {
        if percent <= Self::MAX {
            Ok(Self(percent))
        } else {
            Err(BillSplitError::TipOutOfRange(percent))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The tip as a fraction of the check amount (20% -> 0.20).
    pub fn as_fraction(self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }

    /// Every selectable tip, `0%` through `100%`.
    pub fn choices() -> impl Iterator<Item = TipPercentage> {
        (0..=Self::MAX).map(TipPercentage)
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for TipPercentage {
    type Error = BillSplitError;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<TipPercentage> for u32 {
    fn from(tip: TipPercentage) -> Self {
        tip.0
    }
}

impl fmt::Display for TipPercentage {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
