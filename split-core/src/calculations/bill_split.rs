//! Bill split calculations.
//!
//! | Output            | Formula                                      |
//! |-------------------|----------------------------------------------|
//! | Tip amount        | check amount × tip percentage / 100          |
//! | Total with tip    | check amount + tip amount                    |
//! | Amount per person | total with tip / party size                  |
//!
//! Values are kept at full precision; rounding to cents is a presentation
//! concern (see [`round_half_up`](super::common::round_half_up)).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use split_core::{BillSplitCalculator, TipPercentage};
//!
//! let total = BillSplitCalculator::compute_total_with_tip(
//!     dec!(100.00),
//!     TipPercentage::new(20).unwrap(),
//! );
//! let share = BillSplitCalculator::compute_per_person_share(total, 4).unwrap();
//!
//! assert_eq!(total, dec!(120.00));
//! assert_eq!(share, dec!(30.00));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{trace, warn};

use crate::{BillState, PartySize, TipPercentage};

/// Errors raised by the bill split domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillSplitError {
    /// A per-person share was requested for an empty party.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Check amounts cannot be below zero.
    #[error("check amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// The total with tip would not fit in a `Decimal`.
    #[error("check amount is too large: {0}")]
    AmountTooLarge(Decimal),

    #[error("party size {0} is outside the selectable range {min}..{max}", min = PartySize::MIN, max = PartySize::MAX_EXCLUSIVE)]
    PartySizeOutOfRange(u32),

    #[error("tip percentage {0} is outside the selectable range 0..={max}", max = TipPercentage::MAX)]
    TipOutOfRange(u32),
}

/// Snapshot of every value derived from a [`BillState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillSummary {
    pub check_amount: Decimal,
    pub tip_percentage: TipPercentage,
    pub party_size: PartySize,

    /// Tip added on top of the check amount.
    pub tip_amount: Decimal,

    pub total_with_tip: Decimal,
    pub total_per_person: Decimal,
}

/// Stateless bill split arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillSplitCalculator;

impl BillSplitCalculator {
    /// Check amount plus a tip of `tip_percentage` percent.
    ///
    /// # Panics
    ///
    /// When `check_amount` is more than half of [`Decimal::MAX`]. Amounts
    /// stored in a [`BillState`] are always below that.
    pub fn compute_total_with_tip(
        check_amount: Decimal,
        tip_percentage: TipPercentage,
    ) -> Decimal {
        check_amount + Self::tip_amount(check_amount, tip_percentage)
    }

    /// Divides `total` evenly between `party_size` people.
    ///
    /// # Errors
    ///
    /// [`BillSplitError::InvalidArgument`] when `party_size` is zero.
    pub fn compute_per_person_share(
        total: Decimal,
        party_size: u32,
    ) -> Result<Decimal, BillSplitError> {
        if party_size == 0 {
            warn!(%total, "per-person share requested for an empty party");
            return Err(BillSplitError::InvalidArgument(
                "party size must be at least 1".to_string(),
            ));
        }
        Ok(total / Decimal::from(party_size))
    }

    /// Same as [`compute_per_person_share`](Self::compute_per_person_share)
    /// for a party size that is already known to be in range.
    pub fn split(
        total: Decimal,
        party_size: PartySize,
    ) -> Decimal {
        total / Decimal::from(party_size.get())
    }

    /// Derives every output for the given state.
    pub fn calculate(state: &BillState) -> BillSummary {
        let check_amount = state.check_amount();
        let tip_percentage = state.tip_percentage();
        let party_size = state.party_size();

        let tip_amount = Self::tip_amount(check_amount, tip_percentage);
        let total_with_tip = check_amount + tip_amount;
        let total_per_person = Self::split(total_with_tip, party_size);

        trace!(
            %check_amount,
            tip = tip_percentage.get(),
            people = party_size.get(),
            %total_with_tip,
            %total_per_person,
            "bill recalculated"
        );

        BillSummary {
            check_amount,
            tip_percentage,
            party_size,
            tip_amount,
            total_with_tip,
            total_per_person,
        }
    }

    fn tip_amount(
        check_amount: Decimal,
        tip_percentage: TipPercentage,
    ) -> Decimal {
        check_amount * tip_percentage.as_fraction()
    }
}
