use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::{BillSplitCalculator, BillSplitError, BillSummary};

use super::{PartySize, TipPercentage};

/// The three inputs of a bill split.
///
/// Created with defaults when a form opens, edited in place through the
/// setters and dropped when the form closes. Outputs are never stored; the
/// getters re-derive them from the current inputs on every call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BillState {
    check_amount: Decimal,
    party_size: PartySize,
    tip_percentage: TipPercentage,
}

impl BillState {
    /// A state with the form defaults: amount 0, 2 people, 20% tip.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_amount(&self) -> Decimal {
        self.check_amount
    }

    pub fn party_size(&self) -> PartySize {
        self.party_size
    }

    pub fn tip_percentage(&self) -> TipPercentage {
        self.tip_percentage
    }

    /// Stores a new check amount.
    ///
    /// # Errors
    ///
    /// - [`BillSplitError::NegativeAmount`] when `value` is below zero.
    /// - [`BillSplitError::AmountTooLarge`] when the total with the highest
    ///   selectable tip (100%) would not fit in a [`Decimal`].
    ///
    /// The stored amount is left untouched on error.
    pub fn set_check_amount(
        &mut self,
        value: Decimal,
    ) -> Result<(), BillSplitError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(BillSplitError::NegativeAmount(value));
        }
        if value.checked_mul(Decimal::TWO).is_none() {
            return Err(BillSplitError::AmountTooLarge(value));
        }
        debug!(check_amount = %value, "check amount updated");
        self.check_amount = value;
        Ok(())
    }

    pub fn set_party_size(
        &mut self,
        party_size: PartySize,
    ) {
        debug!(party_size = party_size.get(), "party size updated");
        self.party_size = party_size;
    }

    pub fn set_tip_percentage(
        &mut self,
        tip_percentage: TipPercentage,
    ) {
        debug!(tip_percentage = tip_percentage.get(), "tip percentage updated");
        self.tip_percentage = tip_percentage;
    }

    /// Restores the defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check amount plus tip, at full precision.
    pub fn total_with_tip(&self) -> Decimal {
        BillSplitCalculator::compute_total_with_tip(self.check_amount, self.tip_percentage)
    }

    /// Share of the total with tip owed by each person, at full precision.
    pub fn total_per_person(&self) -> Decimal {
        BillSplitCalculator::split(self.total_with_tip(), self.party_size)
    }

    /// Both outputs and the tip amount in one snapshot.
    pub fn summary(&self) -> BillSummary {
        BillSplitCalculator::calculate(self)
    }
}
