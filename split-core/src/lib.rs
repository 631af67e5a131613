//! Bill splitting domain logic.
//!
//! Holds the three inputs of a bill (check amount, party size, tip
//! percentage) in a [`BillState`] and derives the total with tip and the
//! per-person share through [`BillSplitCalculator`]. Formatting of those
//! values for display lives in [`currency`].

pub mod calculations;
pub mod currency;
pub mod models;

pub use calculations::{BillSplitCalculator, BillSplitError, BillSummary};
pub use currency::{CurrencyCode, CurrencyError, format_currency};
pub use models::*;
