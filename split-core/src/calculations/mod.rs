//! Calculation logic for splitting a bill.
//!
//! [`bill_split`] derives the outputs from the inputs; [`common`] holds the
//! rounding used when those outputs are shown.

pub mod bill_split;
pub mod common;

pub use bill_split::{BillSplitCalculator, BillSplitError, BillSummary};
