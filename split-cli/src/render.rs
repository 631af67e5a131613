//! Text rendering of a bill summary.

use std::io::{self, Write};

use split_core::{BillSummary, CurrencyCode, format_currency};

const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Writes summaries in the configured currency.
///
/// With `ansi` set, the total line turns red when no tip is left.
#[derive(Debug, Clone)]
pub struct SummaryRenderer {
    currency: CurrencyCode,
    ansi: bool,
}

impl SummaryRenderer {
    pub fn new(
        currency: CurrencyCode,
        ansi: bool,
    ) -> Self {
        Self { currency, ansi }
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn render<W: Write>(
        &self,
        out: &mut W,
        summary: &BillSummary,
    ) -> io::Result<()> {
        let money = |value| format_currency(&self.currency, value);

        writeln!(out, "Check amount:          {}", money(summary.check_amount))?;
        writeln!(out, "Number of people:      {}", summary.party_size)?;
        writeln!(out, "Tip percentage:        {}", summary.tip_percentage)?;
        writeln!(out, "Amount per person:     {}", money(summary.total_per_person))?;

        let total = format!("Total amount with tip: {}", money(summary.total_with_tip));
        if self.ansi && summary.tip_percentage.is_zero() {
            writeln!(out, "{RED}{total}{RESET}")
        } else {
            writeln!(out, "{total}")
        }
    }
}
