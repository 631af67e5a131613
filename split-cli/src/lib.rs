use std::io::Write;

use anyhow::Context;
use tracing::info;

pub mod config;
pub mod logging;
pub mod render;
pub mod session;
pub mod utils;

pub use config::{AppConfig, ConfigError};
pub use session::{Command, FormSession, Outcome, SessionError};

/// Enters `amount` into the form, leaves the amount field and writes the
/// resulting split once.
///
/// # Errors
///
/// Fails without writing anything when `amount` is not an acceptable check
/// amount, or when writing to `out` fails.
pub fn run_once<W: Write>(
    session: &mut FormSession,
    amount: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    session
        .apply(Command::Amount(amount.to_string()))
        .context("invalid --amount")?;
    session.apply(Command::Done)?;

    session.render(out)?;
    out.flush()?;
    info!(%session, "split printed");
    Ok(())
}
