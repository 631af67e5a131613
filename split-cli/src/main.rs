use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use split_cli::{
    config::AppConfig,
    logging::{self, DEFAULT_FILTER},
    session::{Command, FormSession},
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Split a bill, tip included, between a number of people.
///
/// With `--amount` the split is printed once. Otherwise (or with
/// `--interactive`) a form session reads edits from standard input and
/// reprints the split after each one.
#[derive(Debug, Parser)]
#[command(name = "wesplit", version, about)]
struct Cli {
    /// Check amount before tip (e.g. `84.20` or `$1,250`).
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// Number of people splitting the bill (2-99).
    #[arg(long)]
    people: Option<u32>,

    /// Tip percentage (0-100).
    #[arg(long)]
    tip: Option<u32>,

    /// ISO 4217 currency code used to format amounts.
    #[arg(long)]
    currency: Option<String>,

    /// TOML file with default settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive (overrides the config file; `RUST_LOG` wins
    /// over both).
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Keep the form open for edits even when `--amount` is given.
    #[arg(short, long)]
    interactive: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref().unwrap_or(DEFAULT_FILTER))
        .context("invalid --log-level")?;

    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if cli.log_level.is_none() && std::env::var_os("RUST_LOG").is_none() {
        logging::set_log_level(&config.log_level)
            .with_context(|| format!("invalid log_level '{}' in config", config.log_level))?;
    }

    config
        .apply_overrides(cli.currency.as_deref(), cli.tip, cli.people)
        .context("invalid command-line value")?;
    debug!(?config, "effective configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = FormSession::new(&config, stdout.is_terminal());

    if let Some(amount) = cli.amount {
        if !cli.interactive {
            split_cli::run_once(&mut session, &amount, &mut out)?;
            logging::disable_file_logging();
            return Ok(());
        }
        session
            .apply(Command::Amount(amount))
            .context("invalid --amount")?;
        session.apply(Command::Done)?;
    }

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut session = session.with_prompt(prompt);
    session.run(stdin.lock(), &mut out)?;
    out.flush()?;

    logging::disable_file_logging();
    Ok(())
}
