//! Interactive form session.
//!
//! A session owns one [`BillState`] for as long as the form is open. Each
//! input line is a command that edits one field; after every edit the
//! summary is re-derived and printed, the same way the form re-renders on
//! every change. Bad input is reported and the state is left as it was.

use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use split_core::{BillSplitError, BillState, PartySize, TipPercentage};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    render::SummaryRenderer,
    utils::{ParseDecimalError, parse_amount},
};

/// Command list shown by `help`, with the selectable ranges spelled out.
pub fn help_text() -> String {
    let mut people = PartySize::choices();
    let fewest = people.next().map_or(PartySize::MIN, PartySize::get);
    let most = people.last().map_or(fewest, PartySize::get);
    let presets = TipPercentage::PRESETS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\
Commands:
  amount <value>   set the check amount (e.g. 42.50, $1,200)
  people <n>       number of people splitting the bill ({fewest}-{most})
  tip <percent>    tip percentage (0-{max_tip}; common: {presets})
  done             dismiss the amount field
  reset            restore the defaults
  show             print the current split
  help             show this list
  quit             leave
",
        max_tip = TipPercentage::MAX,
    )
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    #[error("'{command}' expects a whole number, got '{input}'")]
    NotANumber {
        command: &'static str,
        input: String,
    },
}

/// Anything that can go wrong applying one line of input.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Amount(#[from] ParseDecimalError),

    #[error(transparent)]
    Bill(#[from] BillSplitError),
}

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Amount(String),
    People(u32),
    Tip(u32),
    Done,
    Reset,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "amount" | "a" => Ok(Self::Amount(rest.to_string())),
            "people" | "p" => parse_count("people", rest).map(Self::People),
            "tip" | "t" => parse_count("tip", rest.trim_end_matches('%')).map(Self::Tip),
            "done" => Ok(Self::Done),
            "reset" => Ok(Self::Reset),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_count(
    command: &'static str,
    input: &str,
) -> Result<u32, CommandError> {
    if input.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    input.parse().map_err(|_| CommandError::NotANumber {
        command,
        input: input.to_string(),
    })
}

/// What the caller should do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An input changed; the summary is stale.
    Updated,
    /// Nothing changed, but the summary was asked for.
    Show,
    Help,
    /// Presentation-only change, nothing to print.
    Silent,
    Quit,
}

/// The open form: bill inputs plus presentation-only state.
#[derive(Debug, Clone)]
pub struct FormSession {
    state: BillState,
    default_people: PartySize,
    default_tip: TipPercentage,

    /// Whether the amount field is being edited. Owned by the form; the
    /// calculator never sees it.
    amount_is_focused: bool,

    renderer: SummaryRenderer,
    prompt: bool,
}

impl FormSession {
    /// Opens a form with the configured defaults.
    pub fn new(
        config: &AppConfig,
        ansi: bool,
    ) -> Self {
        let mut session = Self {
            state: BillState::new(),
            default_people: config.default_people,
            default_tip: config.default_tip,
            amount_is_focused: false,
            renderer: SummaryRenderer::new(config.currency, ansi),
            prompt: false,
        };
        session.restore_defaults();
        session
    }

    fn restore_defaults(&mut self) {
        self.state.reset();
        self.state.set_party_size(self.default_people);
        self.state.set_tip_percentage(self.default_tip);
        self.amount_is_focused = false;
    }

    /// Print a `> ` prompt before reading each line.
    pub fn with_prompt(
        mut self,
        prompt: bool,
    ) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn state(&self) -> &BillState {
        &self.state
    }

    pub fn amount_is_focused(&self) -> bool {
        self.amount_is_focused
    }

    /// Applies one command to the form.
    ///
    /// # Errors
    ///
    /// The bill inputs are untouched when an error is returned.
    pub fn apply(
        &mut self,
        command: Command,
    ) -> Result<Outcome, SessionError> {
        debug!(?command, "applying command");
        match command {
            Command::Amount(text) => {
                self.amount_is_focused = true;
                let amount = parse_amount(&text)?;
                self.state.set_check_amount(amount)?;
                Ok(Outcome::Updated)
            }
            Command::People(people) => {
                self.state.set_party_size(PartySize::new(people)?);
                Ok(Outcome::Updated)
            }
            Command::Tip(percent) => {
                self.state.set_tip_percentage(TipPercentage::new(percent)?);
                Ok(Outcome::Updated)
            }
            Command::Done => {
                self.amount_is_focused = false;
                Ok(Outcome::Silent)
            }
            Command::Reset => {
                self.restore_defaults();
                Ok(Outcome::Updated)
            }
            Command::Show => Ok(Outcome::Show),
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// Parses and applies one line of input.
    pub fn apply_line(
        &mut self,
        line: &str,
    ) -> Result<Outcome, SessionError> {
        let command: Command = line.parse()?;
        self.apply(command)
    }

    /// Writes the current summary.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
    ) -> io::Result<()> {
        self.renderer.render(out, &self.state.summary())
    }

    /// Reads commands from `input` until `quit` or end of input, writing
    /// results and error messages to `out`.
    ///
    /// # Errors
    ///
    /// Only I/O failures end the session early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> io::Result<()> {
        info!(currency = %self.renderer.currency(), "form session opened");
        self.render(out)?;

        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.apply_line(&line) {
                Ok(Outcome::Updated | Outcome::Show) => {
                    writeln!(out)?;
                    self.render(out)?;
                }
                Ok(Outcome::Help) => write!(out, "{}", help_text())?,
                Ok(Outcome::Silent) => {}
                Ok(Outcome::Quit) => break,
                Err(error) => {
                    warn!(%line, %error, "rejected input");
                    writeln!(out, "error: {error}")?;
                }
            }
        }

        info!("form session closed");
        Ok(())
    }
}

impl fmt::Display for FormSession {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "amount={} people={} tip={} focused={}",
            self.state.check_amount(),
            self.state.party_size().get(),
            self.state.tip_percentage(),
            self.amount_is_focused
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn session() -> FormSession {
        FormSession::new(&AppConfig::default(), false)
    }

    // =========================================================================
    // Command parsing tests
    // =========================================================================

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!("amount 12.50".parse::<Command>(), Ok(Command::Amount("12.50".to_string())));
        assert_eq!("A $1,000".parse::<Command>(), Ok(Command::Amount("$1,000".to_string())));
        assert_eq!("people 4".parse::<Command>(), Ok(Command::People(4)));
        assert_eq!("p 3".parse::<Command>(), Ok(Command::People(3)));
        assert_eq!("tip 15%".parse::<Command>(), Ok(Command::Tip(15)));
        assert_eq!("  done ".parse::<Command>(), Ok(Command::Done));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn amount_without_value_is_allowed() {
        assert_eq!("amount".parse::<Command>(), Ok(Command::Amount(String::new())));
    }

    #[test]
    fn people_without_value_is_an_error() {
        assert!(matches!(
            "people".parse::<Command>(),
            Err(CommandError::MissingArgument("people"))
        ));
    }

    #[test]
    fn tip_must_be_a_whole_number() {
        assert!(matches!(
            "tip 12.5".parse::<Command>(),
            Err(CommandError::NotANumber { command: "tip", .. })
        ));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert!(matches!(
            "split 3".parse::<Command>(),
            Err(CommandError::Unknown(word)) if word == "split"
        ));
    }

    #[test]
    fn help_lists_ranges_and_tip_presets() {
        let help = help_text();

        assert!(help.contains("(2-99)"));
        assert!(help.contains("(0-100; common: 0%, 10%, 15%, 20%, 25%)"));
    }

    // =========================================================================
    // FormSession tests
    // =========================================================================

    #[test]
    fn new_session_starts_with_config_defaults() {
        let mut config = AppConfig::default();
        config.apply_overrides(None, Some(15), Some(4)).unwrap();

        let session = FormSession::new(&config, false);

        assert_eq!(session.state().check_amount(), dec!(0));
        assert_eq!(session.state().tip_percentage().get(), 15);
        assert_eq!(session.state().party_size().get(), 4);
        assert!(!session.amount_is_focused());
    }

    #[test]
    fn amount_edit_focuses_field_and_done_dismisses() {
        let mut session = session();

        session.apply_line("amount 80").unwrap();
        assert!(session.amount_is_focused());

        let outcome = session.apply_line("done").unwrap();
        assert_eq!(outcome, Outcome::Silent);
        assert!(!session.amount_is_focused());
        assert_eq!(session.state().check_amount(), dec!(80));
    }

    #[test]
    fn edits_update_outputs() {
        let mut session = session();

        session.apply_line("amount 100").unwrap();
        session.apply_line("tip 20").unwrap();
        session.apply_line("people 4").unwrap();

        assert_eq!(session.state().total_with_tip(), dec!(120));
        assert_eq!(session.state().total_per_person(), dec!(30));
    }

    #[test]
    fn out_of_range_people_leaves_state_unchanged() {
        let mut session = session();
        session.apply_line("people 5").unwrap();

        let result = session.apply_line("people 1");

        assert!(matches!(
            result,
            Err(SessionError::Bill(BillSplitError::PartySizeOutOfRange(1)))
        ));
        assert_eq!(session.state().party_size().get(), 5);
    }

    #[test]
    fn out_of_range_tip_leaves_state_unchanged() {
        let mut session = session();

        let result = session.apply_line("tip 101");

        assert!(matches!(
            result,
            Err(SessionError::Bill(BillSplitError::TipOutOfRange(101)))
        ));
        assert_eq!(session.state().tip_percentage().get(), 20);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let mut session = session();
        session.apply_line("amount 10").unwrap();

        let result = session.apply_line("amount -3");

        assert!(matches!(
            result,
            Err(SessionError::Bill(BillSplitError::NegativeAmount(_)))
        ));
        assert_eq!(session.state().check_amount(), dec!(10));
    }

    #[test]
    fn amount_too_large_to_tip_is_rejected() {
        let mut session = session();
        session.apply_line("amount 10").unwrap();

        let result = session.apply_line("amount 70000000000000000000000000000");

        assert!(matches!(
            result,
            Err(SessionError::Bill(BillSplitError::AmountTooLarge(_)))
        ));
        assert_eq!(session.state().check_amount(), dec!(10));
    }

    #[test]
    fn unparsable_amount_is_rejected() {
        let mut session = session();

        let result = session.apply_line("amount lots");

        assert!(matches!(result, Err(SessionError::Amount(_))));
        assert_eq!(session.state().check_amount(), dec!(0));
    }

    #[test]
    fn reset_goes_back_to_session_defaults() {
        let mut config = AppConfig::default();
        config.apply_overrides(None, Some(10), Some(3)).unwrap();
        let mut session = FormSession::new(&config, false);
        session.apply_line("amount 55").unwrap();
        session.apply_line("tip 0").unwrap();

        session.apply_line("reset").unwrap();

        assert_eq!(session.state().check_amount(), dec!(0));
        assert_eq!(session.state().tip_percentage().get(), 10);
        assert_eq!(session.state().party_size().get(), 3);
        assert!(!session.amount_is_focused());
    }

    #[test]
    fn display_shows_inputs_and_focus() {
        let mut session = session();
        session.apply_line("amount 12.5").unwrap();

        assert_eq!(
            session.to_string(),
            "amount=12.5 people=2 tip=20% focused=true"
        );
    }
}
