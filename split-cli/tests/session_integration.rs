//! Integration tests that drive a whole form session through in-memory
//! input and output, the way the binary drives it through stdin/stdout.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use split_cli::{AppConfig, FormSession, run_once};

/// Path to the sample config shipped with the test fixtures.
fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("dinner.toml")
}

/// Runs `script` through a fresh session and returns everything written.
fn run_script(
    config: &AppConfig,
    script: &str,
) -> (FormSession, String) {
    let mut session = FormSession::new(config, false);
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn test_session_prints_defaults_on_open() {
    let (_, out) = run_script(&AppConfig::default(), "");

    assert_eq!(
        out,
        "Check amount:          $0.00\n\
         Number of people:      2 people\n\
         Tip percentage:        20%\n\
         Amount per person:     $0.00\n\
         Total amount with tip: $0.00\n"
    );
}

#[test]
fn test_session_reprints_after_every_edit() {
    let (session, out) = run_script(
        &AppConfig::default(),
        "amount 100\ntip 20\npeople 4\ndone\n",
    );

    // Opening render plus one per edit; `done` prints nothing.
    assert_eq!(out.matches("Amount per person:").count(), 4);
    assert!(out.ends_with(
        "Amount per person:     $30.00\n\
         Total amount with tip: $120.00\n"
    ));
    assert!(!session.amount_is_focused());
}

#[test]
fn test_session_reports_errors_and_continues() {
    let (session, out) = run_script(
        &AppConfig::default(),
        "amount 50\npeople 0\ntip 250\nfoo\namount -5\npeople 5\ntip 0\n",
    );

    assert!(out.contains("error: party size 0 is outside the selectable range 2..100"));
    assert!(out.contains("error: tip percentage 250 is outside the selectable range 0..=100"));
    assert!(out.contains("error: unknown command 'foo'"));
    assert!(out.contains("error: check amount cannot be negative: -5"));

    let state = session.state();
    assert_eq!(state.check_amount(), dec!(50));
    assert_eq!(state.total_with_tip(), dec!(50));
    assert_eq!(state.total_per_person(), dec!(10));
}

#[test]
fn test_session_stops_at_quit() {
    let (session, out) = run_script(&AppConfig::default(), "amount 10\nquit\namount 99\n");

    assert_eq!(session.state().check_amount(), dec!(10));
    assert!(!out.contains("$99.00"));
}

#[test]
fn test_session_help_lists_commands() {
    let (_, out) = run_script(&AppConfig::default(), "help\n");

    assert!(out.contains("amount <value>"));
    assert!(out.contains("people <n>"));
    assert!(out.contains("tip <percent>"));
}

#[test]
fn test_session_skips_blank_lines() {
    let (_, out) = run_script(&AppConfig::default(), "\n   \n");

    assert!(!out.contains("error:"));
}

#[test]
fn test_fixture_config_sets_session_defaults() {
    let config = AppConfig::load(&fixture_path()).expect("fixture config should load");

    assert_eq!(config.currency.as_str(), "EUR");
    assert_eq!(config.log_level, "info");

    let (session, out) = run_script(&config, "amount 1,200\n");

    assert_eq!(session.state().party_size().get(), 6);
    assert_eq!(session.state().tip_percentage().get(), 15);
    // 1200 * 1.15 = 1380, / 6 = 230
    assert!(out.ends_with(
        "Amount per person:     €230.00\n\
         Total amount with tip: €1,380.00\n"
    ));
}

#[test]
fn test_reset_returns_to_fixture_defaults() {
    let config = AppConfig::load(&fixture_path()).unwrap();

    let (session, _) = run_script(&config, "amount 40\npeople 2\ntip 0\nreset\n");

    assert_eq!(session.state().check_amount(), dec!(0));
    assert_eq!(session.state().party_size().get(), 6);
    assert_eq!(session.state().tip_percentage().get(), 15);
}

#[test]
fn test_session_rejects_amount_too_large_to_tip() {
    let (session, out) = run_script(
        &AppConfig::default(),
        "amount 70000000000000000000000000000\n",
    );

    assert!(out.contains("error: check amount is too large: 70000000000000000000000000000"));
    assert_eq!(session.state().check_amount(), dec!(0));
}

#[test]
fn test_run_once_prints_split_a_single_time() {
    let mut config = AppConfig::default();
    config.apply_overrides(None, None, Some(4)).unwrap();
    let mut session = FormSession::new(&config, false);
    let mut out = Vec::new();

    run_once(&mut session, "100", &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("Amount per person:     $30.00\n").count(), 1);
    assert!(out.ends_with("Total amount with tip: $120.00\n"));
    assert!(!session.amount_is_focused());
}

#[test]
fn test_run_once_with_bad_amount_writes_nothing() {
    for amount in ["abc", "-5", "70000000000000000000000000000"] {
        let mut session = FormSession::new(&AppConfig::default(), false);
        let mut out = Vec::new();

        let err = run_once(&mut session, amount, &mut out).unwrap_err();

        assert!(err.to_string().contains("invalid --amount"), "{amount}: {err}");
        assert!(out.is_empty(), "{amount}");
        assert_eq!(session.state().check_amount(), dec!(0));
    }
}
