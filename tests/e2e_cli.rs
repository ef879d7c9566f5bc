use assert_cmd::{cargo, prelude::*, Command};
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const VALID_CSV: &str = "symbol,type,last_dividend,fixed_dividend,par_value\n\
                         TEA,common,0,,100\n\
                         POP,common,8,,100\n\
                         ALE,common,23,,60\n\
                         GIN,preferred,8,0.02,100\n\
                         JOE,common,13,,250\n";

const BAD_ROW_CSV: &str = "symbol,type,last_dividend,fixed_dividend,par_value\n\
                           TEA,common,0,,100\n\
                           BAD,common,-1,,100\n\
                           GIN,preferred,8,0.02,100\n";

fn setup_temp_home() -> TempDir {
    TempDir::new().expect("failed to create temp home")
}

fn write_csv(home: &TempDir, contents: &str) -> PathBuf {
    let path = home.path().join("stocks.csv");
    std::fs::write(&path, contents).expect("failed to write csv fixture");
    path
}

fn base_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("gbce"));
    cmd.env("HOME", home.path());
    cmd.arg("--no-color");
    cmd
}

#[test]
fn missing_file_fails_with_a_diagnostic() {
    let home = setup_temp_home();

    let mut cmd = base_cmd(&home);
    cmd.arg(home.path().join("absent.csv"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("file does not exist"));
}

#[test]
fn invalid_headers_fail_the_whole_load() {
    let home = setup_temp_home();
    let csv = write_csv(&home, "symbol,type,last_dividend\nTEA,common,0\n");

    let mut cmd = base_cmd(&home);
    cmd.arg(&csv);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid headers"));
}

#[test]
fn stocks_command_lists_loaded_stocks_without_ansi() {
    let home = setup_temp_home();
    let csv = write_csv(&home, VALID_CSV);

    let mut cmd = base_cmd(&home);
    cmd.arg(&csv).write_stdin("stocks\nexit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TEA"))
        .stdout(predicate::str::contains("GIN"))
        .stdout(predicate::str::contains("Preferred"))
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("\u{001b}[").not());
}

#[test]
fn skip_policy_drops_bad_rows_by_default() {
    let home = setup_temp_home();
    let csv = write_csv(&home, BAD_ROW_CSV);

    let mut cmd = base_cmd(&home);
    cmd.arg(&csv).write_stdin("stocks\nexit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TEA"))
        .stdout(predicate::str::contains("GIN"))
        .stdout(predicate::str::contains("BAD").not());
}

#[test]
fn strict_flag_aborts_on_the_first_bad_row() {
    let home = setup_temp_home();
    let csv = write_csv(&home, BAD_ROW_CSV);

    let mut cmd = base_cmd(&home);
    cmd.arg(&csv).arg("--strict");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("row 1"))
        .stderr(predicate::str::contains("invalid last dividend value"));
}

#[test]
fn yield_trade_and_vwap_flow() {
    let home = setup_temp_home();
    let csv = write_csv(&home, VALID_CSV);

    let mut cmd = base_cmd(&home);
    cmd.arg(&csv)
        .write_stdin("yield GIN 20\ntrade POP buy 10 15.5\nvwap POP\nexit\n");

    // GIN is preferred: 0.02 * 100 / 20 = 0.1. The POP trade just
    // recorded is inside the 15-minute window, so VWAP is its price.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dividend yield: 0.1000"))
        .stdout(predicate::str::contains("Recorded buy of 10 POP @ 15.50"))
        .stdout(predicate::str::contains("Volume weighted price: 15.5000"));
}

#[test]
fn unknown_symbol_reports_loaded_symbols() {
    let home = setup_temp_home();
    let csv = write_csv(&home, VALID_CSV);

    let mut cmd = base_cmd(&home);
    cmd.arg(&csv).write_stdin("vwap XXX\nexit\n");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("unknown symbol 'XXX'"))
        .stderr(predicate::str::contains("TEA"));
}

#[test]
fn json_flag_switches_list_output() {
    let home = setup_temp_home();
    let csv = write_csv(&home, VALID_CSV);

    let mut cmd = base_cmd(&home);
    cmd.arg(&csv).arg("--json").write_stdin("stocks\nexit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"symbol\": \"TEA\""))
        .stdout(predicate::str::contains("\"type\": \"Preferred\""));
}
