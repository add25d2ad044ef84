use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use tempfile::NamedTempFile;

fn bin() -> Command {
    let exe = env!("CARGO_BIN_EXE_bank_accounts");
    let mut cmd = Command::new(exe);
    cmd.env_remove("BANK_LOG");
    cmd
}

#[test]
fn end_to_end_script_outputs_journal_and_summary() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "type, account, amount, pin, holder\n\
    open_savings, nar, 1000, 1234, Narendra\n\
    withdraw, nar, 200, 1234,\n\
    withdraw, nar, 100, 9999,\n\
    deposit, nar, 500, 1234,\n\
    atm_card, nar, , ,\n\
    atm_card, nar, , ,\n\
    freeze, nar, , ,\n\
    withdraw, nar, 100, 1234,\n\
    unfreeze, nar, , ,\n\
    open_business, tech, 5000, , Tech Corp\n\
    withdraw, tech, 7000, ,\n\
    withdraw, tech, 4000, ,\n\
    loan, tech, 5000, ,\n\
    loan, tech, 15000, ,\n\
    teleport, tech, , ,\n\
    loan, ghost, 10, ,"
    )
    .unwrap();

    let mut cmd = bin();
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(pred::str::contains("nar: Withdrew $200. New balance: $800"))
        .stdout(pred::str::contains("nar: Invalid PIN"))
        .stdout(pred::str::contains("nar: Deposited $500. New balance: $1300"))
        .stdout(pred::str::contains("nar: ATM card already requested"))
        .stdout(pred::str::contains("nar: Account is frozen"))
        .stdout(pred::str::contains("nar: Account unfrozen successfully"))
        .stdout(pred::str::contains("tech: Withdrew $7000. New balance: $-2000"))
        .stdout(pred::str::contains(
            "tech: Insufficient funds (exceeds overdraft limit)",
        ))
        .stdout(pred::str::contains(
            "tech: Loan of $5000 approved. New balance: $3000",
        ))
        .stdout(pred::str::contains("tech: Loan amount exceeds limit"))
        .stdout(pred::str::contains("account,kind,holder,balance,active"))
        .stdout(pred::str::contains("nar,savings,Narendra,1300,true"))
        .stdout(pred::str::contains("tech,business,Tech Corp,3000,true"))
        .stderr(pred::str::contains("Invalid operation type: teleport"))
        .stderr(pred::str::contains("Unknown account ghost"));
}

#[test]
fn balances_at_the_decimal_range_are_rejected_not_fatal() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "type, account, amount, pin, holder\n\
    open_business, t, 79228162514264337593543950335, ,\n\
    deposit, t, 1, ,\n\
    loan, t, 1, ,\n\
    open_savings, s, 79228162514264337593543950335, 1234,\n\
    withdraw, s, 500, 1234,\n\
    deposit, s, 500, 1234,\n\
    withdraw, s, 79228162514264337593543950335, 1234,"
    )
    .unwrap();

    bin()
        .arg(file.path())
        .assert()
        .success()
        .stdout(pred::str::contains("t: Balance limit exceeded"))
        .stdout(pred::str::contains("s: Withdrew $500"))
        .stdout(pred::str::contains("s: Daily withdrawal limit exceeded"))
        .stdout(pred::str::contains(
            "t,business,t,79228162514264337593543950335,true",
        ))
        .stdout(pred::str::contains(
            "s,savings,s,79228162514264337593543950335,true",
        ));
}

#[test]
fn without_arguments_runs_the_walkthrough() {
    bin()
        .assert()
        .success()
        .stdout(pred::str::contains(
            "=== BANK CUSTOMERWISE COMPLETE TEST FLOW ===",
        ))
        .stdout(pred::str::contains("   Balance: $1000"))
        .stdout(pred::str::contains("    ATM card already requested"))
        .stdout(pred::str::contains(
            "    Withdrew $7000. New balance: $-2000",
        ))
        .stdout(pred::str::contains("=== TEST FLOW COMPLETED ==="));
}

#[test]
fn missing_script_fails() {
    bin()
        .arg("/nonexistent/operations.csv")
        .assert()
        .failure()
        .stderr(pred::str::contains("No such file"));
}

#[test]
fn invalid_log_level_fails() {
    bin().env("BANK_LOG", "loud").assert().failure();
}
