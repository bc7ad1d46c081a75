use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn solve() -> Command {
    Command::cargo_bin("solve").expect("binary exists")
}

#[test]
fn reports_a_guaranteed_win() {
    solve()
        .args(["--deck", "D=1", "--hand", "D", "--actions", "1"])
        .args(["--requirements", "D=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00%"))
        .stdout(predicate::str::contains("guaranteed possible"));
}

#[test]
fn reports_fractional_odds() {
    // Thruster draws 2 of {D, M, M}: 2/3 to hit the Damage
    solve()
        .args(["--deck", "T=1,D=1,M=2", "--hand", "T", "--actions", "2"])
        .args(["--requirements", "T=1,D=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("66.67%"))
        .stdout(predicate::str::contains("1 in 1.5"));
}

#[test]
fn reports_an_impossible_position() {
    solve()
        .args(["--deck", "M=2", "--hand", "M", "--actions", "1"])
        .args(["--requirements", "D=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00%"))
        .stdout(predicate::str::contains("impossible"));
}

#[test]
fn takes_requirements_from_a_named_contract() {
    // Space Anomaly asks for 1 reactor + 1 damage; R then D wins on one action
    solve()
        .args(["--hand", "RD", "--actions", "1"])
        .args(["--contract", "Space Anomaly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00%"));
}

#[test]
fn requires_exactly_one_requirements_source() {
    solve()
        .args(["--hand", "RD", "--actions", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Exactly one of"));
}

#[test]
fn rejects_a_hand_the_deck_cannot_supply() {
    solve()
        .args(["--deck", "D=1", "--hand", "DD", "--actions", "1"])
        .args(["--requirements", "D=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available in deck"));
}
