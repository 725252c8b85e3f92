use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn txsms(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("txsms").unwrap();
    cmd.arg("--config").arg(config_dir.join("config.json"));
    cmd
}

#[test]
fn check_prints_json_record() {
    let dir = tempfile::tempdir().unwrap();
    txsms(dir.path()).args(["config", "init"]).assert().success();

    txsms(dir.path())
        .args([
            "check",
            "Rs.500 debited from A/c XX1234 via UPI to merchant@bank using UPI",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"accountNumber\": \"XX1234\""))
        .stdout(predicate::str::contains("\"transactionMode\": \"UPI\""))
        .stdout(predicate::str::contains("\"merchantName\": \"merchant@bank\""));
}

#[test]
fn check_reports_non_financial() {
    let dir = tempfile::tempdir().unwrap();
    txsms(dir.path()).args(["config", "init"]).assert().success();

    txsms(dir.path())
        .args(["check", "Lunch at 1?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a financial message"));
}

#[test]
fn check_fails_on_unparseable_amount() {
    let dir = tempfile::tempdir().unwrap();
    txsms(dir.path()).args(["config", "init"]).assert().success();

    txsms(dir.path())
        .args(["check", "Thanks, yours, payment received"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not extract transaction"));
}

#[test]
fn ingest_writes_buckets() {
    let dir = tempfile::tempdir().unwrap();
    txsms(dir.path()).args(["config", "init"]).assert().success();

    let inbox = dir.path().join("inbox.txt");
    fs::write(
        &inbox,
        "Rs.500 debited from A/c XX1234 via UPI to merchant@bank using UPI\n\
         INR 1,250.50 credited to your account via NEFT\n\
         See you tomorrow\n",
    )
    .unwrap();

    let store = dir.path().join("store");
    txsms(dir.path())
        .arg("ingest")
        .arg(inbox.to_str().unwrap())
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Routed 3 messages"));

    let debit = fs::read_to_string(store.join("debit.jsonl")).unwrap();
    let credit = fs::read_to_string(store.join("credit.jsonl")).unwrap();
    assert_eq!(debit.lines().count(), 1);
    assert_eq!(credit.lines().count(), 1);
    assert!(debit.contains("\"key\":\"debit_"));
    assert!(credit.contains("\"transactionMode\":\"NEFT\""));
}

#[test]
fn config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();

    txsms(dir.path())
        .args(["config", "set", "extraction.require_complete", "true"])
        .assert()
        .success();

    txsms(dir.path())
        .args(["config", "get", "extraction.require_complete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    txsms(dir.path())
        .args(["config", "set", "extraction.nope", "1"])
        .assert()
        .failure();
}
