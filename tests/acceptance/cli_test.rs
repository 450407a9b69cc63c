use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn it_bootstraps_and_prints_message() {
    let dir = tempfile::tempdir().unwrap();
    let message_file = dir.path().join("message.txt");
    let mut cmd = Command::cargo_bin("app").unwrap();

    cmd.env("MESSAGE_FILE_PATH", &message_file).arg("get-message");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Hello! Webhook test is working! 🚀 Third time deployment.",
        ));
    assert!(message_file.exists());
}

#[test]
fn it_updates_message() {
    let dir = tempfile::tempdir().unwrap();
    let message_file = dir.path().join("message.txt");
    let mut cmd = Command::cargo_bin("app").unwrap();

    cmd.env("MESSAGE_FILE_PATH", &message_file)
        .arg("update-message")
        .arg("--message")
        .arg("from the cli");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Message updated: from the cli"));
    assert_eq!(
        std::fs::read_to_string(&message_file).unwrap(),
        "from the cli"
    );
}

#[test]
fn it_keeps_existing_message_on_startup() {
    let dir = tempfile::tempdir().unwrap();
    let message_file = dir.path().join("message.txt");
    std::fs::write(&message_file, "already here\n").unwrap();
    let mut cmd = Command::cargo_bin("app").unwrap();

    cmd.env("MESSAGE_FILE_PATH", &message_file).arg("health-check");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("healthy:"));
    assert_eq!(
        std::fs::read_to_string(&message_file).unwrap(),
        "already here\n"
    );
}

#[test]
fn it_fails_health_check_when_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("app").unwrap();

    cmd.env("MESSAGE_FILE_PATH", dir.path()).arg("health-check");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("unhealthy:"));
}
