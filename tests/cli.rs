//! End-to-end tests for the fourthstep CLI
//!
//! Each test runs the binary against its own temporary data directory via
//! the FOURTHSTEP_DATA_DIR override, so tests never touch real user data.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fourthstep(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fourthstep").unwrap();
    cmd.env("FOURTHSTEP_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_and_list() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .args(["add", "My boss", "Criticized my report in front of the team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added resentment"));

    fourthstep(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("My boss"))
        .stdout(predicate::str::contains("1 entry"));
}

#[test]
fn list_empty_store() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No resentments added yet"));
}

#[test]
fn add_with_optional_fields_and_show() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .args([
            "add",
            "Landlord",
            "Raised the rent",
            "--affects",
            "Financial security",
            "--my-part",
            "Never negotiated",
        ])
        .assert()
        .success();

    let output = fourthstep(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let short_id = stdout
        .lines()
        .find(|l| l.contains("Landlord"))
        .and_then(|l| l.split_whitespace().next())
        .expect("listed entry should start with its id");

    fourthstep(&dir)
        .args(["show", short_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Raised the rent"))
        .stdout(predicate::str::contains("Financial security"))
        .stdout(predicate::str::contains("Never negotiated"));
}

#[test]
fn show_omits_blank_optional_fields() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .args(["add", "Neighbor", "Loud parties"])
        .assert()
        .success();

    let output = fourthstep(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let short_id = stdout
        .lines()
        .find(|l| l.contains("Neighbor"))
        .and_then(|l| l.split_whitespace().next())
        .unwrap();

    fourthstep(&dir)
        .args(["show", short_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loud parties"))
        .stdout(predicate::str::contains("How it affects me").not())
        .stdout(predicate::str::contains("My part").not());
}

#[test]
fn add_rejects_blank_who() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .args(["add", "   ", "Something happened"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));

    // A rejected add leaves the store untouched
    fourthstep(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No resentments added yet"));
}

#[test]
fn add_rejects_blank_what() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .args(["add", "Someone", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn remove_with_yes_flag() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .args(["add", "Old friend", "Borrowed money and vanished"])
        .assert()
        .success();

    let output = fourthstep(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let short_id = stdout
        .lines()
        .find(|l| l.contains("Old friend"))
        .and_then(|l| l.split_whitespace().next())
        .unwrap()
        .to_string();

    fourthstep(&dir)
        .args(["remove", &short_id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted resentment"));

    fourthstep(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Old friend").not());
}

#[test]
fn remove_missing_entry_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .args(["remove", "res-deadbeef", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn remove_prompt_declined_keeps_entry() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .args(["add", "Coworker", "Took credit for my work"])
        .assert()
        .success();

    let output = fourthstep(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let short_id = stdout
        .lines()
        .find(|l| l.contains("Coworker"))
        .and_then(|l| l.split_whitespace().next())
        .unwrap()
        .to_string();

    fourthstep(&dir)
        .args(["remove", &short_id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    fourthstep(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coworker"));
}

#[test]
fn entries_survive_across_invocations_in_order() {
    let dir = TempDir::new().unwrap();

    for (who, what) in [("A", "first"), ("B", "second"), ("C", "third")] {
        fourthstep(&dir).args(["add", who, what]).assert().success();
    }

    let output = fourthstep(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let pos_a = stdout.find("first").unwrap();
    let pos_b = stdout.find("second").unwrap();
    let pos_c = stdout.find("third").unwrap();
    assert!(pos_a < pos_b && pos_b < pos_c);
    assert!(stdout.contains("3 entries"));
}

#[test]
fn corrupt_store_is_quarantined_not_fatal() {
    let dir = TempDir::new().unwrap();
    let entries_file = dir.path().join("data").join("resentments.json");
    std::fs::create_dir_all(entries_file.parent().unwrap()).unwrap();
    std::fs::write(&entries_file, "{not valid json").unwrap();

    fourthstep(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No resentments added yet"));

    // The bad file was moved aside rather than deleted
    assert!(dir.path().join("data").join("resentments.json.corrupt").exists());

    // And the store is usable again
    fourthstep(&dir)
        .args(["add", "Someone", "Something happened"])
        .assert()
        .success();
}

#[test]
fn first_run_writes_default_settings() {
    let dir = TempDir::new().unwrap();
    let settings_file = dir.path().join("config.json");
    assert!(!settings_file.exists());

    fourthstep(&dir).arg("list").assert().success();

    let contents = std::fs::read_to_string(&settings_file).unwrap();
    assert!(contents.contains("confirm_delete"));
    assert!(contents.contains("date_format"));
}

#[test]
fn confirm_delete_setting_skips_prompt() {
    let dir = TempDir::new().unwrap();

    // Seed a config with confirmation turned off
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"date_format":"%Y-%m-%d","confirm_delete":false}"#,
    )
    .unwrap();

    fourthstep(&dir)
        .args(["add", "Bank", "Overdraft fee"])
        .assert()
        .success();

    let output = fourthstep(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let short_id = stdout
        .lines()
        .find(|l| l.contains("Bank"))
        .and_then(|l| l.split_whitespace().next())
        .unwrap()
        .to_string();

    // No --yes and no stdin answer needed
    fourthstep(&dir)
        .args(["remove", &short_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted resentment"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    fourthstep(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("resentments.json"))
        .stdout(predicate::str::contains("Confirm delete"));
}
