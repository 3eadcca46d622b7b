mod common;
use common::{add_kit_entries, kl, register_user, setup_data_dir};
use kitledger::core::auth;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_full_session_flow() {
    let dir = setup_data_dir("full_session_flow");
    register_user(&dir, "bob", "test1234");

    add_kit_entries(&dir, &[9_999_999_999, 9_999_999_998]);
    kl().args(["--data-dir", &dir, "phone"]).assert().success();

    kl().args(["--data-dir", &dir, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kit calculations:  2"))
        .stdout(predicate::str::contains("Phone generations: 1"))
        .stdout(predicate::str::contains("Recent activity:"))
        .stdout(predicate::str::contains("Kit calculation: 9999999999 -> 00000001"));
}

#[test]
fn test_history_table_output() {
    let dir = setup_data_dir("history_table_output");
    register_user(&dir, "bob", "test1234");
    add_kit_entries(&dir, &[9_999_999_999, 9_999_999_998, 9_999_999_997]);

    // newest first, numbered down from the total
    kl().args(["--data-dir", &dir, "history", "kit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 to 3 of 3 entries"))
        .stdout(predicate::str::is_match(r"(?s)3 .*00000003.*\n.*2 .*00000002").unwrap());

    // free-text search narrows to one entry
    kl().args(["--data-dir", &dir, "history", "kit", "--search", "00000002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 to 1 of 1 entries"));

    // recognized column filter
    kl().args([
        "--data-dir",
        &dir,
        "history",
        "kit",
        "--column",
        "result",
        "--value",
        "00000001",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Showing 1 to 1 of 1 entries"));

    // unrecognized column passes everything through
    kl().args([
        "--data-dir",
        &dir,
        "history",
        "kit",
        "--column",
        "bogus",
        "--value",
        "x",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Showing 1 to 3 of 3 entries"));
}

#[test]
fn test_history_pagination_cli() {
    let dir = setup_data_dir("history_pagination_cli");
    register_user(&dir, "bob", "test1234");
    let numbers: Vec<i64> = (0..12).map(|i| 9_999_999_999 - i).collect();
    add_kit_entries(&dir, &numbers);

    kl().args([
        "--data-dir", &dir, "history", "kit", "--per-page", "5", "--page", "3",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Showing 11 to 12 of 12 entries"))
    .stdout(predicate::str::contains("Pages:"));

    // a page past the end falls back to the first page
    kl().args([
        "--data-dir", &dir, "history", "kit", "--per-page", "5", "--page", "9",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Showing 1 to 5 of 12 entries"));
}

#[test]
fn test_history_requires_login() {
    let dir = setup_data_dir("history_requires_login");

    kl().args(["--data-dir", &dir, "history", "kit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user is logged in"));
}

#[test]
fn test_baseline_is_merged_at_startup() {
    let dir = setup_data_dir("baseline_merged");

    let hash = auth::hash_password("password123");
    let baseline = format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<users>\n",
            "    <user username=\"alice\" passwordHash=\"{}\">\n",
            "        <history>\n",
            "            <kitCalculations>\n",
            "                <calculation kitNumber=\"9999999999\" rawResult=\"1\" ",
            "paddedResult=\"00000001\" timestamp=\"2025-01-01 10:00:00\"/>\n",
            "            </kitCalculations>\n",
            "            <phoneGenerations>\n",
            "                <generation number=\"012345678\" prefix=\"012\" ",
            "timestamp=\"2025-01-01 12:00:00\"/>\n",
            "            </phoneGenerations>\n",
            "        </history>\n",
            "    </user>\n",
            "</users>\n",
        ),
        hash
    );
    fs::write(Path::new(&dir).join("users.xml"), baseline).expect("write baseline");

    kl().args(["--data-dir", &dir, "login", "alice", "--password", "password123"])
        .assert()
        .success();

    kl().args(["--data-dir", &dir, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kit calculations:  1"))
        .stdout(predicate::str::contains("Phone generations: 1"));

    // local mutations layer on top of the baseline
    add_kit_entries(&dir, &[9_999_999_998]);
    kl().args(["--data-dir", &dir, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kit calculations:  2"));
}

#[test]
fn test_malformed_baseline_degrades_to_empty() {
    let dir = setup_data_dir("malformed_baseline");
    fs::write(Path::new(&dir).join("users.xml"), "<users><user</users>").expect("write baseline");

    // registration still works on the empty fallback
    kl().args([
        "--data-dir",
        &dir,
        "register",
        "bob",
        "--password",
        "test1234",
        "--confirm",
        "test1234",
    ])
    .assert()
    .success();
}

#[test]
fn test_clear_one_history_kind() {
    let dir = setup_data_dir("clear_one_kind");
    register_user(&dir, "bob", "test1234");
    add_kit_entries(&dir, &[9_999_999_999]);
    kl().args(["--data-dir", &dir, "phone"]).assert().success();

    kl().args(["--data-dir", &dir, "clear", "--kit", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kit calculation history cleared"));

    kl().args(["--data-dir", &dir, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kit calculations:  0"))
        .stdout(predicate::str::contains("Phone generations: 1"));
}

#[test]
fn test_clear_requires_confirmation() {
    let dir = setup_data_dir("clear_requires_confirmation");
    register_user(&dir, "bob", "test1234");
    add_kit_entries(&dir, &[9_999_999_999]);

    kl().args(["--data-dir", &dir, "clear", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("re-run with --yes"));

    // nothing was cleared
    kl().args(["--data-dir", &dir, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kit calculations:  1"));
}

#[test]
fn test_reset_removes_all_demo_state() {
    let dir = setup_data_dir("reset_removes_state");
    register_user(&dir, "bob", "test1234");
    add_kit_entries(&dir, &[9_999_999_999]);

    kl().args(["--data-dir", &dir, "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo state reset"));

    kl().args(["--data-dir", &dir, "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user is logged in"));

    // the account itself is gone with the overlay
    kl().args(["--data-dir", &dir, "login", "bob", "--password", "test1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_init_creates_baseline_and_config() {
    let dir = setup_data_dir("init_creates_files");

    kl().args(["--data-dir", &dir, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized data directory"));

    let baseline = fs::read_to_string(Path::new(&dir).join("users.xml")).expect("baseline");
    assert!(baseline.contains("<users>"));
}
