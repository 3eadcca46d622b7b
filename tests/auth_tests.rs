mod common;
use common::{kl, register_user, setup_data_dir};
use predicates::prelude::*;

#[test]
fn test_register_and_login() {
    let dir = setup_data_dir("register_and_login");
    register_user(&dir, "bob", "test1234");

    kl().args(["--data-dir", &dir, "login", "bob", "--password", "test1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, bob!"));
}

#[test]
fn test_login_wrong_password_is_generic() {
    let dir = setup_data_dir("login_wrong_password");
    register_user(&dir, "bob", "test1234");

    kl().args(["--data-dir", &dir, "login", "bob", "--password", "test123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_login_unknown_user_is_generic() {
    let dir = setup_data_dir("login_unknown_user");
    register_user(&dir, "bob", "test1234");

    // unknown username must produce the same message as a wrong
    // password, so usernames cannot be enumerated
    kl().args(["--data-dir", &dir, "login", "mallory", "--password", "test1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_register_duplicate_username() {
    let dir = setup_data_dir("register_duplicate");
    register_user(&dir, "bob", "test1234");

    kl().args([
        "--data-dir",
        &dir,
        "register",
        "bob",
        "--password",
        "other123",
        "--confirm",
        "other123",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Username already exists"));
}

#[test]
fn test_register_password_mismatch() {
    let dir = setup_data_dir("register_mismatch");

    kl().args([
        "--data-dir",
        &dir,
        "register",
        "bob",
        "--password",
        "test1234",
        "--confirm",
        "test1235",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Passwords do not match"));
}

#[test]
fn test_register_password_too_short() {
    let dir = setup_data_dir("register_short_password");

    kl().args([
        "--data-dir",
        &dir,
        "register",
        "bob",
        "--password",
        "abc",
        "--confirm",
        "abc",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("at least 4 characters"));
}

#[test]
fn test_register_invalid_username() {
    let dir = setup_data_dir("register_invalid_username");

    kl().args([
        "--data-dir",
        &dir,
        "register",
        "bad user!",
        "--password",
        "test1234",
        "--confirm",
        "test1234",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid username"));
}

#[test]
fn test_registration_logs_in() {
    let dir = setup_data_dir("registration_logs_in");
    register_user(&dir, "bob", "test1234");

    kl().args(["--data-dir", &dir, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bob"));
}

#[test]
fn test_logout_ends_session() {
    let dir = setup_data_dir("logout_ends_session");
    register_user(&dir, "bob", "test1234");

    kl().args(["--data-dir", &dir, "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out successfully"));

    kl().args(["--data-dir", &dir, "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user is logged in"));
}
