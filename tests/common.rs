#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn kl() -> Command {
    cargo_bin_cmd!("kitledger")
}

/// Create a unique test data dir inside the system temp dir and remove
/// any state left over from a previous run
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kitledger", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test data dir");
    dir
}

/// Create a temporary output file path and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Register a user via the CLI (registration also logs the user in)
pub fn register_user(dir: &str, username: &str, password: &str) {
    kl().args([
        "--data-dir",
        dir,
        "register",
        username,
        "--password",
        password,
        "--confirm",
        password,
    ])
    .assert()
    .success();
}

/// Record a kit calculation for each given number
pub fn add_kit_entries(dir: &str, numbers: &[i64]) {
    for n in numbers {
        kl().args(["--data-dir", dir, "kit", &n.to_string()])
            .assert()
            .success();
    }
}
