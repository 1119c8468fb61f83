#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cb() -> Command {
    cargo_bin_cmd!("classbook")
}

/// Create a unique data directory inside the system temp dir, wiping any previous run
pub fn setup_test_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_classbook", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Path of a file inside a test data directory
pub fn data_file(dir: &str, file: &str) -> PathBuf {
    PathBuf::from(dir).join(file)
}

/// Initialize the data dir and record one day: Alice and Bob present, strength 3
pub fn init_with_attendance(dir: &str) {
    cb().args(["--dir", dir, "--test", "init"])
        .assert()
        .success();

    cb().args([
        "--dir",
        dir,
        "record",
        "--date",
        "2025-11-20",
        "--entry",
        "alice=09:15 AM",
        "--entry",
        "bob=09:20",
        "--strength",
        "3",
    ])
    .assert()
    .success();
}
