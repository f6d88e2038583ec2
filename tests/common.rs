#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn mlog() -> Command {
    cargo_bin_cmd!("mantlog")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mantlog.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store (schema only, no config file writes)
pub fn init_store(store_path: &str) {
    mlog()
        .args(["--store", store_path, "--test", "init"])
        .assert()
        .success();
}

/// Run `add` and return the generated record id parsed from the output
pub fn add_record(store_path: &str, args: &[&str]) -> String {
    let mut full = vec!["--store", store_path, "add"];
    full.extend_from_slice(args);

    let output = mlog().args(&full).output().expect("run add");
    assert!(output.status.success(), "add failed: {output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .split("id ")
        .nth(1)
        .expect("id in add output")
        .trim()
        .to_string()
}

/// Initialize the store and add a small dataset useful for many tests
pub fn init_store_with_data(store_path: &str) {
    init_store(store_path);

    add_record(
        store_path,
        &[
            "2024-03-05",
            "--tech",
            "José Krause",
            "--time",
            "10:00",
            "--location",
            "Marina",
            "--type",
            "asc",
            "--equipment",
            "1, 2",
        ],
    );

    add_record(
        store_path,
        &[
            "2024-03-12",
            "--tech",
            "Diego Vargas",
            "--time",
            "16:30",
            "--location",
            "Ama",
            "--type",
            "esc",
            "--equipment",
            "Rampas",
        ],
    );
}
