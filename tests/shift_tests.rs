use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_store, mlog, setup_test_store};

#[test]
fn test_shift_add_and_list() {
    let store = setup_test_store("shift_add");
    init_store(&store);

    mlog()
        .args([
            "--store",
            &store,
            "shifts",
            "--date",
            "2024-12-17",
            "--name",
            "Julio Pérez",
            "--role",
            "tecnico",
            "--shift-type",
            "noche",
        ])
        .assert()
        .success();

    mlog()
        .args(["--store", &store, "shifts", "--list"])
        .assert()
        .success()
        .stdout(
            contains("Julio Pérez")
                .and(contains("Técnico"))
                .and(contains("Noche")),
        );
}

#[test]
fn test_shift_merge_overwrites_same_date_and_period() {
    let store = setup_test_store("shift_merge");
    init_store(&store);

    mlog()
        .args([
            "--store", &store, "shifts", "--date", "2024-12-17", "--name", "Julio Pérez",
            "--shift-type", "noche",
        ])
        .assert()
        .success();

    mlog()
        .args([
            "--store", &store, "shifts", "--date", "2024-12-17", "--name", "Eduardo Leal",
            "--shift-type", "noche",
        ])
        .assert()
        .success()
        .stdout(contains("1 assignments stored"));

    mlog()
        .args(["--store", &store, "shifts", "--list"])
        .assert()
        .success()
        .stdout(contains("Eduardo Leal").and(contains("Julio Pérez").not()));
}

#[test]
fn test_shift_different_period_appends() {
    let store = setup_test_store("shift_append");
    init_store(&store);

    mlog()
        .args([
            "--store", &store, "shifts", "--date", "2024-12-17", "--name", "Julio Pérez",
            "--shift-type", "noche",
        ])
        .assert()
        .success();

    mlog()
        .args([
            "--store", &store, "shifts", "--date", "2024-12-17", "--name", "Julio Pérez",
            "--shift-type", "dia",
        ])
        .assert()
        .success()
        .stdout(contains("2 assignments stored"));
}

#[test]
fn test_shifts_now_with_empty_schedule() {
    let store = setup_test_store("shift_now_empty");
    init_store(&store);

    mlog()
        .args(["--store", &store, "shifts", "--now"])
        .assert()
        .success()
        .stdout(contains("Turno"));
}

#[test]
fn test_shift_load_without_credential_extracts_nothing() {
    let store = setup_test_store("shift_load_no_key");
    init_store(&store);

    // schedule file exists but there is no API key: the extraction must
    // short-circuit before any network call and yield an empty result
    let schedule = std::env::temp_dir().join("shift_load_no_key.jpg");
    std::fs::write(&schedule, b"not really a jpeg").unwrap();

    mlog()
        .env_remove("GEMINI_API_KEY")
        .args([
            "--store",
            &store,
            "shifts",
            "--load",
            schedule.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("No se detectaron turnos"));

    mlog()
        .args(["--store", &store, "shifts", "--list"])
        .assert()
        .success()
        .stdout(contains("No shift assignments stored"));
}
