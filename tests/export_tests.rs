use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_record, init_store, init_store_with_data, mlog, setup_test_store, temp_out};

#[test]
fn test_export_csv_has_bom_and_spanish_header() {
    let store = setup_test_store("export_csv_header");
    init_store_with_data(&store);

    let out = temp_out("export_csv_header", "csv");

    mlog()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--month", "2024-03",
            "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported csv");
    assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF], "missing UTF-8 BOM");

    let content = String::from_utf8_lossy(&bytes[3..]).to_string();
    assert!(content.starts_with("Fecha,Hora,Ubicación,Tipo,Equipo,Técnico,Notas"));
    assert!(content.contains("2024-03-05"));
    assert!(content.contains("Escalera Mecánica"));
}

#[test]
fn test_export_csv_quoting_round_trips() {
    let store = setup_test_store("export_csv_quotes");
    init_store(&store);

    let notes = r#"Cambio "urgente", revisar mañana"#;
    add_record(
        &store,
        &[
            "2024-03-05",
            "--tech",
            "X",
            "--location",
            "Marina",
            "--type",
            "asc",
            "--equipment",
            "1, 2",
            "--notes",
            notes,
        ],
    );

    let out = temp_out("export_csv_quotes", "csv");
    mlog()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--month", "2024-03",
            "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported csv");
    let mut rdr = csv::Reader::from_reader(&bytes[3..]);

    let headers = rdr.headers().expect("headers").clone();
    let notas_idx = headers.iter().position(|h| h == "Notas").expect("Notas column");
    let equipo_idx = headers.iter().position(|h| h == "Equipo").expect("Equipo column");

    let row = rdr.records().next().expect("one data row").expect("parse row");
    assert_eq!(&row[notas_idx], notes);
    assert_eq!(&row[equipo_idx], "1, 2");
}

#[test]
fn test_export_csv_default_filename_pattern() {
    let store = setup_test_store("export_csv_default_name");
    init_store_with_data(&store);

    let dir = std::env::temp_dir().join("mantlog_export_default");
    fs::create_dir_all(&dir).unwrap();
    fs::remove_file(dir.join("mantenciones_2024-03.csv")).ok();

    mlog()
        .current_dir(&dir)
        .args(["--store", &store, "export", "--format", "csv", "--month", "2024-03", "--force"])
        .assert()
        .success()
        .stdout(contains("mantenciones_2024-03.csv"));

    assert!(dir.join("mantenciones_2024-03.csv").exists());
}

#[test]
fn test_export_json_contains_rows() {
    let store = setup_test_store("export_json");
    init_store_with_data(&store);

    let out = temp_out("export_json", "json");
    mlog()
        .args([
            "--store", &store, "export", "--format", "json", "--file", &out, "--month", "2024-03",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"Fecha\": \"2024-03-05\""));
    assert!(content.contains("José Krause"));
}

#[test]
fn test_export_pdf_produces_a_pdf_file() {
    let store = setup_test_store("export_pdf");
    init_store_with_data(&store);

    let out = temp_out("export_pdf", "pdf");
    mlog()
        .args([
            "--store", &store, "export", "--format", "pdf", "--file", &out, "--month", "2024-03",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[test]
fn test_export_respects_location_filter() {
    let store = setup_test_store("export_filtered");
    init_store_with_data(&store);

    let out = temp_out("export_filtered", "csv");
    mlog()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--month", "2024-03",
            "--location", "Ama", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Diego Vargas"));
    assert!(!content.contains("José Krause"));
}

#[test]
fn test_export_with_no_records_writes_nothing() {
    let store = setup_test_store("export_empty");
    init_store(&store);

    let out = temp_out("export_empty", "csv");
    mlog()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--month", "2031-01",
        ])
        .assert()
        .success()
        .stdout(contains("No hay registros para exportar").and(contains("completed").not()));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rows_are_time_sorted() {
    let store = setup_test_store("export_sorted");
    init_store(&store);

    // inserted out of order on purpose
    add_record(
        &store,
        &[
            "2024-03-20", "--tech", "B", "--time", "09:00", "--location", "Marina", "--type",
            "asc", "--equipment", "2",
        ],
    );
    add_record(
        &store,
        &[
            "2024-03-04", "--tech", "A", "--time", "17:00", "--location", "Marina", "--type",
            "asc", "--equipment", "1",
        ],
    );

    let out = temp_out("export_sorted", "csv");
    mlog()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--month", "2024-03",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let first_hit = content.find("2024-03-04").expect("early record");
    let second_hit = content.find("2024-03-20").expect("late record");
    assert!(first_hit < second_hit);
}
