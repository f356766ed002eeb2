use std::io::Write;
use tempfile::TempDir;
use workitem_status::utils::loader::load_mvas;
use workitem_status::AppError;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn loads_identifiers_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "mvas.csv", "A100\nA101\nA102\n");

    let mvas = load_mvas(&path).unwrap();
    let ids: Vec<&str> = mvas.iter().map(|m| m.as_str()).collect();
    assert_eq!(ids, vec!["A100", "A101", "A102"]);
}

#[test]
fn trims_whitespace_and_drops_empty_records() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "mvas.csv", "  A100 \n\nA101\n   \n");

    let mvas = load_mvas(&path).unwrap();
    let ids: Vec<&str> = mvas.iter().map(|m| m.as_str()).collect();
    assert_eq!(ids, vec!["A100", "A101"]);
}

#[test]
fn takes_first_field_of_multi_column_records() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "mvas.csv", "A100,fleet-7\nA101,fleet-9\n");

    let mvas = load_mvas(&path).unwrap();
    let ids: Vec<&str> = mvas.iter().map(|m| m.as_str()).collect();
    assert_eq!(ids, vec!["A100", "A101"]);
}

#[test]
fn duplicates_are_preserved() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "mvas.csv", "A100\nA100\n");

    let mvas = load_mvas(&path).unwrap();
    assert_eq!(mvas.len(), 2);
}

#[test]
fn missing_file_is_the_fatal_startup_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.csv");

    let err = load_mvas(&path).unwrap_err();
    assert!(matches!(err, AppError::InputFileMissing { .. }));
}
