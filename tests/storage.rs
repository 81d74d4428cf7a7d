#![forbid(unsafe_code)]
use rotaday::{LanguagePack, RotaError, Roster, Storage, TextRosterStorage};
use std::fs;
use tempfile::tempdir;

fn fallback() -> Roster {
    LanguagePack::english().default_roster()
}

#[test]
fn missing_file_falls_back_to_default_copy() {
    let dir = tempdir().unwrap();
    let storage = TextRosterStorage::open(dir.path().join("names.txt"), fallback());

    let mut loaded = storage.load().unwrap();
    assert_eq!(loaded, fallback());

    loaded.set(1, "Changed").unwrap();
    assert_eq!(storage.load().unwrap().get(1), Some("Nathan"));
}

#[test]
fn load_then_save_is_byte_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.txt");
    let content: String = (1..=30).map(|i| format!("Person {i}\n")).collect();
    fs::write(&path, &content).unwrap();

    let storage = TextRosterStorage::open(&path, fallback());
    let roster = storage.load().unwrap();
    storage.save(&roster).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn load_trims_and_drops_blank_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.txt");
    let mut content = String::from("\n  \n");
    for i in 1..=30 {
        content.push_str(&format!("  N{i}\t\r\n"));
    }
    fs::write(&path, content).unwrap();

    let roster = TextRosterStorage::open(&path, fallback()).load().unwrap();
    assert_eq!(roster.get(1), Some("N1"));
    assert_eq!(roster.get(30), Some("N30"));
}

#[test]
fn utf8_names_survive_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("names.txt");
    let storage = TextRosterStorage::open(&path, fallback());

    let arabic = LanguagePack::arabic().default_roster();
    storage.save(&arabic).unwrap();
    assert_eq!(storage.load().unwrap(), arabic);
}

#[test]
fn short_file_reports_roster_size() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "a\nb\nc\n").unwrap();

    let err = TextRosterStorage::open(&path, fallback()).load().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RotaError>(),
        Some(RotaError::InvalidRosterSize { len: 3 })
    ));
}
