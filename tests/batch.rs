#![forbid(unsafe_code)]
use chrono::NaiveDate;
use rotaday::{
    canonical_from_rotated, edit_rotated_slot, generate, rotate_left, ColorScheme, DateAnchor,
    DateRange, MonthDayNamer, RotaError, Roster, TableLayoutBuilder,
};

fn roster() -> Roster {
    Roster::new((1..=30).map(|i| format!("N{i}"))).unwrap()
}

fn anchor() -> DateAnchor {
    DateAnchor::new(NaiveDate::from_ymd_opt(2025, 8, 16).unwrap())
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn three_day_range_yields_three_consecutive_offsets() {
    let scheme = ColorScheme::default();
    let range = DateRange::new(d(2025, 8, 20), d(2025, 8, 22)).unwrap();
    let artifacts = generate(
        &roster(),
        anchor(),
        range,
        &scheme,
        &TableLayoutBuilder::default(),
        &MonthDayNamer,
    )
    .unwrap();

    assert_eq!(artifacts.len(), 3);
    let offsets: Vec<i64> = artifacts.iter().map(|a| a.offset).collect();
    assert_eq!(offsets, vec![4, 5, 6]);
    let names: Vec<&str> = artifacts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["08-20", "08-21", "08-22"]);
    for a in &artifacts {
        assert_eq!(a.table.border, scheme.border);
        assert_eq!(a.table.rows[0].left.number.style.fill, Some(scheme.row_background_a));
    }
    assert_eq!(artifacts[0].table.rows[0].left.name.text, "N5");
    assert_eq!(artifacts[2].table.rows[0].left.name.text, "N7");
}

#[test]
fn dates_before_anchor_render_day_zero() {
    let range = DateRange::new(d(2025, 8, 1), d(2025, 8, 2)).unwrap();
    let artifacts = generate(
        &roster(),
        anchor(),
        range,
        &ColorScheme::default(),
        &TableLayoutBuilder::default(),
        &MonthDayNamer,
    )
    .unwrap();
    assert!(artifacts.iter().all(|a| a.offset == 0));
    assert_eq!(artifacts[1].table.rows[0].left.name.text, "N1");
}

#[test]
fn custom_namer_is_used() {
    let range = DateRange::single(d(2025, 12, 31));
    let namer = |date: NaiveDate| format!("day-{}", date.format("%Y%m%d"));
    let artifacts = generate(
        &roster(),
        anchor(),
        range,
        &ColorScheme::default(),
        &TableLayoutBuilder::default(),
        &namer,
    )
    .unwrap();
    assert_eq!(artifacts[0].name, "day-20251231");
}

#[test]
fn reversed_range_is_rejected() {
    let err = DateRange::new(d(2025, 8, 22), d(2025, 8, 20)).unwrap_err();
    assert!(matches!(err, RotaError::InvalidDateRange { .. }));
    assert!(matches!(
        DateRange::parse("2025/08/22", "2025/08/20"),
        Err(RotaError::InvalidDateRange { .. })
    ));
    assert!(matches!(
        DateRange::parse("yesterday", "2025/08/20"),
        Err(RotaError::MalformedDate(_))
    ));
}

#[test]
fn canonical_roster_recovered_from_rotated_view() {
    let original = roster();
    for n in [0i64, 1, 7, 29, 30, 61] {
        let view = rotate_left(original.names(), n).unwrap();
        let recovered = canonical_from_rotated(view.names(), n).unwrap();
        assert_eq!(recovered, original, "n = {n}");
    }
}

#[test]
fn editing_a_preview_slot_updates_canonical_position() {
    // jour 3 : le créneau 1 affiche N4
    let updated = edit_rotated_slot(&roster(), anchor(), d(2025, 8, 19), 1, "Zed").unwrap();
    assert_eq!(updated.get(4), Some("Zed"));
    assert_eq!(updated.get(1), Some("N1"));

    let view = rotate_left(updated.names(), 3).unwrap();
    assert_eq!(view.names()[0], "Zed");
}

#[test]
fn editing_rejects_blank_names_and_bad_slots() {
    let date = d(2025, 8, 19);
    assert!(matches!(
        edit_rotated_slot(&roster(), anchor(), date, 2, "  "),
        Err(RotaError::EmptyName { slot: 2 })
    ));
    assert!(matches!(
        edit_rotated_slot(&roster(), anchor(), date, 31, "x"),
        Err(RotaError::InvalidSlot(31))
    ));
}
