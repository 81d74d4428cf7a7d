use chrono::NaiveDate;
use thiserror::Error;

/// Erreurs du cœur de rotation. Toutes sont déterministes (validation d'entrée).
#[derive(Error, Debug)]
pub enum RotaError {
    #[error("roster must hold exactly {expected} names, got {len}", expected = crate::model::ROSTER_SIZE)]
    InvalidRosterSize { len: usize },
    #[error("name at slot {slot} is empty")]
    EmptyName { slot: usize },
    #[error("assignment must hold exactly {expected} names, got {len}", expected = crate::model::ROSTER_SIZE)]
    InvalidAssignmentSize { len: usize },
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("malformed date: {0:?} (expected YYYY/MM/DD)")]
    MalformedDate(String),
    #[error("invalid color: {0:?} (expected #rrggbb)")]
    InvalidColor(String),
    #[error("unknown color role: {0}")]
    UnknownColorRole(String),
    #[error("slot out of range: {0} (expected 1..=30)")]
    InvalidSlot(usize),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
