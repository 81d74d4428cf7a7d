use crate::error::RotaError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nombre de participants et de créneaux.
pub const ROSTER_SIZE: usize = 30;
/// Taille d'une moitié de tableau (colonnes 1–15 et 16–30).
pub const HALF: usize = ROSTER_SIZE / 2;

/// Formats de date acceptés en entrée, dans l'ordre d'essai.
const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Parse une date fournie par un appelant externe (`YYYY/MM/DD` ou `YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Result<NaiveDate, RotaError> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| RotaError::MalformedDate(raw.to_string()))
}

/// Roster canonique (jour 0) : exactement 30 noms non vides, ordonnés.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Valide la taille et le contenu ; les noms sont rognés.
    pub fn new<I, S>(names: I) -> Result<Self, RotaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .collect();
        if names.len() != ROSTER_SIZE {
            return Err(RotaError::InvalidRosterSize { len: names.len() });
        }
        if let Some(idx) = names.iter().position(|n| n.is_empty()) {
            return Err(RotaError::EmptyName { slot: idx + 1 });
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Nom au créneau `slot` (1-based).
    pub fn get(&self, slot: usize) -> Option<&str> {
        slot.checked_sub(1)
            .and_then(|idx| self.names.get(idx))
            .map(String::as_str)
    }

    /// Remplace le nom du créneau `slot` (1-based).
    pub fn set(&mut self, slot: usize, name: &str) -> Result<(), RotaError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RotaError::EmptyName { slot });
        }
        let entry = slot
            .checked_sub(1)
            .and_then(|idx| self.names.get_mut(idx))
            .ok_or(RotaError::InvalidSlot(slot))?;
        *entry = name.to_string();
        Ok(())
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = RotaError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Roster::new(names)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.names
    }
}

/// Date du jour 0 de la rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateAnchor(NaiveDate);

impl DateAnchor {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Default for DateAnchor {
    fn default() -> Self {
        Self(NaiveDate::from_ymd_opt(2025, 8, 16).expect("2025-08-16 is a valid date"))
    }
}

impl fmt::Display for DateAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Intervalle de dates inclusif, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RotaError> {
        if start > end {
            return Err(RotaError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Construit l'intervalle depuis deux chaînes saisies par l'utilisateur.
    pub fn parse(start: &str, end: &str) -> Result<Self, RotaError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Nombre de jours couverts (bornes incluses).
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Chaque date de l'intervalle, par pas d'un jour.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Roster décalé pour une date donnée ; toujours une permutation du roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    shift: usize,
    names: Vec<String>,
}

impl Assignment {
    pub(crate) fn new(shift: usize, names: Vec<String>) -> Self {
        Self { shift, names }
    }

    /// Décalage effectif appliqué (`n mod 30`).
    pub fn shift(&self) -> usize {
        self.shift
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Noms des créneaux 1–15.
    pub fn left_half(&self) -> &[String] {
        &self.names[..HALF.min(self.names.len())]
    }

    /// Noms des créneaux 16–30.
    pub fn right_half(&self) -> &[String] {
        &self.names[HALF.min(self.names.len())..]
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl AsRef<[String]> for Assignment {
    fn as_ref(&self) -> &[String] {
        &self.names
    }
}

/// Libellé `MM-DD` d'une date, utilisé pour nommer les artefacts.
pub fn month_day(date: NaiveDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}
