use crate::error::RotaError;
use crate::layout::{TableDescription, TableLayoutBuilder};
use crate::model::{month_day, DateAnchor, DateRange, Roster, ROSTER_SIZE};
use crate::rotation;
use crate::scheme::ColorScheme;
use chrono::NaiveDate;

/// Nomme l'artefact d'une date (sans extension).
pub trait ArtifactNamer {
    fn name(&self, date: NaiveDate) -> String;
}

/// Nommage par défaut : `MM-DD`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonthDayNamer;

impl ArtifactNamer for MonthDayNamer {
    fn name(&self, date: NaiveDate) -> String {
        month_day(date)
    }
}

impl<F> ArtifactNamer for F
where
    F: Fn(NaiveDate) -> String,
{
    fn name(&self, date: NaiveDate) -> String {
        self(date)
    }
}

/// Tableau rendu pour une date.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub date: NaiveDate,
    pub offset: i64,
    pub name: String,
    pub table: TableDescription,
}

/// Génère un tableau par date de `range`, dans l'ordre chronologique.
///
/// La première erreur interrompt tout le lot.
pub fn generate<N: ArtifactNamer + ?Sized>(
    roster: &Roster,
    anchor: DateAnchor,
    range: DateRange,
    scheme: &ColorScheme,
    layout: &TableLayoutBuilder,
    namer: &N,
) -> Result<Vec<Artifact>, RotaError> {
    range
        .days()
        .map(|date| render_day(roster, anchor, date, scheme, layout, namer))
        .collect()
}

/// Rendu d'une seule date (aperçu).
pub fn render_day<N: ArtifactNamer + ?Sized>(
    roster: &Roster,
    anchor: DateAnchor,
    date: NaiveDate,
    scheme: &ColorScheme,
    layout: &TableLayoutBuilder,
    namer: &N,
) -> Result<Artifact, RotaError> {
    let offset = rotation::days_since(anchor, date);
    let assignment = rotation::rotate_left(roster.names(), offset)?;
    let table = layout.build(assignment.names(), date, scheme)?;
    Ok(Artifact {
        date,
        offset,
        name: namer.name(date),
        table,
    })
}

/// Retrouve le roster canonique (jour 0) à partir d'une liste décalée de `offset`.
pub fn canonical_from_rotated<S: AsRef<str>>(
    edited: &[S],
    offset: i64,
) -> Result<Roster, RotaError> {
    let inverse = (-offset).rem_euclid(ROSTER_SIZE as i64);
    let assignment = rotation::rotate_left(edited, inverse)?;
    Roster::new(assignment.into_names())
}

/// Remplace le nom affiché au créneau `slot` pour `date` et renvoie le roster canonique.
///
/// `date` doit être celle de la vue effectivement éditée.
pub fn edit_rotated_slot(
    roster: &Roster,
    anchor: DateAnchor,
    date: NaiveDate,
    slot: usize,
    name: &str,
) -> Result<Roster, RotaError> {
    let offset = rotation::days_since(anchor, date);
    let mut view = Roster::new(rotation::rotate_left(roster.names(), offset)?.into_names())?;
    view.set(slot, name)?;
    canonical_from_rotated(view.names(), offset)
}
