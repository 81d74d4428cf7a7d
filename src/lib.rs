#![forbid(unsafe_code)]
//! Rotaday — rotation quotidienne de 30 participants sur 30 créneaux numérotés.
//!
//! - Roster persisté en texte (un nom par ligne), roster par défaut sinon.
//! - Rotation circulaire pure, fonction de `(roster, ancre, date)`.
//! - Description abstraite du tableau du jour (cellules, couleurs, largeurs).
//! - Génération par lot sur un intervalle de dates ; l'écriture finale est déléguée.

pub mod batch;
pub mod config;
pub mod error;
pub mod io;
pub mod language;
pub mod layout;
pub mod model;
pub mod rotation;
pub mod scheme;
pub mod storage;

pub use batch::{
    canonical_from_rotated, edit_rotated_slot, generate, render_day, Artifact, ArtifactNamer,
    MonthDayNamer,
};
pub use config::{ArtifactFormat, Settings};
pub use error::RotaError;
pub use io::{write_batch, ArtifactWriter, CsvArtifactWriter, JsonArtifactWriter};
pub use language::{
    DayNameMap, DayNameResolver, IdentityShaper, Language, LanguagePack, TextDirection, TextShaper,
};
pub use layout::{BodyRow, Cell, CellKind, CellStyle, Geometry, SlotPair, TableDescription, TableLayoutBuilder};
pub use model::{parse_date, Assignment, DateAnchor, DateRange, Roster, HALF, ROSTER_SIZE};
pub use rotation::{assignment_for, days_since, rotate_left};
pub use scheme::{ColorRole, ColorScheme, Rgb};
pub use storage::{Storage, TextRosterStorage};
