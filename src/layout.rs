//! Construction de la description abstraite du tableau journalier.
//!
//! Le tableau comporte un titre (date + jour), une ligne d'en-têtes et 15
//! lignes de corps. Chaque ligne porte une paire gauche (créneaux 1–15) et une
//! paire droite (16–30). Les numéros sont fixes ; seuls les noms tournent.
//! L'écriture du fichier relève d'un [`ArtifactWriter`](crate::io::ArtifactWriter).

use crate::error::RotaError;
use crate::language::{DayNameResolver, IdentityShaper, LanguagePack, TextDirection, TextShaper};
use crate::model::{HALF, ROSTER_SIZE};
use crate::scheme::{ColorScheme, Rgb};
use chrono::NaiveDate;
use serde::Serialize;

/// Dimensions en unités du document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    pub number_col_width: f32,
    pub name_col_width: f32,
    pub row_height: f32,
    pub title_height: f32,
    pub margin: f32,
    pub line_width: f32,
    pub title_font_size: u8,
    pub header_font_size: u8,
    pub body_font_size: u8,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            number_col_width: 20.0,
            name_col_width: 75.0,
            row_height: 15.0,
            title_height: 15.0,
            margin: 5.0,
            line_width: 1.2,
            title_font_size: 38,
            header_font_size: 16,
            body_font_size: 28,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Title,
    Header,
    Number,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellStyle {
    /// `None` : pas de remplissage.
    pub fill: Option<Rgb>,
    pub text: Rgb,
    pub font_size: u8,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub kind: CellKind,
    pub text: String,
    /// Largeur ; `None` pour une cellule pleine largeur.
    pub width: Option<f32>,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotPair {
    pub slot: usize,
    pub number: Cell,
    pub name: Cell,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyRow {
    pub index: usize,
    pub left: SlotPair,
    pub right: SlotPair,
}

impl BodyRow {
    /// Cellules dans l'ordre de rendu visuel.
    pub fn cells(&self, direction: TextDirection) -> [&Cell; 4] {
        let (first, second) = match direction {
            TextDirection::Ltr => (&self.left, &self.right),
            TextDirection::Rtl => (&self.right, &self.left),
        };
        [&first.number, &first.name, &second.number, &second.name]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDescription {
    pub date: NaiveDate,
    pub title: Cell,
    pub header: [Cell; 4],
    pub rows: Vec<BodyRow>,
    pub border: Rgb,
    pub direction: TextDirection,
    pub geometry: Geometry,
}

impl TableDescription {
    /// Noms dans l'ordre des créneaux 1..=30.
    pub fn slot_names(&self) -> Vec<&str> {
        let left = self.rows.iter().map(|r| r.left.name.text.as_str());
        let right = self.rows.iter().map(|r| r.right.name.text.as_str());
        left.chain(right).collect()
    }
}

/// Construit des [`TableDescription`] à partir d'une affectation.
pub struct TableLayoutBuilder {
    headers: [String; 4],
    day_names: Box<dyn DayNameResolver>,
    shaper: Box<dyn TextShaper>,
    direction: TextDirection,
    geometry: Geometry,
}

impl Default for TableLayoutBuilder {
    fn default() -> Self {
        Self::from_pack(&LanguagePack::english())
    }
}

impl TableLayoutBuilder {
    pub fn from_pack(pack: &LanguagePack) -> Self {
        Self {
            headers: pack.headers.clone(),
            day_names: Box::new(pack.day_names.clone()),
            shaper: Box::new(IdentityShaper),
            direction: pack.direction,
            geometry: Geometry::default(),
        }
    }

    pub fn with_shaper<T: TextShaper + 'static>(mut self, shaper: T) -> Self {
        self.shaper = Box::new(shaper);
        self
    }

    pub fn with_day_names<R: DayNameResolver + 'static>(mut self, resolver: R) -> Self {
        self.day_names = Box::new(resolver);
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Texte du titre : `YYYY/MM/DD <jour>`, avant mise en forme.
    pub fn title_text(&self, date: NaiveDate) -> String {
        let canonical = date.format("%A").to_string();
        format!("{} {}", date.format("%Y/%m/%d"), self.day_names.resolve(&canonical))
    }

    pub fn build<S: AsRef<str>>(
        &self,
        assignment: &[S],
        date: NaiveDate,
        scheme: &ColorScheme,
    ) -> Result<TableDescription, RotaError> {
        if assignment.len() != ROSTER_SIZE {
            return Err(RotaError::InvalidAssignmentSize { len: assignment.len() });
        }
        let g = &self.geometry;

        let title = Cell {
            kind: CellKind::Title,
            text: self.shaper.shape(&self.title_text(date)),
            width: None,
            style: CellStyle {
                fill: None,
                text: Rgb::BLACK,
                font_size: g.title_font_size,
                bold: true,
            },
        };

        let header_style = CellStyle {
            fill: Some(scheme.header_fill),
            text: scheme.header_text,
            font_size: g.header_font_size,
            bold: true,
        };
        let header = std::array::from_fn(|i| Cell {
            kind: CellKind::Header,
            text: self.shaper.shape(&self.headers[i]),
            // colonnes paires : numéros, impaires : noms
            width: Some(if i % 2 == 0 { g.number_col_width } else { g.name_col_width }),
            style: header_style,
        });

        let (left_names, right_names) = assignment.split_at(HALF);
        let rows = left_names
            .iter()
            .zip(right_names)
            .enumerate()
            .map(|(i, (left, right))| BodyRow {
                index: i,
                left: self.pair(i + 1, left.as_ref(), i, scheme),
                right: self.pair(i + 1 + HALF, right.as_ref(), i, scheme),
            })
            .collect();

        Ok(TableDescription {
            date,
            title,
            header,
            rows,
            border: scheme.border,
            direction: self.direction,
            geometry: *g,
        })
    }

    fn pair(&self, slot: usize, name: &str, row: usize, scheme: &ColorScheme) -> SlotPair {
        let g = &self.geometry;
        let mut label = itoa::Buffer::new();
        SlotPair {
            slot,
            number: Cell {
                kind: CellKind::Number,
                text: label.format(slot).to_string(),
                width: Some(g.number_col_width),
                style: CellStyle {
                    fill: Some(scheme.row_background(row)),
                    text: scheme.number_text,
                    font_size: g.body_font_size,
                    bold: true,
                },
            },
            name: Cell {
                kind: CellKind::Name,
                text: self.shaper.shape(name),
                width: Some(g.name_col_width),
                style: CellStyle {
                    fill: Some(scheme.name_cell_background),
                    text: scheme.name_text,
                    font_size: g.body_font_size,
                    bold: true,
                },
            },
        }
    }
}

impl From<&LanguagePack> for TableLayoutBuilder {
    fn from(pack: &LanguagePack) -> Self {
        Self::from_pack(pack)
    }
}
