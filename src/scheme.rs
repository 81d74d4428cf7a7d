use crate::error::RotaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Couleur RGB 8 bits, sérialisée en `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = RotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(RotaError::InvalidColor(raw.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| RotaError::InvalidColor(raw.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = RotaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Rôle sémantique d'une couleur du thème.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    HeaderFill,
    HeaderText,
    RowBackgroundA,
    RowBackgroundB,
    NameCellBackground,
    NameText,
    NumberText,
    Border,
}

impl ColorRole {
    pub const ALL: [ColorRole; 8] = [
        ColorRole::HeaderFill,
        ColorRole::HeaderText,
        ColorRole::RowBackgroundA,
        ColorRole::RowBackgroundB,
        ColorRole::NameCellBackground,
        ColorRole::NameText,
        ColorRole::NumberText,
        ColorRole::Border,
    ];

    /// Clé utilisée dans le fichier de configuration et la CLI.
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::HeaderFill => "header_fill",
            ColorRole::HeaderText => "header_text",
            ColorRole::RowBackgroundA => "row_background_a",
            ColorRole::RowBackgroundB => "row_background_b",
            ColorRole::NameCellBackground => "name_cell_background",
            ColorRole::NameText => "name_text",
            ColorRole::NumberText => "number_text",
            ColorRole::Border => "border",
        }
    }
}

impl FromStr for ColorRole {
    type Err = RotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        ColorRole::ALL
            .into_iter()
            .find(|role| role.key() == key)
            .ok_or_else(|| RotaError::UnknownColorRole(s.trim().to_string()))
    }
}

/// Thème visuel du document. Les rôles absents du fichier prennent la valeur par défaut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub header_fill: Rgb,
    pub header_text: Rgb,
    pub row_background_a: Rgb,
    pub row_background_b: Rgb,
    pub name_cell_background: Rgb,
    pub name_text: Rgb,
    pub number_text: Rgb,
    pub border: Rgb,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header_fill: Rgb::BLACK,
            header_text: Rgb::WHITE,
            row_background_a: Rgb(0xAB, 0xAB, 0xAB),
            row_background_b: Rgb::WHITE,
            name_cell_background: Rgb::BLACK,
            name_text: Rgb::WHITE,
            number_text: Rgb(0xFF, 0x00, 0x00),
            border: Rgb(0x00, 0xAF, 0x50),
        }
    }
}

impl ColorScheme {
    pub fn get(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::HeaderFill => self.header_fill,
            ColorRole::HeaderText => self.header_text,
            ColorRole::RowBackgroundA => self.row_background_a,
            ColorRole::RowBackgroundB => self.row_background_b,
            ColorRole::NameCellBackground => self.name_cell_background,
            ColorRole::NameText => self.name_text,
            ColorRole::NumberText => self.number_text,
            ColorRole::Border => self.border,
        }
    }

    pub fn set(&mut self, role: ColorRole, rgb: Rgb) {
        let slot = match role {
            ColorRole::HeaderFill => &mut self.header_fill,
            ColorRole::HeaderText => &mut self.header_text,
            ColorRole::RowBackgroundA => &mut self.row_background_a,
            ColorRole::RowBackgroundB => &mut self.row_background_b,
            ColorRole::NameCellBackground => &mut self.name_cell_background,
            ColorRole::NameText => &mut self.name_text,
            ColorRole::NumberText => &mut self.number_text,
            ColorRole::Border => &mut self.border,
        };
        *slot = rgb;
    }

    /// Applique une affectation `role=#rrggbb`.
    pub fn apply_assignment(&mut self, spec: &str) -> Result<(), RotaError> {
        let (role, color) = spec
            .split_once('=')
            .ok_or_else(|| RotaError::InvalidColor(spec.to_string()))?;
        let role: ColorRole = role.parse()?;
        self.set(role, color.parse()?);
        Ok(())
    }

    /// Fond de la cellule numéro pour la ligne `row` (0-based) : A si paire, B sinon.
    pub fn row_background(&self, row: usize) -> Rgb {
        if row % 2 == 0 {
            self.row_background_a
        } else {
            self.row_background_b
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_optional_hash_and_case() {
        assert_eq!("#00af50".parse::<Rgb>().unwrap(), Rgb(0, 0xAF, 0x50));
        assert_eq!("ABABAB".parse::<Rgb>().unwrap(), Rgb(0xAB, 0xAB, 0xAB));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#zz0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn missing_roles_fall_back_to_defaults() {
        let scheme: ColorScheme = serde_json::from_str(r##"{"border": "#112233"}"##).unwrap();
        assert_eq!(scheme.border, Rgb(0x11, 0x22, 0x33));
        assert_eq!(scheme.number_text, ColorScheme::default().number_text);
    }

    #[test]
    fn assignment_updates_role() {
        let mut scheme = ColorScheme::default();
        scheme.apply_assignment("row-background-b=#010203").unwrap();
        assert_eq!(scheme.get(ColorRole::RowBackgroundB), Rgb(1, 2, 3));
        assert!(matches!(
            scheme.apply_assignment("shadow=#000000"),
            Err(RotaError::UnknownColorRole(_))
        ));
    }
}
