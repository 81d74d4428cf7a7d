use crate::language::{Language, LanguagePack};
use crate::model::DateAnchor;
use crate::scheme::ColorScheme;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    #[default]
    Json,
    Csv,
}

/// Réglages persistés (`rotaday.json`). Champs absents : valeurs par défaut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub anchor: DateAnchor,
    pub language: Language,
    pub output_dir: PathBuf,
    pub artifact_format: ArtifactFormat,
    pub scheme: ColorScheme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            anchor: DateAnchor::default(),
            language: Language::default(),
            output_dir: PathBuf::from("Parts"),
            artifact_format: ArtifactFormat::default(),
            scheme: ColorScheme::default(),
        }
    }
}

impl Settings {
    /// Lit le fichier s'il existe, sinon renvoie les réglages par défaut.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            #[cfg(feature = "logging")]
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = serde_json::from_slice(&data)
            .with_context(|| format!("parsing settings {}", path.display()))?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(self)?;
        let mut tmp = NamedTempFile::new_in(
            path.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new(".")),
        )
        .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.persist(path).with_context(|| "atomic rename")?;
        Ok(())
    }

    pub fn language_pack(&self) -> LanguagePack {
        LanguagePack::for_language(self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::Rgb;
    use chrono::NaiveDate;

    #[test]
    fn partial_settings_keep_defaults() {
        let json = r##"{"anchor": "2024-01-01", "scheme": {"header_fill": "#123456"}}"##;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.anchor.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(s.language, Language::English);
        assert_eq!(s.scheme.header_fill, Rgb(0x12, 0x34, 0x56));
        assert_eq!(s.scheme.border, ColorScheme::default().border);
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"language": "klingon"}"#).is_err());
    }
}
