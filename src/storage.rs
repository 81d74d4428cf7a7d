use crate::model::Roster;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge le roster ; retombe sur le roster par défaut si rien n'est persisté.
    fn load(&self) -> anyhow::Result<Roster>;
    /// Sauvegarde de manière atomique (remplacement du fichier entier).
    fn save(&self, roster: &Roster) -> anyhow::Result<()>;
}

/// Fichier texte UTF-8, un nom par ligne, sans en-tête.
pub struct TextRosterStorage {
    path: PathBuf,
    fallback: Roster,
}

impl TextRosterStorage {
    pub fn open<P: AsRef<Path>>(path: P, fallback: Roster) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            fallback,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Lignes rognées, lignes vides ignorées.
pub fn parse_names(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

/// Un nom par ligne, chaque ligne terminée par `\n`.
pub fn render_names(roster: &Roster) -> String {
    roster.names().iter().fold(String::new(), |mut out, name| {
        out.push_str(name);
        out.push('\n');
        out
    })
}

impl Storage for TextRosterStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        if !self.path.exists() {
            #[cfg(feature = "logging")]
            tracing::info!(path = %self.path.display(), "no roster file, using default roster");
            return Ok(self.fallback.clone());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let roster = Roster::new(parse_names(&text))
            .with_context(|| format!("parsing roster {}", self.path.display()))?;
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(render_names(roster).as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        #[cfg(feature = "logging")]
        tracing::debug!(path = %self.path.display(), "roster saved");
        Ok(())
    }
}
