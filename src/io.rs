use crate::batch::Artifact;
use crate::config::ArtifactFormat;
use crate::layout::TableDescription;
use anyhow::Context;
use csv::WriterBuilder;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Écrit une [`TableDescription`] dans un fichier. Le format paginé final
/// (PDF, etc.) vit hors de cette bibliothèque ; JSON et CSV sont fournis.
pub trait ArtifactWriter {
    fn extension(&self) -> &'static str;
    fn write(&self, table: &TableDescription, path: &Path) -> anyhow::Result<()>;
}

/// Description complète (couleurs, largeurs, styles) en JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonArtifactWriter;

impl ArtifactWriter for JsonArtifactWriter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write(&self, table: &TableDescription, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(table)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// Texte seul, une ligne CSV par ligne visuelle : titre, en-têtes, 15 lignes.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvArtifactWriter;

impl ArtifactWriter for CsvArtifactWriter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write(&self, table: &TableDescription, path: &Path) -> anyhow::Result<()> {
        let mut w = WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("writing {}", path.display()))?;
        w.write_record([table.title.text.as_str()])?;
        w.write_record(table.header.iter().map(|c| c.text.as_str()))?;
        for row in &table.rows {
            w.write_record(row.cells(table.direction).map(|c| c.text.as_str()))?;
        }
        w.flush()?;
        Ok(())
    }
}

pub fn writer_for(format: ArtifactFormat) -> Box<dyn ArtifactWriter> {
    match format {
        ArtifactFormat::Json => Box::new(JsonArtifactWriter),
        ArtifactFormat::Csv => Box::new(CsvArtifactWriter),
    }
}

/// Écrit chaque artefact sous `out_dir/<nom>.<ext>` ; crée le dossier au besoin.
pub fn write_batch<P: AsRef<Path>>(
    out_dir: P,
    artifacts: &[Artifact],
    writer: &dyn ArtifactWriter,
) -> anyhow::Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = out_dir.join(format!("{}.{}", artifact.name, writer.extension()));
        writer.write(&artifact.table, &path)?;
        #[cfg(feature = "logging")]
        tracing::debug!(date = %artifact.date, offset = artifact.offset, path = %path.display(), "artifact written");
        written.push(path);
    }
    Ok(written)
}

/// Rendu texte compact pour la console : `slot | nom` par paire, dans l'ordre visuel.
pub fn render_text(table: &TableDescription) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", table.title.text);
    for row in &table.rows {
        let [a, b, c, d] = row.cells(table.direction);
        let _ = writeln!(out, "{:>2} | {:<20} {:>2} | {}", a.text, b.text, c.text, d.text);
    }
    out
}
