#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use rotaday::{
    batch::{self, MonthDayNamer},
    config::{ArtifactFormat, Settings},
    io,
    layout::TableLayoutBuilder,
    model::{parse_date, DateRange},
    rotation,
    storage::{Storage, TextRosterStorage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de rotation quotidienne (30 noms, 30 créneaux)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier texte du roster (un nom par ligne)
    #[arg(long, global = true, default_value = "names.txt")]
    roster: String,

    /// Fichier JSON de réglages
    #[arg(long, global = true, default_value = "rotaday.json")]
    config: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Csv,
}

impl From<Format> for ArtifactFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => ArtifactFormat::Json,
            Format::Csv => ArtifactFormat::Csv,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher la rotation d'une date
    Preview {
        /// YYYY/MM/DD (défaut : aujourd'hui)
        #[arg(long)]
        date: Option<String>,
    },

    /// Générer un artefact par date de l'intervalle
    Generate {
        /// YYYY/MM/DD
        #[arg(long)]
        start: String,
        /// YYYY/MM/DD
        #[arg(long)]
        end: String,
        /// Dossier de sortie (créé si absent)
        #[arg(long)]
        out: Option<String>,
        #[arg(long, value_enum)]
        format: Option<Format>,
    },

    /// Modifier le nom affiché à un créneau pour une date, puis sauvegarder le roster
    Edit {
        /// Date de la vue éditée (YYYY/MM/DD)
        #[arg(long)]
        date: String,
        /// Créneau 1..=30
        #[arg(long)]
        slot: usize,
        #[arg(long)]
        name: String,
    },

    /// Lister le roster canonique (jour 0)
    Roster {
        /// Réécrit le roster par défaut de la langue configurée
        #[arg(long)]
        reset: bool,
    },

    /// Afficher ou modifier le thème de couleurs
    Scheme {
        /// `role=#rrggbb`, répétable
        #[arg(long)]
        set: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut settings = Settings::load_or_default(&cli.config)?;
    let pack = settings.language_pack();
    let storage = TextRosterStorage::open(&cli.roster, pack.default_roster());
    let layout = TableLayoutBuilder::from_pack(&pack);

    match cli.cmd {
        Commands::Preview { date } => {
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => today(),
            };
            let roster = storage.load()?;
            let artifact = batch::render_day(
                &roster,
                settings.anchor,
                date,
                &settings.scheme,
                &layout,
                &MonthDayNamer,
            )?;
            println!("Preview for {} (Day {}):", date.format("%Y/%m/%d"), artifact.offset);
            print!("{}", io::render_text(&artifact.table));
        }
        Commands::Generate {
            start,
            end,
            out,
            format,
        } => {
            let range = DateRange::parse(&start, &end)?;
            let roster = storage.load()?;
            let artifacts = batch::generate(
                &roster,
                settings.anchor,
                range,
                &settings.scheme,
                &layout,
                &MonthDayNamer,
            )?;
            let out_dir = out.map(Into::into).unwrap_or_else(|| settings.output_dir.clone());
            let format = format.map(ArtifactFormat::from).unwrap_or(settings.artifact_format);
            let writer = io::writer_for(format);
            let written = io::write_batch(&out_dir, &artifacts, writer.as_ref())?;
            println!("Generated {} file(s) in {}", written.len(), out_dir.display());
        }
        Commands::Edit { date, slot, name } => {
            let date = parse_date(&date)?;
            let roster = storage.load()?;
            let updated = batch::edit_rotated_slot(&roster, settings.anchor, date, slot, &name)?;
            storage.save(&updated)?;
            let offset = rotation::days_since(settings.anchor, date);
            println!("Slot {slot} on {} (Day {offset}) is now {}", date.format("%Y/%m/%d"), name.trim());
        }
        Commands::Roster { reset } => {
            let roster = if reset {
                let fresh = pack.default_roster();
                storage.save(&fresh)?;
                fresh
            } else {
                storage.load()?
            };
            for (idx, name) in roster.names().iter().enumerate() {
                println!("{:>2} {}", idx + 1, name);
            }
        }
        Commands::Scheme { set } => {
            if !set.is_empty() {
                for spec in &set {
                    settings.scheme.apply_assignment(spec)?;
                }
                settings.save(&cli.config)?;
            }
            println!("{}", serde_json::to_string_pretty(&settings.scheme)?);
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
