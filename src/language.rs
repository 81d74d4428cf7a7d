//! Variante de langue choisie au démarrage : en-têtes, roster par défaut,
//! noms des jours, sens de lecture. Aucun état global.

use crate::model::{Roster, ROSTER_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

/// Ordre visuel des paires de colonnes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Traduit le nom canonique d'un jour (`Monday`..`Sunday`) en texte affiché.
pub trait DayNameResolver {
    fn resolve(&self, canonical: &str) -> String;
}

/// Table de traduction ; les jours absents passent tels quels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayNameMap {
    overrides: HashMap<String, String>,
}

impl DayNameMap {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn with<K: Into<String>, V: Into<String>>(mut self, canonical: K, display: V) -> Self {
        self.overrides.insert(canonical.into(), display.into());
        self
    }
}

impl DayNameResolver for DayNameMap {
    fn resolve(&self, canonical: &str) -> String {
        self.overrides
            .get(canonical)
            .cloned()
            .unwrap_or_else(|| canonical.to_string())
    }
}

/// Mise en forme du texte avant rendu (ex. réécriture d'écritures droite-à-gauche).
pub trait TextShaper {
    fn shape(&self, text: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityShaper;

impl TextShaper for IdentityShaper {
    fn shape(&self, text: &str) -> String {
        text.to_string()
    }
}

impl<F> TextShaper for F
where
    F: Fn(&str) -> String,
{
    fn shape(&self, text: &str) -> String {
        self(text)
    }
}

/// Contenu propre à une langue.
#[derive(Debug, Clone)]
pub struct LanguagePack {
    pub language: Language,
    pub headers: [String; 4],
    pub default_roster: [&'static str; ROSTER_SIZE],
    pub day_names: DayNameMap,
    pub direction: TextDirection,
}

const ENGLISH_NAMES: [&str; ROSTER_SIZE] = [
    "Nathan", "Michael", "Taylor", "Jessica", "Alex", "Sarah", "David", "Emily", "James",
    "Olivia", "Sarah", "David", "Michael", "Andrew", "Henry", "Bella", "Rachel", "Samuel",
    "Oliver", "Mia", "Riley", "Isaac", "Noah James", "Sophia", "Russell", "Nora", "Susan",
    "Noah Andrew", "Amy", "Oscar",
];

const ARABIC_NAMES: [&str; ROSTER_SIZE] = [
    "عبدالله", "فاطمة", "أحمد", "مريم", "عمر", "زينب", "خالد", "نور", "يوسف", "سارة",
    "إبراهيم", "عائشة", "محمود", "ليلى", "حسن", "رقية", "علي", "سمية", "مصطفى", "هدى",
    "بشرى", "سلمى", "عبدالرحمن", "أسماء", "طارق", "نادية", "فيصل", "منى", "سعيد", "جميلة",
];

impl LanguagePack {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Arabic => Self::arabic(),
        }
    }

    pub fn english() -> Self {
        Self {
            language: Language::English,
            headers: ["Part #", "Name", "Part #", "Name"].map(String::from),
            default_roster: ENGLISH_NAMES,
            day_names: DayNameMap::identity(),
            direction: TextDirection::Ltr,
        }
    }

    pub fn arabic() -> Self {
        Self {
            language: Language::Arabic,
            headers: ["رقم الجزء", "الاسم", "رقم الجزء", "الاسم"].map(String::from),
            default_roster: ARABIC_NAMES,
            day_names: DayNameMap::identity()
                .with("Monday", "الاثنين")
                .with("Tuesday", "الثلاثاء")
                .with("Wednesday", "الأربعاء")
                .with("Thursday", "الخميس")
                .with("Friday", "الجمعة")
                .with("Saturday", "السبت")
                .with("Sunday", "الأحد"),
            direction: TextDirection::Rtl,
        }
    }

    /// Copie fraîche du roster par défaut.
    pub fn default_roster(&self) -> Roster {
        Roster::new(self.default_roster)
            .expect("built-in default rosters hold 30 non-empty names")
    }
}
