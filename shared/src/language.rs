//! UI / plan language and device-locale resolution

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported application languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    It,
    Pl,
}

impl Language {
    /// All supported languages, default first
    pub const ALL: [Language; 3] = [Language::En, Language::It, Language::Pl];

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
            Language::Pl => "pl",
        }
    }

    /// Get a human-readable name in the language itself
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::It => "Italiano",
            Language::Pl => "Polski",
        }
    }

    /// Resolve a device locale tag such as `it-IT`, `pl_PL.UTF-8` or `en`.
    ///
    /// Only the non-default languages are matched explicitly; every other
    /// locale (including empty or malformed tags) resolves to English.
    pub fn from_locale(locale: &str) -> Self {
        let code = locale
            .split(|c: char| c == '-' || c == '_' || c == '.' || c == '@')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match code.as_str() {
            "it" => Language::It,
            "pl" => Language::Pl,
            _ => Language::En,
        }
    }

    /// The next language in the settings toggle order (en -> it -> pl -> en)
    pub fn next(&self) -> Self {
        match self {
            Language::En => Language::It,
            Language::It => Language::Pl,
            Language::Pl => Language::En,
        }
    }

    /// Localised weekday name, matching the day labels the plan generator emits
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        let names: [&'static str; 7] = match self {
            Language::En => [
                "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
            ],
            Language::It => [
                "Lunedì", "Martedì", "Mercoledì", "Giovedì", "Venerdì", "Sabato", "Domenica",
            ],
            Language::Pl => [
                "Poniedziałek",
                "Wtorek",
                "Środa",
                "Czwartek",
                "Piątek",
                "Sobota",
                "Niedziela",
            ],
        };
        names[weekday.num_days_from_monday() as usize]
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            Language::En => "Hi",
            Language::It => "Ciao",
            Language::Pl => "Cześć",
        }
    }

    pub fn today_badge(&self) -> &'static str {
        match self {
            Language::En => "TODAY",
            Language::It => "OGGI",
            Language::Pl => "DZISIAJ",
        }
    }

    /// Instruction appended to the generation prompt
    pub fn plan_instruction(&self) -> &'static str {
        match self {
            Language::En => "Output in English.",
            Language::It => {
                "IMPORTANT: Translate ALL content (Day Titles, Exercise Names, Tips) into ITALIAN."
            }
            Language::Pl => {
                "IMPORTANT: Translate ALL content (Day Titles, Exercise Names, Tips) into POLISH."
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "it" | "italian" | "italiano" => Ok(Language::It),
            "pl" | "polish" | "polski" => Ok(Language::Pl),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
