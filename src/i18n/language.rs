//! Supported interface languages.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// An interface language.
///
/// Serialized as its lowercase code (`"ru"`, `"en"`), which is also the
/// value sent to the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Self; 2] = [Self::Ru, Self::En];

    /// The lowercase language code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// The language name in English.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ru => "Russian",
            Self::En => "English",
        }
    }

    /// The other language, as flipped by the header toggle.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Ru => Self::En,
            Self::En => Self::Ru,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            _ => anyhow::bail!(
                "Invalid language code: '{s}'\n\n\
                 Supported languages: ru, en\n\
                 Run 'aide languages' to see all supported codes."
            ),
        }
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in Language::ALL {
        println!(
            "  {:5} {}",
            Style::code(lang.code()),
            Style::secondary(lang.name())
        );
    }
}
