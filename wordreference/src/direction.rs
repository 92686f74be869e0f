//! Languages and translation directions.
//!
//! WordReference identifies a dictionary by concatenating the two language codes, e.g. `enes` for
//! English to Spanish. The same token prefixes the `id` of every row that starts a new headword,
//! which is what the row grouper keys on.

use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// A language offered by the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Language {
    /// English (`en`)
    English,
    /// Spanish (`es`)
    Spanish,
    /// French (`fr`)
    French,
    /// Italian (`it`)
    Italian,
    /// Portuguese (`pt`)
    Portuguese,
    /// German (`de`)
    German,
}

impl Language {
    /// Returns the two-letter ISO 639-1 code of the language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::German => "de",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            "fr" => Ok(Language::French),
            "it" => Ok(Language::Italian),
            "pt" => Ok(Language::Portuguese),
            "de" => Ok(Language::German),
            _ => Err(Error::UnknownLanguage(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_owned()
    }
}

/// The direction of a translation, from one language to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Direction {
    from: Language,
    to: Language,
}

impl Direction {
    /// English to Spanish.
    pub const ENGLISH_SPANISH: Direction = Direction {
        from: Language::English,
        to: Language::Spanish,
    };
    /// Spanish to English.
    pub const SPANISH_ENGLISH: Direction = Direction {
        from: Language::Spanish,
        to: Language::English,
    };

    /// Constructs a new `Direction` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDirection`] if both languages are the same.
    pub fn new(from: Language, to: Language) -> Result<Direction, Error> {
        if from == to {
            return Err(Error::InvalidDirection(format!("{from}-{to}")));
        }

        Ok(Direction { from, to })
    }

    /// The language being translated from.
    #[must_use]
    pub const fn source(self) -> Language {
        self.from
    }

    /// The language being translated to.
    #[must_use]
    pub const fn target(self) -> Language {
        self.to
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Direction {
        Direction {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the dictionary token for this direction, e.g. `enes`.
    #[must_use]
    pub fn prefix(self) -> String {
        format!("{}{}", self.from.code(), self.to.code())
    }

    /// Returns whether a row `id` marks the start of a new headword entry.
    ///
    /// Pages for one direction also list rows from the reverse dictionary, so both prefixes
    /// count as boundaries.
    #[must_use]
    pub fn is_entry_boundary(self, id: &str) -> bool {
        id.starts_with(&self.prefix()) || id.starts_with(&self.reverse().prefix())
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Parses `en-es`, `en:es`, `en/es` or `enes`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (from, to) = match trimmed.split_once(['-', ':', '/']) {
            Some(pair) => pair,
            None if trimmed.len() == 4 && trimmed.is_ascii() => trimmed.split_at(2),
            None => return Err(Error::InvalidDirection(s.to_owned())),
        };

        Direction::new(from.parse()?, to.parse()?)
    }
}

impl TryFrom<String> for Direction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.to_string()
    }
}
