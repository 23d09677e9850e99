//! Major language of a publication

use serde::{Deserialize, Serialize};

/// The major language in which a publication is written.
///
/// The variant name (upper-cased) is the code that travels in the
/// exchange format's language slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicationLanguage {
    English,
    French,
    German,
    Italian,
    Spanish,
    Other,
}

impl Default for PublicationLanguage {
    fn default() -> Self {
        Self::English
    }
}

impl PublicationLanguage {
    /// All the known languages.
    pub const ALL: [PublicationLanguage; 6] = [
        Self::English,
        Self::French,
        Self::German,
        Self::Italian,
        Self::Spanish,
        Self::Other,
    ];

    /// Canonical code used in exchange records.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "ENGLISH",
            Self::French => "FRENCH",
            Self::German => "GERMAN",
            Self::Italian => "ITALIAN",
            Self::Spanish => "SPANISH",
            Self::Other => "OTHER",
        }
    }

    /// Parse a language code, ignoring case. Returns `None` for an
    /// unknown or empty code.
    pub fn from_code(code: &str) -> Option<Self> {
        let trimmed = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(trimmed))
    }
}
