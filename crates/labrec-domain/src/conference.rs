//! Conference venue, its ranking history and name decomposition
//!
//! Conference names as found in exchange files usually carry an
//! occurrence ordinal ("14th International Conference on ...") and
//! sometimes a leading article. The decomposition utilities split that
//! apart so that the catalog stores the stable base name and the
//! publication stores the occurrence number.

use std::collections::{BTreeMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ranking::CoreRanking;

/// A conference known to the catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub id: i64,
    pub name: String,
    pub acronym: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub issn: Option<String>,
    /// Identifier of the enclosing conference, when this conference is
    /// co-located with, or a satellite of, a larger one. Non-owning
    /// back-reference; chains are resolved through a lookup.
    pub enclosing_conference: Option<i64>,
    /// CORE ranking keyed by year.
    pub core_indices: BTreeMap<i32, CoreRanking>,
}

impl Conference {
    /// CORE ranking for the given year, falling back to the closest
    /// earlier year, `NR` when unknown.
    pub fn core_index(&self, year: i32) -> CoreRanking {
        self.core_indices
            .range(..=year)
            .next_back()
            .map(|(_, v)| *v)
            .unwrap_or_default()
    }

    /// The conference name, falling back to the acronym when the name
    /// is empty.
    pub fn name_or_acronym(&self) -> &str {
        if self.name.is_empty() {
            self.acronym.as_deref().unwrap_or("")
        } else {
            &self.name
        }
    }

    /// Walk the enclosing-conference chain, starting from this
    /// conference (excluded). The walk stops at the first missing or
    /// already-visited id, so reference cycles terminate.
    pub fn enclosing_chain<'a, F>(&self, mut lookup: F) -> Vec<Conference>
    where
        F: FnMut(i64) -> Option<Conference> + 'a,
    {
        let mut visited = HashSet::new();
        visited.insert(self.id);
        let mut chain = Vec::new();
        let mut next = self.enclosing_conference;
        while let Some(id) = next {
            if !visited.insert(id) {
                break;
            }
            match lookup(id) {
                Some(parent) => {
                    next = parent.enclosing_conference;
                    chain.push(parent);
                }
                None => break,
            }
        }
        chain
    }
}

/// Reference to a conference, either a cataloged record or an
/// unpersisted placeholder synthesized during import.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConferenceRef {
    Known(Conference),
    Placeholder {
        name: String,
        publisher: Option<String>,
        isbn: Option<String>,
        issn: Option<String>,
    },
}

impl ConferenceRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Known(conference) => &conference.name,
            Self::Placeholder { name, .. } => name,
        }
    }

    pub fn acronym(&self) -> Option<&str> {
        match self {
            Self::Known(conference) => conference.acronym.as_deref(),
            Self::Placeholder { .. } => None,
        }
    }

    pub fn publisher(&self) -> Option<&str> {
        match self {
            Self::Known(conference) => conference.publisher.as_deref(),
            Self::Placeholder { publisher, .. } => publisher.as_deref(),
        }
    }

    pub fn isbn(&self) -> Option<&str> {
        match self {
            Self::Known(conference) => conference.isbn.as_deref(),
            Self::Placeholder { isbn, .. } => isbn.as_deref(),
        }
    }

    pub fn issn(&self) -> Option<&str> {
        match self {
            Self::Known(conference) => conference.issn.as_deref(),
            Self::Placeholder { issn, .. } => issn.as_deref(),
        }
    }

    pub fn core_index(&self, year: i32) -> CoreRanking {
        match self {
            Self::Known(conference) => conference.core_index(year),
            Self::Placeholder { .. } => CoreRanking::NR,
        }
    }

    /// `true` when the reference points to a cataloged conference,
    /// `false` for an unpersisted placeholder.
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Components of a decomposed conference name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConferenceNameComponents {
    /// Occurrence number of the conference, `0` when unspecified.
    pub occurrence_number: u32,
    /// Base name of the conference, without the occurrence prefix.
    pub name: Option<String>,
}

lazy_static! {
    // "14", "14th", "14 th", "1st", "2nd", "3rd", "1er", "1ere",
    // "1ère", "125eme", "125ème" followed by the base name.
    static ref OCCURRENCE_PREFIX: Regex = Regex::new(
        r"(?i)^\s*([0-9]+)\s*(?:st|nd|rd|th|er|ere|ère|eme|ème)?\s+(\S.*)$"
    )
    .unwrap();
    static ref PREFIX_ARTICLE: Regex =
        Regex::new(r"(?i)^\s*(?:the|an|a|les|le|la|l'|une|un|des)\s+").unwrap();
}

/// Replies the trimmed input, or `None` when the input is empty or
/// made only of dashes.
pub fn normalize_venue_name(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '-') {
        None
    } else {
        Some(trimmed)
    }
}

/// Remove the leading articles (English and French) from a venue name.
/// Returns `None` when nothing remains.
pub fn remove_prefix_articles(value: &str) -> Option<String> {
    let trimmed = normalize_venue_name(value)?;
    let without_article = PREFIX_ARTICLE.replace(trimmed, "");
    let result = without_article.trim();
    if result.is_empty() {
        None
    } else {
        Some(result.to_string())
    }
}

/// Decompose a conference name into its occurrence number and base
/// name. A name without ordinal prefix yields occurrence number `0`.
pub fn parse_conference_name(value: &str) -> ConferenceNameComponents {
    let Some(trimmed) = normalize_venue_name(value) else {
        return ConferenceNameComponents::default();
    };
    if let Some(captures) = OCCURRENCE_PREFIX.captures(trimmed) {
        if let Ok(number) = captures[1].parse::<u32>() {
            return ConferenceNameComponents {
                occurrence_number: number,
                name: Some(captures[2].trim().to_string()),
            };
        }
    }
    ConferenceNameComponents {
        occurrence_number: 0,
        name: Some(trimmed.to_string()),
    }
}
