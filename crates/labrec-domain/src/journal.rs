//! Journal venue and its per-year quality indicators

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ranking::QuartileRanking;

/// Quality indicators of a journal for one calendar year.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalYearlyIndicators {
    pub scimago_q_index: QuartileRanking,
    pub wos_q_index: QuartileRanking,
    pub impact_factor: Option<f32>,
}

/// A journal known to the catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub id: i64,
    pub name: String,
    pub publisher: Option<String>,
    pub address: Option<String>,
    pub isbn: Option<String>,
    pub issn: Option<String>,
    /// Quality indicators keyed by year.
    pub indicators: BTreeMap<i32, JournalYearlyIndicators>,
}

impl Journal {
    /// Indicators for the given year, falling back to the closest
    /// earlier year with known indicators.
    pub fn indicators_for_year(&self, year: i32) -> Option<&JournalYearlyIndicators> {
        self.indicators.range(..=year).next_back().map(|(_, v)| v)
    }

    /// Scimago quartile for the given year, `NR` when unknown.
    pub fn scimago_q_index(&self, year: i32) -> QuartileRanking {
        self.indicators_for_year(year)
            .map(|i| i.scimago_q_index)
            .unwrap_or_default()
    }

    /// Web of Science quartile for the given year, `NR` when unknown.
    pub fn wos_q_index(&self, year: i32) -> QuartileRanking {
        self.indicators_for_year(year)
            .map(|i| i.wos_q_index)
            .unwrap_or_default()
    }

    /// Impact factor for the given year, if known.
    pub fn impact_factor(&self, year: i32) -> Option<f32> {
        self.indicators_for_year(year).and_then(|i| i.impact_factor)
    }

    /// Is the journal ranked (any quartile other than `NR`) for the
    /// given year?
    pub fn is_ranked(&self, year: i32) -> bool {
        self.scimago_q_index(year) != QuartileRanking::NR
            || self.wos_q_index(year) != QuartileRanking::NR
    }
}

/// Reference to a journal, either a cataloged record or an unpersisted
/// placeholder synthesized during import when the journal is unknown.
///
/// The placeholder offers the same read-only surface as a real journal
/// but is visibly tagged as not persisted so that callers cannot
/// mistake it for a stored entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum JournalRef {
    Known(Journal),
    Placeholder {
        name: String,
        publisher: Option<String>,
        isbn: Option<String>,
        issn: Option<String>,
    },
}

impl JournalRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Known(journal) => &journal.name,
            Self::Placeholder { name, .. } => name,
        }
    }

    pub fn publisher(&self) -> Option<&str> {
        match self {
            Self::Known(journal) => journal.publisher.as_deref(),
            Self::Placeholder { publisher, .. } => publisher.as_deref(),
        }
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Known(journal) => journal.address.as_deref(),
            Self::Placeholder { .. } => None,
        }
    }

    pub fn isbn(&self) -> Option<&str> {
        match self {
            Self::Known(journal) => journal.isbn.as_deref(),
            Self::Placeholder { isbn, .. } => isbn.as_deref(),
        }
    }

    pub fn issn(&self) -> Option<&str> {
        match self {
            Self::Known(journal) => journal.issn.as_deref(),
            Self::Placeholder { issn, .. } => issn.as_deref(),
        }
    }

    pub fn scimago_q_index(&self, year: i32) -> QuartileRanking {
        match self {
            Self::Known(journal) => journal.scimago_q_index(year),
            Self::Placeholder { .. } => QuartileRanking::NR,
        }
    }

    pub fn wos_q_index(&self, year: i32) -> QuartileRanking {
        match self {
            Self::Known(journal) => journal.wos_q_index(year),
            Self::Placeholder { .. } => QuartileRanking::NR,
        }
    }

    pub fn impact_factor(&self, year: i32) -> Option<f32> {
        match self {
            Self::Known(journal) => journal.impact_factor(year),
            Self::Placeholder { .. } => None,
        }
    }

    pub fn is_ranked(&self, year: i32) -> bool {
        match self {
            Self::Known(journal) => journal.is_ranked(year),
            Self::Placeholder { .. } => false,
        }
    }

    /// `true` when the reference points to a cataloged journal,
    /// `false` for an unpersisted placeholder.
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal_with_q1(year: i32) -> Journal {
        let mut journal = Journal {
            id: 7,
            name: "Journal of Tests".to_string(),
            publisher: Some("Springer".to_string()),
            issn: Some("1234-5678".to_string()),
            ..Default::default()
        };
        journal.indicators.insert(
            year,
            JournalYearlyIndicators {
                scimago_q_index: QuartileRanking::Q1,
                wos_q_index: QuartileRanking::NR,
                impact_factor: Some(3.5),
            },
        );
        journal
    }

    #[test]
    fn test_indicators_fall_back_to_earlier_year() {
        let journal = journal_with_q1(2020);
        assert_eq!(journal.scimago_q_index(2022), QuartileRanking::Q1);
        assert_eq!(journal.scimago_q_index(2019), QuartileRanking::NR);
        assert!(journal.is_ranked(2020));
        assert!(!journal.is_ranked(2019));
    }

    #[test]
    fn test_placeholder_surface() {
        let placeholder = JournalRef::Placeholder {
            name: "Unknown Venue".to_string(),
            publisher: Some("Nobody".to_string()),
            isbn: None,
            issn: Some("0000-0000".to_string()),
        };
        assert_eq!(placeholder.name(), "Unknown Venue");
        assert_eq!(placeholder.issn(), Some("0000-0000"));
        assert!(!placeholder.is_persisted());
        assert!(!placeholder.is_ranked(2024));

        let known = JournalRef::Known(journal_with_q1(2020));
        assert!(known.is_persisted());
        assert_eq!(known.impact_factor(2021), Some(3.5));
    }
}
