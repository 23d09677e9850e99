//! Publication record and its per-type details.
//!
//! The catalog stores one row per publication with a shared set of
//! fields (title, year, identifiers, authors) and a per-type payload
//! carried by [`PublicationDetails`]. The payload variant always
//! agrees with the broad family of the [`PublicationType`], but
//! several types share one payload shape, e.g. all the journal paper
//! types use [`PublicationDetails::JournalPaper`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::conference::ConferenceRef;
use crate::journal::JournalRef;
use crate::language::PublicationLanguage;
use crate::person::Person;
use crate::types::{PublicationCategory, PublicationType};

/// A publication of the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    /// Human-readable identifier preferred over the numeric id when
    /// exporting, when present.
    pub preferred_string_id: Option<String>,
    pub publication_type: PublicationType,
    pub title: String,
    pub abstract_text: Option<String>,
    pub keywords: Vec<String>,
    pub publication_date: Option<NaiveDate>,
    pub publication_year: i32,
    pub isbn: Option<String>,
    pub issn: Option<String>,
    pub doi: Option<String>,
    pub extra_url: Option<String>,
    pub video_url: Option<String>,
    pub dblp_url: Option<String>,
    pub pdf_path: Option<String>,
    pub award_path: Option<String>,
    pub major_language: PublicationLanguage,
    /// Authors in rank order.
    pub authors: Vec<Person>,
    pub details: PublicationDetails,
}

/// Per-type payload of a publication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PublicationDetails {
    JournalPaper {
        journal: JournalRef,
        volume: Option<String>,
        number: Option<String>,
        pages: Option<String>,
        series: Option<String>,
    },
    JournalEdition {
        journal: JournalRef,
        volume: Option<String>,
        number: Option<String>,
        pages: Option<String>,
    },
    ConferencePaper {
        conference: ConferenceRef,
        occurrence_number: u32,
        volume: Option<String>,
        number: Option<String>,
        pages: Option<String>,
        editors: Option<String>,
        organization: Option<String>,
        address: Option<String>,
        series: Option<String>,
    },
    KeyNote {
        conference: ConferenceRef,
        occurrence_number: u32,
        editors: Option<String>,
        organization: Option<String>,
        address: Option<String>,
    },
    Book {
        volume: Option<String>,
        number: Option<String>,
        pages: Option<String>,
        edition: Option<String>,
        editors: Option<String>,
        series: Option<String>,
        publisher: Option<String>,
        address: Option<String>,
    },
    BookChapter {
        book_title: Option<String>,
        chapter_number: Option<String>,
        edition: Option<String>,
        volume: Option<String>,
        number: Option<String>,
        pages: Option<String>,
        editors: Option<String>,
        series: Option<String>,
        publisher: Option<String>,
        address: Option<String>,
    },
    Thesis {
        institution: Option<String>,
        address: Option<String>,
    },
    Report {
        number: Option<String>,
        report_type: Option<String>,
        institution: Option<String>,
        address: Option<String>,
    },
    Patent {
        number: Option<String>,
        patent_type: Option<String>,
        institution: Option<String>,
        address: Option<String>,
    },
    MiscDocument {
        number: Option<String>,
        how_published: Option<String>,
        document_type: Option<String>,
        organization: Option<String>,
        publisher: Option<String>,
        address: Option<String>,
    },
}

impl Publication {
    /// Identifier preferred when exporting, the string id when set.
    pub fn export_id(&self) -> String {
        match &self.preferred_string_id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => self.id.to_string(),
        }
    }

    /// `true` when the publication venue is ranked for the publication
    /// year. Only journal and conference papers can be ranked.
    pub fn is_ranked(&self) -> bool {
        match &self.details {
            PublicationDetails::JournalPaper { journal, .. }
            | PublicationDetails::JournalEdition { journal, .. } => {
                journal.is_ranked(self.publication_year)
            }
            PublicationDetails::ConferencePaper { conference, .. }
            | PublicationDetails::KeyNote { conference, .. } => {
                !conference.core_index(self.publication_year).is_nr()
            }
            _ => false,
        }
    }

    /// Category of the publication, depending on its ranking status
    /// for multi-category types.
    pub fn category(&self) -> PublicationCategory {
        self.publication_type.category(self.is_ranked())
    }

    pub fn journal(&self) -> Option<&JournalRef> {
        match &self.details {
            PublicationDetails::JournalPaper { journal, .. }
            | PublicationDetails::JournalEdition { journal, .. } => Some(journal),
            _ => None,
        }
    }

    pub fn conference(&self) -> Option<&ConferenceRef> {
        match &self.details {
            PublicationDetails::ConferencePaper { conference, .. }
            | PublicationDetails::KeyNote { conference, .. } => Some(conference),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{Journal, JournalYearlyIndicators};
    use crate::ranking::QuartileRanking;

    fn base_publication(details: PublicationDetails) -> Publication {
        Publication {
            id: 42,
            preferred_string_id: None,
            publication_type: PublicationType::InternationalJournalPaper,
            title: "On Things".to_string(),
            abstract_text: None,
            keywords: Vec::new(),
            publication_date: None,
            publication_year: 2022,
            isbn: None,
            issn: None,
            doi: None,
            extra_url: None,
            video_url: None,
            dblp_url: None,
            pdf_path: None,
            award_path: None,
            major_language: PublicationLanguage::English,
            authors: Vec::new(),
            details,
        }
    }

    #[test]
    fn test_export_id() {
        let mut publication = base_publication(PublicationDetails::Thesis {
            institution: None,
            address: None,
        });
        assert_eq!(publication.export_id(), "42");
        publication.preferred_string_id = Some("doe-2022".to_string());
        assert_eq!(publication.export_id(), "doe-2022");
    }

    #[test]
    fn test_json_round_trip() {
        let publication = base_publication(PublicationDetails::Thesis {
            institution: Some("UTBM".to_string()),
            address: None,
        });
        let json = serde_json::to_string(&publication).unwrap();
        let decoded: Publication = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, publication);
    }

    #[test]
    fn test_category_tracks_ranking() {
        let mut journal = Journal {
            id: 7,
            name: "Journal of Things".to_string(),
            ..Default::default()
        };
        let mut publication = base_publication(PublicationDetails::JournalPaper {
            journal: JournalRef::Known(journal.clone()),
            volume: None,
            number: None,
            pages: None,
            series: None,
        });
        assert!(!publication.is_ranked());
        assert_eq!(publication.category(), PublicationCategory::Acln);

        journal.indicators.insert(
            2022,
            JournalYearlyIndicators {
                scimago_q_index: QuartileRanking::Q1,
                wos_q_index: QuartileRanking::NR,
                impact_factor: None,
            },
        );
        publication.details = PublicationDetails::JournalPaper {
            journal: JournalRef::Known(journal),
            volume: None,
            number: None,
            pages: None,
            series: None,
        };
        assert!(publication.is_ranked());
        assert_eq!(publication.category(), PublicationCategory::Acl);
    }
}
