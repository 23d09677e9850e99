//! Export mapper: publications to RIS records
//!
//! Shared fields are mapped identically for every subtype; one clause
//! per subtype attaches the venue and the subtype-specific slots. The
//! human-readable category label is localized under the publication's
//! own language, never the caller's.

use labrec_domain::conference::ConferenceRef;
use labrec_domain::journal::JournalRef;
use labrec_domain::language::PublicationLanguage;
use labrec_domain::publication::{Publication, PublicationDetails};
use labrec_domain::ranking::QuartileRanking;
use labrec_domain::types::PublicationType;

use crate::error::ExchangeError;
use crate::fields;
use crate::labels;
use crate::resolver::ConferenceDirectory;
use crate::ris::{format_records, RisRecord, RisType};

/// Exporter of publications to RIS text.
///
/// The conference directory, when present, is used to walk the
/// enclosing-conference chains while building event names; without it
/// the chains are simply not rendered.
#[derive(Default)]
pub struct RisExporter<'a> {
    conferences: Option<&'a dyn ConferenceDirectory>,
}

impl<'a> RisExporter<'a> {
    pub fn new() -> Self {
        Self { conferences: None }
    }

    pub fn with_conference_directory(directory: &'a dyn ConferenceDirectory) -> Self {
        Self {
            conferences: Some(directory),
        }
    }

    /// Export the publications as RIS text.
    pub fn export(&self, publications: &[Publication]) -> Result<String, ExchangeError> {
        let records = publications
            .iter()
            .map(|p| self.to_record(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format_records(&records))
    }

    /// Map one publication to its RIS record.
    pub fn to_record(&self, publication: &Publication) -> Result<RisRecord, ExchangeError> {
        let ris_type = ris_type_for(publication.publication_type);
        let insert_isbn_issn = !matches!(
            publication.details,
            PublicationDetails::JournalPaper { .. } | PublicationDetails::ConferencePaper { .. }
        );
        let mut record = self.standard_record(ris_type, publication, insert_isbn_issn);
        match &publication.details {
            PublicationDetails::JournalPaper {
                journal,
                volume,
                number,
                pages,
                series,
            } => {
                self.fill_journal(&mut record, journal, publication.publication_year);
                record.volume_number.clone_from(volume);
                record.number_of_volumes.clone_from(number);
                record.section.clone_from(series);
                fill_pages(&mut record, pages.as_deref());
            }
            PublicationDetails::JournalEdition {
                journal,
                volume,
                number,
                pages,
            } => {
                self.fill_journal(&mut record, journal, publication.publication_year);
                record.volume_number.clone_from(volume);
                record.number_of_volumes.clone_from(number);
                fill_pages(&mut record, pages.as_deref());
            }
            PublicationDetails::ConferencePaper {
                conference,
                occurrence_number,
                volume,
                number,
                pages,
                editors,
                organization,
                address,
                series,
            } => {
                record.publisher = conference.publisher().map(str::to_string);
                record.isbn_issn = fields::first_non_empty([conference.isbn(), conference.issn()])
                    .map(str::to_string);
                record.secondary_title = Some(self.publication_target(
                    conference,
                    *occurrence_number,
                    publication.publication_year,
                    publication.major_language,
                ));
                record.publishing_place.clone_from(address);
                record.volume_number.clone_from(volume);
                record.number_of_volumes.clone_from(number);
                record.tertiary_title.clone_from(series);
                record.editor.clone_from(editors);
                record.custom4.clone_from(organization);
                fill_pages(&mut record, pages.as_deref());
                let core = conference.core_index(publication.publication_year);
                if !core.is_nr() {
                    record.custom3 = Some(core.code().to_string());
                }
            }
            PublicationDetails::KeyNote {
                conference,
                occurrence_number,
                editors,
                organization,
                address,
            } => {
                record.periodical_name_jo = Some(self.publication_target(
                    conference,
                    *occurrence_number,
                    publication.publication_year,
                    publication.major_language,
                ));
                record.editor.clone_from(editors);
                record.publisher.clone_from(organization);
                record.publishing_place.clone_from(address);
                record.custom3 =
                    labels::type_label(publication.publication_type, publication.major_language)
                        .map(str::to_string);
            }
            PublicationDetails::Book {
                volume,
                number,
                pages,
                edition,
                editors,
                series,
                publisher,
                address,
            } => {
                record.publisher.clone_from(publisher);
                record.publishing_place.clone_from(address);
                record.editor.clone_from(editors);
                record.volume_number.clone_from(volume);
                record.number_of_volumes.clone_from(number);
                record.edition.clone_from(edition);
                record.section.clone_from(series);
                fill_pages(&mut record, pages.as_deref());
            }
            PublicationDetails::BookChapter {
                book_title,
                chapter_number,
                edition,
                volume,
                number,
                pages,
                editors,
                series,
                publisher,
                address,
            } => {
                record.secondary_title.clone_from(book_title);
                record.section.clone_from(chapter_number);
                record.publisher.clone_from(publisher);
                record.publishing_place.clone_from(address);
                record.editor.clone_from(editors);
                record.volume_number.clone_from(volume);
                record.number_of_volumes.clone_from(number);
                record.edition.clone_from(edition);
                record.tertiary_title.clone_from(series);
                fill_pages(&mut record, pages.as_deref());
            }
            PublicationDetails::Thesis {
                institution,
                address,
            } => {
                record.publisher.clone_from(institution);
                record.publishing_place.clone_from(address);
                record.custom3 =
                    labels::type_label(publication.publication_type, publication.major_language)
                        .map(str::to_string);
            }
            PublicationDetails::Report {
                number,
                report_type,
                institution,
                address,
            } => {
                record.volume_number.clone_from(number);
                record.publisher.clone_from(institution);
                record.publishing_place.clone_from(address);
                record.custom3.clone_from(report_type);
            }
            PublicationDetails::Patent {
                number,
                patent_type,
                institution,
                address,
            } => {
                record.publishing_place.clone_from(address);
                record.publisher_standard_number.clone_from(number);
                record.publisher.clone_from(institution);
                record.custom3.clone_from(patent_type);
            }
            PublicationDetails::MiscDocument {
                number,
                how_published,
                document_type,
                organization,
                publisher,
                address,
            } => {
                record.secondary_title.clone_from(how_published);
                record.volume_number.clone_from(number);
                record.editor.clone_from(organization);
                record.publisher.clone_from(publisher);
                record.publishing_place.clone_from(address);
                record.custom3.clone_from(document_type);
            }
        }
        Ok(record)
    }

    fn standard_record(
        &self,
        ris_type: RisType,
        publication: &Publication,
        insert_isbn_issn: bool,
    ) -> RisRecord {
        let mut record = RisRecord::new(ris_type);
        record.title = Some(publication.title.clone());
        record.authors = publication.authors.iter().map(|a| a.last_first()).collect();
        record.publication_year = Some(publication.publication_year.to_string());
        record.abstract_text.clone_from(&publication.abstract_text);
        record.keywords = publication.keywords.clone();
        record.doi.clone_from(&publication.doi);
        record.url = fields::first_non_empty([
            publication.extra_url.as_deref(),
            publication.dblp_url.as_deref(),
            publication.video_url.as_deref(),
        ])
        .map(str::to_string);
        record.language = Some(publication.major_language.code().to_string());
        let category = publication.category();
        record.custom1 = Some(category.acronym().to_string());
        record.custom2 =
            Some(labels::category_label(category, publication.major_language).to_string());
        if insert_isbn_issn {
            record.isbn_issn = fields::first_non_empty([
                publication.isbn.as_deref(),
                publication.issn.as_deref(),
            ])
            .map(str::to_string);
        }
        record
    }

    fn fill_journal(&self, record: &mut RisRecord, journal: &JournalRef, year: i32) {
        record.periodical_name_jo = Some(journal.name().to_string());
        record.publisher = journal.publisher().map(str::to_string);
        record.publishing_place = journal.address().map(str::to_string);
        record.isbn_issn =
            fields::first_non_empty([journal.isbn(), journal.issn()]).map(str::to_string);
        let scimago = journal.scimago_q_index(year);
        if scimago != QuartileRanking::NR {
            record.custom3 = Some(scimago.code().to_string());
        }
        let wos = journal.wos_q_index(year);
        if wos != QuartileRanking::NR {
            record.custom4 = Some(wos.code().to_string());
        }
        if let Some(impact) = journal.impact_factor(year) {
            if impact > 0.0 {
                record.custom5 = Some(impact.to_string());
            }
        }
    }

    /// Event name of a conference publication, e.g.
    /// "14th International Conference on Systems (ICS-22)", followed
    /// by the enclosing conferences when the chain can be walked.
    fn publication_target(
        &self,
        conference: &ConferenceRef,
        occurrence_number: u32,
        year: i32,
        language: PublicationLanguage,
    ) -> String {
        let mut target = String::new();
        if occurrence_number > 1 {
            target.push_str(&occurrence_number.to_string());
            target.push_str(labels::number_decorator(occurrence_number, language));
            target.push(' ');
        }
        append_event_name(&mut target, conference.name(), conference.acronym(), year);
        if let (ConferenceRef::Known(known), Some(directory)) = (conference, self.conferences) {
            for parent in known.enclosing_chain(|id| directory.conference_by_id(id)) {
                target.push_str(", in ");
                append_event_name(&mut target, &parent.name, parent.acronym.as_deref(), year);
            }
        }
        target
    }
}

fn append_event_name(target: &mut String, name: &str, acronym: Option<&str>, year: i32) {
    target.push_str(name);
    if let Some(acronym) = acronym.filter(|a| !a.is_empty()) {
        target.push_str(" (");
        target.push_str(acronym);
        target.push('-');
        target.push_str(&(year.rem_euclid(100)).to_string());
        target.push(')');
    }
}

fn fill_pages(record: &mut RisRecord, pages: Option<&str>) {
    if let Some((start, end)) = pages.and_then(fields::parse_page_range) {
        record.start_page = Some(start.to_string());
        record.end_page = Some(end.to_string());
    }
}

/// RIS type code of an internal publication type.
pub fn ris_type_for(publication_type: PublicationType) -> RisType {
    use PublicationType as T;
    match publication_type {
        T::InternationalJournalPaper
        | T::InternationalJournalPaperWithoutCommittee
        | T::NationalJournalPaper
        | T::NationalJournalPaperWithoutCommittee => RisType::JOUR,
        T::InternationalConferencePaper
        | T::NationalConferencePaper
        | T::InternationalOralCommunication
        | T::NationalOralCommunication
        | T::InternationalPoster
        | T::NationalPoster => RisType::CPAPER,
        T::InternationalBook | T::NationalBook | T::ScientificCultureBook => RisType::BOOK,
        T::InternationalBookChapter | T::NationalBookChapter | T::ScientificCultureBookChapter => {
            RisType::CHAP
        }
        T::HdrThesis | T::PhdThesis | T::MasterThesis => RisType::THES,
        T::InternationalJournalEdition | T::NationalJournalEdition => RisType::EDBOOK,
        T::InternationalKeynote | T::NationalKeynote => RisType::HEAR,
        T::TechnicalReport
        | T::ProjectReport
        | T::ResearchTransferReport
        | T::TeachingDocument
        | T::TutorialDocumentation => RisType::RPRT,
        T::InternationalPatent | T::EuropeanPatent | T::NationalPatent => RisType::PAT,
        T::ScientificCulturePaper => RisType::MGZN,
        T::ArtisticProduction => RisType::ART,
        T::ResearchTool => RisType::COMP,
        T::InternationalPresentation
        | T::NationalPresentation
        | T::InternationalScientificCulturePresentation
        | T::NationalScientificCulturePresentation => RisType::PCOMM,
        T::Other => RisType::GEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labrec_domain::conference::Conference;
    use labrec_domain::journal::{Journal, JournalYearlyIndicators};
    use labrec_domain::person::Person;
    use labrec_domain::ranking::CoreRanking;
    use std::collections::BTreeMap;

    fn base_publication(
        publication_type: PublicationType,
        details: PublicationDetails,
    ) -> Publication {
        let mut p0 = Person::new("Firstname0", "Lastname0");
        p0.lab_member = true;
        let p1 = Person::new("Firstname1", "Lastname1");
        Publication {
            id: 1,
            preferred_string_id: None,
            publication_type,
            title: "Title 1".to_string(),
            abstract_text: Some("Abs 1".to_string()),
            keywords: vec!["keyword 1".to_string(), "keyword 2".to_string()],
            publication_date: None,
            publication_year: 2022,
            isbn: Some("isbn/1".to_string()),
            issn: Some("issn/1".to_string()),
            doi: Some("doi/1".to_string()),
            extra_url: Some("url/1".to_string()),
            video_url: Some("video/1".to_string()),
            dblp_url: Some("DBLP/1".to_string()),
            pdf_path: None,
            award_path: None,
            major_language: PublicationLanguage::English,
            authors: vec![p1, p0],
            details,
        }
    }

    fn ranked_journal() -> Journal {
        let mut indicators = BTreeMap::new();
        indicators.insert(
            2022,
            JournalYearlyIndicators {
                scimago_q_index: QuartileRanking::Q2,
                wos_q_index: QuartileRanking::NR,
                impact_factor: Some(123.456),
            },
        );
        Journal {
            id: 7,
            name: "journal name//1".to_string(),
            publisher: Some("publisher//1".to_string()),
            address: Some("addr//1".to_string()),
            isbn: Some("isbn//1".to_string()),
            issn: Some("issn//1".to_string()),
            indicators,
        }
    }

    #[test]
    fn test_journal_paper_layout() {
        let publication = base_publication(
            PublicationType::InternationalJournalPaper,
            PublicationDetails::JournalPaper {
                journal: JournalRef::Known(ranked_journal()),
                volume: Some("vol/1".to_string()),
                number: Some("nb/1".to_string()),
                pages: Some("pages/1".to_string()),
                series: None,
            },
        );
        let text = RisExporter::new().export(&[publication]).unwrap();
        assert_eq!(
            text,
            "TY  - JOUR\n\
             AB  - Abs 1\n\
             AU  - Lastname1, Firstname1\n\
             AU  - Lastname0, Firstname0\n\
             C1  - ACL\n\
             C2  - Articles in international or national journals with selection committee and ranked in international databases\n\
             C3  - Q2\n\
             C5  - 123.456\n\
             DO  - doi/1\n\
             JO  - journal name//1\n\
             KW  - keyword 1\n\
             KW  - keyword 2\n\
             LA  - ENGLISH\n\
             NV  - nb/1\n\
             PB  - publisher//1\n\
             PP  - addr//1\n\
             PY  - 2022\n\
             SN  - isbn//1\n\
             TI  - Title 1\n\
             UR  - url/1\n\
             VL  - vol/1\n\
             ER  - \n"
        );
    }

    #[test]
    fn test_conference_paper_event_name() {
        let conference = Conference {
            id: 3,
            name: "event//1".to_string(),
            acronym: Some("ACR".to_string()),
            publisher: Some("publisher//1".to_string()),
            isbn: Some("isbn//1".to_string()),
            issn: Some("issn//1".to_string()),
            ..Default::default()
        };
        let publication = base_publication(
            PublicationType::InternationalConferencePaper,
            PublicationDetails::ConferencePaper {
                conference: ConferenceRef::Known(conference),
                occurrence_number: 1234,
                volume: Some("vol/1".to_string()),
                number: Some("nb/1".to_string()),
                pages: None,
                editors: Some("Editor1, Editor2 and Editor3, Editor4".to_string()),
                organization: Some("orga/1".to_string()),
                address: Some("adr/1".to_string()),
                series: None,
            },
        );
        let record = RisExporter::new().to_record(&publication).unwrap();
        assert_eq!(
            record.secondary_title.as_deref(),
            Some("1234th event//1 (ACR-22)")
        );
        assert_eq!(record.custom1.as_deref(), Some("C_ACTI"));
        assert_eq!(record.custom4.as_deref(), Some("orga/1"));
        assert_eq!(record.isbn_issn.as_deref(), Some("isbn//1"));
        // Not CORE-ranked, so no C3 slot.
        assert_eq!(record.custom3, None);
    }

    #[test]
    fn test_conference_enclosing_chain_rendered() {
        struct TwoConferences(Conference);
        impl ConferenceDirectory for TwoConferences {
            fn conferences_by_name(&self, _name: &str) -> Vec<Conference> {
                Vec::new()
            }
            fn conference_by_id(&self, id: i64) -> Option<Conference> {
                (self.0.id == id).then(|| self.0.clone())
            }
        }
        let parent = Conference {
            id: 9,
            name: "Big Event".to_string(),
            acronym: Some("BIG".to_string()),
            ..Default::default()
        };
        let satellite = Conference {
            id: 3,
            name: "Workshop".to_string(),
            enclosing_conference: Some(9),
            ..Default::default()
        };
        let publication = base_publication(
            PublicationType::InternationalConferencePaper,
            PublicationDetails::ConferencePaper {
                conference: ConferenceRef::Known(satellite),
                occurrence_number: 0,
                volume: None,
                number: None,
                pages: None,
                editors: None,
                organization: None,
                address: None,
                series: None,
            },
        );
        let directory = TwoConferences(parent);
        let record = RisExporter::with_conference_directory(&directory)
            .to_record(&publication)
            .unwrap();
        assert_eq!(
            record.secondary_title.as_deref(),
            Some("Workshop, in Big Event (BIG-22)")
        );
    }

    #[test]
    fn test_thesis_carries_type_label() {
        let publication = base_publication(
            PublicationType::MasterThesis,
            PublicationDetails::Thesis {
                institution: Some("inst/1".to_string()),
                address: Some("adr/1".to_string()),
            },
        );
        let record = RisExporter::new().to_record(&publication).unwrap();
        assert_eq!(record.record_type, Some(RisType::THES));
        assert_eq!(record.custom1.as_deref(), Some("TH"));
        assert_eq!(record.custom3.as_deref(), Some("Master theses"));
        assert_eq!(record.publisher.as_deref(), Some("inst/1"));
        assert_eq!(record.isbn_issn.as_deref(), Some("isbn/1"));
    }

    #[test]
    fn test_label_language_follows_publication() {
        let mut publication = base_publication(
            PublicationType::PhdThesis,
            PublicationDetails::Thesis {
                institution: None,
                address: None,
            },
        );
        publication.major_language = PublicationLanguage::French;
        let record = RisExporter::new().to_record(&publication).unwrap();
        assert_eq!(record.custom3.as_deref(), Some("Th\u{e8}ses de doctorat"));
        assert_eq!(record.language.as_deref(), Some("FRENCH"));
    }

    #[test]
    fn test_patent_uses_standard_number_slot() {
        let publication = base_publication(
            PublicationType::EuropeanPatent,
            PublicationDetails::Patent {
                number: Some("bre/1".to_string()),
                patent_type: Some("eur/1".to_string()),
                institution: Some("inst/1".to_string()),
                address: None,
            },
        );
        let record = RisExporter::new().to_record(&publication).unwrap();
        assert_eq!(record.record_type, Some(RisType::PAT));
        assert_eq!(record.publisher_standard_number.as_deref(), Some("bre/1"));
        assert_eq!(record.custom3.as_deref(), Some("eur/1"));
    }

    #[test]
    fn test_pages_emitted_ascending() {
        let publication = base_publication(
            PublicationType::InternationalJournalPaper,
            PublicationDetails::JournalPaper {
                journal: JournalRef::Placeholder {
                    name: "J".to_string(),
                    publisher: None,
                    isbn: None,
                    issn: None,
                },
                volume: None,
                number: None,
                pages: Some("20-10".to_string()),
                series: None,
            },
        );
        let record = RisExporter::new().to_record(&publication).unwrap();
        assert_eq!(record.start_page.as_deref(), Some("10"));
        assert_eq!(record.end_page.as_deref(), Some("20"));
    }

    #[test]
    fn test_core_ranked_conference_flags_c3() {
        let mut core = BTreeMap::new();
        core.insert(2020, CoreRanking::AStar);
        let conference = Conference {
            id: 3,
            name: "ConfName".to_string(),
            core_indices: core,
            ..Default::default()
        };
        let publication = base_publication(
            PublicationType::InternationalConferencePaper,
            PublicationDetails::ConferencePaper {
                conference: ConferenceRef::Known(conference),
                occurrence_number: 0,
                volume: None,
                number: None,
                pages: None,
                editors: None,
                organization: None,
                address: None,
                series: None,
            },
        );
        let record = RisExporter::new().to_record(&publication).unwrap();
        assert_eq!(record.custom3.as_deref(), Some("A*"));
    }
}
