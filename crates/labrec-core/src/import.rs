//! Import mapper: RIS records to publications
//!
//! The importer pulls records lazily from a [`RisParser`] and converts
//! each one independently. A record that cannot be converted yields an
//! error item; the following records are unaffected.

use std::io::BufRead;

use labrec_domain::conference::{parse_conference_name, remove_prefix_articles};
use labrec_domain::language::PublicationLanguage;
use labrec_domain::person::Person;
use labrec_domain::publication::{Publication, PublicationDetails};
use labrec_domain::types::PublicationType;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;
use uuid::Uuid;

use crate::error::ExchangeError;
use crate::fields;
use crate::labels;
use crate::resolver::{
    resolve_conference, resolve_journal, ConferenceDirectory, JournalDirectory, PersonResolver,
};
use crate::ris::{RisParser, RisRecord, RisType};

lazy_static! {
    static ref ID_SANITIZER: Regex = Regex::new(r"[^a-zA-Z0-9_-]+").unwrap();
}

/// Knobs of an import run.
#[derive(Clone, Copy, Debug)]
pub struct ImportOptions {
    /// Keep the sanitized reference id of the record as the preferred
    /// string id of the publication.
    pub keep_original_id: bool,
    /// Assign synthetic numeric ids to the imported publications and
    /// to the persons the resolver creates.
    pub assign_random_id: bool,
    /// Reject records whose resolved authors contain no lab member.
    pub ensure_at_least_one_member: bool,
    /// Synthesize placeholder journals for unknown journal names
    /// instead of failing the record.
    pub create_missing_journals: bool,
    /// Synthesize placeholder conferences for unknown event names
    /// instead of failing the record.
    pub create_missing_conferences: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            keep_original_id: false,
            assign_random_id: true,
            ensure_at_least_one_member: true,
            create_missing_journals: true,
            create_missing_conferences: true,
        }
    }
}

/// Importer of RIS text into catalog publications.
#[derive(Clone, Copy)]
pub struct RisImporter<'a> {
    journals: &'a dyn JournalDirectory,
    conferences: &'a dyn ConferenceDirectory,
    persons: &'a dyn PersonResolver,
    options: ImportOptions,
}

impl<'a> RisImporter<'a> {
    pub fn new(
        journals: &'a dyn JournalDirectory,
        conferences: &'a dyn ConferenceDirectory,
        persons: &'a dyn PersonResolver,
        options: ImportOptions,
    ) -> Self {
        Self {
            journals,
            conferences,
            persons,
            options,
        }
    }

    /// Import the records of the reader, lazily. Each item is one
    /// record converted on its own; errors do not stop the iteration.
    pub fn import<R: BufRead>(self, reader: R) -> ImportIterator<'a, R> {
        ImportIterator {
            importer: self,
            parser: RisParser::new(reader),
        }
    }

    /// Convert one parsed record into a publication.
    pub fn convert(&self, record: RisRecord) -> Result<Publication, ExchangeError> {
        let reference_id = record.reference_id_or_unknown().to_string();
        let language = fields::resolve_language([record.language.as_deref()]);
        let publication_type = classify(&record, language)?;

        let publication_year =
            fields::parse_year(&reference_id, [record.publication_year.as_deref()])?;
        let title = fields::required_field(
            "title",
            &reference_id,
            [
                record.title.as_deref(),
                record.alternate_title.as_deref(),
                record.primary_title.as_deref(),
                record.secondary_title.as_deref(),
            ],
        )?
        .to_string();

        let authors = self.resolve_authors(&record, &reference_id)?;
        let details = self.build_details(publication_type, &record, &reference_id)?;

        let keywords = record
            .keywords
            .iter()
            .flat_map(|kw| fields::split_keywords(kw))
            .collect();

        Ok(Publication {
            id: if self.options.assign_random_id {
                synthetic_id()
            } else {
                0
            },
            preferred_string_id: if self.options.keep_original_id {
                record
                    .reference_id
                    .as_deref()
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(sanitize_id)
            } else {
                None
            },
            publication_type,
            title,
            abstract_text: fields::first_non_empty([
                record.abstract_text.as_deref(),
                record.abstract_text2.as_deref(),
            ])
            .map(str::to_string),
            keywords,
            publication_date: fields::parse_date([
                record.date.as_deref(),
                record.primary_date.as_deref(),
                record.access_date.as_deref(),
            ]),
            publication_year,
            isbn: fields::classify_isbn([record.isbn_issn.as_deref()]).map(str::to_string),
            issn: fields::classify_issn([record.isbn_issn.as_deref()]).map(str::to_string),
            doi: fields::extract_doi([record.doi.as_deref(), record.reference_id.as_deref()]),
            extra_url: record.url.clone(),
            video_url: None,
            dblp_url: None,
            pdf_path: None,
            award_path: None,
            major_language: language,
            authors,
            details,
        })
    }

    fn resolve_authors(
        &self,
        record: &RisRecord,
        reference_id: &str,
    ) -> Result<Vec<Person>, ExchangeError> {
        let joined = record.authors.join(" and ");
        let author_list = fields::first_non_empty([Some(joined.as_str()), record.editor.as_deref()])
            .unwrap_or("")
            .to_string();
        let persons = self
            .persons
            .extract_persons(&author_list, self.options.assign_random_id);
        if persons.is_empty() {
            return Err(ExchangeError::NoResolvedAuthor {
                reference_id: reference_id.to_string(),
            });
        }
        if self.options.ensure_at_least_one_member && !persons.iter().any(|p| p.lab_member) {
            return Err(ExchangeError::NoResolvedAuthor {
                reference_id: reference_id.to_string(),
            });
        }
        Ok(persons)
    }

    fn build_details(
        &self,
        publication_type: PublicationType,
        record: &RisRecord,
        reference_id: &str,
    ) -> Result<PublicationDetails, ExchangeError> {
        use PublicationType as T;
        let pages = fields::format_pages(record.start_page.as_deref(), record.end_page.as_deref());
        match publication_type {
            T::InternationalJournalPaper
            | T::NationalJournalPaper
            | T::InternationalJournalPaperWithoutCommittee
            | T::NationalJournalPaperWithoutCommittee => Ok(PublicationDetails::JournalPaper {
                journal: self.resolve_journal_field(record, reference_id)?,
                volume: record.volume_number.clone(),
                number: record.number_of_volumes.clone(),
                pages,
                series: record.section.clone(),
            }),
            T::InternationalJournalEdition | T::NationalJournalEdition => {
                Ok(PublicationDetails::JournalEdition {
                    journal: self.resolve_journal_field(record, reference_id)?,
                    volume: record.volume_number.clone(),
                    number: record.number_of_volumes.clone(),
                    pages,
                })
            }
            T::InternationalConferencePaper
            | T::NationalConferencePaper
            | T::InternationalOralCommunication
            | T::NationalOralCommunication
            | T::InternationalPoster
            | T::NationalPoster => {
                let (conference, occurrence_number) =
                    self.resolve_conference_field(record, reference_id)?;
                Ok(PublicationDetails::ConferencePaper {
                    conference,
                    occurrence_number,
                    volume: record.volume_number.clone(),
                    number: record.number_of_volumes.clone(),
                    pages,
                    editors: record.editor.clone(),
                    organization: record.custom4.clone(),
                    address: record.publishing_place.clone(),
                    series: record.tertiary_title.clone(),
                })
            }
            T::InternationalKeynote | T::NationalKeynote => {
                let (conference, occurrence_number) =
                    self.resolve_conference_field(record, reference_id)?;
                Ok(PublicationDetails::KeyNote {
                    conference,
                    occurrence_number,
                    editors: record.editor.clone(),
                    organization: record.publisher.clone(),
                    address: record.publishing_place.clone(),
                })
            }
            T::InternationalBook | T::NationalBook | T::ScientificCultureBook => {
                Ok(PublicationDetails::Book {
                    volume: record.volume_number.clone(),
                    number: record.number_of_volumes.clone(),
                    pages,
                    edition: record.edition.clone(),
                    editors: record.editor.clone(),
                    series: record.section.clone(),
                    publisher: record.publisher.clone(),
                    address: record.publishing_place.clone(),
                })
            }
            T::InternationalBookChapter
            | T::NationalBookChapter
            | T::ScientificCultureBookChapter => {
                let book_title = fields::required_field(
                    "book title",
                    reference_id,
                    [record.secondary_title.as_deref()],
                )?;
                Ok(PublicationDetails::BookChapter {
                    book_title: Some(book_title.to_string()),
                    chapter_number: record.section.clone(),
                    edition: record.edition.clone(),
                    volume: record.volume_number.clone(),
                    number: record.number_of_volumes.clone(),
                    pages,
                    editors: record.editor.clone(),
                    series: record.tertiary_title.clone(),
                    publisher: record.publisher.clone(),
                    address: record.publishing_place.clone(),
                })
            }
            T::HdrThesis | T::PhdThesis | T::MasterThesis => {
                let institution = fields::required_field(
                    "institution",
                    reference_id,
                    [record.publisher.as_deref()],
                )?;
                Ok(PublicationDetails::Thesis {
                    institution: Some(institution.to_string()),
                    address: record.publishing_place.clone(),
                })
            }
            T::TechnicalReport
            | T::ProjectReport
            | T::ResearchTransferReport
            | T::TeachingDocument
            | T::TutorialDocumentation => {
                let institution = fields::required_field(
                    "institution",
                    reference_id,
                    [record.publisher.as_deref()],
                )?;
                Ok(PublicationDetails::Report {
                    number: fields::first_non_empty([
                        record.volume_number.as_deref(),
                        record.edition.as_deref(),
                        record.accession_number.as_deref(),
                    ])
                    .map(str::to_string),
                    report_type: record.custom3.clone(),
                    institution: Some(institution.to_string()),
                    address: record.publishing_place.clone(),
                })
            }
            T::InternationalPatent | T::EuropeanPatent | T::NationalPatent => {
                Err(ExchangeError::UnsupportedPublicationType {
                    type_code: publication_type.code(),
                })
            }
            T::ArtisticProduction
            | T::ResearchTool
            | T::ScientificCulturePaper
            | T::InternationalPresentation
            | T::NationalPresentation
            | T::InternationalScientificCulturePresentation
            | T::NationalScientificCulturePresentation
            | T::Other => {
                let how_published = fields::required_field(
                    "how published",
                    reference_id,
                    [record.secondary_title.as_deref()],
                )?;
                Ok(PublicationDetails::MiscDocument {
                    number: record.volume_number.clone(),
                    how_published: Some(how_published.to_string()),
                    document_type: record.custom3.clone(),
                    organization: record.editor.clone(),
                    publisher: record.publisher.clone(),
                    address: record.publishing_place.clone(),
                })
            }
        }
    }

    fn resolve_journal_field(
        &self,
        record: &RisRecord,
        reference_id: &str,
    ) -> Result<labrec_domain::journal::JournalRef, ExchangeError> {
        let name = fields::required_field(
            "journal",
            reference_id,
            [
                record.periodical_name_jo.as_deref(),
                record.periodical_name_jf.as_deref(),
                record.periodical_abbreviation.as_deref(),
                record.periodical_user_abbreviation.as_deref(),
                record.book_title.as_deref(),
            ],
        )?;
        resolve_journal(
            self.journals,
            reference_id,
            name,
            record.publisher.as_deref(),
            fields::classify_issn([record.isbn_issn.as_deref()]),
            self.options.create_missing_journals,
        )
    }

    fn resolve_conference_field(
        &self,
        record: &RisRecord,
        reference_id: &str,
    ) -> Result<(labrec_domain::conference::ConferenceRef, u32), ExchangeError> {
        let raw = fields::required_field(
            "conference",
            reference_id,
            [
                record.secondary_title.as_deref(),
                record.book_title.as_deref(),
            ],
        )?;
        let components = remove_prefix_articles(raw)
            .map(|cleaned| parse_conference_name(&cleaned))
            .unwrap_or_default();
        let name = components
            .name
            .ok_or_else(|| ExchangeError::MissingRequiredField {
                field: "conference",
                reference_id: reference_id.to_string(),
            })?;
        let conference = resolve_conference(
            self.conferences,
            reference_id,
            &name,
            record.publisher.as_deref(),
            fields::classify_isbn([record.isbn_issn.as_deref()]),
            fields::classify_issn([record.isbn_issn.as_deref()]),
            self.options.create_missing_conferences,
        )?;
        Ok((conference, components.occurrence_number))
    }
}

/// Lazy import sequence over a RIS reader. The caller controls the
/// pacing and may simply stop pulling to cancel the run.
pub struct ImportIterator<'a, R: BufRead> {
    importer: RisImporter<'a>,
    parser: RisParser<R>,
}

impl<R: BufRead> Iterator for ImportIterator<'_, R> {
    type Item = Result<Publication, ExchangeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.parser.next()? {
            Ok(record) => record,
            Err(error) => return Some(Err(error)),
        };
        let reference_id = record.reference_id_or_unknown().to_string();
        Some(self.importer.convert(record).map_err(|error| {
            warn!(record = reference_id, %error, "record rejected");
            error
        }))
    }
}

/// Map a RIS record to an internal publication type.
///
/// THES records are split between master and doctoral theses by
/// comparing the C3 label of the record against the localized label of
/// the master thesis type, under the language of the record itself.
pub fn classify(
    record: &RisRecord,
    language: PublicationLanguage,
) -> Result<PublicationType, ExchangeError> {
    use PublicationType as T;
    use RisType as R;
    let ris_type = record
        .record_type
        .ok_or_else(|| ExchangeError::UnsupportedExchangeType {
            reference_id: record.reference_id_or_unknown().to_string(),
        })?;
    let publication_type = match ris_type {
        R::EJOUR | R::JFULL | R::JOUR | R::SER => T::InternationalJournalPaper,
        R::CPAPER => T::InternationalConferencePaper,
        R::BOOK | R::EBOOK | R::ENCYC => T::InternationalBook,
        R::CHAP | R::ECHAP => T::InternationalBookChapter,
        R::HEAR => T::InternationalKeynote,
        R::PCOMM => T::InternationalPresentation,
        R::EDBOOK => T::InternationalJournalEdition,
        R::MANSCPT | R::THES => {
            let master_label = labels::type_label(T::MasterThesis, language);
            let is_master = matches!(
                (record.custom3.as_deref(), master_label),
                (Some(label), Some(master)) if label.eq_ignore_ascii_case(master)
            );
            if is_master {
                T::MasterThesis
            } else {
                T::PhdThesis
            }
        }
        R::DICT | R::GOVDOC | R::LEGAL | R::RPRT | R::STAND | R::STAT => T::TechnicalReport,
        R::GRANT | R::PAT => T::InternationalPatent,
        R::MGZN | R::NEWS => T::ScientificCulturePaper,
        R::ADVS | R::ART | R::MPCT | R::MULTI | R::MUSIC | R::SOUND | R::VIDEO => {
            T::ArtisticProduction
        }
        R::AGGR | R::COMP | R::DATA | R::DBASE => T::ResearchTool,
        R::SLIDE => T::TutorialDocumentation,
        R::ABST
        | R::ANCIENT
        | R::BILL
        | R::BLOG
        | R::CASE
        | R::CHART
        | R::CLSWK
        | R::CONF
        | R::CTLG
        | R::ELEC
        | R::EQUA
        | R::FIGURE
        | R::GEN
        | R::ICOMM
        | R::INPR
        | R::MAP
        | R::PAMP
        | R::UNBILL
        | R::UNPB => T::Other,
        R::Unknown => {
            return Err(ExchangeError::UnsupportedExchangeType {
                reference_id: record.reference_id_or_unknown().to_string(),
            })
        }
    };
    Ok(publication_type)
}

/// Sanitized form of a reference id, usable as a string id.
pub fn sanitize_id(reference_id: &str) -> String {
    ID_SANITIZER.replace_all(reference_id, "_").into_owned()
}

/// Synthetic positive numeric id for a newly imported publication.
fn synthetic_id() -> i64 {
    (Uuid::new_v4().as_u128() & 0x7fff_ffff) as i64
}
