//! End-to-end exchange tests: export to RIS text, re-import, compare.

use labrec_core::{
    ConferenceDirectory, ExchangeError, ImportOptions, JournalDirectory, PersonResolver,
    RisExporter, RisImporter,
};
use labrec_domain::conference::Conference;
use labrec_domain::journal::{Journal, JournalRef};
use labrec_domain::language::PublicationLanguage;
use labrec_domain::person::Person;
use labrec_domain::publication::{Publication, PublicationDetails};
use labrec_domain::types::PublicationType;

struct EmptyCatalog;

impl JournalDirectory for EmptyCatalog {
    fn journals_by_name(&self, _name: &str) -> Vec<Journal> {
        Vec::new()
    }
}

impl ConferenceDirectory for EmptyCatalog {
    fn conferences_by_name(&self, _name: &str) -> Vec<Conference> {
        Vec::new()
    }
    fn conference_by_id(&self, _id: i64) -> Option<Conference> {
        None
    }
}

struct MemberResolver;

impl PersonResolver for MemberResolver {
    fn extract_persons(&self, author_list: &str, _assign_ids: bool) -> Vec<Person> {
        author_list
            .split(" and ")
            .filter(|chunk| !chunk.trim().is_empty())
            .map(|chunk| {
                let (last, first) = chunk.split_once(", ").unwrap_or((chunk, ""));
                let mut person = Person::new(first.trim(), last.trim());
                person.lab_member = true;
                person
            })
            .collect()
    }
}

fn importer() -> RisImporter<'static> {
    RisImporter::new(
        &EmptyCatalog,
        &EmptyCatalog,
        &MemberResolver,
        ImportOptions {
            assign_random_id: false,
            ..ImportOptions::default()
        },
    )
}

fn journal_paper() -> Publication {
    Publication {
        id: 1,
        preferred_string_id: None,
        publication_type: PublicationType::InternationalJournalPaper,
        title: "T".to_string(),
        abstract_text: None,
        keywords: Vec::new(),
        publication_date: None,
        publication_year: 2020,
        isbn: None,
        issn: None,
        doi: Some("10.1/x".to_string()),
        extra_url: None,
        video_url: None,
        dblp_url: None,
        pdf_path: None,
        award_path: None,
        major_language: PublicationLanguage::English,
        authors: vec![Person::new("Jane", "Doe")],
        details: PublicationDetails::JournalPaper {
            journal: JournalRef::Placeholder {
                name: "Journal of Tests".to_string(),
                publisher: None,
                isbn: None,
                issn: None,
            },
            volume: Some("3".to_string()),
            number: Some("1".to_string()),
            pages: Some("10-20".to_string()),
            series: None,
        },
    }
}

#[test]
fn journal_paper_round_trip() {
    let exported = RisExporter::new().export(&[journal_paper()]).unwrap();
    let mut results = importer().import(exported.as_bytes());
    let reimported = results.next().unwrap().unwrap();
    assert!(results.next().is_none());

    assert_eq!(
        reimported.publication_type,
        PublicationType::InternationalJournalPaper
    );
    assert_eq!(reimported.title, "T");
    assert_eq!(reimported.publication_year, 2020);
    assert_eq!(reimported.doi.as_deref(), Some("10.1/x"));
    match &reimported.details {
        PublicationDetails::JournalPaper {
            journal,
            volume,
            number,
            pages,
            ..
        } => {
            assert_eq!(journal.name(), "Journal of Tests");
            assert_eq!(volume.as_deref(), Some("3"));
            assert_eq!(number.as_deref(), Some("1"));
            assert_eq!(pages.as_deref(), Some("10-20"));
        }
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn conference_paper_round_trip_keeps_occurrence() {
    let text = "TY  - CPAPER\n\
                TI  - On Workshops\n\
                PY  - 2021\n\
                AU  - Doe, Jane\n\
                T2  - the 14th International Workshop on Things\n\
                ER  - \n";
    let publication = importer()
        .import(text.as_bytes())
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(
        publication.publication_type,
        PublicationType::InternationalConferencePaper
    );
    match &publication.details {
        PublicationDetails::ConferencePaper {
            conference,
            occurrence_number,
            ..
        } => {
            assert_eq!(conference.name(), "International Workshop on Things");
            assert_eq!(*occurrence_number, 14);
        }
        other => panic!("unexpected details: {other:?}"),
    }

    // Exporting renders the occurrence prefix back.
    let record = RisExporter::new().to_record(&publication).unwrap();
    assert_eq!(
        record.secondary_title.as_deref(),
        Some("14th International Workshop on Things")
    );
}

#[test]
fn unknown_exchange_type_is_an_error() {
    let text = "TY  - NOPE\n\
                TI  - Whatever\n\
                PY  - 2021\n\
                AU  - Doe, Jane\n\
                ER  - \n";
    let error = importer()
        .import(text.as_bytes())
        .next()
        .unwrap()
        .unwrap_err();
    assert!(matches!(
        error,
        ExchangeError::UnsupportedExchangeType { .. }
    ));
}

#[test]
fn failed_record_does_not_poison_the_batch() {
    let text = "TY  - JOUR\n\
                TI  - No Author Here\n\
                PY  - 2022\n\
                JO  - Journal of Tests\n\
                ER  - \n\
                \n\
                TY  - JOUR\n\
                TI  - Well Formed\n\
                PY  - 2022\n\
                AU  - Doe, Jane\n\
                JO  - Journal of Tests\n\
                ER  - \n";
    let results: Vec<_> = importer().import(text.as_bytes()).collect();
    assert_eq!(results.len(), 2);
    assert!(matches!(
        results[0],
        Err(ExchangeError::NoResolvedAuthor { .. })
    ));
    assert_eq!(results[1].as_ref().unwrap().title, "Well Formed");
}
