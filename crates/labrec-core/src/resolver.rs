//! Entity resolution for venues and persons
//!
//! Venue names coming from exchange files are free text. Resolution
//! goes through an exact-name lookup against the catalog, a fuzzy
//! disambiguation pass driven by the ISBN/ISSN and publisher hints of
//! the record, and, when allowed, the synthesis of an unpersisted
//! placeholder. The engine never guesses among equally plausible
//! candidates.

use labrec_domain::conference::{Conference, ConferenceRef};
use labrec_domain::journal::{Journal, JournalRef};
use labrec_domain::person::Person;
use tracing::debug;

use crate::error::{ExchangeError, VenueCandidate};

/// Lookup of journals by their exact name. Backed by the catalog
/// storage; calls may block.
pub trait JournalDirectory {
    fn journals_by_name(&self, name: &str) -> Vec<Journal>;
}

/// Lookup of conferences. Backed by the catalog storage; calls may
/// block. `conference_by_id` serves the enclosing-conference chain.
pub trait ConferenceDirectory {
    fn conferences_by_name(&self, name: &str) -> Vec<Conference>;
    fn conference_by_id(&self, id: i64) -> Option<Conference>;
}

/// Resolution of an author-list string into persons. Backed by the
/// person catalog; may create unpersisted persons for unknown names.
pub trait PersonResolver {
    fn extract_persons(&self, author_list: &str, assign_ids: bool) -> Vec<Person>;
}

fn journal_candidates(journals: &[Journal]) -> Vec<VenueCandidate> {
    journals
        .iter()
        .map(|j| VenueCandidate {
            id: j.id,
            name: j.name.clone(),
            publisher: j.publisher.clone(),
            isbn: j.isbn.clone(),
            issn: j.issn.clone(),
        })
        .collect()
}

fn conference_candidates(conferences: &[Conference]) -> Vec<VenueCandidate> {
    conferences
        .iter()
        .map(|c| VenueCandidate {
            id: c.id,
            name: c.name_or_acronym().to_string(),
            publisher: c.publisher.clone(),
            isbn: c.isbn.clone(),
            issn: c.issn.clone(),
        })
        .collect()
}

/// Resolve a journal name against the catalog.
///
/// With `create_if_missing`, a name absent from the catalog yields an
/// unpersisted [`JournalRef::Placeholder`] instead of
/// [`ExchangeError::MissingJournal`].
pub fn resolve_journal(
    directory: &dyn JournalDirectory,
    reference_id: &str,
    name: &str,
    publisher_hint: Option<&str>,
    issn_hint: Option<&str>,
    create_if_missing: bool,
) -> Result<JournalRef, ExchangeError> {
    let mut journals = directory.journals_by_name(name);
    match journals.len() {
        0 => {
            if create_if_missing {
                debug!(journal = name, "synthesizing placeholder journal");
                return Ok(JournalRef::Placeholder {
                    name: name.to_string(),
                    publisher: publisher_hint.map(str::to_string),
                    isbn: None,
                    issn: issn_hint.map(str::to_string),
                });
            }
            return Err(ExchangeError::MissingJournal {
                reference_id: reference_id.to_string(),
                name: name.to_string(),
            });
        }
        1 => return Ok(JournalRef::Known(journals.remove(0))),
        _ => {}
    }
    let filtered: Vec<&Journal> = journals
        .iter()
        .filter(|j| {
            issn_hint.is_some() && j.issn.as_deref() == issn_hint
                || matches!(
                    (j.publisher.as_deref(), publisher_hint),
                    (Some(p), Some(hint)) if p.contains(hint)
                )
        })
        .collect();
    if filtered.len() == 1 {
        return Ok(JournalRef::Known(filtered[0].clone()));
    }
    Err(ExchangeError::AmbiguousJournal {
        reference_id: reference_id.to_string(),
        name: name.to_string(),
        candidates: journal_candidates(&journals),
    })
}

/// Resolve a conference name against the catalog, with the same
/// policy as [`resolve_journal`] plus an ISBN hint.
pub fn resolve_conference(
    directory: &dyn ConferenceDirectory,
    reference_id: &str,
    name: &str,
    publisher_hint: Option<&str>,
    isbn_hint: Option<&str>,
    issn_hint: Option<&str>,
    create_if_missing: bool,
) -> Result<ConferenceRef, ExchangeError> {
    let mut conferences = directory.conferences_by_name(name);
    match conferences.len() {
        0 => {
            if create_if_missing {
                debug!(conference = name, "synthesizing placeholder conference");
                return Ok(ConferenceRef::Placeholder {
                    name: name.to_string(),
                    publisher: publisher_hint.map(str::to_string),
                    isbn: isbn_hint.map(str::to_string),
                    issn: issn_hint.map(str::to_string),
                });
            }
            return Err(ExchangeError::MissingConference {
                reference_id: reference_id.to_string(),
                name: name.to_string(),
            });
        }
        1 => return Ok(ConferenceRef::Known(conferences.remove(0))),
        _ => {}
    }
    let filtered: Vec<&Conference> = conferences
        .iter()
        .filter(|c| {
            isbn_hint.is_some() && c.isbn.as_deref() == isbn_hint
                || issn_hint.is_some() && c.issn.as_deref() == issn_hint
                || matches!(
                    (c.publisher.as_deref(), publisher_hint),
                    (Some(p), Some(hint)) if p.contains(hint)
                )
        })
        .collect();
    if filtered.len() == 1 {
        return Ok(ConferenceRef::Known(filtered[0].clone()));
    }
    Err(ExchangeError::AmbiguousConference {
        reference_id: reference_id.to_string(),
        name: name.to_string(),
        candidates: conference_candidates(&conferences),
    })
}
