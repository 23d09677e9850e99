//! Error types for the interchange engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Candidate venue reported when a name lookup is ambiguous. The list
/// is serializable so batch drivers can report it for human
/// resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueCandidate {
    pub id: i64,
    pub name: String,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub issn: Option<String>,
}

/// Errors raised at the single-record boundary of the interchange
/// engine. The batch driver decides whether to skip, log, or abort.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("field '{field}' is required for record: {reference_id}")]
    MissingRequiredField {
        field: &'static str,
        reference_id: String,
    },

    #[error("unsupported type of exchange record for: {reference_id}")]
    UnsupportedExchangeType { reference_id: String },

    #[error("unsupported publication type: {type_code}")]
    UnsupportedPublicationType { type_code: &'static str },

    #[error("unknown journal '{name}' for record: {reference_id}")]
    MissingJournal { reference_id: String, name: String },

    #[error("unknown conference '{name}' for record: {reference_id}")]
    MissingConference { reference_id: String, name: String },

    #[error(
        "too many journals for record {reference_id} with the journal name: {name}; \
         fix the publisher and ISSN in the exchange file"
    )]
    AmbiguousJournal {
        reference_id: String,
        name: String,
        candidates: Vec<VenueCandidate>,
    },

    #[error(
        "too many conferences for record {reference_id} with the conference name: {name}; \
         fix the publisher, ISBN and ISSN in the exchange file"
    )]
    AmbiguousConference {
        reference_id: String,
        name: String,
        candidates: Vec<VenueCandidate>,
    },

    #[error("no author for record: {reference_id}")]
    NoResolvedAuthor { reference_id: String },

    #[error("cannot read exchange records")]
    Io(#[from] std::io::Error),
}
