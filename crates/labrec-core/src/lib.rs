//! labrec-core: bibliographic record interchange engine
//!
//! This crate implements the exchange layer of the lab's publication
//! catalog:
//! - RIS parsing and formatting
//! - Import and export mapping between RIS records and publications
//! - Field normalization heuristics (pages, ISBN/ISSN, year, language)
//! - Venue resolution against the catalog, with placeholder synthesis
//! - Duplicate clustering of near-identical publications
//!
//! The engine is synchronous and stateless: catalog lookups go through
//! the injected [`resolver`] traits, and nothing is persisted here.

pub mod dedup;
pub mod error;
pub mod export;
pub mod fields;
pub mod import;
pub mod labels;
pub mod resolver;
pub mod ris;

// Re-export the main entry points for convenience
pub use dedup::{DuplicateDetector, NormalizedStringSimilarity, RatcliffObershelp, SorensenDice};
pub use error::{ExchangeError, VenueCandidate};
pub use export::{ris_type_for, RisExporter};
pub use import::{classify, ImportIterator, ImportOptions, RisImporter};
pub use resolver::{ConferenceDirectory, JournalDirectory, PersonResolver};
pub use ris::{format_records, RisParser, RisRecord, RisType};
