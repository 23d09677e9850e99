//! Domain types for laboratory publication records
//!
//! This crate provides the canonical domain models for the lab's
//! bibliographic catalog:
//! - Publication: one bibliographic record with a typed subtype payload
//! - PublicationType / PublicationCategory: fine-grained and coarse kinds
//! - Journal, Conference: venues with per-year quality indicators
//! - Person, Authorship: ranked author links
//! - PublicationLanguage: major language of a record

pub mod authorship;
pub mod conference;
pub mod journal;
pub mod language;
pub mod person;
pub mod publication;
pub mod ranking;
pub mod types;

pub use authorship::*;
pub use conference::*;
pub use journal::*;
pub use language::*;
pub use person::*;
pub use publication::*;
pub use ranking::*;
pub use types::*;
