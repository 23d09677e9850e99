//! RIS exchange format support
//!
//! RIS is a flat, tag-delimited text format: one `XX  - value` line
//! per field, `TY` first and `ER` last in each record.
//! See <https://en.wikipedia.org/wiki/RIS_(file_format)>.

pub mod formatter;
pub mod parser;
pub mod record;

pub use formatter::format_records;
pub use parser::RisParser;
pub use record::{RisRecord, RisType};
