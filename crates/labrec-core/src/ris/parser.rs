//! RIS parser
//!
//! Parses tagged lines with format: `XX  - value`. Records are pulled
//! lazily: the caller controls pacing and may stop early.

use std::io::BufRead;

use crate::error::ExchangeError;

use super::record::{RisRecord, RisType};

/// Lazy iterator over the records of a RIS source.
pub struct RisParser<R> {
    lines: std::io::Lines<R>,
    current: Option<RisRecord>,
    done: bool,
}

impl<R: BufRead> RisParser<R> {
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            current: None,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for RisParser<R> {
    type Item = Result<RisRecord, ExchangeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
                None => {
                    self.done = true;
                    // Tolerate a trailing record without ER.
                    return self.current.take().map(Ok);
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let Some((tag, value)) = parse_line(&line) else {
                continue;
            };
            match tag {
                "TY" => {
                    // A TY line while a record is open terminates it.
                    let opened = RisRecord::new(RisType::parse(value));
                    if let Some(record) = self.current.replace(opened) {
                        return Some(Ok(record));
                    }
                }
                "ER" => {
                    if let Some(record) = self.current.take() {
                        return Some(Ok(record));
                    }
                }
                _ => {
                    if let Some(ref mut record) = self.current {
                        record.set_tag(tag, value.to_string());
                    }
                }
            }
        }
    }
}

/// Split a RIS line into tag and value. Accepts the canonical
/// `XX  - value` form and the single-space variants seen in the wild.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    if line.len() < 4 || !line.is_char_boundary(2) {
        return None;
    }
    let tag = &line[0..2];
    if !tag
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return None;
    }
    let rest = &line[2..];
    let value = if let Some(v) = rest.strip_prefix("  - ") {
        v
    } else if let Some(v) = rest.strip_prefix("  -") {
        v
    } else if let Some(v) = rest.strip_prefix(" - ") {
        v
    } else if let Some(v) = rest.strip_prefix("- ") {
        v
    } else {
        return None;
    };
    Some((tag, value))
}
