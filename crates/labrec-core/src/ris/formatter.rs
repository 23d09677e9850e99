//! RIS formatter
//!
//! Emits one `XX  - value` line per filled slot. The `TY` line comes
//! first, the remaining tags are sorted in ascending alphabetical
//! order, and each record is closed by an `ER` line.

use super::record::{RisRecord, RisType};

/// Format a sequence of records into RIS text.
pub fn format_records(records: &[RisRecord]) -> String {
    let mut output = String::new();
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        format_record(record, &mut output);
    }
    output
}

fn format_record(record: &RisRecord, output: &mut String) {
    let code = record.record_type.unwrap_or(RisType::Unknown).code();
    output.push_str("TY  - ");
    output.push_str(code);
    output.push('\n');

    fn push<'a>(
        pairs: &mut Vec<(&'static str, &'a str)>,
        tag: &'static str,
        value: &'a Option<String>,
    ) {
        if let Some(value) = value.as_deref() {
            if !value.is_empty() {
                pairs.push((tag, value));
            }
        }
    }

    let mut pairs: Vec<(&'static str, &str)> = Vec::new();
    push(&mut pairs, "ID", &record.reference_id);
    push(&mut pairs, "TI", &record.title);
    push(&mut pairs, "T1", &record.primary_title);
    push(&mut pairs, "T2", &record.secondary_title);
    push(&mut pairs, "T3", &record.tertiary_title);
    push(&mut pairs, "BT", &record.book_title);
    for author in &record.authors {
        pairs.push(("AU", author));
    }
    push(&mut pairs, "ED", &record.editor);
    push(&mut pairs, "AB", &record.abstract_text);
    push(&mut pairs, "N2", &record.abstract_text2);
    for keyword in &record.keywords {
        pairs.push(("KW", keyword));
    }
    push(&mut pairs, "DA", &record.date);
    push(&mut pairs, "Y1", &record.primary_date);
    push(&mut pairs, "Y2", &record.access_date);
    push(&mut pairs, "PY", &record.publication_year);
    push(&mut pairs, "SN", &record.isbn_issn);
    push(&mut pairs, "DO", &record.doi);
    push(&mut pairs, "UR", &record.url);
    push(&mut pairs, "LA", &record.language);
    push(&mut pairs, "C1", &record.custom1);
    push(&mut pairs, "C2", &record.custom2);
    push(&mut pairs, "C3", &record.custom3);
    push(&mut pairs, "C4", &record.custom4);
    push(&mut pairs, "C5", &record.custom5);
    push(&mut pairs, "JO", &record.periodical_name_jo);
    push(&mut pairs, "JF", &record.periodical_name_jf);
    push(&mut pairs, "JA", &record.periodical_abbreviation);
    push(&mut pairs, "J1", &record.periodical_user_abbreviation);
    push(&mut pairs, "J2", &record.alternate_title);
    push(&mut pairs, "PB", &record.publisher);
    push(&mut pairs, "PP", &record.publishing_place);
    push(&mut pairs, "VL", &record.volume_number);
    push(&mut pairs, "NV", &record.number_of_volumes);
    push(&mut pairs, "SP", &record.start_page);
    push(&mut pairs, "EP", &record.end_page);
    push(&mut pairs, "SE", &record.section);
    push(&mut pairs, "ET", &record.edition);
    push(&mut pairs, "VO", &record.publisher_standard_number);
    push(&mut pairs, "AN", &record.accession_number);

    // Stable sort keeps the relative order of repeated tags (AU, KW).
    pairs.sort_by_key(|(tag, _)| *tag);

    for (tag, value) in pairs {
        output.push_str(tag);
        output.push_str("  - ");
        output.push_str(value);
        output.push('\n');
    }
    output.push_str("ER  - \n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_ordering() {
        let mut record = RisRecord::new(RisType::JOUR);
        record.title = Some("Title 1".to_string());
        record.abstract_text = Some("Abs 1".to_string());
        record.authors = vec!["Lastname1, Firstname1".to_string(), "Lastname0, Firstname0".to_string()];
        record.publication_year = Some("2022".to_string());
        record.volume_number = Some("vol/1".to_string());

        let text = format_records(&[record]);
        assert_eq!(
            text,
            "TY  - JOUR\n\
             AB  - Abs 1\n\
             AU  - Lastname1, Firstname1\n\
             AU  - Lastname0, Firstname0\n\
             PY  - 2022\n\
             TI  - Title 1\n\
             VL  - vol/1\n\
             ER  - \n"
        );
    }

    #[test]
    fn test_empty_slots_are_dropped() {
        let mut record = RisRecord::new(RisType::BOOK);
        record.title = Some("T".to_string());
        record.publisher = Some(String::new());
        let text = format_records(&[record]);
        assert!(!text.contains("PB"));
    }

    #[test]
    fn test_record_separator() {
        let a = RisRecord::new(RisType::JOUR);
        let b = RisRecord::new(RisType::BOOK);
        let text = format_records(&[a, b]);
        assert_eq!(text, "TY  - JOUR\nER  - \n\nTY  - BOOK\nER  - \n");
    }

    #[test]
    fn test_round_trip_through_parser() {
        let mut record = RisRecord::new(RisType::CPAPER);
        record.title = Some("Towards Things".to_string());
        record.secondary_title = Some("14th Conf (ACR-22)".to_string());
        record.keywords = vec!["kw1".to_string(), "kw2".to_string()];
        let text = format_records(&[record.clone()]);
        let parsed: Vec<_> = crate::ris::RisParser::new(text.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, record.title);
        assert_eq!(parsed[0].keywords, record.keywords);
    }
}
