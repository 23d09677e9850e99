//! RIS record data structures

/// RIS reference type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum RisType {
    ABST,    // Abstract
    ADVS,    // Audiovisual material
    AGGR,    // Aggregated Database
    ANCIENT, // Ancient Text
    ART,     // Art Work
    BILL,    // Bill
    BLOG,    // Blog
    BOOK,    // Whole book
    CASE,    // Case
    CHAP,    // Book chapter
    CHART,   // Chart
    CLSWK,   // Classical Work
    COMP,    // Computer program
    CONF,    // Conference proceeding
    CPAPER,  // Conference paper
    CTLG,    // Catalog
    DATA,    // Data file
    DBASE,   // Online Database
    DICT,    // Dictionary
    EBOOK,   // Electronic Book
    ECHAP,   // Electronic Book Section
    EDBOOK,  // Edited Book
    EJOUR,   // Electronic Article
    ELEC,    // Web Page
    ENCYC,   // Encyclopedia
    EQUA,    // Equation
    FIGURE,  // Figure
    GEN,     // Generic
    GOVDOC,  // Government Document
    GRANT,   // Grant
    HEAR,    // Hearing
    ICOMM,   // Internet Communication
    INPR,    // In Press
    JFULL,   // Journal (full)
    JOUR,    // Journal
    LEGAL,   // Legal Rule or Regulation
    MANSCPT, // Manuscript
    MAP,     // Map
    MGZN,    // Magazine article
    MPCT,    // Motion picture
    MULTI,   // Online Multimedia
    MUSIC,   // Music score
    NEWS,    // Newspaper
    PAMP,    // Pamphlet
    PAT,     // Patent
    PCOMM,   // Personal communication
    RPRT,    // Report
    SER,     // Serial publication
    SLIDE,   // Slide
    SOUND,   // Sound recording
    STAND,   // Standard
    STAT,    // Statute
    THES,    // Thesis/Dissertation
    UNBILL,  // Unenacted Bill
    UNPB,    // Unpublished work
    VIDEO,   // Video recording
    Unknown, // Unknown type
}

impl RisType {
    /// Parse a RIS type code, `Unknown` when unrecognized.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "ABST" => Self::ABST,
            "ADVS" => Self::ADVS,
            "AGGR" => Self::AGGR,
            "ANCIENT" => Self::ANCIENT,
            "ART" => Self::ART,
            "BILL" => Self::BILL,
            "BLOG" => Self::BLOG,
            "BOOK" => Self::BOOK,
            "CASE" => Self::CASE,
            "CHAP" => Self::CHAP,
            "CHART" => Self::CHART,
            "CLSWK" => Self::CLSWK,
            "COMP" => Self::COMP,
            "CONF" => Self::CONF,
            "CPAPER" => Self::CPAPER,
            "CTLG" => Self::CTLG,
            "DATA" => Self::DATA,
            "DBASE" => Self::DBASE,
            "DICT" => Self::DICT,
            "EBOOK" => Self::EBOOK,
            "ECHAP" => Self::ECHAP,
            "EDBOOK" => Self::EDBOOK,
            "EJOUR" => Self::EJOUR,
            "ELEC" => Self::ELEC,
            "ENCYC" => Self::ENCYC,
            "EQUA" => Self::EQUA,
            "FIGURE" => Self::FIGURE,
            "GEN" => Self::GEN,
            "GOVDOC" => Self::GOVDOC,
            "GRANT" => Self::GRANT,
            "HEAR" => Self::HEAR,
            "ICOMM" => Self::ICOMM,
            "INPR" => Self::INPR,
            "JFULL" => Self::JFULL,
            "JOUR" => Self::JOUR,
            "LEGAL" => Self::LEGAL,
            "MANSCPT" => Self::MANSCPT,
            "MAP" => Self::MAP,
            "MGZN" => Self::MGZN,
            "MPCT" => Self::MPCT,
            "MULTI" => Self::MULTI,
            "MUSIC" => Self::MUSIC,
            "NEWS" => Self::NEWS,
            "PAMP" => Self::PAMP,
            "PAT" => Self::PAT,
            "PCOMM" => Self::PCOMM,
            "RPRT" => Self::RPRT,
            "SER" => Self::SER,
            "SLIDE" => Self::SLIDE,
            "SOUND" => Self::SOUND,
            "STAND" => Self::STAND,
            "STAT" => Self::STAT,
            "THES" => Self::THES,
            "UNBILL" => Self::UNBILL,
            "UNPB" => Self::UNPB,
            "VIDEO" => Self::VIDEO,
            _ => Self::Unknown,
        }
    }

    /// Code emitted on the `TY` line.
    pub fn code(self) -> &'static str {
        match self {
            Self::ABST => "ABST",
            Self::ADVS => "ADVS",
            Self::AGGR => "AGGR",
            Self::ANCIENT => "ANCIENT",
            Self::ART => "ART",
            Self::BILL => "BILL",
            Self::BLOG => "BLOG",
            Self::BOOK => "BOOK",
            Self::CASE => "CASE",
            Self::CHAP => "CHAP",
            Self::CHART => "CHART",
            Self::CLSWK => "CLSWK",
            Self::COMP => "COMP",
            Self::CONF => "CONF",
            Self::CPAPER => "CPAPER",
            Self::CTLG => "CTLG",
            Self::DATA => "DATA",
            Self::DBASE => "DBASE",
            Self::DICT => "DICT",
            Self::EBOOK => "EBOOK",
            Self::ECHAP => "ECHAP",
            Self::EDBOOK => "EDBOOK",
            Self::EJOUR => "EJOUR",
            Self::ELEC => "ELEC",
            Self::ENCYC => "ENCYC",
            Self::EQUA => "EQUA",
            Self::FIGURE => "FIGURE",
            Self::GEN => "GEN",
            Self::GOVDOC => "GOVDOC",
            Self::GRANT => "GRANT",
            Self::HEAR => "HEAR",
            Self::ICOMM => "ICOMM",
            Self::INPR => "INPR",
            Self::JFULL => "JFULL",
            Self::JOUR => "JOUR",
            Self::LEGAL => "LEGAL",
            Self::MANSCPT => "MANSCPT",
            Self::MAP => "MAP",
            Self::MGZN => "MGZN",
            Self::MPCT => "MPCT",
            Self::MULTI => "MULTI",
            Self::MUSIC => "MUSIC",
            Self::NEWS => "NEWS",
            Self::PAMP => "PAMP",
            Self::PAT => "PAT",
            Self::PCOMM => "PCOMM",
            Self::RPRT => "RPRT",
            Self::SER => "SER",
            Self::SLIDE => "SLIDE",
            Self::SOUND => "SOUND",
            Self::STAND => "STAND",
            Self::STAT => "STAT",
            Self::THES => "THES",
            Self::UNBILL => "UNBILL",
            Self::UNPB => "UNPB",
            Self::VIDEO => "VIDEO",
            Self::Unknown => "GEN",
        }
    }
}

/// One RIS record: a type code and the named slots used by the
/// catalog. Slots the engine never reads are dropped at parse time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RisRecord {
    pub record_type: Option<RisType>,
    /// Reference id of the record (`ID`).
    pub reference_id: Option<String>,
    pub title: Option<String>,            // TI
    pub alternate_title: Option<String>,  // J2
    pub primary_title: Option<String>,    // T1
    pub secondary_title: Option<String>,  // T2
    pub tertiary_title: Option<String>,   // T3
    pub book_title: Option<String>,       // BT
    pub authors: Vec<String>,             // AU
    pub editor: Option<String>,           // ED
    pub abstract_text: Option<String>,    // AB
    pub abstract_text2: Option<String>,   // N2
    pub keywords: Vec<String>,            // KW
    pub date: Option<String>,             // DA
    pub primary_date: Option<String>,     // Y1
    pub access_date: Option<String>,      // Y2
    pub publication_year: Option<String>, // PY
    pub isbn_issn: Option<String>,        // SN
    pub doi: Option<String>,              // DO
    pub url: Option<String>,              // UR
    pub language: Option<String>,         // LA
    pub custom1: Option<String>,          // C1
    pub custom2: Option<String>,          // C2
    pub custom3: Option<String>,          // C3
    pub custom4: Option<String>,          // C4
    pub custom5: Option<String>,          // C5
    pub periodical_name_jo: Option<String>, // JO
    pub periodical_name_jf: Option<String>, // JF
    pub periodical_abbreviation: Option<String>, // JA
    pub periodical_user_abbreviation: Option<String>, // J1
    pub publisher: Option<String>,        // PB
    pub publishing_place: Option<String>, // PP
    pub volume_number: Option<String>,    // VL
    pub number_of_volumes: Option<String>, // NV
    pub start_page: Option<String>,       // SP
    pub end_page: Option<String>,         // EP
    pub section: Option<String>,          // SE
    pub edition: Option<String>,          // ET
    pub publisher_standard_number: Option<String>, // VO
    pub accession_number: Option<String>, // AN
}

impl RisRecord {
    pub fn new(record_type: RisType) -> Self {
        Self {
            record_type: Some(record_type),
            ..Self::default()
        }
    }

    /// Reference id of the record for error reporting, `?` when the
    /// record carries none.
    pub fn reference_id_or_unknown(&self) -> &str {
        self.reference_id.as_deref().unwrap_or("?")
    }

    /// Store the value of a tag. Unknown tags are ignored; repeated
    /// single-valued tags keep the first value.
    pub fn set_tag(&mut self, tag: &str, value: String) {
        let slot = match tag {
            "ID" => &mut self.reference_id,
            "TI" => &mut self.title,
            "T1" => &mut self.primary_title,
            "T2" => &mut self.secondary_title,
            "T3" => &mut self.tertiary_title,
            "BT" => &mut self.book_title,
            "AU" | "A1" => {
                self.authors.push(value);
                return;
            }
            "ED" | "A2" => &mut self.editor,
            "AB" => &mut self.abstract_text,
            "N2" => &mut self.abstract_text2,
            "KW" => {
                self.keywords.push(value);
                return;
            }
            "DA" => &mut self.date,
            "Y1" => &mut self.primary_date,
            "Y2" => &mut self.access_date,
            "PY" => &mut self.publication_year,
            "SN" => &mut self.isbn_issn,
            "DO" => &mut self.doi,
            "UR" => &mut self.url,
            "LA" => &mut self.language,
            "C1" => &mut self.custom1,
            "C2" => &mut self.custom2,
            "C3" => &mut self.custom3,
            "C4" => &mut self.custom4,
            "C5" => &mut self.custom5,
            "JO" => &mut self.periodical_name_jo,
            "JF" => &mut self.periodical_name_jf,
            "JA" => &mut self.periodical_abbreviation,
            "J1" => &mut self.periodical_user_abbreviation,
            "J2" => &mut self.alternate_title,
            "PB" => &mut self.publisher,
            "PP" | "CY" => &mut self.publishing_place,
            "VL" => &mut self.volume_number,
            "NV" => &mut self.number_of_volumes,
            "SP" => &mut self.start_page,
            "EP" => &mut self.end_page,
            "SE" => &mut self.section,
            "ET" => &mut self.edition,
            "VO" => &mut self.publisher_standard_number,
            "AN" => &mut self.accession_number,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes() {
        assert_eq!(RisType::parse("JOUR"), RisType::JOUR);
        assert_eq!(RisType::parse(" cpaper "), RisType::CPAPER);
        assert_eq!(RisType::parse("XXXX"), RisType::Unknown);
        assert_eq!(RisType::CPAPER.code(), "CPAPER");
    }

    #[test]
    fn test_set_tag() {
        let mut record = RisRecord::new(RisType::JOUR);
        record.set_tag("TI", "A title".to_string());
        record.set_tag("TI", "Ignored".to_string());
        record.set_tag("AU", "Smith, John".to_string());
        record.set_tag("AU", "Doe, Jane".to_string());
        record.set_tag("ZZ", "Dropped".to_string());
        assert_eq!(record.title.as_deref(), Some("A title"));
        assert_eq!(record.authors, vec!["Smith, John", "Doe, Jane"]);
    }
}
