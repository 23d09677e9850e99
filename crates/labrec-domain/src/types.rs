//! Publication types and categories
//!
//! The type is the fine-grained kind of a record; the category is the
//! coarse grouping used by the national research evaluation sheets.
//! The declaration order of the types reflects their importance, from
//! the most important (ordinal 0) to the least important.

use serde::{Deserialize, Serialize};

/// Coarse category of a publication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PublicationCategory {
    /// Articles in journals with selection committee, ranked in
    /// international databases.
    Acl,
    /// Articles in journals with selection committee, not ranked.
    Acln,
    /// Articles in journals without selection committee.
    Ascl,
    /// Papers in the proceedings of an international conference.
    CActi,
    /// Papers in the proceedings of a national conference.
    CActn,
    /// Oral communications without proceedings.
    CCom,
    /// Posters in conferences.
    CAff,
    /// Editor of books or journals.
    Do,
    /// Scientific books.
    Os,
    /// Chapters in scientific books.
    Cos,
    /// Keynotes in conferences.
    CInv,
    /// Theses (HDR, PhD, Master).
    Th,
    /// Patents.
    Bre,
    /// Publications for research transfer.
    Pt,
    /// Research tools.
    Or,
    /// Books for scientific culture dissemination.
    Ov,
    /// Chapters in books for scientific culture dissemination.
    Cov,
    /// Papers for scientific culture dissemination.
    Pv,
    /// Artistic research productions.
    Pat,
    /// Other productions.
    Ap,
}

impl PublicationCategory {
    /// Acronym of the category, as it travels in exchange records.
    pub fn acronym(self) -> &'static str {
        match self {
            Self::Acl => "ACL",
            Self::Acln => "ACLN",
            Self::Ascl => "ASCL",
            Self::CActi => "C_ACTI",
            Self::CActn => "C_ACTN",
            Self::CCom => "C_COM",
            Self::CAff => "C_AFF",
            Self::Do => "DO",
            Self::Os => "OS",
            Self::Cos => "COS",
            Self::CInv => "C_INV",
            Self::Th => "TH",
            Self::Bre => "BRE",
            Self::Pt => "PT",
            Self::Or => "OR",
            Self::Ov => "OV",
            Self::Cov => "COV",
            Self::Pv => "PV",
            Self::Pat => "PAT",
            Self::Ap => "AP",
        }
    }

    /// Does the category group papers published in journals?
    pub fn is_scientific_journal_paper(self) -> bool {
        matches!(self, Self::Acl | Self::Acln | Self::Ascl)
    }

    /// Does the category group papers published in conference events?
    pub fn is_scientific_event_paper(self) -> bool {
        matches!(
            self,
            Self::CActi | Self::CActn | Self::CCom | Self::CAff | Self::CInv
        )
    }
}

/// Fine-grained type of a publication.
///
/// The declaration order is the importance order used when sorting
/// lists of publications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PublicationType {
    InternationalJournalPaper,
    NationalJournalPaper,
    InternationalConferencePaper,
    NationalConferencePaper,
    InternationalOralCommunication,
    NationalOralCommunication,
    InternationalPoster,
    NationalPoster,
    InternationalJournalEdition,
    NationalJournalEdition,
    InternationalBook,
    NationalBook,
    InternationalBookChapter,
    NationalBookChapter,
    InternationalJournalPaperWithoutCommittee,
    NationalJournalPaperWithoutCommittee,
    InternationalKeynote,
    NationalKeynote,
    HdrThesis,
    PhdThesis,
    MasterThesis,
    InternationalPatent,
    EuropeanPatent,
    NationalPatent,
    ResearchTransferReport,
    ResearchTool,
    ScientificCultureBook,
    InternationalPresentation,
    NationalPresentation,
    ScientificCultureBookChapter,
    ScientificCulturePaper,
    InternationalScientificCulturePresentation,
    NationalScientificCulturePresentation,
    ArtisticProduction,
    TechnicalReport,
    ProjectReport,
    TeachingDocument,
    TutorialDocumentation,
    Other,
}

impl PublicationType {
    /// Categories that publications of this type may belong to.
    ///
    /// Journal papers belong to two categories; the effective one
    /// depends on the ranked status of the publication, see
    /// [`Self::category`].
    pub fn categories(self) -> &'static [PublicationCategory] {
        use PublicationCategory as C;
        match self {
            Self::InternationalJournalPaper | Self::NationalJournalPaper => &[C::Acl, C::Acln],
            Self::InternationalConferencePaper => &[C::CActi],
            Self::NationalConferencePaper => &[C::CActn],
            Self::InternationalOralCommunication | Self::NationalOralCommunication => &[C::CCom],
            Self::InternationalPoster | Self::NationalPoster => &[C::CAff],
            Self::InternationalJournalEdition | Self::NationalJournalEdition => &[C::Do],
            Self::InternationalBook | Self::NationalBook => &[C::Os],
            Self::InternationalBookChapter | Self::NationalBookChapter => &[C::Cos],
            Self::InternationalJournalPaperWithoutCommittee
            | Self::NationalJournalPaperWithoutCommittee => &[C::Ascl],
            Self::InternationalKeynote | Self::NationalKeynote => &[C::CInv],
            Self::HdrThesis | Self::PhdThesis | Self::MasterThesis => &[C::Th],
            Self::InternationalPatent | Self::EuropeanPatent | Self::NationalPatent => &[C::Bre],
            Self::ResearchTransferReport => &[C::Pt],
            Self::ResearchTool => &[C::Or],
            Self::ScientificCultureBook => &[C::Ov],
            Self::ScientificCultureBookChapter => &[C::Cov],
            Self::ScientificCulturePaper => &[C::Pv],
            Self::InternationalPresentation
            | Self::NationalPresentation
            | Self::InternationalScientificCulturePresentation
            | Self::NationalScientificCulturePresentation => &[C::Ap],
            Self::ArtisticProduction => &[C::Pat],
            Self::TechnicalReport
            | Self::ProjectReport
            | Self::TeachingDocument
            | Self::TutorialDocumentation
            | Self::Other => &[C::Ap],
        }
    }

    /// The effective category of a publication of this type.
    ///
    /// `ranked` is the ranked status of the publication for its
    /// publication year. It only matters for the types that map to two
    /// categories (journal papers: ACL when ranked, ACLN otherwise).
    pub fn category(self, ranked: bool) -> PublicationCategory {
        let categories = self.categories();
        if categories.len() > 1 {
            if ranked {
                categories[0]
            } else {
                categories[1]
            }
        } else {
            categories[0]
        }
    }

    /// Stable code of the type, as it travels in exchange records.
    pub fn code(self) -> &'static str {
        match self {
            Self::InternationalJournalPaper => "INTERNATIONAL_JOURNAL_PAPER",
            Self::NationalJournalPaper => "NATIONAL_JOURNAL_PAPER",
            Self::InternationalConferencePaper => "INTERNATIONAL_CONFERENCE_PAPER",
            Self::NationalConferencePaper => "NATIONAL_CONFERENCE_PAPER",
            Self::InternationalOralCommunication => "INTERNATIONAL_ORAL_COMMUNICATION",
            Self::NationalOralCommunication => "NATIONAL_ORAL_COMMUNICATION",
            Self::InternationalPoster => "INTERNATIONAL_POSTER",
            Self::NationalPoster => "NATIONAL_POSTER",
            Self::InternationalJournalEdition => "INTERNATIONAL_JOURNAL_EDITION",
            Self::NationalJournalEdition => "NATIONAL_JOURNAL_EDITION",
            Self::InternationalBook => "INTERNATIONAL_BOOK",
            Self::NationalBook => "NATIONAL_BOOK",
            Self::InternationalBookChapter => "INTERNATIONAL_BOOK_CHAPTER",
            Self::NationalBookChapter => "NATIONAL_BOOK_CHAPTER",
            Self::InternationalJournalPaperWithoutCommittee => {
                "INTERNATIONAL_JOURNAL_PAPER_WITHOUT_COMMITTEE"
            }
            Self::NationalJournalPaperWithoutCommittee => {
                "NATIONAL_JOURNAL_PAPER_WITHOUT_COMMITTEE"
            }
            Self::InternationalKeynote => "INTERNATIONAL_KEYNOTE",
            Self::NationalKeynote => "NATIONAL_KEYNOTE",
            Self::HdrThesis => "HDR_THESIS",
            Self::PhdThesis => "PHD_THESIS",
            Self::MasterThesis => "MASTER_THESIS",
            Self::InternationalPatent => "INTERNATIONAL_PATENT",
            Self::EuropeanPatent => "EUROPEAN_PATENT",
            Self::NationalPatent => "NATIONAL_PATENT",
            Self::ResearchTransferReport => "RESEARCH_TRANSFERT_REPORT",
            Self::ResearchTool => "RESEARCH_TOOL",
            Self::ScientificCultureBook => "SCIENTIFIC_CULTURE_BOOK",
            Self::InternationalPresentation => "INTERNATIONAL_PRESENTATION",
            Self::NationalPresentation => "NATIONAL_PRESENTATION",
            Self::ScientificCultureBookChapter => "SCIENTIFIC_CULTURE_BOOK_CHAPTER",
            Self::ScientificCulturePaper => "SCIENTIFIC_CULTURE_PAPER",
            Self::InternationalScientificCulturePresentation => {
                "INTERNATIONAL_SCIENTIFIC_CULTURE_PRESENTATION"
            }
            Self::NationalScientificCulturePresentation => {
                "NATIONAL_SCIENTIFIC_CULTURE_PRESENTATION"
            }
            Self::ArtisticProduction => "ARTISTIC_PRODUCTION",
            Self::TechnicalReport => "TECHNICAL_REPORT",
            Self::ProjectReport => "PROJECT_REPORT",
            Self::TeachingDocument => "TEACHING_DOCUMENT",
            Self::TutorialDocumentation => "TUTORIAL_DOCUMENTATION",
            Self::Other => "OTHER",
        }
    }

    /// Is the publication type related to an international support?
    pub fn is_international(self) -> bool {
        matches!(
            self,
            Self::InternationalJournalPaper
                | Self::InternationalConferencePaper
                | Self::InternationalOralCommunication
                | Self::InternationalPoster
                | Self::InternationalJournalEdition
                | Self::InternationalBook
                | Self::InternationalBookChapter
                | Self::InternationalJournalPaperWithoutCommittee
                | Self::InternationalKeynote
                | Self::InternationalPatent
                | Self::EuropeanPatent
                | Self::InternationalPresentation
                | Self::InternationalScientificCulturePresentation
        )
    }
}
