//! Localized labels for publication categories and types
//!
//! The exchange format carries human-readable labels next to the
//! stable codes. Labels are always resolved under an explicit
//! language; English is the fallback for languages without a
//! translation.

use labrec_domain::language::PublicationLanguage;
use labrec_domain::types::{PublicationCategory, PublicationType};

/// Localized label of a category.
pub fn category_label(category: PublicationCategory, language: PublicationLanguage) -> &'static str {
    use PublicationCategory as C;
    match language {
        PublicationLanguage::French => match category {
            C::Acl => "Articles dans des revues internationales ou nationales avec comit\u{e9} de lecture r\u{e9}pertori\u{e9}es dans les bases de donn\u{e9}es internationales",
            C::Acln => "Articles dans des revues internationales ou nationales avec comit\u{e9} de lecture non r\u{e9}pertori\u{e9}es dans les bases de donn\u{e9}es internationales",
            C::Ascl => "Articles dans des revues sans comit\u{e9} de lecture",
            C::CActi => "Communications avec actes dans un congr\u{e8}s international",
            C::CActn => "Communications avec actes dans un congr\u{e8}s national",
            C::CCom => "Communications orales sans actes dans un congr\u{e8}s international ou national",
            C::CAff => "Communications par affiche dans un congr\u{e8}s international ou national",
            C::Do => "Directions d'ouvrages ou de revues",
            C::Os => "Ouvrages scientifiques",
            C::Cos => "Chapitres d'ouvrages scientifiques",
            C::CInv => "Conf\u{e9}rences donn\u{e9}es \u{e0} l'invitation du comit\u{e9} d'organisation dans un congr\u{e8}s international ou national",
            C::Th => "Th\u{e8}ses (HDR, doctorat, master)",
            C::Bre => "Brevets",
            C::Pt => "Publications de transfert",
            C::Or => "Outils de recherche",
            C::Ov => "Ouvrages de vulgarisation",
            C::Cov => "Chapitres d'ouvrages de vulgarisation",
            C::Pv => "Publications de vulgarisation",
            C::Pat => "Productions artistiques th\u{e9}oris\u{e9}es",
            C::Ap => "Autres productions",
        },
        _ => match category {
            C::Acl => "Articles in international or national journals with selection committee and ranked in international databases",
            C::Acln => "Articles in international or national journals with selection committee and not ranked in international databases",
            C::Ascl => "Articles in international or national journals without selection committee",
            C::CActi => "Papers in the proceedings of an international conference",
            C::CActn => "Papers in the proceedings of a national conference",
            C::CCom => "Oral communications without proceeding in international or national conference",
            C::CAff => "Posters in international or national conference",
            C::Do => "Editor of books or journals",
            C::Os => "Scientific books",
            C::Cos => "Chapters in scientific books",
            C::CInv => "Keynotes in international or national conference",
            C::Th => "Theses (HDR, PHD, Master)",
            C::Bre => "Patents",
            C::Pt => "Publications for research transfer",
            C::Or => "Research tools",
            C::Ov => "Books for scientific culture dissemination",
            C::Cov => "Chapters in books for scientific culture dissemination",
            C::Pv => "Papers for scientific culture dissemination",
            C::Pat => "Artistic research productions",
            C::Ap => "Other productions",
        },
    }
}

/// Localized label of a type, for the types that carry one in the
/// exchange format (theses and keynotes).
pub fn type_label(
    publication_type: PublicationType,
    language: PublicationLanguage,
) -> Option<&'static str> {
    use PublicationType as T;
    let label = match language {
        PublicationLanguage::French => match publication_type {
            T::HdrThesis => "Habilitations \u{e0} diriger des recherches",
            T::PhdThesis => "Th\u{e8}ses de doctorat",
            T::MasterThesis => "Th\u{e8}ses de master",
            T::InternationalKeynote => {
                "Conf\u{e9}rences invit\u{e9}es dans un congr\u{e8}s international"
            }
            T::NationalKeynote => "Conf\u{e9}rences invit\u{e9}es dans un congr\u{e8}s national",
            _ => return None,
        },
        _ => match publication_type {
            T::HdrThesis => "HDR theses",
            T::PhdThesis => "PhD theses",
            T::MasterThesis => "Master theses",
            T::InternationalKeynote => "Keynotes in international conference",
            T::NationalKeynote => "Keynotes in national conference",
            _ => return None,
        },
    };
    Some(label)
}

/// Ordinal decorator for a conference occurrence number, e.g. "th" in
/// "14th".
pub fn number_decorator(number: u32, language: PublicationLanguage) -> &'static str {
    match language {
        PublicationLanguage::French => {
            if number == 1 {
                "er"
            } else {
                "\u{e8}me"
            }
        }
        _ => match number % 100 {
            11..=13 => "th",
            _ => match number % 10 {
                1 => "st",
                2 => "nd",
                3 => "rd",
                _ => "th",
            },
        },
    }
}
