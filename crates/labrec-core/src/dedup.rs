//! Duplicate clustering of publications
//!
//! Titles are normalized before comparison, then scored by a pluggable
//! string-similarity measure. Publications whose scores reach the
//! threshold are considered probable duplicates; the clusters are the
//! connected components of that relation.

use std::cmp::Ordering;

use labrec_domain::publication::Publication;
use unicode_normalization::UnicodeNormalization;

/// Score above which two normalized titles are treated as duplicates.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.9;

/// A string-similarity measure over normalized text, scored in
/// `[0.0, 1.0]`.
pub trait NormalizedStringSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Sørensen–Dice bigram similarity, the default measure.
#[derive(Clone, Copy, Debug, Default)]
pub struct SorensenDice;

impl NormalizedStringSimilarity for SorensenDice {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::sorensen_dice(a, b)
    }
}

/// Ratcliff/Obershelp pattern-matching similarity, the alternative
/// measure. Scores `2*M / (|a|+|b|)` where `M` counts the characters
/// covered by recursively extracted longest common substrings.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatcliffObershelp;

impl NormalizedStringSimilarity for RatcliffObershelp {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let matches = matching_characters(&a, &b);
        2.0 * matches as f64 / (a.len() + b.len()) as f64
    }
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, length) = longest_common_substring(a, b);
    if length == 0 {
        return 0;
    }
    length
        + matching_characters(&a[..start_a], &b[..start_b])
        + matching_characters(&a[start_a + length..], &b[start_b + length..])
}

fn longest_common_substring(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut lengths = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut previous = 0;
        for (j, cb) in b.iter().enumerate() {
            let current = lengths[j + 1];
            if ca == cb {
                lengths[j + 1] = previous + 1;
                if lengths[j + 1] > best.2 {
                    best = (i + 1 - lengths[j + 1], j + 1 - lengths[j + 1], lengths[j + 1]);
                }
            } else {
                lengths[j + 1] = 0;
            }
            previous = current;
        }
    }
    best
}

/// Normalize free text for similarity comparison: NFKD decomposition,
/// ASCII alphanumerics and spaces only, lowercase, collapsed
/// whitespace.
pub fn normalize_for_comparison(value: &str) -> String {
    let filtered: String = value
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect();
    filtered
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pairwise duplicate detection over publication titles.
pub struct DuplicateDetector<S = SorensenDice> {
    similarity: S,
    threshold: f64,
}

impl Default for DuplicateDetector<SorensenDice> {
    fn default() -> Self {
        Self::new(SorensenDice, DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl<S: NormalizedStringSimilarity> DuplicateDetector<S> {
    pub fn new(similarity: S, threshold: f64) -> Self {
        Self {
            similarity,
            threshold,
        }
    }

    /// Similarity score of two raw strings, after normalization.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        self.similarity
            .similarity(&normalize_for_comparison(a), &normalize_for_comparison(b))
    }

    /// `true` when the two publications are probable duplicates. The
    /// comparison covers the title and, when present, the venue name.
    pub fn are_duplicates(&self, a: &Publication, b: &Publication) -> bool {
        self.score(&comparison_text(a), &comparison_text(b)) >= self.threshold
    }

    /// Group the publications into duplicate clusters, the connected
    /// components of the pairwise relation. Every publication appears
    /// in exactly one cluster; unique publications form singleton
    /// clusters. Clusters hold indices into the input slice.
    pub fn clusters(&self, publications: &[Publication]) -> Vec<Vec<usize>> {
        let mut assigned = vec![false; publications.len()];
        let mut clusters = Vec::new();
        for seed in 0..publications.len() {
            if assigned[seed] {
                continue;
            }
            assigned[seed] = true;
            let mut cluster = vec![seed];
            let mut cursor = 0;
            while cursor < cluster.len() {
                let current = cluster[cursor];
                cursor += 1;
                for (candidate, taken) in assigned.iter_mut().enumerate() {
                    if !*taken
                        && self.are_duplicates(&publications[current], &publications[candidate])
                    {
                        *taken = true;
                        cluster.push(candidate);
                    }
                }
            }
            clusters.push(cluster);
        }
        clusters
    }
}

/// Text compared when looking for duplicates: the title followed by
/// the venue name when the publication has one.
fn comparison_text(publication: &Publication) -> String {
    let venue = publication
        .journal()
        .map(|journal| journal.name())
        .or_else(|| publication.conference().map(|conference| conference.name()));
    match venue {
        Some(venue) => format!("{} {}", publication.title, venue),
        None => publication.title.clone(),
    }
}

/// Display order of publications: type, then year, then author list,
/// then id, all ascending. Used for grouping in lists, not for
/// duplicate detection.
pub fn display_order(a: &Publication, b: &Publication) -> Ordering {
    a.publication_type
        .cmp(&b.publication_type)
        .then_with(|| a.publication_year.cmp(&b.publication_year))
        .then_with(|| {
            let authors_a = a.authors.iter().map(|p| p.last_first());
            let authors_b = b.authors.iter().map(|p| p.last_first());
            authors_a.cmp(authors_b)
        })
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use labrec_domain::language::PublicationLanguage;
    use labrec_domain::person::Person;
    use labrec_domain::publication::PublicationDetails;
    use labrec_domain::types::PublicationType;
    use test_case::test_case;

    fn publication(id: i64, title: &str, year: i32) -> Publication {
        Publication {
            id,
            preferred_string_id: None,
            publication_type: PublicationType::Other,
            title: title.to_string(),
            abstract_text: None,
            keywords: Vec::new(),
            publication_date: None,
            publication_year: year,
            isbn: None,
            issn: None,
            doi: None,
            extra_url: None,
            video_url: None,
            dblp_url: None,
            pdf_path: None,
            award_path: None,
            major_language: PublicationLanguage::English,
            authors: Vec::new(),
            details: PublicationDetails::MiscDocument {
                number: None,
                how_published: Some("self published".to_string()),
                document_type: None,
                organization: None,
                publisher: None,
                address: None,
            },
        }
    }

    #[test_case("Caf\u{e9}s & Papers!", "cafes papers"; "diacritics and punctuation")]
    #[test_case("  Many   spaces\there ", "many spaces here"; "whitespace collapsed")]
    #[test_case("MiXeD CaSe", "mixed case"; "lowercased")]
    fn normalization(input: &str, expected: &str) {
        assert_eq!(normalize_for_comparison(input), expected);
    }

    #[test]
    fn test_identical_titles_score_one() {
        let detector = DuplicateDetector::default();
        assert_eq!(detector.score("On Systems", "On Systems"), 1.0);
        assert_eq!(detector.score("On Systems", "on SYSTEMS!"), 1.0);
    }

    #[test]
    fn test_ratcliff_obershelp_scores() {
        let measure = RatcliffObershelp;
        assert_eq!(measure.similarity("abc", "abc"), 1.0);
        assert_eq!(measure.similarity("abc", "xyz"), 0.0);
        // "mathematics" vs "matematica": common parts "mat", "emati",
        // 2*9/21.
        let score = measure.similarity("mathematics", "matematica");
        assert!((score - 18.0 / 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_clusters_are_connected_components() {
        let publications = vec![
            publication(1, "Deep Learning for Systems", 2020),
            publication(2, "Deep Learning for Systems!", 2020),
            publication(3, "A Completely Different Story", 2020),
            publication(4, "deep learning for systems", 2021),
        ];
        let detector = DuplicateDetector::default();
        let clusters = detector.clusters(&publications);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0], vec![0, 1, 3]);
        assert_eq!(clusters[1], vec![2]);
    }

    #[test]
    fn test_venue_separates_same_titled_publications() {
        use labrec_domain::journal::JournalRef;

        let journal_paper = |id: i64, venue: &str| {
            let mut p = publication(id, "A Survey", 2020);
            p.publication_type = PublicationType::InternationalJournalPaper;
            p.details = PublicationDetails::JournalPaper {
                journal: JournalRef::Placeholder {
                    name: venue.to_string(),
                    publisher: None,
                    isbn: None,
                    issn: None,
                },
                volume: None,
                number: None,
                pages: None,
                series: None,
            };
            p
        };
        let detector = DuplicateDetector::default();
        let a = journal_paper(1, "Journal of Optics");
        let b = journal_paper(2, "Annals of Botany");
        let c = journal_paper(3, "Journal of Optics");
        assert!(!detector.are_duplicates(&a, &b));
        assert!(detector.are_duplicates(&a, &c));
    }

    #[test]
    fn test_display_order() {
        let mut a = publication(10, "T", 2020);
        let mut b = publication(5, "T", 2020);
        // Same type, year, authors: id breaks the tie.
        assert_eq!(display_order(&a, &b), Ordering::Greater);

        b.publication_year = 2019;
        assert_eq!(display_order(&a, &b), Ordering::Greater);

        a.publication_type = PublicationType::InternationalJournalPaper;
        assert_eq!(display_order(&a, &b), Ordering::Less);

        let mut c = publication(1, "T", 2020);
        let mut d = publication(2, "T", 2020);
        c.authors = vec![Person::new("Ann", "Ba")];
        d.authors = vec![Person::new("Ann", "Ab")];
        assert_eq!(display_order(&c, &d), Ordering::Greater);
    }
}
