//! Link between a person and a publication, with the author's rank.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Position of a person in a publication's author list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Authorship {
    pub person_id: i64,
    pub publication_id: i64,
    /// Zero-based rank of the author in the author list.
    pub author_rank: u32,
}

impl Ord for Authorship {
    /// Rank ascending, then person id ascending, then publication id
    /// descending. The descending publication id matches the historical
    /// catalog ordering and is relied upon by consumers.
    fn cmp(&self, other: &Self) -> Ordering {
        self.author_rank
            .cmp(&other.author_rank)
            .then_with(|| self.person_id.cmp(&other.person_id))
            .then_with(|| other.publication_id.cmp(&self.publication_id))
    }
}

impl PartialOrd for Authorship {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
