//! Venue quality rankings

use serde::{Deserialize, Serialize};

/// Quartile ranking of a journal in an indexing database
/// (Scimago, Web of Science).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuartileRanking {
    /// Not ranked.
    NR,
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Default for QuartileRanking {
    fn default() -> Self {
        Self::NR
    }
}

impl QuartileRanking {
    pub fn code(self) -> &'static str {
        match self {
            Self::NR => "NR",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "NR" => Some(Self::NR),
            "Q1" => Some(Self::Q1),
            "Q2" => Some(Self::Q2),
            "Q3" => Some(Self::Q3),
            "Q4" => Some(Self::Q4),
            _ => None,
        }
    }
}

/// CORE ranking of a conference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreRanking {
    /// Not ranked.
    NR,
    D,
    C,
    B,
    A,
    AStar,
}

impl Default for CoreRanking {
    fn default() -> Self {
        Self::NR
    }
}

impl CoreRanking {
    /// `true` for the "not ranked" value.
    pub fn is_nr(self) -> bool {
        matches!(self, Self::NR)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::NR => "NR",
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::AStar => "A*",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "NR" => Some(Self::NR),
            "D" => Some(Self::D),
            "C" => Some(Self::C),
            "B" => Some(Self::B),
            "A" => Some(Self::A),
            "A*" | "ASTAR" | "A_STAR" => Some(Self::AStar),
            _ => None,
        }
    }
}
