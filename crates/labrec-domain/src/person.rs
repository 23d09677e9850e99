//! Person identity as attached to publications.

use serde::{Deserialize, Serialize};

/// A publication author. Persons known to the catalog carry an
/// identifier; authors synthesized while importing external records do
/// not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// `true` when the person belongs to the laboratory.
    pub lab_member: bool,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            lab_member: false,
        }
    }

    /// "Last, First" form used in exchange files.
    pub fn last_first(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{}, {}", self.last_name, self.first_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_first() {
        assert_eq!(Person::new("Ada", "Lovelace").last_first(), "Lovelace, Ada");
        assert_eq!(Person::new("", "Lovelace").last_first(), "Lovelace");
        assert_eq!(Person::new("Ada", "").last_first(), "Ada");
    }
}
