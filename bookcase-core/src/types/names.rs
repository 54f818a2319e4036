//! Static id -> display name lookup tables

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable lookup from an identifier to its display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NameTable<Id: Ord> {
    names: BTreeMap<Id, String>,
}

impl<Id: Ord> Default for NameTable<Id> {
    fn default() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }
}

impl<Id: Ord> NameTable<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous name for the id
    pub fn with(mut self, id: impl Into<Id>, name: impl Into<String>) -> Self {
        self.names.insert(id.into(), name.into());
        self
    }

    pub fn get(&self, id: &Id) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.names.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries ordered by display name, then by id
    pub fn entries(&self) -> Vec<(&Id, &str)> {
        let mut entries: Vec<_> = self
            .names
            .iter()
            .map(|(id, name)| (id, name.as_str()))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl<Id: Ord> FromIterator<(Id, String)> for NameTable<Id> {
    fn from_iter<I: IntoIterator<Item = (Id, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AuthorId;

    #[test]
    fn test_entries_sorted_by_name() {
        let table: NameTable<AuthorId> = NameTable::new()
            .with("wells", "H. G. Wells")
            .with("austen", "Jane Austen")
            .with("verne", "Jules Verne");

        let names: Vec<&str> = table.entries().into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["H. G. Wells", "Jane Austen", "Jules Verne"]);
        assert_eq!(table.get(&AuthorId::new("austen")), Some("Jane Austen"));
        assert_eq!(table.get(&AuthorId::new("homer")), None);
    }
}
