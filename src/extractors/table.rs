// src/extractors/table.rs
use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Extracted sections keyed by name, in the order they appear in the file.
///
/// A declared section with no content maps to an empty slice, so `get`
/// returning `None` always means the name was never declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTable {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl SectionTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a new, empty section. Returns `false` if the name is taken.
    pub(crate) fn open(&mut self, name: &str) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), Vec::new()));
        true
    }

    pub(crate) fn push_line(&mut self, name: &str, line: &str) {
        if let Some(&i) = self.index.get(name) {
            self.entries[i].1.push(line.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index.get(name).map(|&i| self.entries[i].1.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Content lines of `name` joined with newlines.
    pub fn joined(&self, name: &str) -> Option<String> {
        self.get(name).map(|lines| lines.join("\n"))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice()))
    }

    /// Copies the named sections, in the order given, into a new table.
    /// Fails with the first name that was never declared.
    pub fn select<'n, S: AsRef<str>>(&self, names: &'n [S]) -> Result<SectionTable, &'n str> {
        let mut selected = SectionTable::new();
        for name in names {
            let name = name.as_ref();
            let lines = self.get(name).ok_or(name)?;
            if selected.open(name) {
                for line in lines {
                    selected.push_line(name, line);
                }
            }
        }
        Ok(selected)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SectionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, lines) in &self.entries {
            map.serialize_entry(name, lines)?;
        }
        map.end()
    }
}
