//! Minimal INI document support
//!
//! The persisted configuration is an INI-style file: `[SECTION]` headers
//! followed by flat `key = value` lines. The document keeps section and
//! key order, so loading a file and writing it straight back reproduces
//! the same content.

use crate::error::{PowerdockError, Result};

/// One named section with its key/value entries, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a value, replacing an existing entry or appending a new one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An ordered collection of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Get or create a section by name.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        if let Some(idx) = self.sections.iter().position(|s| s.name == name) {
            &mut self.sections[idx]
        } else {
            self.sections.push(Section::new(name));
            self.sections.last_mut().unwrap()
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Parse INI text. Blank lines and `;`/`#` comment lines are skipped.
    pub fn parse(input: &str) -> Result<Self> {
        let mut doc = Document::new();
        let mut current: Option<usize> = None;

        for (lineno, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                doc.sections.push(Section::new(name.trim()));
                current = Some(doc.sections.len() - 1);
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                PowerdockError::Parse(format!("line {}: expected 'key = value'", lineno + 1))
            })?;

            let idx = current.ok_or_else(|| {
                PowerdockError::Parse(format!("line {}: entry before any section", lineno + 1))
            })?;
            doc.sections[idx]
                .entries
                .push((key.trim().to_string(), value.trim().to_string()));
        }

        Ok(doc)
    }

    /// Render the document back to INI text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in section.entries() {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }
}
