//! Result history.
//!
//! Append-only list of formatted results. Entries are never edited; the
//! list is cleared or exported as a whole.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Plain text form: one entry per line, no header.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(entry);
            text.push('\n');
        }
        text
    }

    /// Writes the history to `path` as UTF-8 text, replacing any existing file.
    pub fn export(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_text())?;
        tracing::info!(path = %path.display(), entries = self.len(), "exported history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut history = History::new();
        history.append("first");
        history.append(String::from("second"));
        assert_eq!(history.entries(), &["first", "second"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.append("entry");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.to_text(), "");
    }

    #[test]
    fn test_to_text_one_line_per_entry() {
        let mut history = History::new();
        history.append("Circle Center: X=0.0000, Y=0.0000");
        history.append("Custom Location: X=8.0000, Y=3.0000");
        assert_eq!(
            history.to_text(),
            "Circle Center: X=0.0000, Y=0.0000\nCustom Location: X=8.0000, Y=3.0000\n"
        );
    }
}
