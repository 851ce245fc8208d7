use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::template::PlaceholderTemplate;

/// One glossary line: the placeholder and the UUID it stands for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub placeholder: String,
    pub uuid: String,
}

/// Mapping from UUID literal to its assigned placeholder.
///
/// Entry order is order of first appearance in the document; a UUID is
/// assigned exactly one placeholder for the lifetime of the glossary.
#[derive(Debug, Default)]
pub struct Glossary {
    /// Entries in first-appearance order
    entries: Vec<GlossaryEntry>,
    /// UUID literal -> index into `entries`
    by_uuid: HashMap<String, usize>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the placeholder for `uuid`, minting the next one on first sight.
    /// WHY: single entry point for assignment keeps the stable-mapping
    /// invariant (same UUID never gets two placeholders within a run)
    pub fn assign(&mut self, uuid: &str, template: &PlaceholderTemplate) -> &str {
        let index = match self.by_uuid.get(uuid) {
            Some(&index) => index,
            None => {
                let index = self.entries.len();
                let placeholder = template.render(index + 1);
                self.by_uuid.insert(uuid.to_string(), index);
                self.entries.push(GlossaryEntry {
                    placeholder,
                    uuid: uuid.to_string(),
                });
                index
            }
        };
        &self.entries[index].placeholder
    }

    /// Look up the placeholder already assigned to `uuid`, if any.
    pub fn get(&self, uuid: &str) -> Option<&str> {
        self.by_uuid
            .get(uuid)
            .map(|&index| self.entries[index].placeholder.as_str())
    }

    /// Entries in first-appearance order.
    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the glossary as text, one `# <placeholder> -> <uuid>` line per
    /// entry in first-appearance order.
    pub fn render_text(&self) -> String {
        let mut rendered = String::new();
        for entry in &self.entries {
            rendered.push_str(&format!("# {} -> {}\n", entry.placeholder, entry.uuid));
        }
        rendered
    }

    /// Render the glossary as a pretty JSON array of entries.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Substitute placeholders back into `rewritten`, reconstructing the text
    /// the glossary was built from.
    ///
    /// Longest placeholders are substituted first so a placeholder that is a
    /// prefix of another cannot clobber it.
    pub fn restore(&self, rewritten: &str) -> String {
        let mut order: Vec<&GlossaryEntry> = self.entries.iter().collect();
        order.sort_by(|a, b| b.placeholder.len().cmp(&a.placeholder.len()));

        let mut restored = rewritten.to_string();
        for entry in order {
            restored = restored.replace(&entry.placeholder, &entry.uuid);
        }
        restored
    }
}
