// WHY: UUID recognition is pure lexical scanning; regex-automata's meta engine
// gives O(n) non-overlapping matches without any per-document compilation

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

/// Canonical UUID lexical form: 32 hex digits grouped 8-4-4-4-12,
/// case-insensitive, bounded by `\b` so tokens embedded in a larger word
/// (or groups with the wrong digit count) never match.
const UUID_PATTERN: &str = r"\b[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\b";

/// A matched UUID span in a source document.
///
/// `literal` borrows from the scanned text; multiple occurrences may carry
/// the same literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidOccurrence<'a> {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// The UUID exactly as it appears in the source
    pub literal: &'a str,
}

/// Compiled UUID matcher, reusable across documents.
pub struct UuidMatcher {
    pattern: Regex,
}

impl UuidMatcher {
    /// Compile the UUID pattern once.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(UUID_PATTERN)?;
        debug!("compiled UUID matcher");
        Ok(Self { pattern })
    }

    /// All UUID occurrences in `text`, in ascending non-overlapping span order.
    pub fn find_occurrences<'a>(&self, text: &'a str) -> Vec<UuidOccurrence<'a>> {
        self.pattern
            .find_iter(text)
            .map(|m| UuidOccurrence {
                start: m.start(),
                end: m.end(),
                literal: &text[m.start()..m.end()],
            })
            .collect()
    }
}
