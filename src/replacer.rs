// WHY: Single linear scan over the source keeps the round-trip invariant
// trivially true: unmatched stretches are copied verbatim, byte for byte

use anyhow::Result;
use tracing::debug;

use crate::glossary::Glossary;
use crate::matcher::UuidMatcher;
use crate::template::PlaceholderTemplate;

/// Result of rewriting one document.
#[derive(Debug)]
pub struct Replacement {
    /// The rewritten text, identical to the source except at replaced spans
    pub rewritten: String,
    /// Placeholder assignments in first-appearance order
    pub glossary: Glossary,
    /// Total occurrences replaced (counting repeats)
    pub occurrences: usize,
}

/// Rewrite `text`, replacing every UUID occurrence with its placeholder.
pub fn replace_text(text: &str, template: &PlaceholderTemplate) -> Result<Replacement> {
    let matcher = UuidMatcher::new()?;
    Ok(replace_text_with(&matcher, text, template))
}

/// Rewrite `text` with an already-compiled matcher.
/// WHY: callers processing many documents compile the pattern once
pub fn replace_text_with(
    matcher: &UuidMatcher,
    text: &str,
    template: &PlaceholderTemplate,
) -> Replacement {
    let mut rewritten = String::with_capacity(text.len());
    let mut glossary = Glossary::new();
    let mut occurrences = 0usize;
    let mut last_end = 0usize;

    for occurrence in matcher.find_occurrences(text) {
        rewritten.push_str(&text[last_end..occurrence.start]);
        rewritten.push_str(glossary.assign(occurrence.literal, template));
        last_end = occurrence.end;
        occurrences += 1;
    }
    rewritten.push_str(&text[last_end..]);

    debug!(
        occurrences,
        distinct = glossary.len(),
        "replacement scan complete"
    );

    Replacement {
        rewritten,
        glossary,
        occurrences,
    }
}
