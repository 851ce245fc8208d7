// WHY: Placeholder rendering is isolated from scanning so the CLI can accept
// arbitrary user templates without the replacer knowing about format strings

use crate::error::ReplaceError;

/// Default replacement template.
///
/// The double-comma fencing makes placeholders easy to spot (and grep for)
/// in rewritten logs.
pub const DEFAULT_TEMPLATE: &str = ",,UUID-{},,";

/// A placeholder template with exactly one `{}` slot for the counter.
///
/// The first distinct UUID gets ordinal 1. Ordinals render zero-padded to
/// three digits and widen naturally past 999.
#[derive(Debug, Clone)]
pub struct PlaceholderTemplate {
    prefix: String,
    suffix: String,
}

impl PlaceholderTemplate {
    /// Parse a template string, rejecting templates without exactly one slot.
    pub fn parse(template: &str) -> Result<Self, ReplaceError> {
        let Some((prefix, suffix)) = template.split_once("{}") else {
            return Err(ReplaceError::InvalidTemplate {
                template: template.to_string(),
                reason: "missing `{}` counter slot".to_string(),
            });
        };

        if suffix.contains("{}") {
            return Err(ReplaceError::InvalidTemplate {
                template: template.to_string(),
                reason: "more than one `{}` counter slot".to_string(),
            });
        }

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Render the placeholder for a 1-based ordinal.
    pub fn render(&self, ordinal: usize) -> String {
        format!("{}{:03}{}", self.prefix, ordinal, self.suffix)
    }
}

impl Default for PlaceholderTemplate {
    fn default() -> Self {
        // The default template is a compile-time constant known to parse
        Self::parse(DEFAULT_TEMPLATE).expect("default template is well-formed")
    }
}
