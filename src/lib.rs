pub mod error;
pub mod glossary;
pub mod matcher;
pub mod pipeline;
pub mod replacer;
pub mod template;

// Re-export main types for convenient access
pub use error::ReplaceError;
pub use glossary::{Glossary, GlossaryEntry};
pub use matcher::{UuidMatcher, UuidOccurrence};
pub use replacer::{replace_text, replace_text_with, Replacement};
pub use template::{PlaceholderTemplate, DEFAULT_TEMPLATE};

// Re-export pipeline entry points for CLI and integration tests
pub use pipeline::{
    generate_glossary_path, GlossaryFormat, InputSource, OutputSink, PipelineConfig, RunStats,
};
