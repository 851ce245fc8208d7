// WHY: Orchestrates one run end to end: read everything, rewrite in memory,
// only then write artifacts, so a failed run never leaves output behind that
// looks successful

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, info};

use crate::error::ReplaceError;
use crate::glossary::Glossary;
use crate::replacer::replace_text;
use crate::template::PlaceholderTemplate;

/// Separator line between a rewritten document and an appended glossary.
pub const GLOSSARY_SEPARATOR: &str = "##########";

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn display(&self) -> String {
        match self {
            InputSource::Stdin => "-".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Where the rewritten document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

/// Glossary rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GlossaryFormat {
    /// One `# <placeholder> -> <uuid>` line per entry
    Text,
    /// JSON array of `{placeholder, uuid}` objects
    Json,
}

/// Per-run configuration assembled by the CLI.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub template: PlaceholderTemplate,
    /// Explicit glossary destination; derived from the output path when unset
    pub glossary_out: Option<PathBuf>,
    pub glossary_format: GlossaryFormat,
    /// Append the glossary to the rewritten document instead of writing a
    /// second artifact
    pub append_glossary: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            template: PlaceholderTemplate::default(),
            glossary_out: None,
            glossary_format: GlossaryFormat::Text,
            append_glossary: false,
        }
    }
}

/// Per-run statistics.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Input path as given (`-` for stdin)
    pub input: String,
    /// Bytes of source text read
    pub bytes_read: u64,
    /// Lines of source text read
    pub lines_read: u64,
    /// Total UUID occurrences replaced (counting repeats)
    pub occurrences_replaced: u64,
    /// Distinct UUIDs found (= glossary entries)
    pub distinct_uuids: u64,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Generate the glossary file path from the rewritten document's path.
/// WHY: sibling naming keeps the two artifacts of a run next to each other
pub fn generate_glossary_path(output_path: &Path) -> PathBuf {
    let mut glossary_path = output_path.to_path_buf();
    let file_stem = glossary_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    glossary_path.set_file_name(format!("{file_stem}_glossary.txt"));
    glossary_path
}

/// Run one replace pass: read `input`, rewrite, emit artifacts per `config`.
///
/// Artifact routing:
/// - file output: rewritten text to the file, glossary to `glossary_out` or
///   the derived sibling path, unless `append_glossary` folds both into one
/// - stdout output: single stream, glossary appended after a separator line
///   unless `glossary_out` redirects it to a file
pub async fn run(
    input: InputSource,
    output: OutputSink,
    config: &PipelineConfig,
) -> Result<RunStats> {
    let started = Instant::now();

    let text = read_input(&input).await?;
    debug!(bytes = text.len(), input = %input.display(), "source document read");

    let replacement = replace_text(&text, &config.template)?;
    info!(
        occurrences = replacement.occurrences,
        distinct = replacement.glossary.len(),
        "scan complete"
    );

    let glossary_rendered = render_glossary(&replacement.glossary, config.glossary_format, &output)?;

    match &output {
        OutputSink::File(path) => {
            if config.append_glossary && config.glossary_out.is_none() {
                let combined = append_glossary(&replacement.rewritten, &glossary_rendered);
                write_artifact(path, &combined).await?;
            } else {
                write_artifact(path, &replacement.rewritten).await?;
                let glossary_path = config
                    .glossary_out
                    .clone()
                    .unwrap_or_else(|| generate_glossary_path(path));
                write_artifact(&glossary_path, &glossary_rendered).await?;
                info!(glossary = %glossary_path.display(), "glossary written");
            }
        }
        OutputSink::Stdout => {
            if let Some(glossary_path) = &config.glossary_out {
                write_stdout(&replacement.rewritten).await?;
                write_artifact(glossary_path, &glossary_rendered).await?;
                info!(glossary = %glossary_path.display(), "glossary written");
            } else {
                let combined = append_glossary(&replacement.rewritten, &glossary_rendered);
                write_stdout(&combined).await?;
            }
        }
    }

    Ok(RunStats {
        input: input.display(),
        bytes_read: text.len() as u64,
        lines_read: text.lines().count() as u64,
        occurrences_replaced: replacement.occurrences as u64,
        distinct_uuids: replacement.glossary.len() as u64,
        processing_time_ms: started.elapsed().as_millis() as u64,
    })
}

/// Write run stats as pretty JSON.
pub async fn write_stats(path: &Path, stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;
    write_artifact(path, &content).await?;
    info!(stats = %path.display(), "run stats written");
    Ok(())
}

async fn read_input(input: &InputSource) -> Result<String, ReplaceError> {
    match input {
        InputSource::Stdin => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|source| ReplaceError::InputUnreadable {
                    path: PathBuf::from("-"),
                    source,
                })?;
            Ok(text)
        }
        InputSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| match source.kind() {
                    ErrorKind::NotFound => ReplaceError::InputNotFound {
                        path: path.clone(),
                        source,
                    },
                    _ => ReplaceError::InputUnreadable {
                        path: path.clone(),
                        source,
                    },
                })
        }
    }
}

fn render_glossary(
    glossary: &Glossary,
    format: GlossaryFormat,
    output: &OutputSink,
) -> Result<String, ReplaceError> {
    match format {
        GlossaryFormat::Text => Ok(glossary.render_text()),
        GlossaryFormat::Json => {
            glossary
                .render_json()
                .map_err(|source| ReplaceError::OutputUnwritable {
                    path: match output {
                        OutputSink::Stdout => PathBuf::from("-"),
                        OutputSink::File(path) => path.clone(),
                    },
                    source: std::io::Error::new(ErrorKind::Other, source),
                })
        }
    }
}

/// Fold the glossary into the rewritten document after a separator line.
fn append_glossary(rewritten: &str, glossary_rendered: &str) -> String {
    format!("{rewritten}\n{GLOSSARY_SEPARATOR}\n{glossary_rendered}")
}

async fn write_artifact(path: &Path, content: &str) -> Result<(), ReplaceError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| ReplaceError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_stdout(content: &str) -> Result<(), ReplaceError> {
    let unwritable = |source| ReplaceError::OutputUnwritable {
        path: PathBuf::from("-"),
        source,
    };

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(content.as_bytes())
        .await
        .map_err(unwritable)?;
    stdout.flush().await.map_err(unwritable)
}
