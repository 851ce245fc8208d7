use std::path::PathBuf;

/// Failure kinds for a single replace run.
/// WHY: every error is terminal for a local file transform, so the CLI maps
/// each kind straight to a non-zero exit with the failing path in the message
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("input file not found: {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read input {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write output {path}: {source}")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid placeholder template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },
}
