//! Error taxonomy for the frequency pipeline.
//!
//! Per-token drops (missing lemma, excluded tag, non-alphabetic lemma) are
//! routine filtering and never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of the external annotation step.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The annotation service could not be reached.
    #[error("annotation service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The annotation service answered with an error status.
    #[error("annotation service returned {status}: {body}")]
    Service { status: u16, body: String },

    /// The annotation output could not be interpreted.
    #[error("malformed annotation output at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// Pre-computed annotations could not be read.
    #[error("cannot read annotations from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal pipeline failure. Any of these aborts the run without output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input unavailable: {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("annotation failed: {0}")]
    Annotation(#[from] AnnotationError),

    #[error("export failed: {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PipelineError {
    /// Process exit code, distinct per failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputUnavailable { .. } => 2,
            Self::Annotation(_) => 3,
            Self::Export { .. } => 4,
            Self::Config(_) => 64,
        }
    }
}
