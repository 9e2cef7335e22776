//! Configuration types for the frequency pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::processing::StopwordSet;
use crate::{
    DEFAULT_INPUT_FILE, DEFAULT_MIN_FREQUENCY, DEFAULT_OUTPUT_PREFIX, DEFAULT_PORT,
    DEFAULT_UDPIPE_MODEL, DEFAULT_UDPIPE_TIMEOUT_SECS, DEFAULT_UDPIPE_URL,
};

/// Global pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmataConfig {
    /// Plain-text corpus to analyze
    pub input_path: PathBuf,

    /// Directory the frequency table is written to
    pub output_dir: PathBuf,

    /// File name prefix of the frequency table
    pub output_prefix: String,

    /// Minimum occurrences for a `(lemma, pos)` pair to be reported
    pub min_frequency: u64,

    /// Whether stopwords are excluded from counting
    pub remove_stopwords: bool,

    /// Alternative stopword list, one lemma per line
    pub stopwords_file: Option<PathBuf>,

    /// Annotation service settings
    pub annotator: AnnotatorConfig,

    /// Listening port in serve mode
    pub port: u16,
}

impl Default for LemmataConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from("."),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            min_frequency: DEFAULT_MIN_FREQUENCY,
            remove_stopwords: false,
            stopwords_file: None,
            annotator: AnnotatorConfig::default(),
            port: DEFAULT_PORT,
        }
    }
}

impl LemmataConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            input_path: std::env::var("LEMMATA_INPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT_FILE)),
            output_dir: std::env::var("LEMMATA_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            output_prefix: std::env::var("LEMMATA_OUTPUT_PREFIX")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PREFIX.to_string()),
            min_frequency: std::env::var("LEMMATA_MIN_FREQUENCY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MIN_FREQUENCY),
            remove_stopwords: false,
            stopwords_file: std::env::var("LEMMATA_STOPWORDS_FILE").ok().map(PathBuf::from),
            annotator: AnnotatorConfig::from_env(),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Reject settings the pipeline cannot honor.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.min_frequency == 0 {
            return Err(PipelineError::Config(
                "minimum frequency must be at least 1".to_string(),
            ));
        }
        if self.output_prefix.trim().is_empty() {
            return Err(PipelineError::Config("output prefix is empty".to_string()));
        }
        Ok(())
    }

    /// Load the stopword set this configuration points at.
    pub fn load_stopwords(&self) -> Result<StopwordSet, PipelineError> {
        match &self.stopwords_file {
            Some(path) => StopwordSet::from_file(path).map_err(|source| {
                PipelineError::Config(format!(
                    "cannot read stopword list {}: {}",
                    path.display(),
                    source
                ))
            }),
            None => Ok(StopwordSet::latin()),
        }
    }
}

/// Settings for the external annotator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Base URL of a UDPipe-compatible REST service
    pub udpipe_url: String,

    /// Model name requested from the service
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Pre-computed CoNLL-U annotations used instead of the service
    pub conllu_path: Option<PathBuf>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            udpipe_url: DEFAULT_UDPIPE_URL.to_string(),
            model: DEFAULT_UDPIPE_MODEL.to_string(),
            timeout_secs: DEFAULT_UDPIPE_TIMEOUT_SECS,
            conllu_path: None,
        }
    }
}

impl AnnotatorConfig {
    /// Load annotator settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            udpipe_url: std::env::var("UDPIPE_URL")
                .unwrap_or_else(|_| DEFAULT_UDPIPE_URL.to_string()),
            model: std::env::var("UDPIPE_MODEL")
                .unwrap_or_else(|_| DEFAULT_UDPIPE_MODEL.to_string()),
            timeout_secs: std::env::var("UDPIPE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_UDPIPE_TIMEOUT_SECS),
            conllu_path: std::env::var("LEMMATA_CONLLU").ok().map(PathBuf::from),
        }
    }
}
