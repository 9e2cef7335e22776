//! Lemmata Library
//!
//! Lemma and part-of-speech frequency tables for classical Latin corpora.
//! Raw text is normalized, annotated by an external tagger, filtered,
//! counted and exported as a ranked table.

pub mod annotation;
pub mod api;
pub mod chart;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{AnnotationError, PipelineError};
pub use pipeline::{Analysis, FrequencyPipeline, PipelineReport};
pub use processing::{is_valid, normalize, Aggregator, StopwordSet, TokenFilter};
pub use types::{Annotation, FrequencyRow, LemmataConfig, UposTag};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::annotation::{Annotator, ConlluReplayAnnotator, UdpipeClient};
    pub use crate::error::*;
    pub use crate::output::CsvExporter;
    pub use crate::pipeline::*;
    pub use crate::processing::*;
    pub use crate::types::*;
}

/// Default corpus file name
pub const DEFAULT_INPUT_FILE: &str = "de_bello_gallico.txt";

/// Default prefix of the exported table
pub const DEFAULT_OUTPUT_PREFIX: &str = "lemas_freq";

/// Minimum occurrences for a pair to be reported
pub const DEFAULT_MIN_FREQUENCY: u64 = 5;

/// Default serve-mode port
pub const DEFAULT_PORT: u16 = 3017;

/// Public UDPipe REST endpoint
pub const DEFAULT_UDPIPE_URL: &str = "https://lindat.mff.cuni.cz/services/udpipe/api";

/// UDPipe model requested by default
pub const DEFAULT_UDPIPE_MODEL: &str = "latin";

/// Annotation request timeout (5 minutes, whole corpora are slow to tag)
pub const DEFAULT_UDPIPE_TIMEOUT_SECS: u64 = 300;

/// Default number of chart entries
pub const DEFAULT_CHART_LIMIT: usize = 30;
