//! Core types for the frequency pipeline.

mod annotation;
mod config;
mod frequency;

pub use annotation::{AnnotatedSentence, Annotation, FilteredToken, UposTag};
pub use config::{AnnotatorConfig, LemmataConfig};
pub use frequency::{FrequencyRow, FrequencyTable};
