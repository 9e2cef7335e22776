//! Linguistic annotation adapters.
//!
//! The annotator is an external collaborator: it splits normalized text
//! into sentences and words and assigns each word a lemma and a universal
//! POS tag. Everything downstream only sees [`AnnotatedSentence`]s.

pub mod conllu;
mod replay;
mod udpipe_client;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AnnotationError;
use crate::types::{AnnotatedSentence, AnnotatorConfig};

pub use replay::ConlluReplayAnnotator;
pub use udpipe_client::UdpipeClient;

/// Source of per-word annotations for a normalized text.
#[async_trait]
pub trait Annotator: Send + Sync {
    /// Get the name of this annotator.
    fn name(&self) -> &'static str;

    /// Annotate the text, returning sentences in document order.
    async fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>, AnnotationError>;
}

/// Build the annotator selected by the configuration.
///
/// Pre-computed CoNLL-U takes precedence over the HTTP service.
pub fn from_config(config: &AnnotatorConfig) -> Result<Arc<dyn Annotator>, AnnotationError> {
    match &config.conllu_path {
        Some(path) => Ok(Arc::new(ConlluReplayAnnotator::new(path.clone()))),
        None => Ok(Arc::new(UdpipeClient::new(config)?)),
    }
}
