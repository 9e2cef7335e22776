//! Annotator that replays a pre-computed CoNLL-U file.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{conllu, Annotator};
use crate::error::AnnotationError;
use crate::types::AnnotatedSentence;

/// Returns the annotations stored in a CoNLL-U file produced by any
/// external tagger, for offline runs.
pub struct ConlluReplayAnnotator {
    path: PathBuf,
}

impl ConlluReplayAnnotator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Annotator for ConlluReplayAnnotator {
    fn name(&self) -> &'static str {
        "conllu-replay"
    }

    async fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>, AnnotationError> {
        debug!(path = %self.path.display(), text_len = text.len(), "Replaying annotations");

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| AnnotationError::Io {
                path: self.path.clone(),
                source,
            })?;
        let sentences = conllu::parse(&content)?;

        info!(sentences = sentences.len(), path = %self.path.display(), "Loaded annotations");
        Ok(sentences)
    }
}
