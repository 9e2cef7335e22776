//! End-to-end frequency pipeline.
//!
//! raw text → normalize → annotate → filter → aggregate → export.
//! Every stage runs once per corpus; any fatal error aborts the run before
//! anything is written.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::annotation::{self, Annotator};
use crate::error::PipelineError;
use crate::output::CsvExporter;
use crate::processing::{normalize, Aggregator, FilterStats, StopwordSet, TokenFilter};
use crate::types::{AnnotatedSentence, Annotation, FrequencyRow, LemmataConfig};

/// Result of filtering and aggregating one document.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Ranked rows meeting the threshold
    pub rows: Vec<FrequencyRow>,
    /// Filtering counters
    pub stats: FilterStats,
    /// Distinct `(lemma, pos)` keys before thresholding
    pub distinct_keys: usize,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub output_path: PathBuf,
    pub stopwords_removed: bool,
    pub analysis: Analysis,
}

/// Filter and aggregate annotations in document order.
pub fn tabulate<'a, I>(annotations: I, filter: &TokenFilter, aggregator: &Aggregator) -> Analysis
where
    I: IntoIterator<Item = &'a Annotation>,
{
    let (tokens, stats) = filter.filter(annotations);
    let table = aggregator.count(tokens);
    let distinct_keys = table.len();
    let rows = table.into_ranked(aggregator.min_frequency());

    Analysis {
        rows,
        stats,
        distinct_keys,
    }
}

/// Words of all sentences, in document order.
pub fn words(sentences: &[AnnotatedSentence]) -> impl Iterator<Item = &Annotation> + '_ {
    sentences.iter().flat_map(|sentence| sentence.words.iter())
}

/// The configured pipeline for one corpus.
pub struct FrequencyPipeline {
    config: LemmataConfig,
    filter: TokenFilter,
    aggregator: Aggregator,
    annotator: Arc<dyn Annotator>,
    exporter: CsvExporter,
}

impl FrequencyPipeline {
    /// Create a pipeline with an explicit stopword set and annotator.
    pub fn new(
        config: LemmataConfig,
        stopwords: StopwordSet,
        annotator: Arc<dyn Annotator>,
    ) -> Result<Self, PipelineError> {
        config.validate()?;

        let filter = if config.remove_stopwords {
            TokenFilter::removing(stopwords)
        } else {
            TokenFilter::keep_stopwords()
        };

        Ok(Self {
            filter,
            aggregator: Aggregator::new(config.min_frequency),
            exporter: CsvExporter::from_config(&config),
            annotator,
            config,
        })
    }

    /// Create a pipeline with the stopword list and annotator the configuration selects.
    pub fn from_config(config: LemmataConfig) -> Result<Self, PipelineError> {
        let stopwords = config.load_stopwords()?;
        let annotator = annotation::from_config(&config.annotator)?;
        Self::new(config, stopwords, annotator)
    }

    pub fn config(&self) -> &LemmataConfig {
        &self.config
    }

    /// Normalize, annotate, filter and aggregate one raw text.
    pub async fn analyze(&self, raw_text: &str) -> Result<Analysis, PipelineError> {
        let text = normalize(raw_text);
        info!(
            raw_len = raw_text.len(),
            normalized_len = text.len(),
            "Text normalized"
        );

        info!(annotator = self.annotator.name(), "Annotating text");
        let sentences = self.annotator.annotate(&text).await?;
        info!(sentences = sentences.len(), "Annotation complete");

        let analysis = tabulate(words(&sentences), &self.filter, &self.aggregator);
        if self.filter.removes_stopwords() {
            info!(removed = analysis.stats.stopwords_removed, "Stopwords removed");
        }
        info!(
            words = analysis.stats.seen,
            valid = analysis.stats.valid,
            counted = analysis.stats.kept(),
            distinct = analysis.distinct_keys,
            rows = analysis.rows.len(),
            "Frequencies aggregated"
        );
        if analysis.rows.is_empty() {
            warn!(
                min_frequency = self.aggregator.min_frequency(),
                "No lemma reached the minimum frequency"
            );
        }

        Ok(analysis)
    }

    /// Read the corpus, analyze it and export the table.
    pub async fn run(&self) -> Result<PipelineReport, PipelineError> {
        let path = &self.config.input_path;
        let raw_text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| PipelineError::InputUnavailable {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), bytes = raw_text.len(), "Corpus loaded");

        let analysis = self.analyze(&raw_text).await?;
        let stopwords_removed = self.filter.removes_stopwords();
        let output_path = self.exporter.export(&analysis.rows, stopwords_removed)?;

        Ok(PipelineReport {
            output_path,
            stopwords_removed,
            analysis,
        })
    }
}
