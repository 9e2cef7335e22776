//! HTTP request handlers for serve mode.
//!
//! Each request is one document: it is normalized, annotated, filtered and
//! aggregated on its own, and nothing but the immutable state is shared.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::annotation::Annotator;
use crate::pipeline::{tabulate, words, Analysis};
use crate::processing::{normalize, Aggregator, StopwordSet, TokenFilter};
use crate::types::{Annotation, FrequencyRow, LemmataConfig};

/// Application state shared across handlers.
pub struct AppState {
    pub config: LemmataConfig,
    pub stopwords: StopwordSet,
    pub annotator: Arc<dyn Annotator>,
}

impl AppState {
    /// Filter and aggregator for one request, falling back to the configured defaults.
    fn stages(
        &self,
        remove_stopwords: Option<bool>,
        min_frequency: Option<u64>,
    ) -> Result<(TokenFilter, Aggregator), StatusCode> {
        let min_frequency = min_frequency.unwrap_or(self.config.min_frequency);
        if min_frequency == 0 {
            return Err(StatusCode::BAD_REQUEST);
        }

        let filter = if remove_stopwords.unwrap_or(self.config.remove_stopwords) {
            TokenFilter::removing(self.stopwords.clone())
        } else {
            TokenFilter::keep_stopwords()
        };
        Ok((filter, Aggregator::new(min_frequency)))
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    annotator: String,
}

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        annotator: state.annotator.name().to_string(),
    })
}

/// Frequency request for raw text.
#[derive(Debug, Deserialize)]
pub struct TextFrequencyRequest {
    pub text: String,
    #[serde(default)]
    pub remove_stopwords: Option<bool>,
    #[serde(default)]
    pub min_frequency: Option<u64>,
}

/// Frequency request for text that was annotated elsewhere.
#[derive(Debug, Deserialize)]
pub struct AnnotatedFrequencyRequest {
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub remove_stopwords: Option<bool>,
    #[serde(default)]
    pub min_frequency: Option<u64>,
}

/// Ranked table for one document.
#[derive(Debug, Serialize)]
pub struct FrequencyResponse {
    pub rows: Vec<FrequencyRow>,
    pub stopwords_removed: bool,
    pub counted_tokens: usize,
}

impl FrequencyResponse {
    fn new(analysis: Analysis, stopwords_removed: bool) -> Self {
        Self {
            counted_tokens: analysis.stats.kept(),
            rows: analysis.rows,
            stopwords_removed,
        }
    }
}

/// Normalize, annotate and count one text.
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TextFrequencyRequest>,
) -> Result<Json<FrequencyResponse>, StatusCode> {
    let (filter, aggregator) = state.stages(request.remove_stopwords, request.min_frequency)?;

    let text = normalize(&request.text);
    let sentences = state.annotator.annotate(&text).await.map_err(|e| {
        warn!(error = %e, annotator = state.annotator.name(), "Annotation failed");
        StatusCode::BAD_GATEWAY
    })?;

    let analysis = tabulate(words(&sentences), &filter, &aggregator);
    info!(
        text_len = request.text.len(),
        rows = analysis.rows.len(),
        "Analyzed text"
    );

    Ok(Json(FrequencyResponse::new(
        analysis,
        filter.removes_stopwords(),
    )))
}

/// Count pre-annotated words.
pub async fn analyze_annotations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnnotatedFrequencyRequest>,
) -> Result<Json<FrequencyResponse>, StatusCode> {
    let (filter, aggregator) = state.stages(request.remove_stopwords, request.min_frequency)?;

    let analysis = tabulate(&request.annotations, &filter, &aggregator);
    info!(
        annotations = request.annotations.len(),
        rows = analysis.rows.len(),
        "Analyzed annotations"
    );

    Ok(Json(FrequencyResponse::new(
        analysis,
        filter.removes_stopwords(),
    )))
}
