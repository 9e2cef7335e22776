//! HTTP client for a UDPipe-compatible annotation service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info};

use super::{conllu, Annotator};
use crate::error::AnnotationError;
use crate::types::{AnnotatedSentence, AnnotatorConfig};

/// Client for the `/process` endpoint of a UDPipe REST service.
///
/// Requests tokenization, tagging and lemmatization; the response carries
/// a CoNLL-U document.
pub struct UdpipeClient {
    client: Client,
    base_url: String,
    model: String,
}

/// Response from the annotation service.
#[derive(Debug, Deserialize)]
struct ProcessResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    result: Option<String>,
}

impl UdpipeClient {
    /// Create a new client from annotator settings.
    pub fn new(config: &AnnotatorConfig) -> Result<Self, AnnotationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.udpipe_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn process_url(&self) -> String {
        format!("{}/process", self.base_url)
    }
}

#[async_trait]
impl Annotator for UdpipeClient {
    fn name(&self) -> &'static str {
        "udpipe"
    }

    async fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>, AnnotationError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        info!(model = %self.model, text_len = text.len(), "Sending text to annotation service");

        let response = self
            .client
            .post(self.process_url())
            .form(&[
                ("data", text),
                ("model", self.model.as_str()),
                ("tokenizer", ""),
                ("tagger", ""),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Annotation service returned an error");
            return Err(AnnotationError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ProcessResponse =
            serde_json::from_str(&body).map_err(|e| AnnotationError::Malformed {
                line: e.line(),
                reason: format!("invalid service response: {}", e),
            })?;
        let document = parsed.result.ok_or_else(|| AnnotationError::Malformed {
            line: 0,
            reason: "service response has no result".to_string(),
        })?;

        debug!(model = ?parsed.model, bytes = document.len(), "Received CoNLL-U document");
        conllu::parse(&document)
    }
}
