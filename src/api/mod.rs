//! HTTP surface for serve mode.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use handlers::AppState;

/// Build the HTTP routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Frequency tables
        .route("/frequencies", post(handlers::analyze_text))
        .route("/frequencies/annotated", post(handlers::analyze_annotations))
        // State
        .with_state(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::{scenario_words, StaticAnnotator};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(annotator: StaticAnnotator) -> Router {
        router(Arc::new(AppState {
            config: crate::types::LemmataConfig::default(),
            stopwords: crate::processing::StopwordSet::latin(),
            annotator: Arc::new(annotator),
        }))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(StaticAnnotator::new(Vec::new()))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_text_uses_annotator() {
        let (status, body) = post_json(
            app(StaticAnnotator::new(scenario_words())),
            "/frequencies",
            json!({ "text": "Puella et bellum." }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["rows"],
            json!([
                { "lemma": "et", "pos": "CCONJ", "frequency": 20 },
                { "lemma": "puella", "pos": "NOUN", "frequency": 6 }
            ])
        );
        assert_eq!(body["stopwords_removed"], false);
    }

    #[tokio::test]
    async fn test_analyze_text_with_stopwords_removed() {
        let (status, body) = post_json(
            app(StaticAnnotator::new(scenario_words())),
            "/frequencies",
            json!({ "text": "Puella et bellum.", "remove_stopwords": true }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"].as_array().unwrap().len(), 1);
        assert_eq!(body["counted_tokens"], 10);
    }

    #[tokio::test]
    async fn test_annotation_failure_is_bad_gateway() {
        let (status, _) = post_json(
            app(StaticAnnotator::failing()),
            "/frequencies",
            json!({ "text": "Gallia" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_analyze_annotations() {
        let (status, body) = post_json(
            app(StaticAnnotator::failing()),
            "/frequencies/annotated",
            json!({
                "annotations": [
                    { "lemma": "bellum", "upos": "NOUN" },
                    { "lemma": "bellum", "upos": "NOUN" },
                    { "upos": "PUNCT" },
                    { "lemma": "Bellum", "upos": "NOUN" }
                ],
                "min_frequency": 3
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["rows"],
            json!([{ "lemma": "bellum", "pos": "NOUN", "frequency": 3 }])
        );
    }

    #[tokio::test]
    async fn test_zero_threshold_is_bad_request() {
        let (status, _) = post_json(
            app(StaticAnnotator::new(Vec::new())),
            "/frequencies/annotated",
            json!({ "annotations": [], "min_frequency": 0 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
