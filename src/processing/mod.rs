//! Processing stages between raw text and the ranked table.
//!
//! This module provides:
//! - Corpus normalization (sigla, punctuation, digits, whitespace)
//! - Token validity rules and stopword removal
//! - Frequency aggregation with a minimum-occurrence threshold

pub mod aggregator;
pub mod filter;
pub mod normalizer;
pub mod stopwords;

pub use aggregator::Aggregator;
pub use filter::{is_valid, FilterStats, TokenFilter};
pub use normalizer::normalize;
pub use stopwords::StopwordSet;
