//! Token filtering rules.
//!
//! Decides which annotations count toward frequency: drops missing lemmas,
//! non-lexical tags and lemmas with anything but letters, lower-cases the
//! survivors and optionally removes stopwords.

use lazy_static::lazy_static;
use regex::Regex;

use super::stopwords::StopwordSet;
use crate::types::{Annotation, FilteredToken};

lazy_static! {
    /// A whole lemma made of ASCII letters, macron vowels or diphthongs.
    static ref LEMMA_SHAPE: Regex = Regex::new(r"^[a-zA-Zāēīōūæœ]+$").unwrap();
}

/// Whether an annotation is a countable word.
///
/// Pure function of the lemma and tag: the same annotation gets the same
/// answer wherever it appears.
pub fn is_valid(annotation: &Annotation) -> bool {
    match annotation.lemma.as_deref() {
        Some(lemma) => {
            !lemma.is_empty() && !annotation.upos.is_non_lexical() && LEMMA_SHAPE.is_match(lemma)
        }
        None => false,
    }
}

/// Counters describing one filtering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Annotations inspected
    pub seen: usize,
    /// Annotations passing [`is_valid`]
    pub valid: usize,
    /// Valid tokens dropped as stopwords
    pub stopwords_removed: usize,
}

impl FilterStats {
    /// Tokens handed on to aggregation.
    pub fn kept(&self) -> usize {
        self.valid - self.stopwords_removed
    }
}

/// Token filter with an optional stopword stage.
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    stopwords: Option<StopwordSet>,
}

impl TokenFilter {
    /// Create a filter; `None` disables stopword removal entirely.
    pub fn new(stopwords: Option<StopwordSet>) -> Self {
        Self { stopwords }
    }

    /// Create a filter that keeps stopwords.
    pub fn keep_stopwords() -> Self {
        Self::new(None)
    }

    /// Create a filter that drops members of `stopwords`.
    pub fn removing(stopwords: StopwordSet) -> Self {
        Self::new(Some(stopwords))
    }

    /// Whether stopword removal is active.
    pub fn removes_stopwords(&self) -> bool {
        self.stopwords.is_some()
    }

    /// Validate and lower-case one annotation, ignoring stopwords.
    pub fn normalize_token(annotation: &Annotation) -> Option<FilteredToken> {
        if !is_valid(annotation) {
            return None;
        }
        let lemma = annotation.lemma.as_deref()?.to_lowercase();
        Some(FilteredToken {
            lemma,
            pos: annotation.upos.clone(),
        })
    }

    /// Whether a lower-cased token is removed by the stopword stage.
    pub fn is_stopword(&self, token: &FilteredToken) -> bool {
        self.stopwords
            .as_ref()
            .map_or(false, |stopwords| stopwords.contains(&token.lemma))
    }

    /// Run every annotation through the filter, preserving document order.
    pub fn filter<'a, I>(&self, annotations: I) -> (Vec<FilteredToken>, FilterStats)
    where
        I: IntoIterator<Item = &'a Annotation>,
    {
        let mut stats = FilterStats::default();
        let mut tokens = Vec::new();

        for annotation in annotations {
            stats.seen += 1;
            let Some(token) = Self::normalize_token(annotation) else {
                continue;
            };
            stats.valid += 1;

            if self.is_stopword(&token) {
                stats.stopwords_removed += 1;
                continue;
            }
            tokens.push(token);
        }

        (tokens, stats)
    }
}
