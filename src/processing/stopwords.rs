//! Latin stopword list.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Function words excluded from frequency analysis when stopword removal is on.
const LATIN_STOPWORDS: &[&str] = &[
    "et", "in", "de", "cum", "ad", "per", "a", "ab", "ex", "sub", "sed", "ut",
    "non", "autem", "nam", "ne", "nec", "vel", "enim", "atque", "quoque",
    "quod", "quia", "si", "quoniam", "dum", "postquam", "antequam", "ubi",
    "ita", "tamen", "ergo", "inter", "contra", "propter", "super",
    "is", "hic", "ille", "qui", "quae", "quis", "an", "aut",
    "etiam", "igitur", "sum", "esse", "fui", "possum", "idem",
    "ipse", "quidem", "meus", "tuus", "suus", "noster", "vester", "se", "sui",
    "ego", "nos", "tu", "vos",
];

/// Immutable set of stopword lemmas, cheap to clone and share.
///
/// Membership depends on the lemma alone; the part of speech is ignored, so
/// homographs are dropped together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: Arc<HashSet<String>>,
}

impl StopwordSet {
    /// Build a set from arbitrary words. Entries are trimmed and lower-cased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: Arc::new(words),
        }
    }

    /// The built-in Latin function word list.
    pub fn latin() -> Self {
        Self::new(LATIN_STOPWORDS.iter().copied())
    }

    /// Load a list with one lemma per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        ))
    }

    /// Whether the (already lower-cased) lemma is a stopword.
    pub fn contains(&self, lemma: &str) -> bool {
        self.words.contains(lemma)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::latin()
    }
}
