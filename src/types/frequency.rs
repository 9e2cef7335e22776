//! Frequency table types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{FilteredToken, UposTag};

/// One row of the ranked output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub lemma: String,
    pub pos: UposTag,
    pub frequency: u64,
}

impl FrequencyRow {
    pub fn new(lemma: impl Into<String>, pos: impl Into<UposTag>, frequency: u64) -> Self {
        Self {
            lemma: lemma.into(),
            pos: pos.into(),
            frequency,
        }
    }
}

/// Counting map keyed by `(lemma, pos)` that remembers first-seen order.
///
/// Rows are stored in the order their key was first encountered; the index
/// maps each key to its row so every increment is O(1).
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
    index: HashMap<(String, UposTag), usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of the token's key.
    pub fn record(&mut self, token: FilteredToken) {
        let FilteredToken { lemma, pos } = token;
        let key = (lemma, pos);
        match self.index.get(&key) {
            Some(&position) => self.rows[position].frequency += 1,
            None => {
                self.rows.push(FrequencyRow::new(key.0.clone(), key.1.clone(), 1));
                self.index.insert(key, self.rows.len() - 1);
            }
        }
    }

    /// Count for a key, zero if never seen.
    pub fn get(&self, lemma: &str, pos: &UposTag) -> u64 {
        self.index
            .get(&(lemma.to_string(), pos.clone()))
            .map(|&position| self.rows[position].frequency)
            .unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|row| row.frequency).sum()
    }

    /// Rows in first-seen order.
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    /// Keep rows with at least `min_frequency` occurrences, ranked by count
    /// descending. Equal counts keep first-seen order.
    pub fn into_ranked(self, min_frequency: u64) -> Vec<FrequencyRow> {
        let mut ranked: Vec<FrequencyRow> = self
            .rows
            .into_iter()
            .filter(|row| row.frequency >= min_frequency)
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(lemma: &str, pos: UposTag) -> FilteredToken {
        FilteredToken {
            lemma: lemma.to_string(),
            pos,
        }
    }

    #[test]
    fn test_same_lemma_different_pos_are_distinct_keys() {
        let mut table = FrequencyTable::new();
        table.record(token("cum", UposTag::Adp));
        table.record(token("cum", UposTag::Sconj));
        table.record(token("cum", UposTag::Adp));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("cum", &UposTag::Adp), 2);
        assert_eq!(table.get("cum", &UposTag::Sconj), 1);
        assert_eq!(table.get("cum", &UposTag::Noun), 0);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_rows_keep_first_seen_order() {
        let mut table = FrequencyTable::new();
        for lemma in ["miles", "castra", "miles", "hostis"] {
            table.record(token(lemma, UposTag::Noun));
        }
        let lemmas: Vec<&str> = table.rows().iter().map(|r| r.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["miles", "castra", "hostis"]);
    }

    #[test]
    fn test_into_ranked_is_stable_for_ties() {
        let mut table = FrequencyTable::new();
        for lemma in ["b", "a", "c", "a", "b", "c"] {
            table.record(token(lemma, UposTag::Noun));
        }
        table.record(token("c", UposTag::Noun));

        let ranked = table.into_ranked(1);
        let lemmas: Vec<&str> = ranked.iter().map(|r| r.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["c", "b", "a"]);
    }
}
