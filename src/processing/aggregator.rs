//! Frequency aggregation over filtered tokens.

use tracing::debug;

use crate::types::{FilteredToken, FrequencyRow, FrequencyTable};
use crate::DEFAULT_MIN_FREQUENCY;

/// Counts `(lemma, pos)` pairs and ranks those meeting the threshold.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    min_frequency: u64,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_FREQUENCY)
    }
}

impl Aggregator {
    /// Create an aggregator reporting pairs seen at least `min_frequency` times.
    pub fn new(min_frequency: u64) -> Self {
        Self { min_frequency }
    }

    pub fn min_frequency(&self) -> u64 {
        self.min_frequency
    }

    /// Count tokens in arrival order, without thresholding.
    pub fn count<I>(&self, tokens: I) -> FrequencyTable
    where
        I: IntoIterator<Item = FilteredToken>,
    {
        let mut table = FrequencyTable::new();
        for token in tokens {
            table.record(token);
        }
        table
    }

    /// Count, threshold and rank.
    ///
    /// Rows are ordered by frequency descending; equal frequencies keep the
    /// order in which their key was first seen, so identical input always
    /// yields identical output.
    pub fn aggregate<I>(&self, tokens: I) -> Vec<FrequencyRow>
    where
        I: IntoIterator<Item = FilteredToken>,
    {
        let table = self.count(tokens);
        let distinct = table.len();
        let rows = table.into_ranked(self.min_frequency);

        debug!(
            distinct,
            retained = rows.len(),
            min_frequency = self.min_frequency,
            "Aggregated frequencies"
        );

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{StopwordSet, TokenFilter};
    use crate::types::{Annotation, UposTag};
    use pretty_assertions::assert_eq;

    fn repeat(lemma: &str, pos: UposTag, times: usize) -> Vec<Annotation> {
        vec![Annotation::new(lemma, pos); times]
    }

    fn scenario() -> Vec<Annotation> {
        let mut annotations = repeat("puella", UposTag::Noun, 6);
        annotations.extend(repeat("et", UposTag::Cconj, 20));
        annotations.extend(repeat("bellum", UposTag::Noun, 4));
        annotations
    }

    fn run(filter: &TokenFilter, annotations: &[Annotation]) -> Vec<FrequencyRow> {
        let (tokens, _) = filter.filter(annotations);
        Aggregator::default().aggregate(tokens)
    }

    #[test]
    fn test_scenario_with_stopwords_kept() {
        let rows = run(&TokenFilter::keep_stopwords(), &scenario());
        assert_eq!(
            rows,
            vec![
                FrequencyRow::new("et", UposTag::Cconj, 20),
                FrequencyRow::new("puella", UposTag::Noun, 6),
            ]
        );
    }

    #[test]
    fn test_scenario_with_stopwords_removed() {
        let rows = run(&TokenFilter::removing(StopwordSet::latin()), &scenario());
        assert_eq!(rows, vec![FrequencyRow::new("puella", UposTag::Noun, 6)]);
    }

    #[test]
    fn test_empty_input() {
        let rows = Aggregator::default().aggregate(Vec::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_nothing_meets_threshold() {
        let rows = run(&TokenFilter::keep_stopwords(), &repeat("bellum", UposTag::Noun, 4));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive_and_configurable() {
        let (tokens, _) = TokenFilter::keep_stopwords().filter(&repeat("hostis", UposTag::Noun, 5));
        assert_eq!(Aggregator::default().aggregate(tokens.clone()).len(), 1);
        assert!(Aggregator::new(6).aggregate(tokens.clone()).is_empty());
        assert_eq!(Aggregator::new(1).aggregate(tokens)[0].frequency, 5);
    }

    #[test]
    fn test_case_variants_share_a_key() {
        let mut annotations = repeat("Roma", UposTag::Propn, 3);
        annotations.extend(repeat("roma", UposTag::Propn, 2));
        let rows = run(&TokenFilter::keep_stopwords(), &annotations);
        assert_eq!(rows, vec![FrequencyRow::new("roma", UposTag::Propn, 5)]);
    }

    #[test]
    fn test_count_conservation() {
        let mut annotations = scenario();
        annotations.push(Annotation::new(",", UposTag::Punct));
        annotations.push(Annotation::without_lemma(UposTag::Verb));
        annotations.push(Annotation::new("Cum", UposTag::Sconj));

        let filter = TokenFilter::removing(StopwordSet::latin());
        let (tokens, stats) = filter.filter(&annotations);
        let table = Aggregator::default().count(tokens);
        assert_eq!(table.total(), stats.kept() as u64);
        assert_eq!(table.total(), 10);
    }

    #[test]
    fn test_ties_keep_first_seen_order_across_runs() {
        let mut annotations = Vec::new();
        for round in 0..5 {
            for lemma in ["gallia", "miles", "castra", "hostis"] {
                annotations.push(Annotation::new(lemma, UposTag::Noun));
            }
            if round % 2 == 0 {
                annotations.push(Annotation::new("legio", UposTag::Noun));
                annotations.push(Annotation::new("legio", UposTag::Noun));
            }
        }

        let filter = TokenFilter::keep_stopwords();
        let first = run(&filter, &annotations);
        let second = run(&filter, &annotations);
        assert_eq!(first, second);

        let lemmas: Vec<&str> = first.iter().map(|r| r.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["legio", "gallia", "miles", "castra", "hostis"]);
    }

    #[test]
    fn test_every_key_at_threshold_appears_once() {
        let mut annotations = Vec::new();
        for i in 0..40 {
            let lemma = ["a", "b", "c", "d"][i % 4];
            let lemma = format!("{}x", lemma);
            annotations.push(Annotation::new(lemma, UposTag::Noun));
        }
        annotations.extend(repeat("rarus", UposTag::Adj, 4));

        let rows = run(&TokenFilter::keep_stopwords(), &annotations);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.frequency == 10));
        assert!(rows.iter().all(|r| r.lemma != "rarus"));
    }

    #[test]
    fn test_stopword_toggle_never_adds_or_increases() {
        let mut annotations = scenario();
        annotations.extend(repeat("sum", UposTag::Aux, 7));
        annotations.extend(repeat("hic", UposTag::Det, 2));
        annotations.extend(repeat("hic", UposTag::Adv, 5));

        let kept = run(&TokenFilter::keep_stopwords(), &annotations);
        let removed = run(&TokenFilter::removing(StopwordSet::latin()), &annotations);

        for row in &removed {
            let baseline = kept
                .iter()
                .find(|k| k.lemma == row.lemma && k.pos == row.pos)
                .expect("row absent without stopword removal");
            assert!(row.frequency <= baseline.frequency);
        }
        assert!(removed.len() <= kept.len());
    }
}
