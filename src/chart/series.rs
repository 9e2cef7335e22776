//! Ranked series extraction from an exported table.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ChartError;
use crate::types::UposTag;

/// One row of an exported table as the chart reader sees it.
///
/// The frequency column is optional: token-level tables without it count
/// one per row. The older `Lema` header is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableEntry {
    #[serde(rename = "Lemma", alias = "Lema", default)]
    pub lemma: Option<String>,
    #[serde(rename = "POS")]
    pub pos: UposTag,
    #[serde(rename = "Frequência", default)]
    pub frequency: Option<u64>,
}

/// A `(label, count)` pair handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub label: String,
    pub count: u64,
}

impl ChartEntry {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Read every row of a delimited table.
pub fn read_table(path: &Path) -> Result<Vec<TableEntry>, ChartError> {
    if !path.is_file() {
        return Err(ChartError::NotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let entries = reader
        .deserialize()
        .collect::<Result<Vec<TableEntry>, csv::Error>>()?;
    Ok(entries)
}

/// Rank the lemmas of one category.
///
/// Lemmas are lower-cased and trimmed, empty ones dropped, and counts of
/// rows sharing a lemma summed. The result is ordered by count descending,
/// ties in first-seen order, and truncated to `limit`.
pub fn rank_entries<I>(entries: I, pos: &UposTag, limit: usize) -> Vec<ChartEntry>
where
    I: IntoIterator<Item = TableEntry>,
{
    let mut ranked: Vec<ChartEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries.into_iter().filter(|e| &e.pos == pos) {
        let label = entry
            .lemma
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .trim()
            .to_string();
        if label.is_empty() {
            continue;
        }

        let count = entry.frequency.unwrap_or(1);
        match index.get(&label) {
            Some(&position) => ranked[position].count += count,
            None => {
                index.insert(label.clone(), ranked.len());
                ranked.push(ChartEntry::new(label, count));
            }
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}
