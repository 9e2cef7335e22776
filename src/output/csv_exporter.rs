//! Tabular export of the ranked frequency table.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::PipelineError;
use crate::types::{FrequencyRow, LemmataConfig};

/// Column names of the exported table.
pub const HEADER: [&str; 3] = ["Lemma", "POS", "Frequência"];

/// File name suffix when stopwords were removed.
pub const SUFFIX_WITHOUT_STOPWORDS: &str = "_sem_stopwords";

/// File name suffix when stopwords were kept.
pub const SUFFIX_WITH_STOPWORDS: &str = "_com_stopwords";

/// Writes frequency tables as comma-separated files.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
    prefix: String,
}

impl CsvExporter {
    /// Create an exporter writing `{prefix}{suffix}.csv` files into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &LemmataConfig) -> Self {
        Self::new(config.output_dir.clone(), config.output_prefix.clone())
    }

    /// File name for the given stopword mode.
    pub fn file_name(&self, stopwords_removed: bool) -> String {
        let suffix = if stopwords_removed {
            SUFFIX_WITHOUT_STOPWORDS
        } else {
            SUFFIX_WITH_STOPWORDS
        };
        format!("{}{}.csv", self.prefix, suffix)
    }

    pub fn output_path(&self, stopwords_removed: bool) -> PathBuf {
        self.output_dir.join(self.file_name(stopwords_removed))
    }

    /// Write the rows atomically and return the path written.
    ///
    /// The table goes to a temporary file in the target directory first, so
    /// a failed export never leaves a partial file at the target path.
    pub fn export(
        &self,
        rows: &[FrequencyRow],
        stopwords_removed: bool,
    ) -> Result<PathBuf, PipelineError> {
        let path = self.output_path(stopwords_removed);
        let to_export_error = |source: std::io::Error| PipelineError::Export {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.output_dir).map_err(to_export_error)?;
        let temp_file = NamedTempFile::new_in(&self.output_dir).map_err(to_export_error)?;
        write_rows(BufWriter::new(temp_file.as_file()), rows).map_err(to_export_error)?;
        temp_file
            .persist(&path)
            .map_err(|e| to_export_error(e.error))?;

        info!(path = %path.display(), rows = rows.len(), "Frequency table written");
        Ok(path)
    }
}

/// Write the header and one record per row.
///
/// The header is written even when there are no rows.
pub fn write_rows<W: Write>(writer: W, rows: &[FrequencyRow]) -> std::io::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record([
            row.lemma.as_str(),
            row.pos.as_str(),
            row.frequency.to_string().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
