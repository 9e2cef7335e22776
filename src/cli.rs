//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lemmata::chart::{ChartCategory, ChartKind, ImageFormat};
use lemmata::types::LemmataConfig;
use lemmata::DEFAULT_CHART_LIMIT;

/// Lemma and POS frequencies for a Latin corpus
#[derive(Debug, Parser)]
#[command(name = "lemmata", version, about)]
pub struct Cli {
    /// Remove Latin stopwords from the result.
    #[arg(long)]
    pub no_stopwords: bool,

    /// Plain-text corpus to analyze.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Directory for the frequency table.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Minimum occurrences for a lemma to be reported.
    #[arg(long)]
    pub min_frequency: Option<u64>,

    /// Stopword list replacing the built-in one, one lemma per line.
    #[arg(long)]
    pub stopwords_file: Option<PathBuf>,

    /// Pre-computed CoNLL-U annotations used instead of the annotation service.
    #[arg(long)]
    pub annotations: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prepare bar chart or word cloud input from an exported table.
    Chart(ChartArgs),
    /// Serve per-document frequency analysis over HTTP.
    Serve {
        /// Listening port.
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Debug, Parser)]
pub struct ChartArgs {
    /// Exported frequency table.
    #[arg(long)]
    pub csv: PathBuf,

    /// Number of entries to chart.
    #[arg(long, default_value_t = DEFAULT_CHART_LIMIT)]
    pub limite: usize,

    /// Grammatical category.
    #[arg(long, value_enum)]
    pub tipo: ChartCategory,

    /// Chart style.
    #[arg(long, value_enum)]
    pub grafico: ChartKind,

    /// Image format for the renderer.
    #[arg(long, value_enum, default_value_t = ImageFormat::Png)]
    pub formato: ImageFormat,

    /// Directory for the chart description.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Override configuration values given on the command line.
    pub fn apply(&self, config: &mut LemmataConfig) {
        config.remove_stopwords = self.no_stopwords;
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(min_frequency) = self.min_frequency {
            config.min_frequency = min_frequency;
        }
        if let Some(stopwords_file) = &self.stopwords_file {
            config.stopwords_file = Some(stopwords_file.clone());
        }
        if let Some(annotations) = &self.annotations {
            config.annotator.conllu_path = Some(annotations.clone());
        }
    }
}
