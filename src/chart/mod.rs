//! Chart input preparation.
//!
//! Drawing bar charts and word clouds is left to an external renderer. This
//! module turns an exported frequency table into the ranked, category
//! restricted `(label, count)` series that renderer consumes.

mod series;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::types::UposTag;
use crate::DEFAULT_CHART_LIMIT;

pub use series::{rank_entries, read_table, ChartEntry, TableEntry};

/// Errors raised while preparing chart input.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("cannot read table: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot write chart description {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize chart description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Grammatical category a chart is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartCategory {
    Substantivo,
    Verbo,
    Adjetivo,
}

impl ChartCategory {
    /// Universal POS tag of this category.
    pub fn tag(&self) -> UposTag {
        match self {
            Self::Substantivo => UposTag::Noun,
            Self::Verbo => UposTag::Verb,
            Self::Adjetivo => UposTag::Adj,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Substantivo => "substantivo",
            Self::Verbo => "verbo",
            Self::Adjetivo => "adjetivo",
        }
    }
}

/// Chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Cloud,
}

/// Image format the renderer should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
    Pdf,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }
}

/// What to chart and from which table.
#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub table_path: PathBuf,
    pub category: ChartCategory,
    pub kind: ChartKind,
    pub limit: usize,
    pub format: ImageFormat,
}

impl ChartRequest {
    pub fn new(table_path: impl Into<PathBuf>, category: ChartCategory, kind: ChartKind) -> Self {
        Self {
            table_path: table_path.into(),
            category,
            kind,
            limit: DEFAULT_CHART_LIMIT,
            format: ImageFormat::default(),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// File name the renderer should write.
    pub fn target(&self) -> String {
        match self.kind {
            ChartKind::Bar => format!(
                "top_{}_{}.{}",
                self.category.name(),
                self.limit,
                self.format.extension()
            ),
            ChartKind::Cloud => format!("nuvem_{}.{}", self.category.name(), self.format.extension()),
        }
    }

    pub fn title(&self) -> String {
        let plural = format!("{}S", self.category.name().to_uppercase());
        match self.kind {
            ChartKind::Bar => format!("Top {} {} mais frequentes", self.limit, plural),
            ChartKind::Cloud => format!("Nuvem de Palavras: {}", plural),
        }
    }
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub category: ChartCategory,
    pub pos: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    pub format: ImageFormat,
    pub target: String,
    pub entries: Vec<ChartEntry>,
}

/// Read the table and build the chart description.
pub fn prepare(request: &ChartRequest) -> Result<ChartSpec, ChartError> {
    let records = read_table(&request.table_path)?;
    let entries = rank_entries(records, &request.category.tag(), request.limit);

    info!(
        table = %request.table_path.display(),
        category = request.category.name(),
        entries = entries.len(),
        "Chart series prepared"
    );

    Ok(ChartSpec {
        kind: request.kind,
        category: request.category,
        pos: request.category.tag().to_string(),
        title: request.title(),
        x_label: match request.kind {
            ChartKind::Bar => Some("Frequência".to_string()),
            ChartKind::Cloud => None,
        },
        format: request.format,
        target: request.target(),
        entries,
    })
}

/// Write the description as JSON next to where the image will go.
pub fn write_spec(spec: &ChartSpec, output_dir: &Path) -> Result<PathBuf, ChartError> {
    let path = output_dir.join(Path::new(&spec.target).with_extension("json"));
    let json = serde_json::to_vec_pretty(spec)?;
    std::fs::write(&path, json).map_err(|source| ChartError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), target = %spec.target, "Chart description written");
    Ok(path)
}
