//! Output module for writing frequency tables.

pub mod csv_exporter;

pub use csv_exporter::{CsvExporter, SUFFIX_WITHOUT_STOPWORDS, SUFFIX_WITH_STOPWORDS};
