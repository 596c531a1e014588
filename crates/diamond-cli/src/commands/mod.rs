//! Command implementations.

pub mod inspect;
pub mod keys;
pub mod summarize;

use std::path::{Path, PathBuf};

use diamond::{FieldRecord, Parser, SourceMetadata, Summarizer, SummaryConfig};

/// Build a summarizer from an optional config file.
fn load_summarizer(config: Option<PathBuf>) -> diamond::Result<Summarizer> {
    let config = match config {
        Some(path) => SummaryConfig::load(path)?,
        None => SummaryConfig::default(),
    };
    Ok(Summarizer::with_config(config))
}

/// Load a field list from disk.
fn load_fields(file: &Path) -> diamond::Result<(Vec<FieldRecord>, SourceMetadata)> {
    Parser::new().parse_file(file)
}
