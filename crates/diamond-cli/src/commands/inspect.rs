//! Inspect command - raw summary and key dump for troubleshooting.

use std::path::PathBuf;

pub fn run(file: PathBuf, config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let summarizer = super::load_summarizer(config)?;
    let (records, source) = super::load_fields(&file)?;

    let inspection = summarizer.inspect(&records);

    let dump = serde_json::json!({
        "source": source,
        "config": summarizer.config(),
        "keys": inspection.keys,
        "summaries": inspection.summaries,
    });
    println!("{}", serde_json::to_string_pretty(&dump)?);

    Ok(())
}
