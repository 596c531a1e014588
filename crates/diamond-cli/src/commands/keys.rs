//! Keys command - discovered attribute keys and their display groups.

use std::path::PathBuf;

use colored::Colorize;
use diamond::summary::assign_group;
use diamond::Summarizer;

pub fn run(file: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (records, source) = super::load_fields(&file)?;
    let keys = Summarizer::new().discover_keys(&records);

    if verbose {
        eprintln!(
            "{} keys across {} fields in {}",
            keys.len(),
            source.record_count,
            source.file
        );
    }

    for key in &keys {
        println!("{:30} {}", key, assign_group(key).label().dimmed());
    }

    Ok(())
}
