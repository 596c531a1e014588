//! Summarize command - grouped common values with per-field exceptions.

use std::path::PathBuf;

use colored::Colorize;
use diamond::{AttributeGroup, Summary};

pub fn run(
    file: PathBuf,
    config: Option<PathBuf>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let summarizer = super::load_summarizer(config)?;
    let (records, source) = super::load_fields(&file)?;

    let summaries = summarizer.summarize(&records);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!(
        "{} {} ({} fields, {})",
        "Diamond:".bold(),
        source.file,
        source.record_count,
        source.format
    );

    if verbose {
        println!("  {}", source.hash.dimmed());
    }

    if summaries.is_empty() {
        println!();
        println!("{}", "No field attributes found.".yellow());
        return Ok(());
    }

    for group in AttributeGroup::ALL {
        let in_group: Vec<&Summary> = summaries.iter().filter(|s| s.group == group).collect();
        if in_group.is_empty() {
            continue;
        }

        println!();
        println!("{}", group.label().cyan().bold());
        for summary in in_group {
            print_summary(summary);
        }
    }

    Ok(())
}

fn print_summary(summary: &Summary) {
    if summary.varies() {
        println!("  {}: {}", summary.title, summary.common_value_display.dimmed());
    } else {
        println!("  {}: {}", summary.title, summary.common_value_display.green());
    }

    for exception in &summary.exceptions {
        println!("      {}: {}", exception.field_name.dimmed(), exception.display);
    }
}
