//! Example: Summarize a park's field list with Diamond.
//!
//! Usage:
//!   cargo run --example summarize -- <file_path>
//!
//! Example:
//!   cargo run --example summarize -- test_data/riverside_park.json

use std::env;
use std::path::Path;

use diamond::{AttributeGroup, Summarizer};

fn main() -> diamond::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example summarize -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example summarize -- test_data/riverside_park.json");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let (summaries, source) = Summarizer::new().summarize_file(path)?;

    println!("{} ({} fields, {})", source.file, source.record_count, source.format);
    println!();

    for group in AttributeGroup::ALL {
        let in_group: Vec<_> = summaries.iter().filter(|s| s.group == group).collect();
        if in_group.is_empty() {
            continue;
        }

        println!("## {}", group);
        for summary in in_group {
            println!("  {}: {}", summary.title, summary.common_value_display);
            for exception in &summary.exceptions {
                println!("      {}: {}", exception.field_name, exception.display);
            }
        }
        println!();
    }

    Ok(())
}
