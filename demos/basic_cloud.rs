//! Basic tag cloud example over an in-memory document.

use cirrus::prelude::*;

const DOCUMENT: &str = "\
It was the best of times, it was the worst of times, it was the age of
wisdom, it was the age of foolishness, it was the epoch of belief, it was
the epoch of incredulity, it was the season of Light, it was the season of
Darkness, it was the spring of hope, it was the winter of despair.";

fn main() {
    println!("=== Cirrus Tag Cloud Example ===\n");

    let separators = SeparatorSet::whitespace_and_punctuation();
    let mut table = FrequencyTable::new();
    table.add_lines(DOCUMENT.lines(), &separators);

    println!("Counted {} distinct words\n", table.len());

    let n = 8.min(table.len());
    let cloud = match TagCloud::from_table(&table, n) {
        Ok(cloud) => cloud,
        Err(e) => {
            eprintln!("error: {e}");
            return;
        }
    };

    println!("Top {} words (mean count {}):", cloud.len(), cloud.mean);
    for entry in &cloud.entries {
        println!("  {:<14} count={:<3} tier={:?}", entry.word, entry.count, entry.tier);
    }

    println!("\nAs JSON:");
    match serde_json::to_string_pretty(&cloud) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: {e}"),
    }

    println!("\nAs HTML:");
    for line in render_cloud(&cloud, "tale-of-two-cities.txt") {
        println!("{line}");
    }
}
