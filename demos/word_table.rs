//! Full alphabetical word-count table example.

use cirrus::prelude::*;

fn main() {
    println!("=== Cirrus Word Count Table Example ===\n");

    let separators = SeparatorSet::punctuation();
    let mut table = FrequencyTable::new();
    table.add_line("How much wood would a woodchuck chuck, if a woodchuck could chuck wood?", &separators);

    for line in render_table(&table, "woodchuck.txt") {
        println!("{line}");
    }
}
