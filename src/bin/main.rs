//! Interactive report generator: prompts for a document, builds either a tag
//! cloud or a full word-count table, and writes the HTML report to a file.
//!
//! All of the retry and file handling lives here at the boundary; the
//! analysis pipeline itself is pure and stateless across retries.

use cirrus::prelude::*;
use std::env;
use std::fs::File;
use std::io::{self, stdin, stdout, BufRead, BufReader, BufWriter, Write};
use std::process;

fn main() {
    let table_mode = env::args().any(|arg| arg == "--table");
    if let Err(e) = run(table_mode) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(table_mode: bool) -> Result<(), CirrusError> {
    let input_path = prompt("Enter the name of the input file: ")?;
    let table = count_document(&input_path)?;

    let output_path = prompt("Enter the name of the output file: ")?;

    let report = if table_mode {
        render_table(&table, &input_path)
    } else {
        let n = ask_selection_size(table.len())?;
        let cloud = TagCloud::from_table(&table, n)?;
        render_cloud(&cloud, &input_path)
    };

    write_report(&output_path, &report)?;
    Ok(())
}

/// Reads the document line by line into a frequency table.
fn count_document(path: &str) -> Result<FrequencyTable, CirrusError> {
    let separators = SeparatorSet::whitespace_and_punctuation();
    let reader = BufReader::new(File::open(path)?);

    let mut table = FrequencyTable::new();
    for line in reader.lines() {
        table.add_line(&line?, &separators);
    }
    Ok(table)
}

/// Asks for the number of words to include until the operator supplies a
/// valid size. Non-numeric, negative, and oversized input are all reported
/// and re-prompted, never fatal.
fn ask_selection_size(distinct: usize) -> Result<usize, CirrusError> {
    loop {
        let input = prompt("Number of words to include: ")?;
        match parse_selection_size(&input, distinct) {
            Ok(n) => return Ok(n),
            Err(_) => {
                println!("Please enter an integer between 0 and {distinct} (the number of distinct words in the input file).");
            }
        }
    }
}

fn write_report(path: &str, lines: &[String]) -> Result<(), CirrusError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    stdout().flush()?;
    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
