//! Case-normalized word frequency accumulation.

use crate::separators::SeparatorSet;
use crate::tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping from normalized word to its occurrence count.
///
/// Keys are pre-normalized: lowercased, non-empty, and free of separator
/// characters. Normalization happens at the tokenizer boundary, so the table
/// itself never inspects its keys. Counts are always positive and entries are
/// never removed within a run.
///
/// The table is created empty, filled by a single writer, and then handed off
/// by value to the selection and rendering stages.
///
/// # Examples
///
/// ```rust
/// use cirrus::frequency::FrequencyTable;
/// use cirrus::separators::SeparatorSet;
///
/// let seps = SeparatorSet::from_chars(" .,!");
/// let mut table = FrequencyTable::new();
/// table.add_line("The the THE fox. Fox FOX!", &seps);
///
/// assert_eq!(table.count("the"), 3);
/// assert_eq!(table.count("fox"), 3);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
  counts: HashMap<String, usize>,
}

impl FrequencyTable {
  /// Creates an empty table.
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts `word` with count 1, or increments its existing count.
  ///
  /// The caller is responsible for normalization; the table stores the key
  /// exactly as given.
  pub fn increment(&mut self, word: impl Into<String>) {
    *self.counts.entry(word.into()).or_insert(0) += 1;
  }

  /// Tokenizes one line and counts every word in it.
  ///
  /// Separator runs are discarded and words are lowercased before counting.
  pub fn add_line(&mut self, line: &str, separators: &SeparatorSet) {
    for word in tokenizer::words(line, separators) {
      self.increment(word);
    }
  }

  /// Counts every word across a sequence of lines.
  pub fn add_lines<I, S>(&mut self, lines: I, separators: &SeparatorSet)
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    for line in lines {
      self.add_line(line.as_ref(), separators);
    }
  }

  /// The count recorded for `word`, or 0 if absent.
  pub fn count(&self, word: &str) -> usize {
    self.counts.get(word).copied().unwrap_or(0)
  }

  /// Number of distinct words in the table.
  pub fn len(&self) -> usize {
    self.counts.len()
  }

  /// Returns true if no words have been counted.
  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// A copy of the table's entries for downstream consumption.
  ///
  /// The order of the returned pairs is unspecified; callers that need a
  /// deterministic order sort it themselves. Does not mutate the table.
  pub fn snapshot(&self) -> Vec<(String, usize)> {
    self
      .counts
      .iter()
      .map(|(word, count)| (word.clone(), *count))
      .collect()
  }

  /// Iterates over the table's entries without copying.
  pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
    self.counts.iter().map(|(word, count)| (word.as_str(), *count))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_increment_inserts_then_counts_up() {
    let mut table = FrequencyTable::new();
    table.increment("fox");
    table.increment("fox");
    table.increment("the");
    assert_eq!(table.count("fox"), 2);
    assert_eq!(table.count("the"), 1);
    assert_eq!(table.count("dog"), 0);
  }

  #[test]
  fn test_add_line_normalizes_case() {
    let seps = SeparatorSet::from_chars(" .,!");
    let mut table = FrequencyTable::new();
    table.add_line("The the THE fox. Fox FOX!", &seps);
    assert_eq!(table.count("the"), 3);
    assert_eq!(table.count("fox"), 3);
    assert_eq!(table.len(), 2);
  }

  #[test]
  fn test_counting_is_order_independent() {
    let seps = SeparatorSet::from_chars(" ");
    let mut forward = FrequencyTable::new();
    forward.add_lines(["a b", "b c", "c c"], &seps);
    let mut backward = FrequencyTable::new();
    backward.add_lines(["c c", "b c", "a b"], &seps);
    assert_eq!(forward, backward);
  }

  #[test]
  fn test_snapshot_does_not_mutate() {
    let seps = SeparatorSet::from_chars(" ");
    let mut table = FrequencyTable::new();
    table.add_line("one two two", &seps);
    let before = table.clone();
    let mut snapshot = table.snapshot();
    snapshot.sort();
    assert_eq!(
      snapshot,
      vec![("one".to_string(), 1), ("two".to_string(), 2)]
    );
    assert_eq!(table, before);
  }

  #[test]
  fn test_empty_lines_count_nothing() {
    let seps = SeparatorSet::default();
    let mut table = FrequencyTable::new();
    table.add_lines(["", "   ", "\t"], &seps);
    assert!(table.is_empty());
  }
}
