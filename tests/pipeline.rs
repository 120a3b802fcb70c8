//! End-to-end tests over the whole analysis pipeline: tokenize, count,
//! select, classify, render.

use cirrus::prelude::*;

fn count(text: &str, separators: &SeparatorSet) -> FrequencyTable {
  let mut table = FrequencyTable::new();
  table.add_lines(text.lines(), separators);
  table
}

#[test]
fn fox_round_trip() {
  // "The the THE fox. Fox FOX!" with separators {' ', '.', '!'} counts to
  // {the: 3, fox: 3}; with n = 2 the mean is 3, and since 3 is not above
  // 3 * 3 / 2 = 4 but is above 3 / 2 = 1, both words land in the Medium
  // tier and display alphabetically: fox, the.
  let separators = SeparatorSet::from_chars(" .!");
  let table = count("The the THE fox. Fox FOX!", &separators);

  assert_eq!(table.len(), 2);
  assert_eq!(table.count("the"), 3);
  assert_eq!(table.count("fox"), 3);

  let cloud = TagCloud::from_table(&table, 2).unwrap();
  assert_eq!(cloud.mean, 3);
  assert_eq!(cloud.entries[0].word, "fox");
  assert_eq!(cloud.entries[0].tier, WeightTier::Medium);
  assert_eq!(cloud.entries[1].word, "the");
  assert_eq!(cloud.entries[1].tier, WeightTier::Medium);
}

#[test]
fn zero_selection_reports_top_zero() {
  let separators = SeparatorSet::default();
  let table = count("some words here", &separators);

  let cloud = TagCloud::from_table(&table, 0).unwrap();
  assert!(cloud.is_empty());

  let report = render_cloud(&cloud, "doc.txt");
  assert!(report.contains(&"<h2>Top 0 words in doc.txt</h2>".to_string()));
}

#[test]
fn full_vocabulary_selection() {
  let separators = SeparatorSet::default();
  let table = count("delta alpha charlie bravo alpha", &separators);

  let cloud = TagCloud::from_table(&table, table.len()).unwrap();
  let words: Vec<&str> = cloud.entries.iter().map(|e| e.word.as_str()).collect();
  assert_eq!(words, vec!["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn oversized_selection_is_invalid() {
  let separators = SeparatorSet::default();
  let table = count("one two three", &separators);

  let err = TagCloud::from_table(&table, 4).unwrap_err();
  assert!(matches!(
    err,
    CirrusError::InvalidSelectionSize {
      requested: 4,
      distinct: 3,
    }
  ));
}

#[test]
fn negative_and_non_numeric_sizes_are_invalid() {
  assert!(matches!(
    parse_selection_size("-1", 3).unwrap_err(),
    CirrusError::InvalidSelectionSize {
      requested: -1,
      distinct: 3,
    }
  ));
  assert!(matches!(
    parse_selection_size("lots", 3).unwrap_err(),
    CirrusError::InvalidSelectionSize { .. }
  ));
}

#[test]
fn selection_holds_globally_largest_counts() {
  let separators = SeparatorSet::default();
  let table = count(
    "apple apple apple apple\nbanana banana banana\ncherry cherry\ndate\nelderberry",
    &separators,
  );

  let selected = select(&table, 2).unwrap();
  let smallest_selected = selected.iter().map(|(_, c)| *c).min().unwrap();

  for (word, count) in table.snapshot() {
    if !selected.iter().any(|(w, _)| *w == word) {
      assert!(count <= smallest_selected, "{word} should have been selected");
    }
  }
}

#[test]
fn multi_line_documents_accumulate() {
  let separators = SeparatorSet::default();
  let table = count("rain rain\nrain go\naway", &separators);
  assert_eq!(table.count("rain"), 3);
  assert_eq!(table.count("go"), 1);
  assert_eq!(table.count("away"), 1);
}

#[test]
fn table_report_covers_whole_vocabulary() {
  let separators = SeparatorSet::punctuation();
  let table = count("to be, or not to be", &separators);

  let report = render_table(&table, "hamlet.txt");
  let rows: Vec<&String> = report.iter().filter(|l| l.starts_with("<td>")).collect();
  // 4 distinct words, 2 cells each.
  assert_eq!(rows.len(), 8);
  assert!(report.contains(&"<td>be</td>".to_string()));
  assert!(report.contains(&"<td>2</td>".to_string()));
}
