//! Assembly of a tag cloud from a frequency table.

use crate::error::CirrusError;
use crate::frequency::FrequencyTable;
use crate::select;
use crate::types::CloudEntry;
use crate::weight;
use serde::{Deserialize, Serialize};

/// A fully assembled tag cloud: the selected words, each classified against
/// the selection's mean count, held in display (alphabetical) order.
///
/// The selection itself is ranked by count, but a tag cloud always displays
/// alphabetically; the two orders are decoupled here, at assembly time, so
/// the renderer is a pure formatting pass.
///
/// # Examples
///
/// ```rust
/// use cirrus::cloud::TagCloud;
/// use cirrus::frequency::FrequencyTable;
/// use cirrus::separators::SeparatorSet;
///
/// let seps = SeparatorSet::from_chars(" .,!");
/// let mut table = FrequencyTable::new();
/// table.add_line("The the THE fox. Fox FOX!", &seps);
///
/// let cloud = TagCloud::from_table(&table, 2).unwrap();
/// assert_eq!(cloud.len(), 2);
/// assert_eq!(cloud.mean, 3);
/// assert_eq!(cloud.entries[0].word, "fox");
/// assert_eq!(cloud.entries[1].word, "the");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCloud {
  /// The selected words in alphabetical order, each with count and tier.
  pub entries: Vec<CloudEntry>,
  /// The truncated arithmetic mean count of the selection, shared by every
  /// entry's classification.
  pub mean: usize,
}

impl TagCloud {
  /// Selects the top `n` words from `table` and classifies them.
  ///
  /// Fails with [`CirrusError::InvalidSelectionSize`] when `n` exceeds the
  /// number of distinct words. `n = 0` produces an empty cloud.
  pub fn from_table(table: &FrequencyTable, n: usize) -> Result<Self, CirrusError> {
    let selected = select::select(table, n)?;
    let mean = weight::mean_count(&selected);

    let mut entries: Vec<CloudEntry> = selected
      .into_iter()
      .map(|(word, count)| CloudEntry {
        tier: weight::classify(count, mean),
        word,
        count,
      })
      .collect();
    entries.sort_by(|a, b| a.word.cmp(&b.word));

    Ok(Self { entries, mean })
  }

  /// Number of words in the cloud.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns true if the cloud holds no words.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
