//! Deterministic top-N selection over a frequency table.

use crate::error::CirrusError;
use crate::frequency::FrequencyTable;
use std::cmp::Reverse;

/// Returns the `n` highest-count `(word, count)` pairs from `table`.
///
/// Entries are ranked under a total order: count descending, with
/// count-equal entries broken alphabetically by word ascending. The tie-break
/// makes selection deterministic regardless of duplicate counts, so running
/// `select` twice on the same table always yields the same pairs in the same
/// order.
///
/// `n` may be anywhere from 0 (empty selection) to `table.len()` (the full
/// vocabulary). Anything larger fails with
/// [`CirrusError::InvalidSelectionSize`]; callers at the I/O boundary are
/// expected to re-prompt rather than abort.
pub fn select(table: &FrequencyTable, n: usize) -> Result<Vec<(String, usize)>, CirrusError> {
  let distinct = table.len();
  if n > distinct {
    return Err(CirrusError::InvalidSelectionSize {
      requested: n as i64,
      distinct,
    });
  }

  let mut ranked = table.snapshot();
  ranked.sort_by(|(word_a, count_a), (word_b, count_b)| {
    (Reverse(count_a), word_a).cmp(&(Reverse(count_b), word_b))
  });
  ranked.truncate(n);
  Ok(ranked)
}

/// Parses operator input into a selection size valid for `distinct` words.
///
/// Non-numeric input, negative numbers, and numbers exceeding `distinct` all
/// fail identically with [`CirrusError::InvalidSelectionSize`], so the
/// boundary's retry loop treats them the same way: report and re-prompt,
/// never crash.
pub fn parse_selection_size(input: &str, distinct: usize) -> Result<usize, CirrusError> {
  let requested: i64 = input
    .trim()
    .parse()
    .map_err(|_| CirrusError::InvalidSelectionSize {
      requested: -1,
      distinct,
    })?;

  if requested < 0 || requested as u64 > distinct as u64 {
    return Err(CirrusError::InvalidSelectionSize {
      requested,
      distinct,
    });
  }
  Ok(requested as usize)
}
