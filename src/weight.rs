//! Classification of word counts into visual weight tiers.
//!
//! A tag cloud renders each word at one of three sizes depending on how its
//! count compares to the arithmetic mean count of the selection. The
//! thresholds (`avg * 3 / 2` and `avg / 2`, integer arithmetic) match the
//! established tag cloud convention and are applied uniformly: the mean is
//! computed once per selection, never per word.

use crate::types::WeightTier;

/// Buckets a word count into a weight tier relative to the selection mean.
///
/// Evaluated in order: counts above `avg * 3 / 2` are [`WeightTier::Large`],
/// counts above `avg / 2` are [`WeightTier::Medium`], everything else is
/// [`WeightTier::Small`]. Division truncates toward zero. When the mean is 0
/// only a count of 0 is possible, which resolves to Small.
pub fn classify(count: usize, avg: usize) -> WeightTier {
  if count > avg * 3 / 2 {
    WeightTier::Large
  } else if count > avg / 2 {
    WeightTier::Medium
  } else {
    WeightTier::Small
  }
}

/// The arithmetic mean of the counts in a selection, truncated to an integer.
///
/// An empty selection has mean 0.
pub fn mean_count(pairs: &[(String, usize)]) -> usize {
  if pairs.is_empty() {
    return 0;
  }
  let total: usize = pairs.iter().map(|(_, count)| count).sum();
  total / pairs.len()
}
