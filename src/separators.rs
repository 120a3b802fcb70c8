//! The configurable set of characters that delimit words.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An immutable set of separator characters.
///
/// A separator set is configured once per run and never mutated afterwards;
/// the tokenizer consults it to decide where word boundaries fall. Duplicate
/// characters in the source string are collapsed and order is irrelevant.
///
/// # Examples
///
/// ```rust
/// use cirrus::separators::SeparatorSet;
///
/// let seps = SeparatorSet::from_chars(" .,!");
/// assert!(seps.contains(' '));
/// assert!(seps.contains('!'));
/// assert!(!seps.contains('a'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorSet {
  chars: HashSet<char>,
}

impl SeparatorSet {
  /// Builds a separator set from every character of `source`.
  pub fn from_chars(source: &str) -> Self {
    source.chars().collect()
  }

  /// The set used for tag cloud generation: whitespace plus common
  /// punctuation and bracket characters.
  pub fn whitespace_and_punctuation() -> Self {
    Self::from_chars(" \t\n\r,-.!?[]';:/()")
  }

  /// The smaller set used for plain word counting: space plus sentence
  /// punctuation.
  pub fn punctuation() -> Self {
    Self::from_chars(", :.;-?!")
  }

  /// Returns true if `c` delimits words.
  pub fn contains(&self, c: char) -> bool {
    self.chars.contains(&c)
  }

  /// Number of distinct separator characters in the set.
  pub fn len(&self) -> usize {
    self.chars.len()
  }

  /// Returns true if the set contains no characters. An empty set makes
  /// every line a single word token.
  pub fn is_empty(&self) -> bool {
    self.chars.is_empty()
  }
}

impl Default for SeparatorSet {
  /// Defaults to the tag cloud set, [`SeparatorSet::whitespace_and_punctuation`].
  fn default() -> Self {
    Self::whitespace_and_punctuation()
  }
}

impl FromIterator<char> for SeparatorSet {
  fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
    Self {
      chars: iter.into_iter().collect(),
    }
  }
}
