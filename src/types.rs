//! Core data types for the cirrus analysis pipeline.

use serde::{Deserialize, Serialize};

/// The classification of a token produced by the tokenizer.
///
/// Every character of an input line belongs to exactly one token, and every
/// token is homogeneous: either none of its characters are separators, or all
/// of them are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
  /// A maximal run of non-separator characters.
  Word,
  /// A maximal run of separator characters.
  Separator,
}

/// A single token: a non-empty slice of an input line plus its classification.
///
/// Tokens borrow from the line they were scanned from; concatenating the
/// `text` of consecutive tokens reconstructs the line exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
  /// The matched run of characters. Never empty.
  pub text: &'a str,
  /// Whether this run is a word or a separator run.
  pub kind: TokenKind,
}

impl<'a> Token<'a> {
  /// Returns true if this token is a word run.
  pub fn is_word(&self) -> bool {
    self.kind == TokenKind::Word
  }
}

/// The visual weight assigned to a word in a tag cloud, relative to the
/// mean count of the selection it belongs to.
///
/// The variants are ordered: `Small < Medium < Large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeightTier {
  /// Count at or below half the mean.
  Small,
  /// Count above half the mean but not above 3/2 of it.
  Medium,
  /// Count above 3/2 of the mean.
  Large,
}

impl WeightTier {
  /// The CSS font class the HTML renderer emits for this tier.
  pub fn css_class(&self) -> &'static str {
    match self {
      WeightTier::Small => "f14",
      WeightTier::Medium => "f26",
      WeightTier::Large => "f48",
    }
  }
}

/// A single word chosen for a tag cloud, carrying its raw count and the
/// weight tier derived from the selection's mean count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudEntry {
  /// The normalized (lowercased) word.
  pub word: String,
  /// How many times the word occurred in the source document.
  pub count: usize,
  /// The visual weight of this word within its selection.
  pub tier: WeightTier,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tier_ordering() {
    assert!(WeightTier::Small < WeightTier::Medium);
    assert!(WeightTier::Medium < WeightTier::Large);
  }

  #[test]
  fn test_tier_css_classes() {
    assert_eq!(WeightTier::Small.css_class(), "f14");
    assert_eq!(WeightTier::Medium.css_class(), "f26");
    assert_eq!(WeightTier::Large.css_class(), "f48");
  }
}
