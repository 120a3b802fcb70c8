//! Text tokenization against a configurable separator set.
//!
//! A line of text is split into maximal homogeneous runs: each run consists
//! either entirely of separator characters or entirely of non-separator
//! characters. Tokenization is total and lossless, so concatenating the runs
//! reproduces the line exactly.

use crate::separators::SeparatorSet;
use crate::types::{Token, TokenKind};

/// Returns the maximal run starting at byte offset `position` in `text`.
///
/// If the character at `position` is a separator, the run extends while
/// characters remain separators; otherwise it extends while characters remain
/// non-separators. The run never crosses a boundary where separator
/// membership changes.
///
/// # Panics
///
/// `position` must satisfy `0 <= position < text.len()` and fall on a char
/// boundary. Violating either is a programmer error, not a runtime
/// condition, and panics.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> Token<'a> {
  assert!(
    position < text.len(),
    "token position {position} out of bounds for line of length {}",
    text.len()
  );

  let rest = &text[position..];
  let run_is_separator = match rest.chars().next() {
    Some(c) => separators.contains(c),
    None => unreachable!("position is in bounds, so the remainder is non-empty"),
  };

  // Scan to the first character whose membership differs from the run's.
  let run_len = rest
    .char_indices()
    .find(|(_, c)| separators.contains(*c) != run_is_separator)
    .map(|(offset, _)| offset)
    .unwrap_or(rest.len());

  Token {
    text: &rest[..run_len],
    kind: if run_is_separator {
      TokenKind::Separator
    } else {
      TokenKind::Word
    },
  }
}

/// A lazy iterator over the tokens of a single line.
///
/// Produced by [`tokenize`]. Yields every token of the line exactly once,
/// words and separator runs alike; it is the consumer's job to discard
/// separator runs and lowercase word runs.
pub struct Tokens<'a> {
  line: &'a str,
  position: usize,
  separators: &'a SeparatorSet,
}

impl<'a> Iterator for Tokens<'a> {
  type Item = Token<'a>;

  fn next(&mut self) -> Option<Token<'a>> {
    if self.position >= self.line.len() {
      return None;
    }
    let token = next_token(self.line, self.position, self.separators);
    self.position += token.text.len();
    Some(token)
  }
}

/// Tokenizes one line of text into a lazy sequence of runs.
///
/// An empty line yields no tokens; a line made up entirely of separators
/// yields a single separator token.
pub fn tokenize<'a>(line: &'a str, separators: &'a SeparatorSet) -> Tokens<'a> {
  Tokens {
    line,
    position: 0,
    separators,
  }
}

/// Yields the normalized (lowercased) words of a line, skipping separators.
pub fn words<'a>(
  line: &'a str,
  separators: &'a SeparatorSet,
) -> impl Iterator<Item = String> + 'a {
  tokenize(line, separators)
    .filter(Token::is_word)
    .map(|token| token.text.to_lowercase())
}
