//! The common error type used by this crate.

use thiserror::Error;

/// Errors reported by the analysis pipeline and its I/O boundary.
#[derive(Error, Debug)]
pub enum CirrusError {
  /// A selection size was requested that the frequency table cannot satisfy.
  ///
  /// Recoverable: the boundary is expected to re-prompt for a new size.
  /// `requested` is signed so that negative operator input can be reported
  /// as-is rather than being mangled by an unsigned conversion.
  #[error("invalid selection size {requested}: must be between 0 and {distinct}")]
  InvalidSelectionSize {
    /// The size that was asked for.
    requested: i64,
    /// The number of distinct words actually available.
    distinct: usize,
  },

  /// The document could not be read or the report could not be written.
  ///
  /// Terminal: the run aborts with the underlying cause.
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_selection_size_message() {
    let err = CirrusError::InvalidSelectionSize {
      requested: -1,
      distinct: 4,
    };
    assert_eq!(
      err.to_string(),
      "invalid selection size -1: must be between 0 and 4"
    );
  }
}
