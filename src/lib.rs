//! Cirrus - word-frequency analysis and tag cloud reports.
//!
//! Cirrus turns a plain-text document into a frequency report of its distinct
//! words, rendered either as a ranked tag cloud (top N words, font-weighted
//! by relative frequency, displayed alphabetically) or as a full alphabetical
//! count table.
//!
//! The pipeline runs strictly forward: raw lines are split into word and
//! separator runs by the [`tokenizer`], word runs are lowercased and counted
//! into a [`frequency::FrequencyTable`], the top N words are chosen with a
//! deterministic tie-break by [`select`], classified into weight tiers by
//! [`weight`], and finally formatted by [`render`].
//!
//! # Examples
//!
//! ```rust
//! use cirrus::prelude::*;
//!
//! let separators = SeparatorSet::from_chars(" .,!");
//! let mut table = FrequencyTable::new();
//! table.add_line("The the THE fox. Fox FOX!", &separators);
//!
//! let cloud = TagCloud::from_table(&table, 2)?;
//! let report = render_cloud(&cloud, "fox.txt");
//! assert!(report.contains(&"<title>Top 2 words in fox.txt</title>".to_string()));
//! # Ok::<(), CirrusError>(())
//! ```

pub mod cloud;
pub mod error;
pub mod frequency;
pub mod render;
pub mod select;
pub mod separators;
pub mod tokenizer;
pub mod types;
pub mod weight;

pub mod prelude {
  //! Convenient re-exports for common types and operations.

  pub use crate::cloud::TagCloud;
  pub use crate::error::CirrusError;
  pub use crate::frequency::FrequencyTable;
  pub use crate::render::{render_cloud, render_table};
  pub use crate::select::{parse_selection_size, select};
  pub use crate::separators::SeparatorSet;
  pub use crate::tokenizer::{next_token, tokenize};
  pub use crate::types::{CloudEntry, Token, TokenKind, WeightTier};
  pub use crate::weight::{classify, mean_count};
}
