/*! Dataset transformers.

Transforms datasets by rewriting texts, splitting records or adding derived columns.
Each transformer takes a [crate::speech::Dataset] by value and returns a new one.

!*/

mod count;
mod party;
mod split;
mod transform;
mod trim;

pub use count::{char_count, word_count, CharCount, WordCount};
pub use party::PartyName;
pub use split::{split_segments, SplitParagraphs};
pub use transform::{Transform, Transformer};
pub use trim::{trim_to_max_words, TrimWords};
