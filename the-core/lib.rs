//! Conversions between unicode emoji and their textual forms.
//!
//! An [`EmojiTable`] is built once from database records and then shared by
//! reference. Text is split by the [scanner](scan) into literal spans and
//! [`UnicodeCandidate`]s, which the [renderer](render) turns into aliases or
//! HTML entities. [`EmojiParser`] bundles both directions.

pub mod decode;
pub mod emoji;
pub mod error;
pub mod fitzpatrick;
pub mod parser;
pub mod render;
pub mod scan;
pub mod table;
pub mod trie;

#[cfg(test)]
mod test_utils;

pub use emoji::Emoji;
pub use error::TableError;
pub use fitzpatrick::Fitzpatrick;
pub use parser::EmojiParser;
pub use render::{
  FitzpatrickAction,
  Format,
  RenderOptions,
};
pub use scan::{
  Scanner,
  Segment,
  UnicodeCandidate,
};
pub use table::EmojiTable;
pub use trie::Matches;
