use thiserror::Error;

/// Errors that can occur while building an [`EmojiTable`](crate::EmojiTable)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
  /// Two records claim the same alias. The database is corrupt.
  #[error("alias `{alias}` is used by both {first} and {second}")]
  DuplicateAlias {
    alias:  String,
    first:  String,
    second: String,
  },
}

pub type Result<T> = std::result::Result<T, TableError>;
