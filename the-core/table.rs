//! The immutable, queryable emoji database.

use std::collections::HashMap;

use indexmap::IndexSet;
use log::{
  debug,
  warn,
};

use crate::{
  emoji::Emoji,
  error::{
    Result,
    TableError,
  },
  trie::{
    EmojiTrie,
    Matches,
  },
};

/// All known emoji, indexed by unicode sequence, alias and tag.
///
/// A table is built once and never mutated afterwards, so a shared reference
/// (or an `Arc`) can be handed to any number of threads.
#[derive(Debug)]
pub struct EmojiTable {
  emojis:   Vec<Emoji>,
  trie:     EmojiTrie,
  by_alias: HashMap<String, usize>,
  by_tag:   HashMap<String, Vec<usize>>,
  tags:     IndexSet<String>,
}

impl EmojiTable {
  /// Indexes `records` in order.
  ///
  /// Two records sharing a unicode sequence is tolerated: the later record
  /// wins every unicode lookup and a warning is logged. Two records sharing
  /// an alias fails the whole build.
  pub fn build(records: impl IntoIterator<Item = Emoji>) -> Result<EmojiTable> {
    let emojis: Vec<Emoji> = records.into_iter().collect();
    let mut trie = EmojiTrie::new();
    let mut by_alias: HashMap<String, usize> = HashMap::with_capacity(emojis.len());
    let mut by_tag: HashMap<String, Vec<usize>> = HashMap::new();
    let mut tags = IndexSet::new();

    for (idx, emoji) in emojis.iter().enumerate() {
      if let Some(prev) = trie.insert(emoji.unicode(), idx) {
        warn!(
          "duplicate emoji {:?}: {:?} replaces {:?}",
          emoji.unicode(),
          emoji.alias(),
          emojis[prev].alias()
        );
      }

      for alias in emoji.aliases() {
        match by_alias.get(alias) {
          Some(&other) if other == idx => {},
          Some(&other) => {
            return Err(TableError::DuplicateAlias {
              alias:  alias.clone(),
              first:  emojis[other].unicode().to_owned(),
              second: emoji.unicode().to_owned(),
            });
          },
          None => {
            by_alias.insert(alias.clone(), idx);
          },
        }
      }

      for tag in emoji.tags() {
        let entry = by_tag.entry(tag.clone()).or_default();
        if entry.last() != Some(&idx) {
          entry.push(idx);
        }
        tags.insert(tag.clone());
      }
    }

    debug!(
      "emoji table built: {} records, {} aliases, {} tags",
      emojis.len(),
      by_alias.len(),
      tags.len()
    );

    Ok(EmojiTable {
      emojis,
      trie,
      by_alias,
      by_tag,
      tags,
    })
  }

  /// Every record, in load order.
  pub fn all(&self) -> &[Emoji] {
    &self.emojis
  }

  pub fn len(&self) -> usize {
    self.emojis.len()
  }

  pub fn is_empty(&self) -> bool {
    self.emojis.is_empty()
  }

  /// Every tag, in the order it was first seen.
  pub fn all_tags(&self) -> impl Iterator<Item = &str> {
    self.tags.iter().map(String::as_str)
  }

  /// Exact lookup by unicode sequence, without any skin tone modifier.
  pub fn get_by_unicode(&self, unicode: &str) -> Option<&Emoji> {
    self.trie.get(unicode).map(|idx| &self.emojis[idx])
  }

  /// Exact, case-sensitive lookup by alias. Surrounding colons are ignored,
  /// so `smile` and `:smile:` are equivalent.
  pub fn get_for_alias(&self, alias: &str) -> Option<&Emoji> {
    let alias = alias.strip_prefix(':').unwrap_or(alias);
    let alias = alias.strip_suffix(':').unwrap_or(alias);
    self.by_alias.get(alias).map(|&idx| &self.emojis[idx])
  }

  /// All records carrying exactly `tag`.
  pub fn get_for_tag(&self, tag: &str) -> Vec<&Emoji> {
    self
      .by_tag
      .get(tag)
      .map(|indices| indices.iter().map(|&idx| &self.emojis[idx]).collect())
      .unwrap_or_default()
  }

  /// Records with at least one alias containing `needle`.
  pub fn search_aliases(&self, needle: &str) -> Vec<&Emoji> {
    self
      .emojis
      .iter()
      .filter(|emoji| emoji.aliases().iter().any(|alias| alias.contains(needle)))
      .collect()
  }

  /// Records with at least one tag containing `needle`.
  pub fn search_tags(&self, needle: &str) -> Vec<&Emoji> {
    self
      .emojis
      .iter()
      .filter(|emoji| emoji.tags().iter().any(|tag| tag.contains(needle)))
      .collect()
  }

  /// Whether `chars` is an emoji, the start of one, or neither.
  pub fn matches(&self, chars: impl IntoIterator<Item = char>) -> Matches {
    self.trie.matches(chars)
  }

  /// The record with the longest unicode sequence starting at byte `offset`
  /// of `text`.
  ///
  /// `offset` past the end or inside a char yields `None`.
  pub fn find_longest_at(&self, text: &str, offset: usize) -> Option<&Emoji> {
    self.longest_at(text, offset).map(|(emoji, _)| emoji)
  }

  /// Like [`EmojiTable::find_longest_at`], also returning the matched length
  /// in bytes.
  pub(crate) fn longest_at(&self, text: &str, offset: usize) -> Option<(&Emoji, usize)> {
    let rest = text.get(offset..)?;
    self
      .trie
      .longest_prefix(rest)
      .map(|(idx, len)| (&self.emojis[idx], len))
  }

  /// Longest match over an arbitrary char sequence. Used by the decoder,
  /// which matches codepoints that came out of HTML entities.
  pub(crate) fn longest_in_chars(
    &self,
    chars: impl IntoIterator<Item = char>,
  ) -> Option<(&Emoji, usize)> {
    self
      .trie
      .longest_prefix_chars(chars)
      .map(|(idx, len)| (&self.emojis[idx], len))
  }
}
