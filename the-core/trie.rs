//! A codepoint trie over the unicode sequences of the database.
//!
//! Values are indices into the owning table's record list, so the trie itself
//! never borrows or clones records.

use std::collections::HashMap;

/// How a codepoint sequence relates to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matches {
  /// The sequence is an emoji.
  Exactly,
  /// The sequence is a proper prefix of at least one emoji.
  Possibly,
  /// No emoji starts with the sequence.
  Impossibly,
}

impl Matches {
  pub fn exact_match(self) -> bool {
    self == Matches::Exactly
  }

  pub fn impossible_match(self) -> bool {
    self == Matches::Impossibly
  }
}

#[derive(Debug, Default)]
struct Node {
  children: HashMap<char, Node>,
  value:    Option<usize>,
}

#[derive(Debug, Default)]
pub struct EmojiTrie {
  root: Node,
}

impl EmojiTrie {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts `unicode` and returns the value it replaced.
  pub fn insert(&mut self, unicode: &str, value: usize) -> Option<usize> {
    let mut node = &mut self.root;
    for ch in unicode.chars() {
      node = node.children.entry(ch).or_default();
    }
    node.value.replace(value)
  }

  pub fn get(&self, unicode: &str) -> Option<usize> {
    self.node(unicode.chars())?.value
  }

  pub fn matches(&self, chars: impl IntoIterator<Item = char>) -> Matches {
    match self.node(chars) {
      None => Matches::Impossibly,
      Some(node) if node.value.is_some() => Matches::Exactly,
      Some(_) => Matches::Possibly,
    }
  }

  /// Finds the longest inserted sequence that is a prefix of `text`.
  ///
  /// Returns the stored value and the matched length in bytes.
  pub fn longest_prefix(&self, text: &str) -> Option<(usize, usize)> {
    self.longest_prefix_chars(text.chars())
  }

  /// Same as [`EmojiTrie::longest_prefix`] but over any char sequence; the
  /// returned length is the sum of the UTF-8 widths of the matched chars.
  pub fn longest_prefix_chars(
    &self,
    chars: impl IntoIterator<Item = char>,
  ) -> Option<(usize, usize)> {
    let mut node = &self.root;
    let mut consumed = 0;
    let mut best = None;
    for ch in chars {
      match node.children.get(&ch) {
        Some(next) => node = next,
        None => break,
      }
      consumed += ch.len_utf8();
      if let Some(value) = node.value {
        best = Some((value, consumed));
      }
    }
    best
  }

  fn node(&self, chars: impl IntoIterator<Item = char>) -> Option<&Node> {
    let mut node = &self.root;
    for ch in chars {
      node = node.children.get(&ch)?;
    }
    Some(node)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn trie() -> EmojiTrie {
    let mut trie = EmojiTrie::new();
    trie.insert("\u{1F468}", 0);
    trie.insert("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}", 1);
    trie.insert("\u{1F1EB}\u{1F1F7}", 2);
    trie
  }

  #[test]
  fn matches_states() {
    let trie = trie();
    assert_eq!(trie.matches("\u{1F468}".chars()), Matches::Exactly);
    assert_eq!(trie.matches("\u{1F468}\u{200D}".chars()), Matches::Possibly);
    assert_eq!(trie.matches("\u{1F1EB}".chars()), Matches::Possibly);
    assert_eq!(trie.matches("x".chars()), Matches::Impossibly);
    assert!(trie.matches("\u{1F1EB}\u{1F1F7}".chars()).exact_match());
    assert!(trie.matches("\u{1F1EB}\u{1F1EB}".chars()).impossible_match());
  }

  #[test]
  fn longest_prefix_prefers_longer() {
    let trie = trie();
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466} family";
    assert_eq!(trie.longest_prefix(family), Some((1, 18)));
    // The ZWJ sequence is incomplete, fall back to the man.
    assert_eq!(
      trie.longest_prefix("\u{1F468}\u{200D}\u{1F469}!"),
      Some((0, 4))
    );
    assert_eq!(trie.longest_prefix("no emoji"), None);
    assert_eq!(trie.longest_prefix(""), None);
  }

  #[test]
  fn insert_reports_replaced_value() {
    let mut trie = trie();
    assert_eq!(trie.insert("\u{1F1EB}\u{1F1F7}", 7), Some(2));
    assert_eq!(trie.get("\u{1F1EB}\u{1F1F7}"), Some(7));
    assert_eq!(trie.get("\u{1F1EB}"), None);
  }
}
