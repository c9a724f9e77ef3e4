//! Splitting text into literal spans and emoji candidates.
//!
//! Scanning is greedy: at every position the longest database sequence wins,
//! then a single trailing skin tone modifier is attached when the matched
//! emoji supports one. Anything else is literal text, one `char` at a time,
//! with consecutive literal chars merged into one span.

use crate::{
  emoji::Emoji,
  fitzpatrick::Fitzpatrick,
  table::EmojiTable,
};

/// One recognized emoji occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeCandidate<'t, 's> {
  emoji:       &'t Emoji,
  fitzpatrick: Option<Fitzpatrick>,
  text:        &'s str,
  start:       usize,
}

impl<'t, 's> UnicodeCandidate<'t, 's> {
  pub fn emoji(&self) -> &'t Emoji {
    self.emoji
  }

  pub fn fitzpatrick(&self) -> Option<Fitzpatrick> {
    self.fitzpatrick
  }

  pub fn has_fitzpatrick(&self) -> bool {
    self.fitzpatrick.is_some()
  }

  /// The consumed input, emoji plus modifier.
  pub fn as_str(&self) -> &'s str {
    self.text
  }

  /// Byte offset of the candidate in the scanned text.
  pub fn start(&self) -> usize {
    self.start
  }

  /// Byte offset one past the candidate, modifier included.
  pub fn end(&self) -> usize {
    self.start + self.text.len()
  }

  /// Byte offset one past the emoji itself, where the modifier starts.
  pub fn emoji_end(&self) -> usize {
    self.start + self.emoji.unicode().len()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t, 's> {
  Literal { start: usize, text: &'s str },
  Emoji(UnicodeCandidate<'t, 's>),
}

impl<'s> Segment<'_, 's> {
  /// The original text covered by this segment.
  pub fn as_str(&self) -> &'s str {
    match self {
      Segment::Literal { text, .. } => *text,
      Segment::Emoji(candidate) => candidate.as_str(),
    }
  }

  pub fn start(&self) -> usize {
    match self {
      Segment::Literal { start, .. } => *start,
      Segment::Emoji(candidate) => candidate.start(),
    }
  }

  pub fn is_literal(&self) -> bool {
    matches!(self, Segment::Literal { .. })
  }
}

/// Iterator over the [`Segment`]s of a text.
///
/// Segments are ordered, never overlap and leave no gaps, so concatenating
/// [`Segment::as_str`] yields the scanned text back.
#[derive(Debug, Clone)]
pub struct Scanner<'t, 's> {
  table:   &'t EmojiTable,
  text:    &'s str,
  pos:     usize,
  pending: Option<UnicodeCandidate<'t, 's>>,
}

impl<'t, 's> Scanner<'t, 's> {
  pub fn new(table: &'t EmojiTable, text: &'s str) -> Self {
    Self {
      table,
      text,
      pos: 0,
      pending: None,
    }
  }

  fn candidate_at(&self, start: usize) -> Option<UnicodeCandidate<'t, 's>> {
    let (emoji, len) = self.table.longest_at(self.text, start)?;
    let mut end = start + len;
    let fitzpatrick = if emoji.supports_fitzpatrick() {
      Fitzpatrick::from_prefix(&self.text[end..])
    } else {
      None
    };
    if let Some(fitzpatrick) = fitzpatrick {
      end += fitzpatrick.len_utf8();
    }
    Some(UnicodeCandidate {
      emoji,
      fitzpatrick,
      text: &self.text[start..end],
      start,
    })
  }
}

impl<'t, 's> Iterator for Scanner<'t, 's> {
  type Item = Segment<'t, 's>;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(candidate) = self.pending.take() {
      self.pos = candidate.end();
      return Some(Segment::Emoji(candidate));
    }

    let start = self.pos;
    let mut i = start;
    while let Some(ch) = self.text[i..].chars().next() {
      if let Some(candidate) = self.candidate_at(i) {
        if i == start {
          self.pos = candidate.end();
          return Some(Segment::Emoji(candidate));
        }
        self.pending = Some(candidate);
        break;
      }
      i += ch.len_utf8();
    }

    if i == start {
      return None;
    }
    self.pos = i;
    Some(Segment::Literal {
      start,
      text: &self.text[start..i],
    })
  }
}

impl EmojiTable {
  pub fn scan<'t, 's>(&'t self, text: &'s str) -> Scanner<'t, 's> {
    Scanner::new(self, text)
  }

  /// Only the emoji candidates of `text`, in order.
  pub fn candidates<'t, 's>(
    &'t self,
    text: &'s str,
  ) -> impl Iterator<Item = UnicodeCandidate<'t, 's>> {
    self.scan(text).filter_map(|segment| match segment {
      Segment::Emoji(candidate) => Some(candidate),
      Segment::Literal { .. } => None,
    })
  }

  /// Whether `text` is exactly one emoji, optionally with a supported skin
  /// tone modifier.
  pub fn is_emoji(&self, text: &str) -> bool {
    let mut scanner = self.scan(text);
    matches!(
      (scanner.next(), scanner.next()),
      (Some(Segment::Emoji(_)), None)
    )
  }

  pub fn contains_emoji(&self, text: &str) -> bool {
    self.candidates(text).next().is_some()
  }

  /// Whether `text` is non-empty and made of emoji only.
  pub fn is_only_emojis(&self, text: &str) -> bool {
    !text.is_empty() && self.scan(text).all(|segment| !segment.is_literal())
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::test_utils::sample_table;

  fn describe<'s>(table: &EmojiTable, text: &'s str) -> Vec<(usize, &'s str, bool)> {
    table
      .scan(text)
      .map(|segment| (segment.start(), segment.as_str(), segment.is_literal()))
      .collect()
  }

  #[test]
  fn literal_emoji_literal() {
    let table = sample_table();
    let text = "Hello \u{1F600} world";
    assert_eq!(
      describe(&table, text),
      [
        (0, "Hello ", true),
        (6, "\u{1F600}", false),
        (10, " world", true),
      ]
    );
  }

  #[test]
  fn empty_input() {
    let table = sample_table();
    assert_eq!(table.scan("").next(), None);
    assert!(!table.is_emoji(""));
    assert!(!table.contains_emoji(""));
    assert!(!table.is_only_emojis(""));
  }

  #[test]
  fn coverage_reconstructs_input() {
    let table = sample_table();
    for text in [
      "plain ascii",
      "\u{1F44D}\u{1F3FD}\u{1F3FD}",
      "#\u{FE0F}\u{20E3}#1",
      "\u{1F468}\u{200D}\u{1F469}x\u{1F1EB}\u{1F1F7}\u{1F1EB}",
      "\u{00E9}t\u{00E9} \u{1F431}\u{1F431}",
      "\u{1F3FB}\u{1F600}\u{1F3FB}",
    ] {
      let mut expected_start = 0;
      let mut rebuilt = String::new();
      for segment in table.scan(text) {
        assert_eq!(segment.start(), expected_start, "gap in {text:?}");
        expected_start += segment.as_str().len();
        rebuilt.push_str(segment.as_str());
      }
      assert_eq!(rebuilt, text);
    }
  }

  #[test]
  fn literals_are_coalesced() {
    let table = sample_table();
    let segments: Vec<_> = table.scan("ab\u{00E9}\u{1F600}cd\u{1F600}").collect();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0].as_str(), "ab\u{00E9}");
    assert_eq!(segments[2].as_str(), "cd");
  }

  #[test]
  fn modifier_attaches_when_supported() {
    let table = sample_table();
    let candidate = table.candidates("\u{1F44D}\u{1F3FD}").next().unwrap();
    assert_eq!(candidate.fitzpatrick(), Some(Fitzpatrick::Type4));
    assert_eq!(candidate.as_str(), "\u{1F44D}\u{1F3FD}");
    assert_eq!(candidate.emoji_end(), 4);
    assert_eq!(candidate.end(), 8);
  }

  #[test]
  fn modifier_stays_literal_when_unsupported() {
    let table = sample_table();
    let segments: Vec<_> = table.scan("\u{1F600}\u{1F3FD}").collect();
    assert_eq!(segments.len(), 2);
    match segments[0] {
      Segment::Emoji(candidate) => assert!(!candidate.has_fitzpatrick()),
      Segment::Literal { .. } => panic!("expected an emoji"),
    }
    assert_eq!(segments[1].as_str(), "\u{1F3FD}");
    assert!(segments[1].is_literal());
  }

  #[test]
  fn only_one_modifier_is_consumed() {
    let table = sample_table();
    let segments: Vec<_> = table.scan("\u{1F44B}\u{1F3FB}\u{1F3FF}").collect();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].as_str(), "\u{1F44B}\u{1F3FB}");
    assert_eq!(segments[1].as_str(), "\u{1F3FF}");
  }

  #[test]
  fn longest_match_is_selected() {
    let table = sample_table();
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
    let candidates: Vec<_> = table.candidates(family).collect();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].emoji().alias(), Some("family_man_woman_boy"));

    // An unfinished sequence falls back to the shorter entry.
    let partial = "\u{1F468}\u{200D}\u{1F469}";
    let aliases: Vec<_> = table
      .candidates(partial)
      .filter_map(|c| c.emoji().alias())
      .collect();
    assert_eq!(aliases, ["man"]);
  }

  #[test]
  fn is_emoji() {
    let table = sample_table();
    assert!(table.is_emoji("\u{1F600}"));
    assert!(table.is_emoji("\u{1F44D}\u{1F3FD}"));
    assert!(table.is_emoji("\u{1F1EB}\u{1F1F7}"));
    assert!(!table.is_emoji("\u{1F600}\u{1F3FD}"));
    assert!(!table.is_emoji("\u{1F600}\u{1F600}"));
    assert!(!table.is_emoji("\u{1F600} "));
    assert!(!table.is_emoji("\u{1F1EB}"));
    assert!(!table.is_emoji("#"));
  }

  #[test]
  fn only_and_contains() {
    let table = sample_table();
    assert!(table.is_only_emojis("\u{1F600}\u{1F44D}\u{1F3FB}\u{1F431}"));
    assert!(!table.is_only_emojis("\u{1F600} \u{1F431}"));
    assert!(table.contains_emoji("a \u{1F431} b"));
    assert!(!table.contains_emoji("a b \u{1F3FB}"));
  }
}
