//! Format-agnostic conversions between unicode emoji and their textual forms.
//!
//! Every conversion away from unicode is [`EmojiParser::parse_from_unicode`]
//! with a different candidate handler. The way back is
//! [`EmojiParser::parse_to_unicode`], which understands all of them at once.

use crate::{
  decode::decode,
  emoji::Emoji,
  render::{
    FitzpatrickAction,
    Format,
    RenderOptions,
    render_segments,
  },
  scan::{
    Segment,
    UnicodeCandidate,
  },
  table::EmojiTable,
};

#[derive(Debug, Clone, Copy)]
pub struct EmojiParser<'t> {
  table: &'t EmojiTable,
}

impl<'t> EmojiParser<'t> {
  pub fn new(table: &'t EmojiTable) -> Self {
    Self { table }
  }

  pub fn table(&self) -> &'t EmojiTable {
    self.table
  }

  pub fn is_emoji(&self, text: &str) -> bool {
    self.table.is_emoji(text)
  }

  /// Replaces every emoji candidate of `text` by what `handler` returns for
  /// it. Literal text is copied as is.
  pub fn parse_from_unicode<F>(&self, text: &str, mut handler: F) -> String
  where
    F: FnMut(&UnicodeCandidate<'t, '_>) -> String,
  {
    let mut out = String::with_capacity(text.len());
    for segment in self.table.scan(text) {
      match segment {
        Segment::Literal { text, .. } => out.push_str(text),
        Segment::Emoji(candidate) => out.push_str(&handler(&candidate)),
      }
    }
    out
  }

  /// Renders every emoji of `text` with `options`.
  pub fn parse_to(&self, text: &str, options: RenderOptions) -> String {
    render_segments(self.table.scan(text), options)
  }

  /// `"I like 🐱"` becomes `"I like :cat:"`.
  pub fn parse_to_aliases(&self, text: &str, action: FitzpatrickAction) -> String {
    self.parse_to(text, RenderOptions::new(Format::Alias, action))
  }

  /// `"I like 🐱"` becomes `"I like &#128049;"`.
  pub fn parse_to_html_decimal(&self, text: &str, action: FitzpatrickAction) -> String {
    self.parse_to(text, RenderOptions::new(Format::HtmlDecimal, action))
  }

  /// `"I like 🐱"` becomes `"I like &#x1f431;"`.
  pub fn parse_to_html_hexadecimal(&self, text: &str, action: FitzpatrickAction) -> String {
    self.parse_to(text, RenderOptions::new(Format::HtmlHexadecimal, action))
  }

  /// Replaces aliases and HTML entities by the unicode emoji they stand for.
  /// Tokens that do not resolve are left untouched.
  pub fn parse_to_unicode(&self, text: &str) -> String {
    decode(self.table, text)
  }

  pub fn remove_all_emojis(&self, text: &str) -> String {
    self.parse_from_unicode(text, |_| String::new())
  }

  /// Removes the emoji in `emojis`, skin tone included, and keeps the others.
  pub fn remove_emojis(&self, text: &str, emojis: &[&Emoji]) -> String {
    self.parse_from_unicode(text, |candidate| {
      if contains(emojis, candidate.emoji()) {
        String::new()
      } else {
        candidate.as_str().to_owned()
      }
    })
  }

  /// Removes every emoji but the ones in `emojis`.
  pub fn remove_all_emojis_except(&self, text: &str, emojis: &[&Emoji]) -> String {
    self.parse_from_unicode(text, |candidate| {
      if contains(emojis, candidate.emoji()) {
        candidate.as_str().to_owned()
      } else {
        String::new()
      }
    })
  }

  pub fn replace_all_emojis(&self, text: &str, replacement: &str) -> String {
    self.parse_from_unicode(text, |_| replacement.to_owned())
  }

  /// The emoji of `text` as written, skin tone included, in order.
  pub fn extract_emojis(&self, text: &str) -> Vec<String> {
    self.extract_emojis_limited(text, usize::MAX)
  }

  pub fn extract_emojis_limited(&self, text: &str, limit: usize) -> Vec<String> {
    self
      .table
      .candidates(text)
      .take(limit)
      .map(|candidate| candidate.as_str().to_owned())
      .collect()
  }
}

fn contains(emojis: &[&Emoji], emoji: &Emoji) -> bool {
  emojis.iter().any(|e| e.unicode() == emoji.unicode())
}

impl EmojiTable {
  pub fn parser(&self) -> EmojiParser<'_> {
    EmojiParser::new(self)
  }
}
