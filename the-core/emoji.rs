use std::fmt::{
  self,
  Write,
};

use crate::fitzpatrick::Fitzpatrick;

/// A single entry of the emoji database.
///
/// Records are immutable once built. The first alias is canonical and is the
/// one used when rendering `:alias:` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
  unicode:              String,
  description:          Option<String>,
  supports_fitzpatrick: bool,
  aliases:              Vec<String>,
  tags:                 Vec<String>,
}

impl Emoji {
  /// Returns `None` when `unicode` is empty.
  pub fn new(
    unicode: impl Into<String>,
    description: Option<String>,
    supports_fitzpatrick: bool,
    aliases: Vec<String>,
    tags: Vec<String>,
  ) -> Option<Emoji> {
    let unicode = unicode.into();
    if unicode.is_empty() {
      return None;
    }
    Some(Emoji {
      unicode,
      description,
      supports_fitzpatrick,
      aliases,
      tags,
    })
  }

  #[inline]
  pub fn unicode(&self) -> &str {
    &self.unicode
  }

  /// The unicode sequence with `fitzpatrick` appended, or the bare sequence
  /// when this emoji has no skin tone variants.
  pub fn unicode_with(&self, fitzpatrick: Fitzpatrick) -> String {
    let mut out = self.unicode.clone();
    if self.supports_fitzpatrick {
      out.push(fitzpatrick.as_char());
    }
    out
  }

  pub fn description(&self) -> Option<&str> {
    self.description.as_deref()
  }

  #[inline]
  pub fn supports_fitzpatrick(&self) -> bool {
    self.supports_fitzpatrick
  }

  pub fn aliases(&self) -> &[String] {
    &self.aliases
  }

  /// The canonical alias.
  pub fn alias(&self) -> Option<&str> {
    self.aliases.first().map(String::as_str)
  }

  pub fn tags(&self) -> &[String] {
    &self.tags
  }

  /// `&#128512;` style entities, one per codepoint.
  pub fn html_decimal(&self) -> String {
    let mut out = String::with_capacity(self.unicode.len() * 4);
    push_html_decimal(&mut out, &self.unicode);
    out
  }

  /// `&#x1f600;` style entities, one per codepoint.
  pub fn html_hexadecimal(&self) -> String {
    let mut out = String::with_capacity(self.unicode.len() * 4);
    push_html_hexadecimal(&mut out, &self.unicode);
    out
  }
}

impl fmt::Display for Emoji {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.unicode)
  }
}

pub(crate) fn push_html_decimal(out: &mut String, text: &str) {
  for ch in text.chars() {
    // Writing into a String cannot fail.
    let _ = write!(out, "&#{};", ch as u32);
  }
}

pub(crate) fn push_html_hexadecimal(out: &mut String, text: &str) {
  for ch in text.chars() {
    let _ = write!(out, "&#x{:x};", ch as u32);
  }
}
