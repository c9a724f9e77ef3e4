//! Skin tone modifiers.
//!
//! The five Fitzpatrick modifiers (U+1F3FB..=U+1F3FF) are never emoji on
//! their own. They are recognized structurally as a single trailing codepoint
//! after an emoji that declares support for them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fitzpatrick {
  /// U+1F3FB -- light skin tone
  Type12,
  /// U+1F3FC -- medium-light skin tone
  Type3,
  /// U+1F3FD -- medium skin tone
  Type4,
  /// U+1F3FE -- medium-dark skin tone
  Type5,
  /// U+1F3FF -- dark skin tone
  Type6,
}

impl Fitzpatrick {
  pub const ALL: [Fitzpatrick; 5] = [
    Self::Type12,
    Self::Type3,
    Self::Type4,
    Self::Type5,
    Self::Type6,
  ];

  #[inline]
  pub const fn as_char(self) -> char {
    match self {
      Self::Type12 => '\u{1F3FB}',
      Self::Type3 => '\u{1F3FC}',
      Self::Type4 => '\u{1F3FD}',
      Self::Type5 => '\u{1F3FE}',
      Self::Type6 => '\u{1F3FF}',
    }
  }

  #[inline]
  pub const fn from_char(ch: char) -> Option<Fitzpatrick> {
    match ch {
      '\u{1F3FB}' => Some(Self::Type12),
      '\u{1F3FC}' => Some(Self::Type3),
      '\u{1F3FD}' => Some(Self::Type4),
      '\u{1F3FE}' => Some(Self::Type5),
      '\u{1F3FF}' => Some(Self::Type6),
      _ => None,
    }
  }

  /// Returns the modifier at the very start of `text`, if any.
  #[inline]
  pub fn from_prefix(text: &str) -> Option<Fitzpatrick> {
    text.chars().next().and_then(Self::from_char)
  }

  /// Name used by the alias marker, e.g. `type_3` in `:wave|type_3:`.
  pub const fn type_name(self) -> &'static str {
    match self {
      Self::Type12 => "type_1_2",
      Self::Type3 => "type_3",
      Self::Type4 => "type_4",
      Self::Type5 => "type_5",
      Self::Type6 => "type_6",
    }
  }

  pub fn from_type_name(name: &str) -> Option<Fitzpatrick> {
    Self::ALL.into_iter().find(|f| f.type_name() == name)
  }

  #[inline]
  pub const fn len_utf8(self) -> usize {
    // All five live in the supplementary planes.
    4
  }
}

impl fmt::Display for Fitzpatrick {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_char())
  }
}
