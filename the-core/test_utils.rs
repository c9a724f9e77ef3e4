//! Test utilities shared by the unit tests of this crate.
//!
//! The sample table is small on purpose but covers the shapes that matter for
//! scanning: single codepoints, skin tone support, ZWJ sequences with a
//! shorter prefix entry, flags, keycaps and variation selectors.

use crate::{
  emoji::Emoji,
  table::EmojiTable,
};

pub fn emoji(unicode: &str, aliases: &[&str], tags: &[&str], fitzpatrick: bool) -> Emoji {
  Emoji::new(
    unicode,
    None,
    fitzpatrick,
    aliases.iter().map(|s| s.to_string()).collect(),
    tags.iter().map(|s| s.to_string()).collect(),
  )
  .expect("non-empty unicode")
}

pub fn sample_records() -> Vec<Emoji> {
  vec![
    emoji("\u{1F600}", &["grinning"], &["smile", "happy"], false),
    emoji("\u{1F604}", &["smile"], &["happy", "joy"], false),
    emoji("\u{1F44D}", &["thumbsup", "+1"], &["approve", "ok"], true),
    emoji("\u{1F44E}", &["thumbsdown", "-1"], &["disapprove", "bury"], true),
    emoji("\u{1F44B}", &["wave"], &["goodbye"], true),
    emoji("\u{1F468}", &["man"], &["mustache"], true),
    emoji(
      "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}",
      &["family_man_woman_boy"],
      &["home", "parents"],
      false,
    ),
    emoji("\u{1F1EB}\u{1F1F7}", &["fr"], &["france", "french"], false),
    emoji("\u{2764}\u{FE0F}", &["heart"], &["love"], false),
    emoji("#\u{FE0F}\u{20E3}", &["hash"], &["number"], false),
    emoji("\u{1F431}", &["cat"], &["pet"], false),
  ]
}

pub fn sample_table() -> EmojiTable {
  EmojiTable::build(sample_records()).expect("sample table has unique aliases")
}
