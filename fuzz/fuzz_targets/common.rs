use std::sync::{
  Arc,
  OnceLock,
};

use the_emoji_core::{
  EmojiTable,
  Fitzpatrick,
  FitzpatrickAction,
  Format,
  RenderOptions,
};
use the_emoji_loader::load_default_table;

const MAX_PIECES: usize = 256;
const MAX_LITERAL_BYTES: usize = 32;

pub const FORMATS: [Format; 4] = [
  Format::Unicode,
  Format::Alias,
  Format::HtmlDecimal,
  Format::HtmlHexadecimal,
];

pub const ACTIONS: [FitzpatrickAction; 3] = [
  FitzpatrickAction::Parse,
  FitzpatrickAction::Remove,
  FitzpatrickAction::Ignore,
];

pub fn every_options() -> impl Iterator<Item = RenderOptions> {
  FORMATS
    .into_iter()
    .flat_map(|format| ACTIONS.into_iter().map(move |action| RenderOptions::new(format, action)))
}

pub fn fuzz_table() -> Option<Arc<EmojiTable>> {
  static TABLE: OnceLock<Option<Arc<EmojiTable>>> = OnceLock::new();
  TABLE
    .get_or_init(|| load_default_table().ok().map(Arc::new))
    .clone()
}

pub fn lossy_text(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).into_owned()
}

/// Text made of bundled emoji, optional skin tones and literal chunks.
///
/// Literal chunks never contain `:` or `&`, so no literal can be mistaken
/// for part of an alias token or an HTML entity once rendered.
pub fn text_from_bytes(table: &EmojiTable, data: &[u8]) -> String {
  let mut cursor = ByteCursor::new(data);
  let pieces = cursor.next_usize(MAX_PIECES);
  let mut text = String::new();
  for _ in 0..pieces {
    let kind = cursor.next_u8();
    if kind % 2 == 0 && !table.is_empty() {
      let emoji = &table.all()[cursor.next_u16() as usize % table.len()];
      text.push_str(emoji.unicode());
      if kind % 4 == 0 {
        let fitzpatrick = Fitzpatrick::ALL[cursor.next_u8() as usize % Fitzpatrick::ALL.len()];
        text.push(fitzpatrick.as_char());
      }
    } else {
      let len = cursor.next_usize(MAX_LITERAL_BYTES);
      let literal = lossy_text(cursor.next_bytes(len));
      text.extend(literal.chars().filter(|&ch| ch != ':' && ch != '&'));
    }
  }
  text
}

struct ByteCursor<'a> {
  data: &'a [u8],
  pos:  usize,
}

impl<'a> ByteCursor<'a> {
  fn new(data: &'a [u8]) -> Self {
    Self { data, pos: 0 }
  }

  fn next_u8(&mut self) -> u8 {
    let value = self.data.get(self.pos).copied().unwrap_or(0);
    self.pos = self.pos.saturating_add(1);
    value
  }

  fn next_u16(&mut self) -> u16 {
    let lo = self.next_u8() as u16;
    let hi = self.next_u8() as u16;
    lo | (hi << 8)
  }

  fn next_usize(&mut self, max: usize) -> usize {
    if max == 0 {
      return 0;
    }
    (self.next_u16() as usize) % (max + 1)
  }

  fn next_bytes(&mut self, len: usize) -> &'a [u8] {
    let start = self.pos.min(self.data.len());
    let end = start.saturating_add(len).min(self.data.len());
    self.pos = end;
    &self.data[start..end]
  }
}
