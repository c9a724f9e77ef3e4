#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use the_emoji_core::{
  FitzpatrickAction,
  Format,
  RenderOptions,
};

use crate::common::{
  FORMATS,
  fuzz_table,
  text_from_bytes,
};

fuzz_target!(|data: &[u8]| {
  let Some(table) = fuzz_table() else {
    return;
  };
  let text = text_from_bytes(&table, data);
  let parser = table.parser();

  for format in FORMATS {
    for action in [FitzpatrickAction::Parse, FitzpatrickAction::Ignore] {
      let rendered = parser.parse_to(&text, RenderOptions::new(format, action));
      assert_eq!(parser.parse_to_unicode(&rendered), text, "{format:?} {action:?}");
    }
  }

  let unicode = parser.parse_to(
    &text,
    RenderOptions::new(Format::Unicode, FitzpatrickAction::Parse),
  );
  assert_eq!(unicode, text);
});
