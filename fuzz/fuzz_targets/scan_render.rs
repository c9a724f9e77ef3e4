#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;

use crate::common::{
  every_options,
  fuzz_table,
  lossy_text,
};

fuzz_target!(|data: &[u8]| {
  let Some(table) = fuzz_table() else {
    return;
  };
  let text = lossy_text(data);

  let mut end = 0;
  for segment in table.scan(&text) {
    assert_eq!(segment.start(), end);
    end += segment.as_str().len();
  }
  assert_eq!(end, text.len());

  let parser = table.parser();
  for options in every_options() {
    let _ = parser.parse_to(&text, options);
  }
  let _ = parser.parse_to_unicode(&text);
  let _ = parser.extract_emojis(&text);
  assert_eq!(
    parser.remove_all_emojis(&text),
    parser.replace_all_emojis(&text, "")
  );
});
