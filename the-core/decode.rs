//! Turning `:alias:` tokens and HTML entities back into unicode emoji.
//!
//! Decoding is best effort and total: anything that does not resolve to a
//! known emoji is copied to the output verbatim.

use smallvec::SmallVec;

use crate::{
  emoji::Emoji,
  fitzpatrick::Fitzpatrick,
  render::FITZPATRICK_MARKER,
  table::EmojiTable,
};

/// A decoded `&#...;` entity and its length in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entity {
  ch:  char,
  len: usize,
}

pub fn decode(table: &EmojiTable, text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut literal_start = 0;
  let mut i = 0;

  while let Some(ch) = text[i..].chars().next() {
    let rest = &text[i..];
    let consumed = match ch {
      ':' => alias_token(table, rest).map(|(emoji, fitzpatrick, len)| {
        out.push_str(&text[literal_start..i]);
        match fitzpatrick {
          Some(fitzpatrick) => out.push_str(&emoji.unicode_with(fitzpatrick)),
          None => out.push_str(emoji.unicode()),
        }
        len
      }),
      '&' => {
        let run = entity_run(rest);
        if run.is_empty() {
          None
        } else {
          out.push_str(&text[literal_start..i]);
          Some(decode_entities(table, rest, &run, &mut out))
        }
      },
      _ => None,
    };

    match consumed {
      Some(len) => {
        i += len;
        literal_start = i;
      },
      None => i += ch.len_utf8(),
    }
  }

  out.push_str(&text[literal_start..]);
  out
}

fn is_alias_char(ch: char) -> bool {
  ch != ':' && !ch.is_whitespace()
}

/// Parses `:name:` or `:name|type_N:` at the start of `text`.
///
/// Returns the emoji, the requested modifier and the token length. Unknown
/// names and unknown type markers do not form a token.
fn alias_token<'t>(
  table: &'t EmojiTable,
  text: &str,
) -> Option<(&'t Emoji, Option<Fitzpatrick>, usize)> {
  let body = text.strip_prefix(':')?;
  let end = body.find(|ch: char| !is_alias_char(ch))?;
  if end == 0 || !body[end..].starts_with(':') {
    return None;
  }
  let token = &body[..end];
  let (name, fitzpatrick) = match token.split_once(FITZPATRICK_MARKER) {
    Some((name, type_name)) => (name, Some(Fitzpatrick::from_type_name(type_name)?)),
    None => (token, None),
  };
  let emoji = table.get_for_alias(name)?;
  Some((emoji, fitzpatrick, end + 2))
}

/// Parses one `&#123;` or `&#x7b;` entity at the start of `text`.
fn entity(text: &str) -> Option<Entity> {
  let body = text.strip_prefix("&#")?;
  let (digits, radix, prefix) = match body.strip_prefix(['x', 'X']) {
    Some(hex) => (hex, 16, 3),
    None => (body, 10, 2),
  };
  // Stop at the first non-digit so a missing ';' never rescans the text.
  let end = digits
    .find(|ch: char| !ch.is_digit(radix))
    .unwrap_or(digits.len());
  if end == 0 || !digits[end..].starts_with(';') {
    return None;
  }
  let ch = u32::from_str_radix(&digits[..end], radix)
    .ok()
    .and_then(char::from_u32)?;
  Some(Entity {
    ch,
    len: prefix + end + 1,
  })
}

/// Every entity directly following each other at the start of `text`.
fn entity_run(text: &str) -> SmallVec<[Entity; 8]> {
  let mut run = SmallVec::new();
  let mut offset = 0;
  while let Some(entity) = entity(&text[offset..]) {
    offset += entity.len;
    run.push(entity);
  }
  run
}

/// Decodes a run of entities and returns the number of source bytes it
/// covered. Entities that are not part of a known emoji are kept as written.
fn decode_entities(
  table: &EmojiTable,
  text: &str,
  run: &[Entity],
  out: &mut String,
) -> usize {
  let mut offset = 0;
  let mut k = 0;
  while k < run.len() {
    let matched = table.longest_in_chars(run[k..].iter().map(|entity| entity.ch));
    match matched {
      Some((emoji, _)) => {
        out.push_str(emoji.unicode());
        let count = emoji.unicode().chars().count();
        offset += run[k..k + count].iter().map(|entity| entity.len).sum::<usize>();
        k += count;
        if emoji.supports_fitzpatrick()
          && let Some(fitzpatrick) = run
            .get(k)
            .and_then(|entity| Fitzpatrick::from_char(entity.ch))
        {
          out.push(fitzpatrick.as_char());
          offset += run[k].len;
          k += 1;
        }
      },
      None => {
        out.push_str(&text[offset..offset + run[k].len]);
        offset += run[k].len;
        k += 1;
      },
    }
  }
  offset
}
