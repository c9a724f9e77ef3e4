//! Rendering emoji candidates into one of the supported textual forms.

use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  emoji::{
    push_html_decimal,
    push_html_hexadecimal,
  },
  fitzpatrick::Fitzpatrick,
  scan::{
    Segment,
    UnicodeCandidate,
  },
};

/// Separates the alias from the skin tone type in `:wave|type_3:`.
pub const FITZPATRICK_MARKER: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
  /// The raw codepoints, modifier included.
  #[default]
  Unicode,
  /// `:alias:` using the canonical alias.
  Alias,
  /// `&#128512;`
  HtmlDecimal,
  /// `&#x1f600;`
  HtmlHexadecimal,
}

/// What to do with a skin tone modifier when converting away from unicode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitzpatrickAction {
  /// Encode the modifier in the target form.
  #[default]
  Parse,
  /// Drop the modifier.
  Remove,
  /// Keep the raw modifier codepoint after the converted emoji.
  Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
  pub format:      Format,
  pub fitzpatrick: FitzpatrickAction,
}

impl RenderOptions {
  pub const fn new(format: Format, fitzpatrick: FitzpatrickAction) -> Self {
    Self {
      format,
      fitzpatrick,
    }
  }
}

pub fn render(candidate: &UnicodeCandidate<'_, '_>, options: RenderOptions) -> String {
  let mut out = String::with_capacity(candidate.as_str().len() * 3);
  render_into(&mut out, candidate, options);
  out
}

pub fn render_into(
  out: &mut String,
  candidate: &UnicodeCandidate<'_, '_>,
  options: RenderOptions,
) {
  let emoji = candidate.emoji();
  let fitzpatrick = candidate.fitzpatrick();
  let action = options.fitzpatrick;

  match options.format {
    Format::Unicode => out.push_str(candidate.as_str()),
    Format::Alias => match emoji.alias() {
      Some(alias) => {
        out.push(':');
        out.push_str(alias);
        if let (Some(fitzpatrick), FitzpatrickAction::Parse) = (fitzpatrick, action) {
          out.push(FITZPATRICK_MARKER);
          out.push_str(fitzpatrick.type_name());
        }
        out.push(':');
        push_raw_modifier(out, fitzpatrick, action);
      },
      // Nothing to name it by, keep it as is.
      None => {
        out.push_str(emoji.unicode());
        if let Some(fitzpatrick) = fitzpatrick
          && action != FitzpatrickAction::Remove
        {
          out.push(fitzpatrick.as_char());
        }
      },
    },
    Format::HtmlDecimal => {
      push_html_decimal(out, emoji.unicode());
      if let (Some(fitzpatrick), FitzpatrickAction::Parse) = (fitzpatrick, action) {
        push_html_decimal(out, fitzpatrick.as_char().encode_utf8(&mut [0; 4]));
      }
      push_raw_modifier(out, fitzpatrick, action);
    },
    Format::HtmlHexadecimal => {
      push_html_hexadecimal(out, emoji.unicode());
      if let (Some(fitzpatrick), FitzpatrickAction::Parse) = (fitzpatrick, action) {
        push_html_hexadecimal(out, fitzpatrick.as_char().encode_utf8(&mut [0; 4]));
      }
      push_raw_modifier(out, fitzpatrick, action);
    },
  }
}

fn push_raw_modifier(
  out: &mut String,
  fitzpatrick: Option<Fitzpatrick>,
  action: FitzpatrickAction,
) {
  if let (Some(fitzpatrick), FitzpatrickAction::Ignore) = (fitzpatrick, action) {
    out.push(fitzpatrick.as_char());
  }
}

/// Renders a whole scan, copying literal spans untouched.
pub fn render_segments<'t, 's>(
  segments: impl IntoIterator<Item = Segment<'t, 's>>,
  options: RenderOptions,
) -> String {
  let mut out = String::new();
  for segment in segments {
    match segment {
      Segment::Literal { text, .. } => out.push_str(text),
      Segment::Emoji(candidate) => render_into(&mut out, &candidate, options),
    }
  }
  out
}
