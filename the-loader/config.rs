use std::{
  fs,
  io::ErrorKind,
  path::{
    Path,
    PathBuf,
  },
};

use anyhow::{
  Context,
  Result,
};
use serde::Deserialize;
use the_emoji_core::RenderOptions;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// User configuration, read from `config.toml` in the config directory.
///
/// ```toml
/// database = "emojis.json"
///
/// [render]
/// format = "alias"
/// fitzpatrick = "remove"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Database file, relative to the config directory unless absolute.
  pub database: Option<PathBuf>,
  /// How callers should render emoji by default.
  pub render:   RenderOptions,
}

/// Default built-in emojis.json.
pub fn default_database() -> &'static str {
  include_str!("emojis.json")
}

/// Reads `path`, treating a missing file as an empty config.
pub fn load_config_file(path: &Path) -> Result<Config> {
  let text = match fs::read_to_string(path) {
    Ok(text) => text,
    Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
    Err(err) => {
      return Err(err).with_context(|| format!("failed to read {}", path.display()));
    },
  };
  toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// The user's `config.toml`, or the defaults when there is none.
pub fn user_config() -> Result<Config> {
  match crate::config_file() {
    Some(path) => load_config_file(&path),
    None => Ok(Config::default()),
  }
}

#[cfg(test)]
mod test {
  use the_emoji_core::{
    FitzpatrickAction,
    Format,
  };

  use super::*;

  #[test]
  fn missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
      &path,
      r#"
        database = "/usr/share/emoji/emojis.json"

        [render]
        format = "alias"
        fitzpatrick = "remove"
      "#,
    )
    .unwrap();
    let config = load_config_file(&path).unwrap();
    assert_eq!(
      config.database.as_deref(),
      Some(Path::new("/usr/share/emoji/emojis.json"))
    );
    assert_eq!(config.render.format, Format::Alias);
    assert_eq!(config.render.fitzpatrick, FitzpatrickAction::Remove);
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "databse = \"typo.json\"\n").unwrap();
    let err = load_config_file(&path).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
  }

  #[test]
  fn bundled_database_is_json() {
    let value: serde_json::Value = serde_json::from_str(default_database()).unwrap();
    assert!(value.as_array().is_some_and(|records| !records.is_empty()));
  }
}
