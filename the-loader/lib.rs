pub mod config;

use std::{
  fs,
  io::Read,
  path::{
    Path,
    PathBuf,
  },
};

use anyhow::{
  Context,
  Result,
};
use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use log::{
  debug,
  warn,
};
use serde::Deserialize;
use the_emoji_core::{
  Emoji,
  EmojiTable,
};

/// Overrides every other database location when set.
pub const DATABASE_ENV: &str = "THE_EMOJI_DATABASE";

/// Overrides the platform config directory when set.
pub const CONFIG_DIR_ENV: &str = "THE_EMOJI_CONFIG_DIR";

/// Looked up in the config directory when no database is configured.
pub const DATABASE_FILE_NAME: &str = "emojis.json";

/// One record as written in the database. Every field is optional here so a
/// single bad record can be reported and skipped instead of failing the load.
#[derive(Debug, Deserialize)]
struct RawEmoji {
  emoji:                Option<String>,
  description:          Option<String>,
  supports_fitzpatrick: Option<bool>,
  aliases:              Option<Vec<String>>,
  tags:                 Option<Vec<String>>,
}

impl RawEmoji {
  fn into_emoji(self) -> Option<Emoji> {
    Emoji::new(
      self.emoji?,
      self.description,
      self.supports_fitzpatrick.unwrap_or(false),
      self.aliases.unwrap_or_default(),
      self.tags.unwrap_or_default(),
    )
  }
}

/// Parses a JSON database into records, in source order.
///
/// Records without an `emoji`, with an empty one, or with fields of the wrong
/// type are skipped. Only a document that is not a JSON array is an error.
pub fn parse_emojis(json: &str) -> Result<Vec<Emoji>> {
  let values: Vec<serde_json::Value> =
    serde_json::from_str(json).context("emoji database is not a JSON array")?;

  let mut emojis = Vec::with_capacity(values.len());
  for (idx, value) in values.into_iter().enumerate() {
    match serde_json::from_value::<RawEmoji>(value) {
      Ok(raw) => match raw.into_emoji() {
        Some(emoji) => emojis.push(emoji),
        None => debug!("skipping emoji record {idx}: no `emoji` field"),
      },
      Err(err) => warn!("skipping malformed emoji record {idx}: {err}"),
    }
  }
  Ok(emojis)
}

pub fn load_emojis(mut reader: impl Read) -> Result<Vec<Emoji>> {
  let mut json = String::new();
  reader
    .read_to_string(&mut json)
    .context("failed to read emoji database")?;
  parse_emojis(&json)
}

pub fn load_emojis_from_file(path: &Path) -> Result<Vec<Emoji>> {
  let json = fs::read_to_string(path)
    .with_context(|| format!("failed to read emoji database {}", path.display()))?;
  parse_emojis(&json).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn build_table(emojis: Vec<Emoji>) -> Result<EmojiTable> {
  EmojiTable::build(emojis).context("emoji database is inconsistent")
}

/// The table of the database bundled with this crate.
pub fn load_default_table() -> Result<EmojiTable> {
  build_table(parse_emojis(config::default_database())?)
}

pub fn load_table_from(path: &Path) -> Result<EmojiTable> {
  build_table(load_emojis_from_file(path)?)
}

/// Loads the table from the highest priority database available.
///
/// The priority is:
///
/// 1. `explicit`, when given
/// 2. `THE_EMOJI_DATABASE` (if environment variable is set)
/// 3. the `database` key of `config.toml` in [`config_dir`]
/// 4. `emojis.json` in [`config_dir`] (if it exists)
/// 5. the bundled database
pub fn load_table(explicit: Option<&Path>) -> Result<EmojiTable> {
  match database_file(explicit)? {
    Some(path) => {
      debug!("loading emoji database from {}", path.display());
      load_table_from(&path)
    },
    None => load_default_table(),
  }
}

/// The database file [`load_table`] would read, or `None` for the bundled one.
pub fn database_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
  let from_env = std::env::var_os(DATABASE_ENV)
    .filter(|value| !value.is_empty())
    .map(PathBuf::from);
  resolve_database(explicit, from_env, config_dir().as_deref())
}

fn resolve_database(
  explicit: Option<&Path>,
  from_env: Option<PathBuf>,
  config_dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
  if let Some(path) = explicit {
    return Ok(Some(path.to_owned()));
  }
  if let Some(path) = from_env {
    return Ok(Some(path));
  }
  let Some(dir) = config_dir else {
    return Ok(None);
  };

  let config = config::load_config_file(&dir.join(config::CONFIG_FILE_NAME))?;
  if let Some(database) = config.database {
    // Relative paths are relative to the config directory.
    return Ok(Some(dir.join(database)));
  }

  let path = dir.join(DATABASE_FILE_NAME);
  Ok(path.is_file().then_some(path))
}

pub fn config_dir() -> Option<PathBuf> {
  if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
    return Some(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().ok()?;
  let mut path = strategy.config_dir();
  path.push("the-emoji");
  Some(path)
}

pub fn config_file() -> Option<PathBuf> {
  config_dir().map(|dir| dir.join(config::CONFIG_FILE_NAME))
}
