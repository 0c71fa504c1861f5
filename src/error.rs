//! Fatal configuration errors.
//!
//! Everything here ends the run with exit code 1; per-repository git failures
//! never surface as errors (see `gitio::LogOutcome`).

use thiserror::Error;

use crate::i18n::Lang;
use crate::window::TimePreset;

#[derive(Debug, Error)]
pub enum ConfigError {
  /// `--time-range` named something other than a known preset
  #[error("unknown time range preset '{preset}' (valid: {})", TimePreset::valid_names())]
  UnknownPreset { preset: String },

  /// The search directory does not exist
  #[error("directory '{dir}' does not exist")]
  MissingDir { dir: String },
}

impl ConfigError {
  /// Message in the user's display language.
  pub fn localized(&self, lang: Lang) -> String {
    match self {
      ConfigError::UnknownPreset { preset } => lang.unknown_preset(preset, &TimePreset::valid_names()),
      ConfigError::MissingDir { dir } => lang.missing_dir(dir),
    }
  }
}
