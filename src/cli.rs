use chrono::{DateTime, Local, NaiveDate};
use clap::Parser;
use std::path::Path;

use crate::error::ConfigError;
use crate::i18n::Lang;
use crate::window::{self, TimePreset};

#[derive(Parser, Debug)]
#[command(
    name = "weekly-git-summary",
    version,
    about = "Summarize Git commits across every repository under a directory",
    long_about = None
)]
pub struct Cli {
  /// Directory to search for Git repositories
  #[arg(short = 'd', long, default_value = ".", value_parser = clean_arg_value)]
  pub dir: String,

  /// Start date, YYYY-MM-DD (default: Monday of this week)
  #[arg(short = 's', long, value_parser = parse_date)]
  pub since: Option<NaiveDate>,

  /// End date, YYYY-MM-DD (default: today)
  #[arg(short = 'u', long, value_parser = parse_date)]
  pub until: Option<NaiveDate>,

  /// Only include commits whose author matches; repeat to OR several authors
  #[arg(short = 'a', long = "author", value_parser = clean_arg_value)]
  pub authors: Vec<String>,

  /// Filter commit messages by a case-insensitive regex (plain substring if the regex is invalid)
  #[arg(long, value_parser = clean_arg_value)]
  pub message_pattern: Option<String>,

  /// Classify commits by their conventional-commit type
  #[arg(long)]
  pub conventional: bool,

  /// Named range: today, yesterday, this-week, last-week, this-month, last-month (overrides --since/--until)
  #[arg(long, value_name = "PRESET", value_parser = clean_arg_value)]
  pub time_range: Option<String>,

  /// Emit JSON
  #[arg(short = 'j', long)]
  pub json: bool,

  /// Emit Markdown
  #[arg(short = 'm', long)]
  pub md: bool,

  /// Emit a self-contained HTML page
  #[arg(long)]
  pub html: bool,

  /// Language for report labels
  #[arg(long, value_enum, default_value_t = Lang::Zh)]
  pub lang: Lang,

  /// How many directory levels below --dir to search for repositories
  #[arg(long, default_value_t = 2)]
  pub depth: usize,

  /// Disable ANSI colours in text output
  #[arg(long)]
  pub no_color: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant used for defaults and presets (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum OutputFormat {
  Text,
  Markdown,
  Json,
  Html,
}

impl OutputFormat {
  /// JSON wins over HTML, HTML over Markdown; text when nothing is set.
  pub fn from_flags(json: bool, html: bool, md: bool) -> Self {
    if json {
      OutputFormat::Json
    } else if html {
      OutputFormat::Html
    } else if md {
      OutputFormat::Markdown
    } else {
      OutputFormat::Text
    }
  }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
  pub search_dir: String,
  pub since: NaiveDate,
  pub until: NaiveDate,
  pub authors: Vec<String>,
  pub message_pattern: Option<String>,
  pub conventional: bool,
  pub format: OutputFormat,
  pub lang: Lang,
  pub max_depth: usize,
  pub color: bool,
}

/// Strip one pair of matching surrounding quotes, then turn `\ ` into a space.
pub fn clean_arg_value(raw: &str) -> Result<String, String> {
  let bytes = raw.as_bytes();
  let quoted = bytes.len() >= 2
    && (bytes[0] == b'"' || bytes[0] == b'\'')
    && bytes[bytes.len() - 1] == bytes[0];
  let inner = if quoted { &raw[1..raw.len() - 1] } else { raw };
  Ok(inner.replace("\\ ", " "))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
  let cleaned = clean_arg_value(raw)?;
  NaiveDate::parse_from_str(cleaned.trim(), "%Y-%m-%d")
    .map_err(|_| format!("expected a date formatted as YYYY-MM-DD, got '{}'", cleaned))
}

pub fn normalize(cli: Cli, now: DateTime<Local>) -> Result<RunConfig, ConfigError> {
  // Presets win over explicit dates; explicit dates win over defaults.
  let (since, until) = match cli.time_range.as_deref().filter(|p| !p.is_empty()) {
    Some(raw) => {
      let preset = TimePreset::parse(raw).ok_or_else(|| ConfigError::UnknownPreset { preset: raw.to_string() })?;
      let w = window::preset_window(preset, now);
      (w.since, w.until)
    }
    None => {
      let defaults = window::default_window(now);
      (cli.since.unwrap_or(defaults.since), cli.until.unwrap_or(defaults.until))
    }
  };

  if !Path::new(&cli.dir).is_dir() {
    return Err(ConfigError::MissingDir { dir: cli.dir });
  }

  let color = !cli.no_color && console::colors_enabled();

  Ok(RunConfig {
    search_dir: cli.dir,
    since,
    until,
    authors: cli.authors,
    message_pattern: cli.message_pattern.filter(|p| !p.is_empty()),
    conventional: cli.conventional,
    format: OutputFormat::from_flags(cli.json, cli.html, cli.md),
    lang: cli.lang,
    max_depth: cli.depth,
    color,
  })
}
