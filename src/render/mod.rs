//! Report renderers.
//!
//! Every format consumes the same [`Summary`]; HTML is the JSON document
//! substituted into a static page.

mod html;
mod json;
mod markdown;
mod text;

use anyhow::Result;
use console::Style;

use crate::cli::OutputFormat;
use crate::i18n::Lang;
use crate::model::Summary;

/// Terminal styles for the text report; plain when colour is off.
#[derive(Debug, Clone)]
pub struct Palette {
  pub heading: Style,
  pub label: Style,
  pub project: Style,
}

impl Palette {
  pub fn new(enabled: bool) -> Self {
    Palette {
      heading: Style::new().blue().force_styling(enabled),
      label: Style::new().green().force_styling(enabled),
      project: Style::new().yellow().force_styling(enabled),
    }
  }
}

pub fn render(summary: &Summary, format: OutputFormat, lang: Lang, color: bool) -> Result<String> {
  match format {
    OutputFormat::Json => json::render(summary),
    OutputFormat::Html => html::render(summary, lang),
    OutputFormat::Markdown => markdown::render(summary, lang),
    OutputFormat::Text => text::render(summary, lang, &Palette::new(color)),
  }
}

/// `[feat]` / `[feat!]` tag for classified commits, empty otherwise.
pub(crate) fn type_tag(commit: &crate::model::Commit) -> String {
  match &commit.category {
    Some(c) if c.breaking => format!("[{}!] ", c.kind),
    Some(c) => format!("[{}] ", c.kind),
    None => String::new(),
  }
}
