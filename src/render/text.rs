//! Plain-text console report.

use std::fmt::Write;

use anyhow::Result;

use super::{type_tag, Palette};
use crate::i18n::Lang;
use crate::model::{Statistics, Summary};

const RULE: &str = "-----------------------------------------";

pub fn render(summary: &Summary, lang: Lang, palette: &Palette) -> Result<String> {
  let m = lang.messages();
  let mut out = String::new();

  writeln!(out, "{}", palette.heading.apply_to(format!("===== {} =====", m.title)))?;
  writeln!(
    out,
    "{} {} {} {}",
    palette.label.apply_to(format!("{}:", m.time_range)),
    summary.time_range.since.format("%Y-%m-%d"),
    m.range_to,
    summary.time_range.until.format("%Y-%m-%d")
  )?;
  writeln!(out, "{} {}", palette.label.apply_to(format!("{}:", m.search_dir)), summary.search_dir)?;
  if !summary.authors.is_empty() {
    writeln!(out, "{} {}", palette.label.apply_to(format!("{}:", m.author_filter)), summary.authors.join(", "))?;
  }
  if let Some(p) = &summary.message_pattern {
    writeln!(out, "{} {}", palette.label.apply_to(format!("{}:", m.message_filter)), p)?;
  }
  writeln!(out)?;

  for repo in &summary.repositories {
    writeln!(out, "{}", palette.project.apply_to(format!("{}: {}", m.project, repo.name)))?;
    if let Some(url) = &repo.url {
      writeln!(out, "{}: {}", m.remote, url)?;
    }
    writeln!(out)?;
    for group in &repo.dates {
      writeln!(out, "{}", palette.label.apply_to(group.date.format("%Y-%m-%d")))?;
      for c in &group.commits {
        writeln!(out, "  • {}{} ({}: {}, hash: {})", type_tag(c), c.message, m.author, c.author, c.short_hash)?;
      }
    }
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
  }

  if summary.repositories.is_empty() {
    writeln!(out, "{}", m.no_commits)?;
    writeln!(out)?;
  } else {
    write_statistics(&mut out, &summary.statistics, lang, palette)?;
  }

  writeln!(out, "{}", palette.heading.apply_to(format!("===== {} =====", m.done)))?;
  Ok(out)
}

fn write_statistics(out: &mut String, stats: &Statistics, lang: Lang, palette: &Palette) -> Result<()> {
  let m = lang.messages();
  writeln!(out, "{}", palette.label.apply_to(format!("{}:", m.statistics)))?;
  writeln!(out, "  {}: {}", m.total_commits, stats.total_commits)?;
  writeln!(out, "  {}: {}", m.participant_count, stats.participant_count)?;
  writeln!(out, "  {}: {}", m.participants, stats.participants.join(", "))?;
  if let Some(dist) = &stats.type_distribution {
    writeln!(out, "  {}:", m.type_distribution)?;
    for (kind, count) in &dist.0 {
      writeln!(out, "    {}: {}", kind, count)?;
    }
  }
  writeln!(out)?;
  Ok(())
}
