//! Markdown report: same content as the text report, structured with headings.

use std::fmt::Write;

use anyhow::Result;

use super::type_tag;
use crate::i18n::Lang;
use crate::model::Summary;

pub fn render(summary: &Summary, lang: Lang) -> Result<String> {
  let m = lang.messages();
  let mut md = String::new();

  writeln!(md, "# {}", m.title)?;
  writeln!(md)?;
  writeln!(
    md,
    "- **{}**: {} {} {}",
    m.time_range,
    summary.time_range.since.format("%Y-%m-%d"),
    m.range_to,
    summary.time_range.until.format("%Y-%m-%d")
  )?;
  writeln!(md, "- **{}**: {}", m.search_dir, summary.search_dir)?;
  if !summary.authors.is_empty() {
    writeln!(md, "- **{}**: {}", m.author_filter, summary.authors.join(", "))?;
  }
  if let Some(p) = &summary.message_pattern {
    writeln!(md, "- **{}**: `{}`", m.message_filter, p)?;
  }

  for repo in &summary.repositories {
    writeln!(md)?;
    writeln!(md, "## {}", repo.name)?;
    writeln!(md)?;
    if let Some(url) = &repo.url {
      writeln!(md, "{}: {}", m.remote, url)?;
      writeln!(md)?;
    }
    for group in &repo.dates {
      writeln!(md, "### {}", group.date.format("%Y-%m-%d"))?;
      for c in &group.commits {
        writeln!(md, "- {}{} ({}: {}, hash: {})", type_tag(c), c.message, m.author, c.author, c.short_hash)?;
      }
    }
  }
  writeln!(md)?;

  let stats = &summary.statistics;
  if summary.repositories.is_empty() {
    writeln!(md, "*{}*", m.no_commits)?;
  } else {
    writeln!(md, "## {}", m.statistics)?;
    writeln!(md)?;
    writeln!(md, "- **{}**: {}", m.total_commits, stats.total_commits)?;
    writeln!(md, "- **{}**: {}", m.participant_count, stats.participant_count)?;
    writeln!(md, "- **{}**: {}", m.participants, stats.participants.join(", "))?;
    if let Some(dist) = &stats.type_distribution {
      writeln!(md, "- **{}**:", m.type_distribution)?;
      for (kind, count) in &dist.0 {
        writeln!(md, "  - {}: {}", kind, count)?;
      }
    }
  }

  writeln!(md)?;
  writeln!(md, "---")?;
  writeln!(md, "*{}*", m.done)?;
  Ok(md)
}
