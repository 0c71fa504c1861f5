// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the summary model (commits, date groups, repositories, statistics) shared by every renderer
// role: model/types
// outputs: Serializable structs with stable camelCase field names and optional fields skipped when absent
// invariants: field order here is the JSON field order; nothing is mutated after aggregation
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::conventional::Classification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
  pub date: NaiveDate,
  pub author: String,
  pub message: String,
  pub short_hash: String,
  pub category: Option<Classification>,
}

impl Serialize for Commit {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(None)?;
    map.serialize_entry("message", &self.message)?;
    map.serialize_entry("author", &self.author)?;
    map.serialize_entry("hash", &self.short_hash)?;
    if let Some(c) = &self.category {
      map.serialize_entry("type", &c.kind)?;
      if let Some(scope) = &c.scope {
        map.serialize_entry("scope", scope)?;
      }
      if c.breaking {
        map.serialize_entry("breaking", &true)?;
      }
    }
    map.end()
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct DateGroup {
  #[serde(serialize_with = "ymd")]
  pub date: NaiveDate,
  pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryReport {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(rename = "commits")]
  pub dates: Vec<DateGroup>,
}

impl RepositoryReport {
  pub fn commit_count(&self) -> usize {
    self.dates.iter().map(|g| g.commits.len()).sum()
  }
}

/// Category counts, kept in display order (descending by count).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDistribution(pub Vec<(String, usize)>);

impl Serialize for TypeDistribution {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.0.len()))?;
    for (kind, count) in &self.0 {
      map.serialize_entry(kind, count)?;
    }
    map.end()
  }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
  pub total_commits: usize,
  pub participant_count: usize,
  pub participants: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_distribution: Option<TypeDistribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeRange {
  #[serde(serialize_with = "ymd")]
  pub since: NaiveDate,
  #[serde(serialize_with = "ymd")]
  pub until: NaiveDate,
}

/// Everything a renderer needs: the echoed configuration plus the aggregated data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
  pub time_range: TimeRange,
  pub search_dir: String,
  #[serde(rename = "author", serialize_with = "joined", skip_serializing_if = "Vec::is_empty")]
  pub authors: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_pattern: Option<String>,
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub conventional: bool,
  pub statistics: Statistics,
  pub repositories: Vec<RepositoryReport>,
}

fn ymd<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.collect_str(&date.format("%Y-%m-%d"))
}

#[allow(clippy::ptr_arg)]
fn joined<S: Serializer>(authors: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&authors.join(", "))
}
