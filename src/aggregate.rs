use std::collections::{BTreeSet, HashMap};

use crate::model::{Commit, DateGroup, RepositoryReport, Statistics, TypeDistribution};

/// Group commits by calendar day, keeping the order in which each day first appears.
pub fn group_by_date(commits: Vec<Commit>) -> Vec<DateGroup> {
  let mut groups: Vec<DateGroup> = Vec::new();
  let mut index: HashMap<chrono::NaiveDate, usize> = HashMap::new();

  for commit in commits {
    match index.get(&commit.date) {
      Some(&i) => groups[i].commits.push(commit),
      None => {
        index.insert(commit.date, groups.len());
        groups.push(DateGroup { date: commit.date, commits: vec![commit] });
      }
    }
  }
  groups
}

pub fn statistics(repos: &[RepositoryReport], conventional: bool) -> Statistics {
  let total_commits: usize = repos.iter().map(RepositoryReport::commit_count).sum();
  let mut authors: BTreeSet<&str> = BTreeSet::new();
  let mut counts: HashMap<&str, usize> = HashMap::new();

  for commit in repos.iter().flat_map(|r| &r.dates).flat_map(|g| &g.commits) {
    authors.insert(commit.author.as_str());
    if let Some(c) = &commit.category {
      *counts.entry(c.kind.as_str()).or_insert(0) += 1;
    }
  }

  let type_distribution = if conventional && !counts.is_empty() {
    let mut dist: Vec<(String, usize)> = counts.into_iter().map(|(k, n)| (k.to_string(), n)).collect();
    dist.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Some(TypeDistribution(dist))
  } else {
    None
  };

  Statistics {
    total_commits,
    participant_count: authors.len(),
    participants: authors.into_iter().map(str::to_string).collect(),
    type_distribution,
  }
}
