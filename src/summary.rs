// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Run discovery, retrieval, classification and aggregation once and hand back a Summary
// role: processing/orchestrator
// inputs: RunConfig
// outputs: Summary (config echo + statistics + repositories)
// side_effects: Reads directories; spawns one `git log` and one `git remote` per repository found
// invariants:
// - repositories appear in discovery order; those with no matching commits are omitted
// - statistics are computed from exactly the repositories returned
// errors: none surface; unavailable repositories are omitted
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::Path;

use crate::aggregate;
use crate::cli::RunConfig;
use crate::discover;
use crate::gitio::{self, LogOutcome, LogQuery, MessageFilter};
use crate::model::{RepositoryReport, Summary, TimeRange};

pub fn collect(cfg: &RunConfig) -> Summary {
  let filter = cfg.message_pattern.as_deref().map(MessageFilter::new);
  let query = LogQuery {
    since: cfg.since,
    until: cfg.until,
    authors: &cfg.authors,
    message_filter: filter.as_ref(),
    conventional: cfg.conventional,
  };

  let mut repositories: Vec<RepositoryReport> = Vec::new();
  for repo in discover::find_repositories(Path::new(&cfg.search_dir), cfg.max_depth) {
    let commits = match gitio::commits(&repo, &query) {
      LogOutcome::Commits(c) => c,
      LogOutcome::Unavailable(reason) => {
        tracing::info!(repo = %repo.display(), %reason, "skipping repository");
        continue;
      }
    };
    if commits.is_empty() {
      continue;
    }

    repositories.push(RepositoryReport {
      name: repo_name(&repo),
      url: gitio::remote_url(&repo),
      dates: aggregate::group_by_date(commits),
    });
  }

  let statistics = aggregate::statistics(&repositories, cfg.conventional);
  tracing::debug!(repos = repositories.len(), commits = statistics.total_commits, "summary collected");

  Summary {
    time_range: TimeRange { since: cfg.since, until: cfg.until },
    search_dir: cfg.search_dir.clone(),
    authors: cfg.authors.clone(),
    message_pattern: cfg.message_pattern.clone(),
    conventional: cfg.conventional,
    statistics,
    repositories,
  }
}

/// Last path component; falls back to the canonical path for `.` and friends.
fn repo_name(repo: &Path) -> String {
  repo
    .file_name()
    .map(|n| n.to_string_lossy().to_string())
    .or_else(|| {
      std::fs::canonicalize(repo)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
    })
    .unwrap_or_else(|| repo.display().to_string())
}
