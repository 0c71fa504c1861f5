use std::path::Path;

use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};

use crate::conventional;
use crate::model::Commit;
use crate::util::run_git;

// %x00 cannot occur in author names or subjects, so splitting on it is exact.
// Records end with %x1e because bodies span several lines.
const FIELD_SEP: char = '\u{0}';
const RECORD_SEP: char = '\u{1e}';
const LOG_FORMAT: &str = "--pretty=format:%ad%x00%an%x00%s%x00%h%x1e";
// Body is only needed to spot BREAKING CHANGE footers.
const LOG_FORMAT_WITH_BODY: &str = "--pretty=format:%ad%x00%an%x00%s%x00%h%x00%b%x1e";

/// Result of asking git for one repository's log.
///
/// `Unavailable` covers "not a repository", "git missing" and any other
/// failure; callers treat it like an empty log but can still tell the two apart.
#[derive(Debug)]
pub enum LogOutcome {
  Commits(Vec<Commit>),
  Unavailable(String),
}

/// Case-insensitive message filter: a regex when the pattern compiles, else a substring.
#[derive(Debug, Clone)]
pub enum MessageFilter {
  Regex(Regex),
  Substring(String),
}

impl MessageFilter {
  pub fn new(pattern: &str) -> Self {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
      Ok(re) => MessageFilter::Regex(re),
      Err(err) => {
        tracing::debug!(pattern, %err, "message pattern is not a valid regex; matching as substring");
        MessageFilter::Substring(pattern.to_lowercase())
      }
    }
  }

  pub fn matches(&self, message: &str) -> bool {
    match self {
      MessageFilter::Regex(re) => re.is_match(message),
      MessageFilter::Substring(needle) => message.to_lowercase().contains(needle.as_str()),
    }
  }
}

#[derive(Debug)]
pub struct LogQuery<'a> {
  pub since: NaiveDate,
  pub until: NaiveDate,
  pub authors: &'a [String],
  pub message_filter: Option<&'a MessageFilter>,
  pub conventional: bool,
}

fn log_args(q: &LogQuery<'_>) -> Vec<String> {
  let mut args: Vec<String> = vec![
    "-c".into(),
    "log.showSignature=false".into(),
    "log".into(),
    format!("--since={} 00:00:00", q.since.format("%Y-%m-%d")),
    format!("--until={} 23:59:59", q.until.format("%Y-%m-%d")),
    "--date=short".into(),
    (if q.conventional { LOG_FORMAT_WITH_BODY } else { LOG_FORMAT }).into(),
  ];
  if !q.authors.is_empty() {
    // authors are plain substrings, not regexes (`dependabot[bot]`)
    args.push("--fixed-strings".into());
  }
  // git ORs repeated --author options
  for a in q.authors {
    args.push(format!("--author={}", a));
  }
  args
}

pub fn commits(repo: &Path, q: &LogQuery<'_>) -> LogOutcome {
  match run_git(repo, &log_args(q)) {
    Ok(out) => LogOutcome::Commits(parse_log(&out, q)),
    Err(err) => {
      let reason = format!("{:#}", err);
      tracing::debug!(repo = %repo.display(), %reason, "git log unavailable");
      LogOutcome::Unavailable(reason)
    }
  }
}

/// Turn `git log` output into commits, dropping malformed records and filtered messages.
pub fn parse_log(out: &str, q: &LogQuery<'_>) -> Vec<Commit> {
  out
    .split(RECORD_SEP)
    .map(|record| record.trim_start_matches(['\n', '\r']))
    .filter(|record| !record.trim().is_empty())
    .filter_map(|record| {
      let mut parts = record.splitn(5, FIELD_SEP);
      let date = parts.next()?;
      let author = parts.next()?;
      let message = parts.next()?;
      let hash = parts.next()?;
      let body = parts.next().unwrap_or("");
      let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
      Some(Commit {
        date,
        author: author.to_string(),
        message: message.to_string(),
        short_hash: hash.trim().to_string(),
        category: q.conventional.then(|| conventional::classify_with_body(message, body)),
      })
    })
    .filter(|c| q.message_filter.map_or(true, |f| f.matches(&c.message)))
    .collect()
}

/// First remote of the repository, rewritten for display; `None` when there is none.
pub fn remote_url(repo: &Path) -> Option<String> {
  let out = run_git(repo, &["remote".into(), "-v".into()]).ok()?;
  let first = out.lines().next()?;
  display_remote(first)
}

/// `origin  git@host:owner/name.git (fetch)` becomes `host/owner/name`; other URLs pass through.
pub fn display_remote(remote_line: &str) -> Option<String> {
  let url = remote_line.split_whitespace().nth(1)?;
  match url.strip_prefix("git@") {
    Some(rest) => {
      let rest = rest.replacen(':', "/", 1);
      Some(rest.strip_suffix(".git").unwrap_or(&rest).to_string())
    }
    None => Some(url.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn query<'a>(filter: Option<&'a MessageFilter>, conventional: bool) -> LogQuery<'a> {
    LogQuery {
      since: NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
      until: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
      authors: &[],
      message_filter: filter,
      conventional,
    }
  }

  const SAMPLE: &str = "2025-08-13\u{0}Fixture Bot\u{0}feat: add | pipe\u{0}abc1234\u{1e}\n\
                        2025-08-12\u{0}Jane Smith\u{0}Update README\u{0}def5678\u{1e}\n\
                        garbage line without separators\u{1e}";

  const WITH_BODIES: &str = "2025-08-13\u{0}Fixture Bot\u{0}feat: drop v1\u{0}abc1234\u{0}Context line.\n\nBREAKING CHANGE: clients must upgrade\n\u{1e}\n\
                             2025-08-12\u{0}Jane Smith\u{0}fix: tidy\u{0}def5678\u{0}\u{1e}";

  #[test]
  fn parses_records_and_skips_malformed_lines() {
    let commits = parse_log(SAMPLE, &query(None, false));
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].message, "feat: add | pipe");
    assert_eq!(commits[0].short_hash, "abc1234");
    assert_eq!(commits[1].author, "Jane Smith");
    assert!(commits.iter().all(|c| c.category.is_none()));
  }

  #[test]
  fn classification_only_when_enabled() {
    let commits = parse_log(SAMPLE, &query(None, true));
    assert_eq!(commits[0].category.as_ref().unwrap().kind, "feat");
    assert_eq!(commits[1].category.as_ref().unwrap().kind, "other");
  }

  #[test]
  fn multi_line_bodies_feed_breaking_detection() {
    let commits = parse_log(WITH_BODIES, &query(None, true));
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].message, "feat: drop v1");
    assert!(commits[0].category.as_ref().unwrap().breaking);
    assert_eq!(commits[1].short_hash, "def5678");
    assert!(!commits[1].category.as_ref().unwrap().breaking);
  }

  #[test]
  fn body_is_requested_only_for_classification() {
    assert!(log_args(&query(None, false)).iter().any(|a| a == LOG_FORMAT));
    assert!(log_args(&query(None, true)).iter().any(|a| a == LOG_FORMAT_WITH_BODY));
  }

  #[test]
  fn regex_filter_is_case_insensitive() {
    let f = MessageFilter::new("^(FEAT|fix)");
    assert!(matches!(f, MessageFilter::Regex(_)));
    let commits = parse_log(SAMPLE, &query(Some(&f), false));
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].short_hash, "abc1234");
  }

  #[test]
  fn invalid_regex_falls_back_to_substring() {
    let f = MessageFilter::new("[invalid");
    assert!(matches!(f, MessageFilter::Substring(_)));
    assert!(f.matches("fix [INVALID] input"));
    assert!(!f.matches("feat: add new feature"));
  }

  #[test]
  fn log_args_include_window_and_every_author() {
    let authors = vec!["Alice Smith".to_string(), "Bob Johnson".to_string()];
    let mut q = query(None, false);
    q.authors = &authors;
    let args = log_args(&q);
    assert!(args.contains(&"--since=2025-08-11 00:00:00".to_string()));
    assert!(args.contains(&"--until=2025-08-15 23:59:59".to_string()));
    assert!(args.contains(&"--author=Alice Smith".to_string()));
    assert!(args.contains(&"--author=Bob Johnson".to_string()));
    assert!(args.contains(&"--fixed-strings".to_string()));
    assert!(!log_args(&query(None, false)).contains(&"--fixed-strings".to_string()));
  }

  #[test]
  fn non_repository_is_unavailable() {
    let td = tempfile::TempDir::new().unwrap();
    let outcome = commits(td.path(), &query(None, false));
    assert!(matches!(outcome, LogOutcome::Unavailable(_)));
  }

  #[test]
  fn ssh_remotes_are_rewritten() {
    assert_eq!(
      display_remote("origin\tgit@github.com:owner/name.git (fetch)").as_deref(),
      Some("github.com/owner/name")
    );
    assert_eq!(
      display_remote("origin\thttps://github.com/owner/name.git (fetch)").as_deref(),
      Some("https://github.com/owner/name.git")
    );
    assert_eq!(display_remote(""), None);
  }
}
