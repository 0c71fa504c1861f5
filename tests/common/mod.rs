use std::path::{Path, PathBuf};
use std::process::Command;

pub const BIN: &str = "weekly-git-summary";

#[allow(dead_code)]
pub fn cmd() -> assert_cmd::Command {
  let mut cmd = assert_cmd::Command::cargo_bin(BIN).unwrap();
  cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
  cmd
}

pub fn run(repo: &Path, args: &[&str]) {
  let status = Command::new("git").args(args).current_dir(repo).status().unwrap();
  assert!(status.success(), "git {:?} failed", args);
}

/// Create an empty repository at `root/rel` (or `root` when `rel` is empty).
pub fn init_repo(root: &Path, rel: &str) -> PathBuf {
  let dir = if rel.is_empty() { root.to_path_buf() } else { root.join(rel) };
  std::fs::create_dir_all(&dir).unwrap();
  run(&dir, &["init", "-q", "-b", "main"]);
  run(&dir, &["config", "user.name", "Fixture Bot"]);
  run(&dir, &["config", "user.email", "fixture@example.com"]);
  run(&dir, &["config", "commit.gpgsign", "false"]);
  dir
}

/// Empty commit authored by `author` at local noon on `day` (YYYY-MM-DD).
pub fn commit(repo: &Path, author: &str, day: &str, message: &str) {
  let when = format!("{}T12:00:00", day);
  let email = format!("{}@example.com", author.to_lowercase().replace(' ', "."));
  let status = Command::new("git")
    .args(["commit", "-q", "--allow-empty", "-m", message])
    .current_dir(repo)
    .env("GIT_AUTHOR_NAME", author)
    .env("GIT_AUTHOR_EMAIL", &email)
    .env("GIT_COMMITTER_NAME", author)
    .env("GIT_COMMITTER_EMAIL", &email)
    .env("GIT_AUTHOR_DATE", &when)
    .env("GIT_COMMITTER_DATE", &when)
    .status()
    .unwrap();
  assert!(status.success(), "commit {:?} failed", message);
}

/// Search root with two visible repositories, one hidden one and a plain directory.
///
/// Inside 2025-08-11..2025-08-15:
/// - `alpha` (ssh remote): Jane Smith feat on 08-11, Fixture Bot fix on 08-12, Jane Smith README on 08-13
/// - `group/beta`: Bob Johnson docs on 08-12 (plus a July commit outside the window)
/// - `.cache/ghost`: in-window commit that must never be reported
#[allow(dead_code)]
pub fn fixture_workspace() -> tempfile::TempDir {
  let td = tempfile::TempDir::new().unwrap();
  let root = td.path();

  let alpha = init_repo(root, "alpha");
  commit(&alpha, "Jane Smith", "2025-08-11", "feat(api): add search endpoint");
  commit(&alpha, "Fixture Bot", "2025-08-12", "fix: handle empty input");
  commit(&alpha, "Jane Smith", "2025-08-13", "Update README");
  run(&alpha, &["remote", "add", "origin", "git@github.com:acme/alpha.git"]);

  let beta = init_repo(root, "group/beta");
  commit(&beta, "Bob Johnson", "2025-07-01", "chore: old work");
  commit(&beta, "Bob Johnson", "2025-08-12", "docs: usage guide");

  let ghost = init_repo(root, ".cache/ghost");
  commit(&ghost, "Hidden Person", "2025-08-12", "feat: should not appear");

  std::fs::create_dir_all(root.join("notes")).unwrap();
  td
}

#[allow(dead_code)]
pub const WINDOW: [&str; 4] = ["--since", "2025-08-11", "--until", "2025-08-15"];
