use std::fs;
use std::path::{Path, PathBuf};

const GIT_DIR: &str = ".git";

/// Find directories under `root` (inclusive) that directly contain a `.git` directory.
///
/// Descends at most `max_depth` levels below `root`. Hidden directories are
/// skipped and `.git` itself is never entered. Unreadable directories yield
/// nothing instead of failing the walk. Siblings are visited in name order so
/// repeated runs report repositories in the same order.
pub fn find_repositories(root: &Path, max_depth: usize) -> Vec<PathBuf> {
  let mut repos = Vec::new();
  walk(root, 0, max_depth, &mut repos);
  tracing::debug!(root = %root.display(), found = repos.len(), "repository discovery finished");
  repos
}

fn walk(dir: &Path, depth: usize, max_depth: usize, repos: &mut Vec<PathBuf>) {
  let entries = match fs::read_dir(dir) {
    Ok(rd) => rd,
    Err(err) => {
      tracing::debug!(dir = %dir.display(), %err, "skipping unreadable directory");
      return;
    }
  };

  let mut children: Vec<(String, PathBuf)> = entries
    .filter_map(|e| e.ok())
    .filter(|e| e.path().is_dir())
    .map(|e| (e.file_name().to_string_lossy().to_string(), e.path()))
    .collect();
  children.sort();

  for (name, path) in children {
    if name == GIT_DIR {
      repos.push(dir.to_path_buf());
    } else if depth < max_depth && !name.starts_with('.') {
      walk(&path, depth + 1, max_depth, repos);
    }
  }
}
