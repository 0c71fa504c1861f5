// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Subprocess, clock and man page helpers shared by retrieval and the CLI
// role: utilities/helpers
// inputs: git arguments and a working directory; optional "now" override; clap CommandFactory
// outputs: git stdout text, effective local instant, man page text
// side_effects: run_git invokes subprocesses
// invariants:
// - run_git never inherits stdin; a non-zero exit is always an Err carrying stderr
// - effective_now is the only place that reads the wall clock
// errors: run_git surfaces command + stderr; spawn failures carry the argument list
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::CommandFactory;

pub fn run_git(repo: &Path, args: &[String]) -> Result<String> {
  tracing::debug!(repo = %repo.display(), ?args, "running git");
  let out = Command::new("git")
    .args(args)
    .current_dir(repo)
    .stdin(Stdio::null())
    .output()
    .with_context(|| format!("spawning git {:?}", args))?;

  if out.status.success() {
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
  } else {
    let stderr = String::from_utf8_lossy(&out.stderr);
    anyhow::bail!("git {:?} failed: {}", args, stderr.trim())
  }
}

/// Wall clock unless `--now-override` pinned it.
pub fn effective_now(pinned: Option<DateTime<Local>>) -> DateTime<Local> {
  pinned.unwrap_or_else(Local::now)
}

/// troff man page (section 1) generated from the clap definition of `T`.
pub fn render_man_page<T: CommandFactory>() -> Result<String> {
  let mut page: Vec<u8> = Vec::new();
  clap_mangen::Man::new(T::command())
    .render(&mut page)
    .context("rendering man page")?;
  String::from_utf8(page).context("man page is not UTF-8")
}
