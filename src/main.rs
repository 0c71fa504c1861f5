use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

mod aggregate;
mod cli;
mod conventional;
mod discover;
mod error;
mod gitio;
mod i18n;
mod model;
mod render;
mod summary;
mod util;
mod window;

use crate::cli::{normalize, Cli};

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

fn main() -> Result<ExitCode> {
  init_tracing();

  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => {
      return match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
          err.print()?;
          Ok(ExitCode::SUCCESS)
        }
        _ => {
          // clap's own exit code is 2; bad flags are a plain failure here
          err.print()?;
          if !err.render().to_string().contains("Usage:") {
            eprintln!("\n{}", Cli::command().render_usage());
          }
          Ok(ExitCode::FAILURE)
        }
      };
    }
  };

  if cli.gen_man {
    emit(io::stdout().lock(), &util::render_man_page::<Cli>()?)?;
    return Ok(ExitCode::SUCCESS);
  }

  // Phase 1: resolve the clock and normalize the CLI
  let now = util::effective_now(window::parse_now_override(cli.now_override.as_deref()));
  let lang = cli.lang;
  let cfg = match normalize(cli, now) {
    Ok(cfg) => cfg,
    Err(err) => {
      tracing::debug!(%err, "configuration rejected");
      eprintln!("{}", err.localized(lang));
      return Ok(ExitCode::FAILURE);
    }
  };
  tracing::debug!(?cfg, "effective configuration");

  // Phase 2: collect and render
  let summary = summary::collect(&cfg);
  let out = render::render(&summary, cfg.format, cfg.lang, cfg.color)?;
  emit(io::stdout().lock(), &out)?;
  Ok(ExitCode::SUCCESS)
}

/// Write the report; a reader that hangs up early (`| head`) is not an error.
fn emit(mut out: impl Write, text: &str) -> Result<()> {
  match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
    Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
      tracing::debug!("stdout closed before the report was written");
      Ok(())
    }
    res => Ok(res?),
  }
}
