use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::{info, warn};

use splash_patch::config::ProjectConfig;
use splash_patch::{HookContext, SplashPatcher};

/// Patch Android splash resources after `cordova prepare android`.
#[derive(Parser, Debug)]
#[command(name = "splash-patch")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Cordova project root
  #[arg(default_value = ".")]
  project_root: PathBuf,

  /// Configuration file (defaults to splash.config.json in the project root)
  #[arg(long)]
  config: Option<PathBuf>,

  /// Report pending changes without writing; fails when the project is not fully patched
  #[arg(long)]
  check: bool,

  /// Print the report as JSON on stdout
  #[arg(long)]
  json: bool,

  /// Log every copied file
  #[arg(long, short)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let context = HookContext::resolve(&cli.project_root)?;
  let config = match &cli.config {
    Some(path) => ProjectConfig::from_path(path)?,
    None => ProjectConfig::discover(context.project_root()),
  };
  let layout = config.into_layout(context.project_root());
  let patcher = SplashPatcher::with_layout(context, layout);

  if cli.check {
    let pending = patcher.check()?;
    if cli.json {
      println!("{}", serde_json::to_string_pretty(&pending)?);
    }
    for change in &pending {
      warn!(?change, "pending splash change");
    }
    if pending.is_empty() {
      info!("android splash resources are up to date");
      return Ok(());
    }
    return Err(anyhow!(
      "{} splash change(s) pending; run splash-patch to apply them",
      pending.len()
    ));
  }

  let report = patcher.run()?;
  if cli.json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  }
  Ok(())
}

fn init_tracing(verbose: bool) {
  // RUST_LOG takes precedence, e.g. RUST_LOG=splash_patch=debug
  let default_filter = if verbose { "debug" } else { "info" };
  let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}
