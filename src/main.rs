mod commands;
mod core;
mod npm;
mod registry;
mod release;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::error::{LensError, print_error};

/// Inspect npm dist-tag release metadata for design-system components
#[derive(Parser)]
#[command(name = "release-lens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct LensCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the component's current release details
  ///
  /// Reconciles the component's local metadata against the registry
  /// document and reports the local version when it is still ahead of
  /// the published releases, or the latest published version otherwise.
  Details {
    /// Component metadata file (packageJson, ignoredTags, status, ...)
    #[arg(long)]
    meta: PathBuf,

    /// Registry document captured to disk (e.g. `curl https://registry.npmjs.org/<name>`)
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Output as JSON for CI integration
    #[arg(long)]
    json: bool,
  },

  /// List the component's tagged releases
  ///
  /// Shows every dist-tag published to the registry (the synthetic
  /// local entry is excluded), sorted latest-first, then by publish
  /// date in descending order.
  Releases {
    /// Component metadata file (packageJson, ignoredTags, status, ...)
    #[arg(long)]
    meta: PathBuf,

    /// Registry document captured to disk (e.g. `curl https://registry.npmjs.org/<name>`)
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Output as JSON for CI integration
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = LensCli::parse();

  let result = match cli.command {
    Commands::Details { meta, registry, json } => commands::run_details(&meta, registry.as_deref(), json),
    Commands::Releases { meta, registry, json } => commands::run_releases(&meta, registry.as_deref(), json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: LensError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
