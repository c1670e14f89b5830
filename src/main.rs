mod change;
mod changelog;
mod commands;
mod core;

use crate::core::error::{ShipError, print_error};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Accumulate pending change files into a changelog entry, a semver bump,
/// and a release commit
#[derive(Parser)]
#[command(name = "changeship")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct ShipCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Create a change file describing one pending change
  Add {
    /// Change type: major, minor, patch, or none
    #[arg(short, long)]
    kind: String,
    /// Release note text for the changelog
    #[arg(short, long)]
    comment: String,
    /// Author name (default: git config user.name)
    #[arg(short, long)]
    author: Option<String>,
    /// Related issue link; may be repeated
    #[arg(short, long = "issue")]
    issues: Vec<String>,
    /// Override the change-file directory
    #[arg(long)]
    location: Option<PathBuf>,
  },

  /// Merge all pending change files, bump the version, commit and push
  Apply {
    /// Override the change-file directory
    #[arg(long)]
    location: Option<PathBuf>,
    /// Override the changelog directory
    #[arg(long)]
    changelog: Option<PathBuf>,
    /// Git remote to push to
    #[arg(long)]
    remote: Option<String>,
    /// Target branch (default: the remote's default branch)
    #[arg(long)]
    branch: Option<String>,
    /// Show the merged release without making changes
    #[arg(long)]
    dry_run: bool,
  },

  /// List pending change files
  Status {
    /// Override the change-file directory
    #[arg(long)]
    location: Option<PathBuf>,
    /// Output in JSON format
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
  let cli = ShipCli::parse();

  let result = match cli.command {
    Commands::Add {
      kind,
      comment,
      author,
      issues,
      location,
    } => commands::run_add(kind, comment, author, issues, location),
    Commands::Apply {
      location,
      changelog,
      remote,
      branch,
      dry_run,
    } => commands::run_apply(location, changelog, remote, branch, dry_run),
    Commands::Status { location, json } => commands::run_status(location, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ShipError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
