mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{ManifestSource, cmd_check, cmd_info, cmd_list, cmd_show};
use output::{OutputFormat, print_error};

/// ppqs - project quick scripts
///
/// Finds the nearest pyproject.toml and validates its [tool.ppqs.scripts]
/// section.
#[derive(Parser)]
#[command(name = "ppqs")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Use this manifest instead of searching for pyproject.toml
  #[arg(long, global = true, value_name = "PATH")]
  manifest: Option<PathBuf>,

  /// Start the manifest search in this directory instead of the current one
  #[arg(short = 'C', long, global = true, value_name = "DIR")]
  directory: Option<PathBuf>,

  /// Output format
  #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List the scripts defined in the manifest
  List,

  /// Show the description and commands of one script
  Show {
    /// Name of the script
    name: String,
  },

  /// Validate the scripts section without listing it
  Check,

  /// Show what ppqs searches for
  Info,
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let source = ManifestSource {
    manifest: cli.manifest,
    directory: cli.directory,
  };

  let result = match cli.command {
    Commands::List => cmd_list(&source, cli.format),
    Commands::Show { name } => cmd_show(&source, &name, cli.format),
    Commands::Check => cmd_check(&source, cli.format),
    Commands::Info => cmd_info(cli.format),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{e:#}"));
      ExitCode::FAILURE
    }
  }
}
