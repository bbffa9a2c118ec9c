use anyhow::Result;
use bundlesize::cmd;
use bundlesize::config::{ConfigFile, ConfigLoader};
use bundlesize::error::ErrorFormatter;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use std::process;

/// Bundle size regression tracker
///
/// bundlesize records the size of every hashed JS/CSS chunk in a build,
/// compares later builds against that baseline, and flags chunks that grew
/// past the configured warn/fail thresholds.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (default: ./.bundlesize.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by commands that scan the build output
#[derive(Args)]
struct ScanArgs {
    /// Directory holding the hashed build output
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    /// Baseline document path
    #[arg(long, value_name = "FILE")]
    baseline: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record the current build output as the new baseline
    Baseline {
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Compare the current build output against the baseline
    Compare {
        #[command(flatten)]
        scan: ScanArgs,

        /// Report document path
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Maximum number of warn/fail chunks to list
        #[arg(long)]
        limit: Option<usize>,

        /// Print the report as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Summarize the last comparison report
    Summary {
        /// Report document path
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Maximum number of warn/fail chunks to list
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => ConfigLoader::load_from(path),
        None => ConfigLoader::load(Path::new(".")),
    }
}

fn apply_scan_args(config: &mut ConfigFile, scan: &ScanArgs) {
    if let Some(dir) = &scan.assets_dir {
        config.assets_dir = dir.clone();
    }
    if let Some(baseline) = &scan.baseline {
        config.baseline_path = baseline.clone();
    }
}

fn apply_report_args(config: &mut ConfigFile, report: &Option<PathBuf>, limit: Option<usize>) {
    if let Some(report) = report {
        config.report_path = report.clone();
    }
    if let Some(limit) = limit {
        config.summary_limit = limit;
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let Some(command) = &cli.command else {
        // No subcommand provided, show help
        Cli::command().print_help()?;
        return Ok(0);
    };
    let load = || load_config(cli.config.as_deref());

    match command {
        Commands::Baseline { scan } => {
            let mut config = load()?;
            apply_scan_args(&mut config, scan);
            cmd::cmd_baseline(&config)?;
            Ok(0)
        }
        Commands::Compare {
            scan,
            report,
            limit,
            json,
        } => {
            let mut config = load()?;
            apply_scan_args(&mut config, scan);
            apply_report_args(&mut config, report, *limit);
            cmd::cmd_compare(&config, *json)?;
            Ok(0)
        }
        Commands::Summary { report, limit } => {
            let mut config = load()?;
            apply_report_args(&mut config, report, *limit);
            Ok(cmd::cmd_summary(&config.report_path, config.summary_limit))
        }
        Commands::Completions { shell } => {
            cmd::cmd_completions(*shell, &mut Cli::command(), &mut std::io::stdout());
            Ok(0)
        }
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match run(&cli) {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", ErrorFormatter::format(&e));
            process::exit(ErrorFormatter::exit_code(&e));
        }
    }
}
