use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use mcmap::args::{ParseOutcome, parse_args, usage};
use mcmap::config::{CONFIG_ENV, McmapConfig};
use mcmap::progress::{self, SpinningScanner};
use mcmap::resolve::resolve;
use mcmap::scan::RegionDirScanner;
use mcmap::settings::{MIB, WorldOptions};

const BINARY: &str = "mcmap";

fn init_logging() {
    // Logs go to stderr; stdout carries the summary.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn print_summary(opts: &WorldOptions) {
    let area = match opts.boundary.extent() {
        Some(extent) => extent.to_string(),
        None => "undefined".to_string(),
    };
    progress::success(&format!(
        "Ready to render {}",
        if opts.whole_world {
            "the whole world"
        } else {
            "the selected area"
        }
    ));
    println!("  world       {}", opts.save_name.display());
    println!(
        "  dimension   {} ({})",
        opts.dimension,
        opts.region_dir().display()
    );
    println!(
        "  area        {}, Y {}..{}",
        area, opts.boundary.min_y, opts.boundary.max_y
    );
    println!("  orientation {}", opts.boundary.orientation);
    println!("  output      {}", opts.out_file.display());
    println!("  colors      {}", opts.color_file.display());
    println!(
        "  splits      {}, padding {}px",
        opts.splits, opts.padding
    );
    println!(
        "  markers     {}",
        progress::format_count(opts.markers.len(), "marker", "markers")
    );
    println!(
        "  memory      {} MB{}",
        opts.mem_limit / MIB,
        if opts.mem_limit_set { "" } else { " (default)" }
    );
}

fn fail(message: &str) -> ExitCode {
    progress::error(message);
    eprintln!("Run `{BINARY} -help` for usage.");
    ExitCode::FAILURE
}

fn run() -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot read the working directory")?;
    let config_path = McmapConfig::locate(std::env::var_os(CONFIG_ENV).map(PathBuf::from), &cwd);
    let defaults = McmapConfig::load_from_path(&config_path).world_options();

    let raw_args: Vec<OsString> = std::env::args_os().skip(1).collect();
    debug!(args = ?raw_args, config = %config_path.display(), "starting");

    let opts = match parse_args(&raw_args, defaults) {
        Ok(ParseOutcome::Options(opts)) => *opts,
        Ok(ParseOutcome::Help) => {
            print!("{}", usage(BINARY));
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => return Ok(fail(&err.to_string())),
    };

    match resolve(opts, &SpinningScanner::new(RegionDirScanner)) {
        Ok(job) => {
            print_summary(&job);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(fail(&err.to_string())),
    }
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(code) => code,
        Err(err) => {
            progress::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
