//! wmigen command line.
//!
//! Generates Rust declarations for the named WMI classes, or lists every
//! available class with `-l`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wmigen::config::{DEFAULT_PACKAGE, DEFAULT_QUERY_PROGRAM, QUERY_PROGRAM_ENV};
use wmigen::{GeneratorConfig, WmicSource, enumerate, pipeline};

/// Generate Rust structs mirroring WMI class schemas
#[derive(Parser, Debug)]
#[command(name = "wmigen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// WMI classes to generate, in output order (ignored with --list)
    #[arg(value_name = "CLASS")]
    classes: Vec<String>,

    /// Module wrapping the generated structs
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Output file (standard output when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List every available WMI class and exit
    #[arg(short, long)]
    list: bool,

    /// Program answering class schema queries
    #[arg(long, env = QUERY_PROGRAM_ENV, default_value = DEFAULT_QUERY_PROGRAM)]
    wmic: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr; stdout carries generated code and class listings.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        if !cli.classes.is_empty() {
            tracing::debug!(ignored = cli.classes.len(), "class arguments ignored with --list");
        }
        // best-effort listing: never a failing exit status
        match enumerate::list_classes(&mut std::io::stdout().lock()) {
            Ok(count) => tracing::info!(count, "listed classes"),
            Err(e) => tracing::warn!(error = %e, "class listing interrupted"),
        }
        return ExitCode::SUCCESS;
    }

    let config = GeneratorConfig::new()
        .package(cli.package)
        .output(cli.output)
        .query_program(cli.wmic);
    let mut source = WmicSource::new(config.query_program_path());

    match pipeline::run(&config, &mut source, &cli.classes) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "generation failed");
            eprintln!("wmigen: {}", e);
            ExitCode::FAILURE
        }
    }
}
