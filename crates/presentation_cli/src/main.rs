//! map CLI
//!
//! Aerial distance between two places and nearby keyword search.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

mod commands;

use std::process::ExitCode;

use application::DEFAULT_DISPLAY_LIMIT;
use clap::{Parser, Subcommand};
use domain::DistanceUnit;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// map CLI
#[derive(Parser)]
#[command(name = "map")]
#[command(author, version, about = "Aerial distance and nearby place search", long_about = None)]
struct Cli {
    /// Verbosity level (logs go to stderr)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aerial distance between two places
    ///
    /// Each side is a place name, a literal `lat;lon` pair, or given with
    /// --from / --to. Flags win over positional arguments.
    ///
    /// Example: map aerial-distance "Hebbal, Bangalore" "Koramangala, Bangalore"
    /// Example: map aerial-distance --from "13.115;77.607" --to "12.935;77.624"
    #[command(alias = "arieldist")]
    AerialDistance {
        /// Source place name or `lat;lon`
        source: Option<String>,

        /// Destination place name or `lat;lon`
        destination: Option<String>,

        /// Source coordinates as `lat;lon`
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,

        /// Destination coordinates as `lat;lon`
        #[arg(long, allow_hyphen_values = true)]
        to: Option<String>,

        /// Distance unit: km or mi
        #[arg(long, default_value = "km")]
        unit: DistanceUnit,
    },

    /// Search for places near a reference location
    ///
    /// Several keywords are combined with OR. A single keyword may use the
    /// provider's own `;` (OR) and `$` (AND) operators.
    ///
    /// Example: map nearby coffee tea --ref-location 28.631460,77.217423
    Nearby {
        /// Keywords to search for
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,

        /// Reference location as `lat,lon`
        #[arg(long = "ref-location", alias = "refLocation", allow_hyphen_values = true)]
        ref_location: String,

        /// Maximum number of results to print
        #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT, value_parser = parse_limit)]
        limit: usize,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parse a display limit of at least one
fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(format!("invalid limit '{value}': {e}")),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout is reserved for results
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match commands::run(cli.command).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}
