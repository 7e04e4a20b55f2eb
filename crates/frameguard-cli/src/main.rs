mod constructor;
mod errors;
mod parser;
mod runner;
mod writer;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for validation results
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Print results to standard output (human-readable)
    Stdout,
    /// Write results to a JSON file
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "frameguard",
    version,
    about = "frameguard - schema, null and range validation for CSV/Parquet tables",
    long_about = "frameguard checks tables against a declared schema, a null-value policy \
                  and per-column numeric ranges before they reach downstream processing.\n\n\
                  Example usage:\n  \
                  frameguard --config validation.toml --output stdout"
)]
struct Args {
    /// Path to the TOML configuration file that defines validation rules
    #[arg(short, long, value_name = "FILE")]
    config: String,

    /// Output format for validation results
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputFormat,

    /// Destination of the JSON report (file or directory)
    #[arg(short, long, value_name = "PATH")]
    path: Option<String>,

    /// Enable debug mode with debug logs and detailed error backtraces
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "frameguard_cli=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = Args::parse();

    // Enable backtraces in debug mode
    if args.debug {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
    init_tracing(args.debug);

    match runner::run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(err) => {
            if args.debug {
                eprintln!("Error: {:?}", err);
            } else {
                eprintln!("Error: {:#}", err);
                eprintln!("\nHint: Run with --debug flag for detailed stack traces");
            }
            std::process::exit(1);
        }
    }
}
