//! CLI layer: argument parsing, command dispatch, and subcommand implementations.

pub mod args;
mod serve;

pub use args::*;

use clap::{Parser, Subcommand};
use std::time::Instant;

use tracing::debug;

use corpus_search::{Corpus, SearchError, SearchRequest};

// ─── CLI ─────────────────────────────────────────────────────────────

/// Static-corpus text search with highlighted context snippets
#[derive(Parser, Debug)]
#[command(
    name = "corpus-search",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATETIME"), ")"),
    about,
    after_help = "Run 'corpus-search <COMMAND> --help' for detailed options and examples."
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Run one search and print the JSON response
    Query(QueryArgs),

    /// Serve searches as JSON-RPC over stdio
    Serve(ServeArgs),
}

// ─── Main entry point ───────────────────────────────────────────────

pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query(args) => cmd_query(args),
        Commands::Serve(args) => serve::cmd_serve(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr `tracing` subscriber at the given level (unknown → info).
/// A second call is a no-op.
pub(crate) fn init_logging(level: &str) {
    let log_level = match level {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

// ─── cmd_query ──────────────────────────────────────────────────────

fn cmd_query(args: QueryArgs) -> Result<(), SearchError> {
    init_logging(&args.log_level);

    // Validate before paying for the index build
    let request = SearchRequest::from_params(
        Some(args.query.as_str()),
        args.page.as_deref(),
        args.limit.as_deref(),
    )?;

    let corpus = Corpus::load(&args.corpus)?;

    let start = Instant::now();
    let response = request.execute(&corpus);
    debug!(
        elapsed_ms = format_args!("{:.3}", start.elapsed().as_secs_f64() * 1000.0),
        total = response.total_quantity,
        "Query answered"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);
    Ok(())
}
