//! studyrag CLI - keyword passage retrieval from the command line
//!
//! # Examples
//!
//! ```bash
//! # See how a document splits into chunks
//! studyrag chunk lecture.txt --chunk-size 2000 --overlap 100
//!
//! # Find the passages that best match a question
//! studyrag search "krebs cycle energy" lecture.txt notes.md -k 3
//!
//! # Build prompt context from the best passages
//! studyrag context "what is osmosis" week*.txt --max-chars 8000
//! ```

use clap::Parser;
use studyrag::cli::output::print_error;
use studyrag::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so stdout stays clean for piping
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "studyrag=debug" } else { "studyrag=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let json = std::env::var("STUDYRAG_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
