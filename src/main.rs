use clap::Parser;
use sqlite_options::cli::Cli;
use std::io;
use std::process;

fn main() {
    // Logs go to stderr; stdout carries only option identifiers
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    Cli::parse();

    if let Err(e) = sqlite_options::run(&mut io::stdout().lock()) {
        tracing::debug!(code = e.error_code(), "listing failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
