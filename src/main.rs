use anyhow::Result;
use clap::Parser;

use bench_report::cli;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays reserved for the report lines.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    cli::run(args)
}
