use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

use greg::app;
use greg::cli::Cli;

use clap::Parser;

// Usage: cat notes.txt | greg '(\w+)@(\w+)'
//        greg --file notes.txt 'a{2,}' '[0-9]+'
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cfg = Cli::parse().into();
    let code = app::run(cfg)?;
    process::exit(code);
}
