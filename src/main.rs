mod cli;
mod header;
mod merge;
mod scan;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use std::io::{self, IsTerminal, Write};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default = if verbose { "potmerge=debug" } else { "potmerge=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();
}

/// Block until the user presses Enter
fn wait_for_enter() -> Result<()> {
    eprint!("Press Enter to exit...");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let pause = args.pause;
    let result = merge::run(args);

    if pause {
        if let Err(err) = &result {
            error!("{err:#}");
        }
        wait_for_enter()?;
    }

    result
}
