#![deny(clippy::all, clippy::pedantic)]
//! # spheres
//!
//! Entry point for the sphere distance drivers.
//!
//! ```text
//! spheres bench                       # time the variants on 1000 and 3000 spheres
//! spheres validate --tolerance 1e-9   # cross-check all six variants
//! spheres collide --variant 5         # list overlapping spheres
//! spheres --config plan.json bench    # load settings from a JSON file
//! ```
//!
//! Results go to standard output; timing lines and progress go to the log
//! stream on standard error.

mod app;
mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    app::run(cli)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
