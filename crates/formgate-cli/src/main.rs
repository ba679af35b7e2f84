//! Formgate CLI - confirmation-gated registration from the command line
//!
//! Wires a line-oriented confirmer and the JSON registration log into the
//! confirmation gate. The gate's boolean result decides whether the
//! registration was submitted.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod confirm;

use commands::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::from_default_env().add_directive("formgate_cli=info".parse()?))
        .init();

    commands::run(Cli::parse())
}
