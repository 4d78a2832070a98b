//! taskclass-cli: command-line client for the TaskClass school API.
//! Modularized for maintainability; reuses the library crate for transport
//! and list synchronization.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod browse;
mod context;
mod handlers;
mod io;
mod print;

use clap::Parser;

use args::{Cli, Commands};
use context::{CliError, build_context};
use handlers::{auth, posts, students, teachers};
use taskclass::infra::telemetry;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = build_context(&cli)?;
    telemetry::init(&ctx.settings.logging)?;

    match cli.command {
        Commands::Auth(cmd) => auth::handle(&ctx, cmd.action).await?,
        Commands::Posts(cmd) => posts::handle(&ctx, cmd.action).await?,
        Commands::Teachers(cmd) => teachers::handle(&ctx, cmd.action).await?,
        Commands::Students(cmd) => students::handle(&ctx, cmd.action).await?,
        Commands::Browse(cmd) => browse::run(&ctx, cmd).await?,
    }

    Ok(())
}
