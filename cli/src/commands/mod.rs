//! CLI command definitions and dispatch.

mod cmds;
mod parse;
mod version;

use clap::{Parser, Subcommand};

/// Parse Dockerfiles into structured instructions.
#[derive(Parser)]
#[command(name = "dockerfile", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a Dockerfile and print its instructions
    Parse(parse::ParseArgs),
    /// List every recognized instruction keyword
    Cmds(cmds::CmdsArgs),
    /// Show version information
    Version(version::VersionArgs),
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Parse(args) => parse::execute(args),
        Command::Cmds(args) => cmds::execute(args),
        Command::Version(args) => version::execute(args),
    }
}
