//! `dockerfile cmds` command.

use clap::Args;

#[derive(Args)]
pub struct CmdsArgs;

pub fn execute(_args: CmdsArgs) -> Result<(), Box<dyn std::error::Error>> {
    for cmd in dockerfile_core::all_cmds() {
        println!("{cmd}");
    }
    Ok(())
}
