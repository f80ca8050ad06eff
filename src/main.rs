/// CLI module - argument parsing and command dispatch
mod cli;

use anyhow::Result;

fn main() -> Result<()> {
    cli::run()
}
