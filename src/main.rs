//! bookmake CLI entry point
//!
//! Parses the command line, runs the build, and renders any fatal error as
//! user-friendly colored output with a non-zero exit code.

use anyhow::Result;
use bookmake::cli::Cli;
use bookmake::core::user_friendly_error;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
