//! # Brew Entry Point
//!
//! ## Usage
//! ```text
//! brew            interactive shell (same as `brew shell`)
//! brew demo       scripted walk through menu, cart, voucher and checkout
//! ```
//!
//! ## Environment
//! - `BREW_CUSTOMER_NAME`, `BREW_CUSTOMER_POINTS` - profile shown by `profile`
//! - `BREW_STORE_ID` - shop location selected at startup
//! - `BREW_CURRENCY_SYMBOL` - symbol used when printing prices
//! - `RUST_LOG` - log filter (logs go to stderr)

use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "brew", version, about = "Coffee storefront cart shell")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the interactive shell
    Shell,
    /// Run a scripted demo session
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => brew_cli::run_shell(),
        Command::Demo => brew_cli::run_demo(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
