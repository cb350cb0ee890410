//! logogrid CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! extraction, and exit with appropriate status.
//! For programmatic use, prefer the library API (`logogrid::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
