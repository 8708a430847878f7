//! pkgdata - read data files shipped inside packages
//!
//! Command line front end over the `pkgdata` library.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Environment variable controlling log output, e.g. `PKGDATA_LOG=debug`
const LOG_ENV: &str = "PKGDATA_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Completions(args) => commands::completions::run(args),
        Commands::Cat(args) => {
            commands::registry(cli.paths, cli.config).and_then(|host| commands::cat::run(&host, args))
        }
        Commands::Locate(args) => {
            commands::registry(cli.paths, cli.config).and_then(|host| commands::locate::run(&host, args))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
