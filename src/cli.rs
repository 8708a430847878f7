//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pkgdata - read data files shipped inside packages
#[derive(Parser, Debug)]
#[command(
    name = "pkgdata",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Read data files shipped inside packages",
    long_about = "pkgdata resolves a package on its search paths (directories or zip archives) \
                  and reads a data file stored next to it, without caring where the package lives.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pkgdata -p ./site cat data utf-8.file\n    \
                  pkgdata -p ./bundle.zip locate ziptestdata subdirectory/binary.file\n    \
                  PKGDATA_PATH=./site pkgdata cat data.sub resource.bin > out.bin"
)]
pub struct Cli {
    /// Search path entry (directory or zip archive); may be repeated
    #[arg(long = "path", short = 'p', value_name = "ENTRY", global = true)]
    pub paths: Vec<PathBuf>,

    /// YAML configuration file with search paths and module layout
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a resource's bytes to stdout
    Cat(ResourceArgs),

    /// Print where a resource would be read from
    Locate(ResourceArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// A package and a path relative to it
#[derive(Parser, Debug)]
pub struct ResourceArgs {
    /// Dotted package name, e.g. data.subdirectory
    pub package: String,

    /// Resource path relative to the package directory
    pub resource: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pkgdata completions bash > ~/.bash_completion.d/pkgdata\n\n\
                  Generate zsh completions:\n    pkgdata completions zsh > ~/.zfunc/_pkgdata")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
