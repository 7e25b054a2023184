//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Command-line interface for editing partition layout trees
#[derive(Parser)]
#[command(name = "partition")]
#[command(author, version, about = "Partition layout tree command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// How trees are printed
    #[arg(short, long, global = true, default_value = "tree", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Edit a tree interactively or from a script
    #[command(about = "Read split/remove/resize/drag commands line by line")]
    Shell {
        /// Script file to run instead of reading stdin
        #[arg(short, long)]
        script: Option<PathBuf>,
    },

    /// Walk through split, resize and remove on a fresh tree
    #[command(about = "Run the built-in split, resize, remove walkthrough")]
    Demo,

    /// Apply random edits and check the tree after each one
    #[command(about = "Apply a random edit sequence and verify tree invariants")]
    Random {
        /// Number of edits to apply
        #[arg(short = 'n', long, default_value = "100")]
        ops: usize,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Manage the settings file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Settings file subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the settings file location
    Path,

    /// Print the effective settings as TOML
    Show,

    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for printed trees
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline of the nodes
    #[default]
    Tree,
    /// The tree as JSON
    Json,
    /// Character grid of the laid-out leaves
    Grid,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}
