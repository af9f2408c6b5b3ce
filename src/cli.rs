//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Interactive list selection for the terminal. Prompts render on stderr;
/// the committed value prints to stdout for shell composition.
#[derive(Debug, Parser)]
#[command(name = "lineup", version = Box::leak(lineup::build_info::cli_version_text().into_boxed_str()) as &'static str)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (default: ./lineup.toml or ~/.config/lineup/lineup.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick exactly one option with arrow keys.
    Pick {
        /// Prompt text shown above the options.
        #[arg(short = 'p', long = "prompt", default_value = "pick one")]
        prompt: String,

        /// Initial highlight position (clamped to the option count).
        #[arg(long = "default", default_value_t = 0)]
        default: usize,

        /// Print the committed index instead of the value.
        #[arg(long = "index")]
        index: bool,

        /// Options to choose from.
        #[arg(required = true)]
        options: Vec<String>,
    },

    /// Toggle any number of options; prints one value per line.
    Check {
        #[arg(short = 'p', long = "prompt", default_value = "pick any")]
        prompt: String,

        /// Indices checked when the prompt opens (repeatable).
        #[arg(long = "checked")]
        checked: Vec<usize>,

        /// Options to choose from.
        #[arg(required = true)]
        options: Vec<String>,
    },

    /// Search by query, then pick from the matches.
    Find {
        #[arg(short = 'p', long = "prompt", default_value = "search")]
        prompt: String,

        /// Search the crates.io registry instead of a fixed list.
        #[arg(long = "crates", conflicts_with = "options")]
        crates: bool,

        /// Shortest query worth searching (overrides config).
        #[arg(long = "min-query")]
        min_query: Option<usize>,

        /// Most results to show per query (overrides config).
        #[arg(long = "max-results")]
        max_results: Option<usize>,

        /// Fixed options to search (omit when using --crates).
        options: Vec<String>,
    },
}
