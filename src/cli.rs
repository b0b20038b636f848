use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calcdeck")]
#[command(author, version, about = "Keypad calculator with persistent history")]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory history is stored in
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep history in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive keypad (default)
    Repl,

    /// Feed keystrokes and print the resulting display
    Eval {
        /// Keys, e.g. `7 + 3 =` or `9 sqrt =`
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },

    /// Show the calculation history
    History {
        /// Delete all history entries
        #[arg(long)]
        clear: bool,
    },
}
