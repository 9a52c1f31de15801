//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Build K-ary trees from TOML layouts, walk them and heapify them
#[derive(Parser, Debug)]
#[command(name = "karytree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Interpret layout values as complex numbers ({ re = .., im = .. })
    #[arg(long, global = true)]
    pub complex: bool,

    /// Branching factor, overrides config (a layout's own arity still wins)
    #[arg(short = 'k', long, global = true)]
    pub arity: Option<usize>,

    /// Additional config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree and print the configured traversals
    Show {
        #[arg(value_hint = ValueHint::FilePath)]
        layout: PathBuf,
    },

    /// Heapify the tree and print the breadth-first read-out
    Heapify {
        #[arg(value_hint = ValueHint::FilePath)]
        layout: PathBuf,
    },

    /// Look a value up and list its children
    Find {
        #[arg(value_hint = ValueHint::FilePath)]
        layout: PathBuf,
        /// Value to search for (complex: "3.4+5.2i" or "3.4,5.2")
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
