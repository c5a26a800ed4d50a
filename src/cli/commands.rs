//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Socie SDK CLI
#[derive(Parser, Debug)]
#[command(name = "socie-sdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Community (app) id; falls back to SOCIE_APP_ID
    #[arg(short, long, global = true)]
    pub app_id: Option<String>,

    /// API base URL override
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a collection and print an inferred struct declaration
    Generate {
        /// Collection path, e.g. "modules" or "memberships"
        #[arg(short, long)]
        collection: String,

        /// Name of the generated struct
        #[arg(short, long)]
        name: String,

        /// Only sample the first N records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Infer a struct declaration from a local JSON array file
    Infer {
        /// Path to a JSON file holding an array of records
        #[arg(short, long)]
        file: PathBuf,

        /// Name of the generated struct
        #[arg(short, long)]
        name: String,
    },

    /// List modules of the community
    Modules,
}
