//! CLI module
//!
//! # Commands
//!
//! - `generate` - Fetch a collection and print an inferred struct
//! - `infer` - Infer a struct from a local JSON array file
//! - `modules` - List modules of the community

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{infer_from_file, Runner};
