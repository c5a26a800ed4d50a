//! # Socie SDK
//!
//! A Rust SDK for the Socie community API with schema inference and struct
//! generation.
//!
//! The core of the crate is a pure, in-memory engine: given a sample of
//! loosely-structured records, it infers a best-fit type per field, splits
//! fields into required and optional, and renders a Rust struct declaration.
//! The API client and CLI are thin collaborators that feed it samples.
//!
//! ## Quick Start
//!
//! ```rust
//! use socie_sdk::schema::generate_struct;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"name": "Alice", "age": 25, "isEnabled": true}),
//!     json!({"name": "Bob", "age": 30, "city": "New York"}),
//! ];
//!
//! let code = generate_struct("Person", &records);
//! assert!(code.contains("pub name: String,"));
//! assert!(code.contains("pub city: Option<String>,"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     Vec<Value>      ┌──────────────────────────────┐
//! │ SocieClient │ ──────────────────► │ StructGenerator              │
//! │ login()     │  (sample records)   │   field universe             │
//! │ collection()│                     │   TypeInferrer per field     │
//! └─────────────┘                     │   required/optional split    │
//!        ▲                            │   render() → declaration     │
//!        │ CLI: generate / modules    └──────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(missing_docs)] // TODO: finish field-level docs before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Socie API client
pub mod client;

/// Typed models for known collections
pub mod models;

/// Schema inference and struct generation
pub mod schema;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ClientConfig, Credentials, SocieClient};
pub use error::{Error, Result};
pub use schema::{generate_struct, StructGenerator, StructSchema, TypeInferrer, TypeTag};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
