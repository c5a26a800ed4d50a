//! Schema inference and struct generation
//!
//! Turns a sample of loosely-structured records into a Rust struct
//! declaration.
//!
//! # Features
//!
//! - **Type Inference**: classifies observed values into a closed set of
//!   kinds (string, integer, float, boolean, timestamp)
//! - **String Refinement**: "true"/"false" strings become booleans,
//!   ISO 8601 strings become timestamps
//! - **Numeric Widening**: mixed integer/float observations widen to float
//! - **Union Fallback**: any other kind mixture keeps its alternatives
//! - **Optionality**: fields null or absent in any record render as `Option`

mod codegen;
mod inference;
mod types;

pub use codegen::{generate_struct, StructGenerator};
pub use inference::{infer_type, TypeInferrer};
pub use types::{FieldDescriptor, StructSchema, TypeTag};
