//! Socie API client
//!
//! Thin, stateless wrapper around the remote API. Supplies raw samples for
//! the schema engine and typed accessors for known collections.

mod config;
mod socie;

pub use config::{ClientConfig, Credentials, DEFAULT_APP_TYPE, DEFAULT_BASE_URL};
pub use socie::SocieClient;
