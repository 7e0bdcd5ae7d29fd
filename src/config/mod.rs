//! Configuration for chromakit
//!
//! Provides types and loading for the `chroma.toml` configuration file.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
