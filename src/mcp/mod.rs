//! MCP (Model Context Protocol) server implementation for chromakit
//!
//! Exposes color conversion, analysis and palette generation as MCP tools,
//! and the reference tables as resources.
//!
//! Start the server with `chroma serve` (feature-gated).

pub mod resources;
mod server;
pub mod tools;

pub use server::{run_server, ChromakitMcpServer};
