//! MCP resource handlers for chromakit.
//!
//! Exposes the named-color table, harmony offsets and classic scheme modes
//! via the MCP resources/list and resources/read protocol.

mod static_resources;

pub use static_resources::{list_static_resources, read_static_resource};
