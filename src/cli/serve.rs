//! MCP server command

use std::process::ExitCode;

use super::{Context, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the serve command
pub fn run_serve(ctx: Context) -> ExitCode {
    use tokio::runtime::Runtime;

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: Failed to create async runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match rt.block_on(crate::mcp::run_server(ctx.config)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: MCP server failed: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
