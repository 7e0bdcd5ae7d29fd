//! Core MCP server implementation.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};

use super::resources::{list_static_resources, read_static_resource};
use super::tools::analysis::{
    self, ColorInput, ColorPairInput, DeltaEInput, MinifyInput, ReadableInput,
};
use super::tools::info::{self, ColorInfoInput};
use super::tools::manipulation::{self, AmountInput, HueRotateInput, HueValueInput, MixInput};
use super::tools::output::{self, ExportTokensInput};
use super::tools::schemes::{
    self, ClassicSchemeInput, ColorBlindInput, HarmonyInput, PaletteInput, RampInput,
    SchemeInfoInput,
};
use super::tools::ToolResult;
use crate::config::ChromaConfig;
use crate::telemetry::{ErrorCollector, ErrorEntry};

/// The Chromakit MCP Server
///
/// Exposes color conversion, naming, contrast and palette generation as MCP
/// tools, plus the reference tables as read-only resources.
#[derive(Debug, Clone)]
pub struct ChromakitMcpServer {
    tool_router: ToolRouter<Self>,
    config: Arc<ChromaConfig>,
    telemetry: Arc<ErrorCollector>,
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[tool_router]
impl ChromakitMcpServer {
    pub fn new(config: ChromaConfig) -> Self {
        let telemetry = ErrorCollector::from_config(&config.telemetry);
        Self {
            tool_router: Self::tool_router(),
            config: Arc::new(config),
            telemetry: Arc::new(telemetry),
        }
    }

    pub fn config(&self) -> &ChromaConfig {
        &self.config
    }

    /// Run one tool body, turning failures and panics into error results.
    fn respond(
        &self,
        tool: &str,
        run: impl FnOnce() -> ToolResult,
    ) -> Result<CallToolResult, McpError> {
        match panic::catch_unwind(AssertUnwindSafe(run)) {
            Ok(Ok(json)) => Ok(CallToolResult::success(vec![Content::text(json)])),
            Ok(Err(message)) => {
                self.telemetry.record(&ErrorEntry::new(tool, "tool_error", message.clone()));
                Ok(CallToolResult::error(vec![Content::text(message)]))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                eprintln!("Error: {} panicked: {}", tool, message);
                self.telemetry.record(&ErrorEntry::new(tool, "panic", message));
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "internal error in {}",
                    tool
                ))]))
            }
        }
    }

    // ── Descriptors and schemes ──────────────────────────────────────

    #[tool(
        name = "get-color-info",
        description = "Full descriptor for a color: hex, rgb, hsl, hsv, cmyk, XYZ, Lab, nearest name and best contrast color. Accepts a color string or one structured representation."
    )]
    async fn get_color_info(
        &self,
        Parameters(input): Parameters<ColorInfoInput>,
    ) -> Result<CallToolResult, McpError> {
        let policy = self.config.validation.on_invalid;
        self.respond("get-color-info", || info::run_color_info(input, policy))
    }

    #[tool(
        name = "get-color-scheme-info",
        description = "Seeded random scheme of full color descriptors. The same seed and color always produce the same scheme."
    )]
    async fn get_color_scheme_info(
        &self,
        Parameters(input): Parameters<SchemeInfoInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("get-color-scheme-info", || schemes::run_scheme_info(input, &self.config))
    }

    #[tool(
        name = "get-classic-scheme",
        description = "Classic scheme (monochrome, analogic, complement, triad, quad, ...) with descriptors for every color."
    )]
    async fn get_classic_scheme(
        &self,
        Parameters(input): Parameters<ClassicSchemeInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("get-classic-scheme", || schemes::run_classic_scheme(input))
    }

    #[tool(
        name = "generate-color-scheme",
        description = "Generates a WCAG-checked palette from a single seed color: one tonal ramp per harmony role."
    )]
    async fn generate_color_scheme(
        &self,
        Parameters(input): Parameters<PaletteInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("generate-color-scheme", || schemes::run_generate_palette(input, &self.config))
    }

    #[tool(
        name = "generate-color-harmonies",
        description = "Generates color harmonies based on a given type."
    )]
    async fn generate_color_harmonies(
        &self,
        Parameters(input): Parameters<HarmonyInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("generate-color-harmonies", || schemes::run_harmonies(input))
    }

    #[tool(name = "generate-tints", description = "Generates tints of a color, mixing toward white.")]
    async fn generate_tints(
        &self,
        Parameters(input): Parameters<RampInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("generate-tints", || schemes::run_tints(input, &self.config))
    }

    #[tool(name = "generate-shades", description = "Generates shades of a color, mixing toward black.")]
    async fn generate_shades(
        &self,
        Parameters(input): Parameters<RampInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("generate-shades", || schemes::run_shades(input, &self.config))
    }

    #[tool(name = "generate-tones", description = "Generates tones of a color, mixing toward gray.")]
    async fn generate_tones(
        &self,
        Parameters(input): Parameters<RampInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("generate-tones", || schemes::run_tones(input, &self.config))
    }

    #[tool(
        name = "ensure-color-blind-safe",
        description = "Checks a palette under color-blind simulation and nudges hues until they are distinguishable."
    )]
    async fn ensure_color_blind_safe(
        &self,
        Parameters(input): Parameters<ColorBlindInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("ensure-color-blind-safe", || schemes::run_color_blind_safe(input, &self.config))
    }

    #[tool(
        name = "export-color-tokens",
        description = "Serializes a palette to JSON, CSS custom properties or an SCSS map."
    )]
    async fn export_color_tokens(
        &self,
        Parameters(input): Parameters<ExportTokensInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("export-color-tokens", || output::run_export_tokens(input))
    }

    // ── Analysis ─────────────────────────────────────────────────────

    #[tool(name = "is-valid-color", description = "Checks if a color string is valid.")]
    async fn is_valid_color(
        &self,
        Parameters(input): Parameters<ColorInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("is-valid-color", || analysis::run_is_valid_color(input))
    }

    #[tool(name = "are-colors-equal", description = "Checks if two colors are the same color.")]
    async fn are_colors_equal(
        &self,
        Parameters(input): Parameters<ColorPairInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("are-colors-equal", || analysis::run_are_colors_equal(input))
    }

    #[tool(name = "get-color-hue", description = "Gets the hue of a color in degrees.")]
    async fn get_color_hue(
        &self,
        Parameters(input): Parameters<ColorInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("get-color-hue", || analysis::run_get_color_hue(input))
    }

    #[tool(
        name = "get-color-brightness",
        description = "Gets the perceived brightness of a color, 0 to 1."
    )]
    async fn get_color_brightness(
        &self,
        Parameters(input): Parameters<ColorInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("get-color-brightness", || analysis::run_get_color_brightness(input))
    }

    #[tool(name = "is-color-light", description = "Checks if a color is light.")]
    async fn is_color_light(
        &self,
        Parameters(input): Parameters<ColorInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("is-color-light", || analysis::run_is_color_light(input))
    }

    #[tool(name = "is-color-dark", description = "Checks if a color is dark.")]
    async fn is_color_dark(
        &self,
        Parameters(input): Parameters<ColorInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("is-color-dark", || analysis::run_is_color_dark(input))
    }

    #[tool(
        name = "get-color-luminance",
        description = "Gets the WCAG relative luminance of a color, 0 to 1."
    )]
    async fn get_color_luminance(
        &self,
        Parameters(input): Parameters<ColorInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("get-color-luminance", || analysis::run_get_color_luminance(input))
    }

    #[tool(
        name = "get-color-contrast",
        description = "Gets the WCAG contrast ratio between two colors, 1 to 21."
    )]
    async fn get_color_contrast(
        &self,
        Parameters(input): Parameters<ColorPairInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("get-color-contrast", || analysis::run_get_color_contrast(input))
    }

    #[tool(
        name = "is-color-readable",
        description = "Checks if text in one color is readable on another at a WCAG level and text size."
    )]
    async fn is_color_readable(
        &self,
        Parameters(input): Parameters<ReadableInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("is-color-readable", || analysis::run_is_color_readable(input))
    }

    #[tool(
        name = "get-color-delta-e",
        description = "Perceptual difference between two colors (CIEDE2000 by default)."
    )]
    async fn get_color_delta_e(
        &self,
        Parameters(input): Parameters<DeltaEInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("get-color-delta-e", || analysis::run_get_color_delta_e(input))
    }

    #[tool(name = "get-random-color", description = "Generates a random color.")]
    async fn get_random_color(&self) -> Result<CallToolResult, McpError> {
        self.respond("get-random-color", analysis::run_get_random_color)
    }

    #[tool(name = "minify-color", description = "Shortest CSS notation for a color.")]
    async fn minify_color(
        &self,
        Parameters(input): Parameters<MinifyInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("minify-color", || analysis::run_minify_color(input))
    }

    // ── Manipulation ─────────────────────────────────────────────────

    #[tool(name = "invert-color", description = "Inverts a color.")]
    async fn invert_color(
        &self,
        Parameters(input): Parameters<ColorInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("invert-color", || manipulation::run_invert_color(input))
    }

    #[tool(name = "saturate-color", description = "Increases HSL saturation by an amount, 0 to 1.")]
    async fn saturate_color(
        &self,
        Parameters(input): Parameters<AmountInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("saturate-color", || manipulation::run_saturate_color(input))
    }

    #[tool(name = "desaturate-color", description = "Decreases HSL saturation by an amount, 0 to 1.")]
    async fn desaturate_color(
        &self,
        Parameters(input): Parameters<AmountInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("desaturate-color", || manipulation::run_desaturate_color(input))
    }

    #[tool(name = "grayscale-color", description = "Converts a color to grayscale.")]
    async fn grayscale_color(
        &self,
        Parameters(input): Parameters<ColorInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("grayscale-color", || manipulation::run_grayscale_color(input))
    }

    #[tool(name = "lighten-color", description = "Increases HSL lightness by an amount, 0 to 1.")]
    async fn lighten_color(
        &self,
        Parameters(input): Parameters<AmountInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("lighten-color", || manipulation::run_lighten_color(input))
    }

    #[tool(name = "darken-color", description = "Decreases HSL lightness by an amount, 0 to 1.")]
    async fn darken_color(
        &self,
        Parameters(input): Parameters<AmountInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("darken-color", || manipulation::run_darken_color(input))
    }

    #[tool(name = "set-color-hue", description = "Sets the hue of a color in degrees.")]
    async fn set_color_hue(
        &self,
        Parameters(input): Parameters<HueValueInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("set-color-hue", || manipulation::run_set_color_hue(input))
    }

    #[tool(name = "rotate-color-hue", description = "Rotates the hue of a color by degrees.")]
    async fn rotate_color_hue(
        &self,
        Parameters(input): Parameters<HueRotateInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("rotate-color-hue", || manipulation::run_rotate_color_hue(input))
    }

    #[tool(name = "mix-colors", description = "Mixes two colors in Lab space by a ratio, 0 to 1.")]
    async fn mix_colors(
        &self,
        Parameters(input): Parameters<MixInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("mix-colors", || manipulation::run_mix_colors(input))
    }
}

#[tool_handler]
impl ServerHandler for ChromakitMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().enable_resources().build(),
            server_info: Implementation {
                name: "chromakit-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Chromakit MCP server: describe, compare, adjust and generate colors. \
                 Use get-color-info for a full descriptor, generate-color-scheme for a \
                 role palette and export-color-tokens to turn it into CSS or SCSS."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(list_static_resources()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        read_static_resource(&request.uri).ok_or_else(|| {
            McpError::resource_not_found(format!("Unknown resource: {}", request.uri), None)
        })
    }
}

/// Run the MCP server on stdin/stdout
pub async fn run_server(config: ChromaConfig) -> Result<(), Box<dyn std::error::Error>> {
    let server = ChromakitMcpServer::new(config);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TelemetryConfig;
    use tempfile::TempDir;

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_tool_router_lists_every_tool() {
        let server = ChromakitMcpServer::new(ChromaConfig::default());
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 31);
        assert!(tools.iter().any(|t| t.name == "get-color-info"));
        assert!(tools.iter().any(|t| t.name == "mix-colors"));
    }

    #[test]
    fn test_respond_success_and_error() {
        let server = ChromakitMcpServer::new(ChromaConfig::default());
        let ok = server.respond("is-valid-color", || Ok("{}".to_string())).unwrap();
        assert_ne!(ok.is_error, Some(true));
        assert_eq!(text_of(&ok), "{}");

        let err = server.respond("get-color-hue", || Err("bad color".to_string())).unwrap();
        assert_eq!(err.is_error, Some(true));
        assert_eq!(text_of(&err), "bad color");
    }

    #[test]
    fn test_panics_are_caught_and_logged() {
        let temp = TempDir::new().expect("should create temp dir");
        let log = temp.path().join("errors.jsonl");
        let mut config = ChromaConfig::default();
        config.telemetry = TelemetryConfig { collect_errors: true, error_log: log.clone() };
        let server = ChromakitMcpServer::new(config);

        let result = server.respond("mix-colors", || panic!("boom")).unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "internal error in mix-colors");

        let logged = std::fs::read_to_string(&log).expect("panic should be logged");
        let entry: ErrorEntry = serde_json::from_str(logged.lines().next().unwrap()).unwrap();
        assert_eq!(entry.command, "mix-colors");
        assert_eq!(entry.error_type, "panic");
        assert_eq!(entry.context, "boom");
    }
}
