//! Local error telemetry.
//!
//! Failed requests are appended to a JSONL file when collection is enabled.
//! Records carry the command or tool name, the error kind and message, and
//! the offending input; nothing else about the caller.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::color::ColorError;
use crate::config::TelemetryConfig;

/// One failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// UTC timestamp, `YYYY-MM-DDTHH:MM:SSZ`
    pub timestamp: String,
    /// CLI subcommand or MCP tool name
    pub command: String,
    /// The color query or argument that failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// e.g. "invalid_format", "invalid_argument", "panic"
    pub error_type: String,
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorEntry {
    pub fn new(
        command: impl Into<String>,
        error_type: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: utc_timestamp(),
            command: command.into(),
            input: None,
            error_type: error_type.into(),
            context: context.into(),
            suggestion: None,
        }
    }

    /// Entry for a color validation failure, with a matching hint.
    pub fn from_color_error(command: impl Into<String>, err: &ColorError) -> Self {
        let (kind, hint) = match err {
            ColorError::InvalidFormat(_) => {
                ("invalid_format", Some("Use #RRGGBB, rgb(), hsl(), hsv(), cmyk() or a color name"))
            }
            ColorError::OutOfRange(_) => ("out_of_range", None),
            ColorError::MissingRepresentation => {
                ("missing_representation", Some("Pass one of hex, rgb, hsl, hsv or cmyk"))
            }
            ColorError::InvalidArgument(_) => ("invalid_argument", None),
        };
        let entry = Self::new(command, kind, err.to_string());
        match hint {
            Some(h) => entry.with_suggestion(h),
            None => entry,
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Current UTC time as an ISO 8601 string with second precision.
fn utc_timestamp() -> String {
    let secs = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format_timestamp(secs)
}

fn format_timestamp(epoch_secs: u64) -> String {
    let days = (epoch_secs / 86_400) as i64;
    let rem = epoch_secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60
    )
}

/// Proleptic Gregorian date for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Appends [`ErrorEntry`] records to a JSONL file.
#[derive(Debug, Clone)]
pub struct ErrorCollector {
    path: PathBuf,
    enabled: bool,
}

impl ErrorCollector {
    pub fn new(path: impl AsRef<Path>, enabled: bool) -> Self {
        Self { path: path.as_ref().to_path_buf(), enabled }
    }

    pub fn from_config(config: &TelemetryConfig) -> Self {
        Self::new(&config.error_log, config.collect_errors)
    }

    /// A collector that never writes.
    pub fn disabled() -> Self {
        Self::new(PathBuf::new(), false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record. A no-op while disabled.
    pub fn log(&self, entry: &ErrorEntry) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    /// Log and report write failures on stderr instead of returning them.
    pub fn record(&self, entry: &ErrorEntry) {
        if let Err(e) = self.log(entry) {
            eprintln!("Warning: could not write {}: {}", self.path.display(), e);
        }
    }
}
