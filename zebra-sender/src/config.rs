//! Printer configuration file (`printer_config.json`)
//!
//! ```json
//! { "printerName": "Zebra GK420d" }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// File looked up next to the executable when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "printer_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterConfig {
    /// Destination queue; blank means "use the system default"
    #[serde(default)]
    pub printer_name: Option<String>,
}

impl PrinterConfig {
    /// Load from file; a missing file yields the default (empty) config
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            // Notepad saves UTF-8 with a byte-order mark
            let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Configured queue name, if present and non-blank
    pub fn printer_name(&self) -> Option<&str> {
        self.printer_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// `printer_config.json` beside the running executable
    pub fn default_path() -> std::io::Result<PathBuf> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(CONFIG_FILE_NAME))
    }
}

/// Configured printer from a config location that may not be known
///
/// A location that cannot be determined is one more reason to fall back to
/// the system default.
pub fn configured_printer_at(path: std::io::Result<PathBuf>) -> Option<String> {
    match path {
        Ok(path) => configured_printer(&path),
        Err(e) => {
            warn!(error = %e, "Could not locate config file, using system default printer");
            None
        }
    }
}

/// Configured printer name from `path`, or `None` to fall back to the
/// system default. Config problems are reported but never fatal.
pub fn configured_printer(path: &Path) -> Option<String> {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using system default printer");
        return None;
    }

    match PrinterConfig::load(path) {
        Ok(config) => match config.printer_name() {
            Some(name) => Some(name.to_string()),
            None => {
                info!("'printerName' missing in config, using system default printer");
                None
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config, using system default printer");
            None
        }
    }
}
