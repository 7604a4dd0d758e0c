//! Printer resolution
//!
//! Chooses the destination queue: a non-blank configured name wins as-is,
//! otherwise the OS default queue. Nothing is cached; every call asks the
//! spooler again.

use crate::error::{PrintError, PrintResult};
use crate::spooler::Spooler;
use tracing::{debug, warn};

fn configured(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.trim().is_empty())
}

/// Resolve without failing; `None` lets the caller defer the decision
pub fn resolve_soft<S: Spooler + ?Sized>(
    configured_name: Option<&str>,
    spooler: &S,
) -> Option<String> {
    if let Some(name) = configured(configured_name) {
        return Some(name.to_string());
    }

    match spooler.default_queue() {
        Ok(Some(name)) if !name.trim().is_empty() => {
            debug!(printer = %name, "Using OS default printer");
            Some(name)
        }
        Ok(_) => {
            debug!("OS reports no default printer");
            None
        }
        Err(e) => {
            warn!(code = e.0, "Default printer query failed");
            None
        }
    }
}

/// Resolve a name the caller can open, or fail with `NoPrinterAvailable`
pub fn resolve_strict<S: Spooler + ?Sized>(
    configured_name: Option<&str>,
    spooler: &S,
) -> PrintResult<String> {
    resolve_soft(configured_name, spooler).ok_or(PrintError::NoPrinterAvailable)
}
