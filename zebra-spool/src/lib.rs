//! # zebra-spool
//!
//! Raw print job submission through the OS print spooler.
//!
//! ## Scope
//!
//! This crate delivers an already-formed device-language payload (ZPL,
//! EPL, ESC/POS...) verbatim as one job with data type `RAW`:
//! - Printer resolution: configured name, else the OS default queue
//! - Handle lifecycle: open → start-document → start-page → write →
//!   end-page → end-document → close, with reverse-order cleanup
//! - Partial-write detection
//!
//! Reading files, config loading and argument parsing stay in the caller.
//!
//! ## Example
//!
//! ```ignore
//! use zebra_spool::{RawJobSubmitter, resolve_soft, system_spooler};
//!
//! let spooler = system_spooler()?;
//! let queue = resolve_soft(Some("Zebra GK420d"), &spooler).unwrap_or_default();
//!
//! let submitter = RawJobSubmitter::new(spooler);
//! submitter.submit_bytes(&queue, "label.zpl", b"^XA^FO50,50^FDHello^FS^XZ")?;
//! ```

mod error;
mod job;
mod payload;
mod resolver;
mod spooler;
mod submitter;

#[cfg(windows)]
mod winspool;

#[cfg(test)]
mod testing;

// Re-exports
pub use error::{PrintError, PrintResult, SpoolerError, SpoolerOp};
pub use job::{DEFAULT_DOCUMENT_NAME, JobReceipt, PrintJobRequest};
pub use payload::{document_name_for, strip_utf8_bom};
pub use resolver::{resolve_soft, resolve_strict};
pub use spooler::{DocInfo, NativeError, RAW_DATATYPE, Spooler, WriteFailure, system_spooler};
pub use submitter::RawJobSubmitter;

#[cfg(not(windows))]
pub use spooler::Unavailable;

#[cfg(windows)]
pub use winspool::{QueueHandle, WinSpooler};
