//! Print job request and receipt

use crate::error::SpoolerError;

/// Document name used when the caller supplies none
pub const DEFAULT_DOCUMENT_NAME: &str = "ZPL Job";

/// One raw job to submit
///
/// An empty `destination_queue` means "resolve the OS default at submit
/// time". Fields are fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJobRequest {
    destination_queue: String,
    document_name: String,
    payload: Vec<u8>,
}

impl PrintJobRequest {
    pub fn new(
        destination_queue: impl Into<String>,
        document_name: impl Into<String>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        let document_name = document_name.into();
        let document_name = if document_name.trim().is_empty() {
            DEFAULT_DOCUMENT_NAME.to_string()
        } else {
            document_name
        };

        Self {
            destination_queue: destination_queue.into(),
            document_name,
            payload: payload.into(),
        }
    }

    pub fn destination_queue(&self) -> &str {
        &self.destination_queue
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReceipt {
    pub queue: String,
    pub document_name: String,
    pub bytes_written: u32,
    /// Cleanup failures that did not affect the outcome
    pub suppressed: Vec<SpoolerError>,
}
