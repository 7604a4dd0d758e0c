//! Error types for raw job submission

use std::fmt;
use thiserror::Error;

/// Spooler lifecycle step that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpoolerOp {
    Open,
    StartDocument,
    StartPage,
    Write,
    EndPage,
    EndDocument,
    Close,
}

impl SpoolerOp {
    /// Stable operation name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::StartDocument => "start-document",
            Self::StartPage => "start-page",
            Self::Write => "write",
            Self::EndPage => "end-page",
            Self::EndDocument => "end-document",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for SpoolerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single native spooler call
///
/// `suppressed` carries the cleanup failures hit while unwinding after this
/// error. They are informational only; this error is the one reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpoolerError {
    operation: SpoolerOp,
    native_code: u32,
    context: Option<String>,
    suppressed: Vec<SpoolerError>,
}

impl SpoolerError {
    pub fn new(operation: SpoolerOp, native_code: u32) -> Self {
        Self {
            operation,
            native_code,
            context: None,
            suppressed: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub(crate) fn with_suppressed(mut self, suppressed: Vec<SpoolerError>) -> Self {
        self.suppressed = suppressed;
        self
    }

    /// OS accepted the write call but consumed fewer bytes than offered
    pub(crate) fn partial_write(written: u32, total: usize) -> Self {
        Self::new(SpoolerOp::Write, 0).with_context(format!("partial: {}/{}", written, total))
    }

    pub fn operation(&self) -> SpoolerOp {
        self.operation
    }

    pub fn native_code(&self) -> u32 {
        self.native_code
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn suppressed(&self) -> &[SpoolerError] {
        &self.suppressed
    }

    pub fn is_partial_write(&self) -> bool {
        self.operation == SpoolerOp::Write
            && self
                .context
                .as_deref()
                .is_some_and(|c| c.starts_with("partial:"))
    }
}

impl fmt::Display for SpoolerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed (native error {})",
            self.operation, self.native_code
        )?;
        if let Some(context) = &self.context {
            write!(f, ": {}", context)?;
        }
        Ok(())
    }
}

impl std::error::Error for SpoolerError {}

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Neither a configured name nor an OS default queue was available
    #[error("No printer specified and no default printer is set")]
    NoPrinterAvailable,

    /// A native spooler call failed
    #[error("Spooler {0}")]
    Spooler(#[from] SpoolerError),

    /// No native spooler on this platform
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl PrintError {
    /// The spooler failure behind this error, if any
    pub fn as_spooler(&self) -> Option<&SpoolerError> {
        match self {
            Self::Spooler(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
