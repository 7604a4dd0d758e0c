//! Print-spooler service seam
//!
//! [`Spooler`] is the native collaborator the submitter drives. The Windows
//! implementation lives in `winspool`; tests substitute a scripted one.

use crate::error::PrintResult;

/// Data type declared for every job. Anything else lets the driver
/// reinterpret the device-language bytes.
pub const RAW_DATATYPE: &str = "RAW";

/// Native error code reported by the OS (Win32 `GetLastError`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeError(pub u32);

/// A write call the OS reported as failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFailure {
    pub code: u32,
    /// Bytes the OS claims it accepted before failing
    pub written: u32,
}

/// Document description passed to start-document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocInfo<'a> {
    pub name: &'a str,
    pub datatype: &'a str,
}

impl<'a> DocInfo<'a> {
    /// Describe a raw job. The data type is fixed.
    pub fn raw(name: &'a str) -> Self {
        Self {
            name,
            datatype: RAW_DATATYPE,
        }
    }
}

/// OS print-spooler operations
///
/// `Handle` is exclusively owned by whoever opened it. It is neither `Clone`
/// nor default-constructible, and `close` consumes it, so a handle cannot be
/// closed twice or used after close.
pub trait Spooler {
    type Handle;

    fn open(&self, queue: &str) -> Result<Self::Handle, NativeError>;

    fn start_document(&self, handle: &Self::Handle, doc: &DocInfo<'_>) -> Result<(), NativeError>;

    fn start_page(&self, handle: &Self::Handle) -> Result<(), NativeError>;

    /// Write the whole buffer in one call, returning the bytes accepted
    fn write(&self, handle: &Self::Handle, data: &[u8]) -> Result<u32, WriteFailure>;

    fn end_page(&self, handle: &Self::Handle) -> Result<(), NativeError>;

    fn end_document(&self, handle: &Self::Handle) -> Result<(), NativeError>;

    fn close(&self, handle: Self::Handle) -> Result<(), NativeError>;

    /// Currently registered default queue, `None` when the OS has none
    fn default_queue(&self) -> Result<Option<String>, NativeError>;
}

impl<S: Spooler + ?Sized> Spooler for &S {
    type Handle = S::Handle;

    fn open(&self, queue: &str) -> Result<Self::Handle, NativeError> {
        (**self).open(queue)
    }

    fn start_document(&self, handle: &Self::Handle, doc: &DocInfo<'_>) -> Result<(), NativeError> {
        (**self).start_document(handle, doc)
    }

    fn start_page(&self, handle: &Self::Handle) -> Result<(), NativeError> {
        (**self).start_page(handle)
    }

    fn write(&self, handle: &Self::Handle, data: &[u8]) -> Result<u32, WriteFailure> {
        (**self).write(handle, data)
    }

    fn end_page(&self, handle: &Self::Handle) -> Result<(), NativeError> {
        (**self).end_page(handle)
    }

    fn end_document(&self, handle: &Self::Handle) -> Result<(), NativeError> {
        (**self).end_document(handle)
    }

    fn close(&self, handle: Self::Handle) -> Result<(), NativeError> {
        (**self).close(handle)
    }

    fn default_queue(&self) -> Result<Option<String>, NativeError> {
        (**self).default_queue()
    }
}

/// The host's spooler service
#[cfg(windows)]
pub fn system_spooler() -> PrintResult<crate::winspool::WinSpooler> {
    Ok(crate::winspool::WinSpooler::new())
}

/// The host's spooler service
#[cfg(not(windows))]
pub fn system_spooler() -> PrintResult<Unavailable> {
    Err(crate::error::PrintError::Unsupported(
        "raw spooler printing requires the Windows print spooler".to_string(),
    ))
}

/// Placeholder spooler type on platforms without a native binding
#[cfg(not(windows))]
#[derive(Debug)]
pub enum Unavailable {}

#[cfg(not(windows))]
impl Spooler for Unavailable {
    type Handle = std::convert::Infallible;

    fn open(&self, _queue: &str) -> Result<Self::Handle, NativeError> {
        match *self {}
    }

    fn start_document(&self, _handle: &Self::Handle, _doc: &DocInfo<'_>) -> Result<(), NativeError> {
        match *self {}
    }

    fn start_page(&self, _handle: &Self::Handle) -> Result<(), NativeError> {
        match *self {}
    }

    fn write(&self, _handle: &Self::Handle, _data: &[u8]) -> Result<u32, WriteFailure> {
        match *self {}
    }

    fn end_page(&self, _handle: &Self::Handle) -> Result<(), NativeError> {
        match *self {}
    }

    fn end_document(&self, _handle: &Self::Handle) -> Result<(), NativeError> {
        match *self {}
    }

    fn close(&self, _handle: Self::Handle) -> Result<(), NativeError> {
        match *self {}
    }

    fn default_queue(&self) -> Result<Option<String>, NativeError> {
        match *self {}
    }
}
