//! Windows print spooler binding (winspool)
//!
//! Thin wrapper over the Win32 printing API. Each call maps one-to-one onto
//! a [`Spooler`] method and reports `GetLastError` on failure.

use crate::spooler::{DocInfo, NativeError, Spooler, WriteFailure};
use core::ffi::c_void;
use windows::Win32::Foundation::GetLastError;
use windows::Win32::Graphics::Printing::{
    ClosePrinter, DOC_INFO_1W, EndDocPrinter, EndPagePrinter, GetDefaultPrinterW, OpenPrinterW,
    PRINTER_HANDLE, StartDocPrinterW, StartPagePrinter, WritePrinter,
};
use windows::core::{PCWSTR, PWSTR};

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn last_error() -> NativeError {
    NativeError(unsafe { GetLastError().0 })
}

/// Win32 code carried by a `windows::core::Error`
fn native_code(error: &windows::core::Error) -> NativeError {
    let hr = error.code().0 as u32;
    // HRESULT_FROM_WIN32 wraps the code in facility 7
    if hr & 0xFFFF_0000 == 0x8007_0000 {
        NativeError(hr & 0xFFFF)
    } else {
        NativeError(hr)
    }
}

/// Open printer handle, owned by one submission
pub struct QueueHandle(PRINTER_HANDLE);

/// The local Windows print spooler
#[derive(Debug, Default)]
pub struct WinSpooler;

impl WinSpooler {
    pub fn new() -> Self {
        Self
    }
}

impl Spooler for WinSpooler {
    type Handle = QueueHandle;

    fn open(&self, queue: &str) -> Result<QueueHandle, NativeError> {
        let mut handle = PRINTER_HANDLE::default();
        let name_w = to_wide(queue);

        unsafe { OpenPrinterW(PCWSTR::from_raw(name_w.as_ptr()), &mut handle, None) }
            .map_err(|e| native_code(&e))?;

        Ok(QueueHandle(handle))
    }

    fn start_document(&self, handle: &QueueHandle, doc: &DocInfo<'_>) -> Result<(), NativeError> {
        let doc_name_w = to_wide(doc.name);
        let datatype_w = to_wide(doc.datatype);
        let doc_info = DOC_INFO_1W {
            pDocName: PWSTR(doc_name_w.as_ptr() as *mut _),
            pOutputFile: PWSTR::null(),
            pDatatype: PWSTR(datatype_w.as_ptr() as *mut _),
        };

        let job_id = unsafe { StartDocPrinterW(handle.0, 1, &doc_info as *const DOC_INFO_1W) };
        if job_id == 0 {
            return Err(last_error());
        }
        Ok(())
    }

    fn start_page(&self, handle: &QueueHandle) -> Result<(), NativeError> {
        if unsafe { StartPagePrinter(handle.0) }.as_bool() {
            Ok(())
        } else {
            Err(last_error())
        }
    }

    fn write(&self, handle: &QueueHandle, data: &[u8]) -> Result<u32, WriteFailure> {
        let len = u32::try_from(data.len()).map_err(|_| WriteFailure {
            // ERROR_ARITHMETIC_OVERFLOW
            code: 534,
            written: 0,
        })?;

        let mut written: u32 = 0;
        let ok = unsafe { WritePrinter(handle.0, data.as_ptr() as *const c_void, len, &mut written) };

        if ok.as_bool() {
            Ok(written)
        } else {
            Err(WriteFailure {
                code: last_error().0,
                written,
            })
        }
    }

    fn end_page(&self, handle: &QueueHandle) -> Result<(), NativeError> {
        if unsafe { EndPagePrinter(handle.0) }.as_bool() {
            Ok(())
        } else {
            Err(last_error())
        }
    }

    fn end_document(&self, handle: &QueueHandle) -> Result<(), NativeError> {
        if unsafe { EndDocPrinter(handle.0) }.as_bool() {
            Ok(())
        } else {
            Err(last_error())
        }
    }

    fn close(&self, handle: QueueHandle) -> Result<(), NativeError> {
        unsafe { ClosePrinter(handle.0) }.map_err(|e| native_code(&e))
    }

    fn default_queue(&self) -> Result<Option<String>, NativeError> {
        unsafe {
            let mut needed: u32 = 0;
            let _ = GetDefaultPrinterW(None, &mut needed);

            if needed == 0 {
                return Ok(None);
            }

            let mut buf: Vec<u16> = vec![0; needed as usize];
            if !GetDefaultPrinterW(Some(PWSTR(buf.as_mut_ptr())), &mut needed).as_bool() {
                return Err(last_error());
            }

            // ERROR_NO_UNICODE_TRANSLATION
            let name = PWSTR(buf.as_mut_ptr())
                .to_string()
                .map_err(|_| NativeError(1113))?;

            Ok(Some(name))
        }
    }
}
