//! Raw job submission
//!
//! Drives one job through the spooler handle lifecycle:
//!
//! open → start-document → start-page → write → end-page → end-document → close
//!
//! Every phase that was entered is left again in reverse order, whatever
//! happened in between. The first failure is the one reported; failures of
//! the ending steps are logged and attached to the result as `suppressed`.

use crate::error::{PrintResult, SpoolerError, SpoolerOp};
use crate::job::{JobReceipt, PrintJobRequest};
use crate::resolver::resolve_strict;
use crate::spooler::{DocInfo, Spooler};
use tracing::{debug, error, info, instrument, warn};

// ERROR_INVALID_HANDLE
const INVALID_HANDLE: u32 = 6;

/// Lifecycle phase nested inside an open handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Document,
    Page,
}

impl Phase {
    fn ending_op(self) -> SpoolerOp {
        match self {
            Self::Document => SpoolerOp::EndDocument,
            Self::Page => SpoolerOp::EndPage,
        }
    }
}

/// One open handle plus the stack of phases entered on it
///
/// Dropping a session unwinds whatever is still open, so the handle is
/// released on every exit path.
struct Session<'s, S: Spooler> {
    spooler: &'s S,
    handle: Option<S::Handle>,
    phases: Vec<Phase>,
}

impl<'s, S: Spooler> Session<'s, S> {
    fn open(spooler: &'s S, queue: &str) -> Result<Self, SpoolerError> {
        let handle = spooler
            .open(queue)
            .map_err(|e| SpoolerError::new(SpoolerOp::Open, e.0))?;
        debug!("Queue opened");

        Ok(Self {
            spooler,
            handle: Some(handle),
            phases: Vec::new(),
        })
    }

    fn handle(&self, op: SpoolerOp) -> Result<&S::Handle, SpoolerError> {
        self.handle
            .as_ref()
            .ok_or_else(|| SpoolerError::new(op, INVALID_HANDLE))
    }

    fn start_document(&mut self, doc: &DocInfo<'_>) -> Result<(), SpoolerError> {
        let handle = self.handle(SpoolerOp::StartDocument)?;
        self.spooler
            .start_document(handle, doc)
            .map_err(|e| SpoolerError::new(SpoolerOp::StartDocument, e.0))?;
        self.phases.push(Phase::Document);
        debug!(datatype = doc.datatype, "Document started");
        Ok(())
    }

    fn start_page(&mut self) -> Result<(), SpoolerError> {
        let handle = self.handle(SpoolerOp::StartPage)?;
        self.spooler
            .start_page(handle)
            .map_err(|e| SpoolerError::new(SpoolerOp::StartPage, e.0))?;
        self.phases.push(Phase::Page);
        debug!("Page started");
        Ok(())
    }

    /// Write the whole payload once. Anything short of a full write fails.
    fn write(&self, data: &[u8]) -> Result<u32, SpoolerError> {
        let handle = self.handle(SpoolerOp::Write)?;
        let total = data.len();

        match self.spooler.write(handle, data) {
            Ok(written) if written as usize == total => {
                debug!(written, "Payload written");
                Ok(written)
            }
            Ok(written) => Err(SpoolerError::partial_write(written, total)),
            Err(failure) => Err(SpoolerError::new(SpoolerOp::Write, failure.code)
                .with_context(format!("{}/{}", failure.written, total))),
        }
    }

    /// Leave every entered phase in reverse order, then close the handle
    ///
    /// Returns the failures of the ending steps; none of them stop the unwind.
    fn unwind(&mut self) -> Vec<SpoolerError> {
        let mut failures = Vec::new();
        let Some(handle) = self.handle.take() else {
            return failures;
        };

        while let Some(phase) = self.phases.pop() {
            let op = phase.ending_op();
            let result = match phase {
                Phase::Page => self.spooler.end_page(&handle),
                Phase::Document => self.spooler.end_document(&handle),
            };
            match result {
                Ok(()) => debug!(op = %op, "Cleanup step done"),
                Err(e) => {
                    warn!(op = %op, code = e.0, "Cleanup step failed");
                    failures.push(SpoolerError::new(op, e.0));
                }
            }
        }

        match self.spooler.close(handle) {
            Ok(()) => debug!("Queue closed"),
            Err(e) => {
                warn!(code = e.0, "Closing queue failed");
                failures.push(SpoolerError::new(SpoolerOp::Close, e.0));
            }
        }

        failures
    }

    fn close(mut self) -> Vec<SpoolerError> {
        self.unwind()
    }
}

impl<S: Spooler> Drop for Session<'_, S> {
    fn drop(&mut self) {
        let _ = self.unwind();
    }
}

/// Submits raw device-language payloads as single spooler jobs
///
/// Holds no state between submissions; two calls with identical arguments
/// produce two independent jobs.
#[derive(Debug, Clone, Default)]
pub struct RawJobSubmitter<S> {
    spooler: S,
}

impl<S: Spooler> RawJobSubmitter<S> {
    pub fn new(spooler: S) -> Self {
        Self { spooler }
    }

    /// Submit `payload` to `queue` as one RAW job
    pub fn submit_bytes(
        &self,
        queue: &str,
        document_name: &str,
        payload: &[u8],
    ) -> PrintResult<JobReceipt> {
        self.submit(&PrintJobRequest::new(queue, document_name, payload))
    }

    /// Submit a job, resolving the OS default queue when none is named
    #[instrument(
        skip(self, job),
        fields(
            queue = job.destination_queue(),
            document = job.document_name(),
            bytes = job.payload().len()
        )
    )]
    pub fn submit(&self, job: &PrintJobRequest) -> PrintResult<JobReceipt> {
        let queue = if job.destination_queue().trim().is_empty() {
            resolve_strict(None, &self.spooler)
                .inspect_err(|e| error!(error = %e, "No queue to submit to"))?
        } else {
            job.destination_queue().to_string()
        };

        let mut session = Session::open(&self.spooler, &queue).inspect_err(|e| {
            error!(printer = %queue, error = %e, "Could not open printer");
        })?;

        let outcome = Self::transfer(&mut session, job);
        let suppressed = session.close();

        match outcome {
            Ok(bytes_written) => {
                info!(printer = %queue, bytes_written, "Print job sent");
                Ok(JobReceipt {
                    queue,
                    document_name: job.document_name().to_string(),
                    bytes_written,
                    suppressed,
                })
            }
            Err(e) => {
                error!(printer = %queue, error = %e, "Print job failed");
                Err(e.with_suppressed(suppressed).into())
            }
        }
    }

    fn transfer(
        session: &mut Session<'_, S>,
        job: &PrintJobRequest,
    ) -> Result<u32, SpoolerError> {
        session.start_document(&DocInfo::raw(job.document_name()))?;
        session.start_page()?;
        session.write(job.payload())
    }
}
