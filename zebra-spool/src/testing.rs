//! Scripted in-memory spooler for unit tests

use crate::error::SpoolerOp;
use crate::spooler::{DocInfo, NativeError, Spooler, WriteFailure};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Open(String),
    StartDocument { name: String, datatype: String },
    StartPage,
    Write(usize),
    EndPage,
    EndDocument,
    Close,
}

#[derive(Debug, Clone, Copy)]
pub enum WriteScript {
    AcceptAll,
    Accept(u32),
    Fail { code: u32, written: u32 },
}

#[derive(Debug)]
pub struct ScriptedHandle {
    id: u32,
}

#[derive(Debug)]
pub struct ScriptedSpooler {
    default: Option<String>,
    default_failure: Option<u32>,
    failures: HashMap<SpoolerOp, u32>,
    write: WriteScript,
    calls: RefCell<Vec<Call>>,
    open_handles: RefCell<Vec<u32>>,
    next_id: Cell<u32>,
    default_queries: Cell<usize>,
}

impl ScriptedSpooler {
    pub fn new() -> Self {
        Self {
            default: None,
            default_failure: None,
            failures: HashMap::new(),
            write: WriteScript::AcceptAll,
            calls: RefCell::new(Vec::new()),
            open_handles: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            default_queries: Cell::new(0),
        }
    }

    pub fn with_default(mut self, name: &str) -> Self {
        self.default = Some(name.to_string());
        self
    }

    pub fn fail_default_query(mut self, code: u32) -> Self {
        self.default_failure = Some(code);
        self
    }

    pub fn fail(mut self, op: SpoolerOp, code: u32) -> Self {
        self.failures.insert(op, code);
        self
    }

    pub fn write_script(mut self, script: WriteScript) -> Self {
        self.write = script;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn open_handles(&self) -> usize {
        self.open_handles.borrow().len()
    }

    pub fn default_queries(&self) -> usize {
        self.default_queries.get()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn outcome(&self, op: SpoolerOp) -> Result<(), NativeError> {
        match self.failures.get(&op) {
            Some(code) => Err(NativeError(*code)),
            None => Ok(()),
        }
    }
}

impl Spooler for ScriptedSpooler {
    type Handle = ScriptedHandle;

    fn open(&self, queue: &str) -> Result<ScriptedHandle, NativeError> {
        self.record(Call::Open(queue.to_string()));
        self.outcome(SpoolerOp::Open)?;

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.open_handles.borrow_mut().push(id);
        Ok(ScriptedHandle { id })
    }

    fn start_document(&self, _handle: &ScriptedHandle, doc: &DocInfo<'_>) -> Result<(), NativeError> {
        self.record(Call::StartDocument {
            name: doc.name.to_string(),
            datatype: doc.datatype.to_string(),
        });
        self.outcome(SpoolerOp::StartDocument)
    }

    fn start_page(&self, _handle: &ScriptedHandle) -> Result<(), NativeError> {
        self.record(Call::StartPage);
        self.outcome(SpoolerOp::StartPage)
    }

    fn write(&self, _handle: &ScriptedHandle, data: &[u8]) -> Result<u32, WriteFailure> {
        self.record(Call::Write(data.len()));
        match self.write {
            WriteScript::AcceptAll => Ok(data.len() as u32),
            WriteScript::Accept(n) => Ok(n),
            WriteScript::Fail { code, written } => Err(WriteFailure { code, written }),
        }
    }

    fn end_page(&self, _handle: &ScriptedHandle) -> Result<(), NativeError> {
        self.record(Call::EndPage);
        self.outcome(SpoolerOp::EndPage)
    }

    fn end_document(&self, _handle: &ScriptedHandle) -> Result<(), NativeError> {
        self.record(Call::EndDocument);
        self.outcome(SpoolerOp::EndDocument)
    }

    fn close(&self, handle: ScriptedHandle) -> Result<(), NativeError> {
        self.record(Call::Close);
        // The handle is released even when the OS reports a close failure
        self.open_handles.borrow_mut().retain(|id| *id != handle.id);
        self.outcome(SpoolerOp::Close)
    }

    fn default_queue(&self) -> Result<Option<String>, NativeError> {
        self.default_queries.set(self.default_queries.get() + 1);
        match self.default_failure {
            Some(code) => Err(NativeError(code)),
            None => Ok(self.default.clone()),
        }
    }
}
