//! # zebra-sender
//!
//! Command-line driver for `zebra-spool`: reads a label file, picks the
//! printer and submits the bytes as one raw job.

pub mod config;
pub mod logger;

use anyhow::{Context, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use zebra_spool::{
    JobReceipt, PrintJobRequest, RawJobSubmitter, Spooler, document_name_for, resolve_soft,
    strip_utf8_bom,
};

/// Send a raw printer-language file (ZPL, EPL...) to a print queue, unmodified
#[derive(Parser, Debug, Clone)]
#[command(name = "zebra-sender", version)]
#[command(about = "Send a raw label file to a print queue", long_about = None)]
pub struct Cli {
    /// Label file sent verbatim (e.g. .zpl)
    pub file: PathBuf,

    /// Print queue name; overrides the config file
    #[arg(short, long, env = "ZEBRA_PRINTER")]
    pub printer: Option<String>,

    /// Config file [default: printer_config.json next to the executable]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Job document name shown in the queue [default: file name]
    #[arg(short, long)]
    pub document: Option<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Configured printer: flag or env first, then the config file
    pub fn configured_printer(&self) -> Option<String> {
        if let Some(name) = self.printer.as_deref().filter(|n| !n.trim().is_empty()) {
            return Some(name.to_string());
        }

        match &self.config {
            Some(path) => config::configured_printer(path),
            None => config::configured_printer_at(config::PrinterConfig::default_path()),
        }
    }
}

/// Run one submission against `spooler`
pub fn send<S: Spooler>(cli: &Cli, spooler: S) -> anyhow::Result<JobReceipt> {
    if !cli.file.is_file() {
        bail!("File not found: {}", cli.file.display());
    }

    let configured = cli.configured_printer();
    let queue = resolve_soft(configured.as_deref(), &spooler);
    if queue.is_none() {
        info!("No printer configured and no system default found yet");
    }

    let data = std::fs::read(&cli.file)
        .with_context(|| format!("Could not read {}", cli.file.display()))?;
    let payload = strip_utf8_bom(&data);

    let document = cli
        .document
        .clone()
        .unwrap_or_else(|| document_name_for(&cli.file));
    let job = PrintJobRequest::new(queue.unwrap_or_default(), document, payload);

    let receipt = RawJobSubmitter::new(spooler).submit(&job)?;
    Ok(receipt)
}
