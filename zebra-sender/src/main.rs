use clap::Parser;
use std::process::ExitCode;
use zebra_sender::{Cli, logger, send};
use zebra_spool::system_spooler;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.log_level.as_deref());

    let result = system_spooler()
        .map_err(anyhow::Error::from)
        .and_then(|spooler| send(&cli, spooler));

    match result {
        Ok(receipt) => {
            tracing::debug!(printer = %receipt.queue, bytes = receipt.bytes_written, "done");
            println!("Label sent successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
