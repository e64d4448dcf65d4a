//! Bill Splitter CLI
//!
//! Replays a CSV of entries into a ledger, prints the summary grid as CSV
//! and optionally exports it as an `.xlsx` workbook.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- entries.csv > summary.csv
//! cargo run -- entries.csv out/   # also writes out/BillSummary.xlsx
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bill_splitter::{
    build_summary_grid, export_summary, BillError, ExportOptions, Result, Session, XlsxEncoder,
};
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(BillError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut session = Session::new();
    session.process_csv(reader)?;
    let ledger = session.into_ledger();

    let stdout = io::stdout();
    let handle = stdout.lock();
    build_summary_grid(&ledger).write_csv(handle)?;

    if let Some(output_dir) = args.get(2) {
        let path = export_summary(
            &ledger,
            &XlsxEncoder,
            &ExportOptions::default(),
            Path::new(output_dir),
        )?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
