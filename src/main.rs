//! Dumps a JSON result document row by row.
//!
//! Each row is printed as one tab-separated line of string forms, `NULL` for
//! null cells.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use rowbind::load::ResultDocument;
use rowbind::range::RangeIterator;
use rowbind::settings::AdapterConfig;
use rowbind::Result;

#[derive(Parser, Debug)]
#[command(name = "rowbind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Result document to read
    file: PathBuf,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<String>,

    /// Rows to skip before printing
    #[arg(short, long, default_value_t = 0)]
    skip: u64,

    /// Comma separated columns to print, in order (default: all)
    #[arg(long, value_delimiter = ',')]
    columns: Option<Vec<String>>,
}

fn run(cli: Cli) -> Result<()> {
    let config = AdapterConfig::load(cli.config.as_deref())?;
    let json = std::fs::read_to_string(&cli.file)?;
    let result = ResultDocument::from_json(&json)?.into_result(&config)?;
    let columns = cli.columns.unwrap_or_else(|| result.column_names().to_vec());

    let mut rows = result.rows();
    rows.skip_ahead(cli.skip)?;
    println!("{}", columns.join("\t"));
    while rows.has_next() {
        let row = rows.next_row()?;
        let mut cells = Vec::with_capacity(columns.len());
        for column in &columns {
            let cell = row.value(column)?.map(|v| v.string());
            cells.push(cell.unwrap_or_else(|| "NULL".to_owned()));
        }
        println!("{}", cells.join("\t"));
    }
    info!(printed = rows.consumed() - cli.skip, size = rows.size(), "result dumped");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rowbind=info,warn".into()),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "rowbind failed");
            ExitCode::FAILURE
        }
    }
}
