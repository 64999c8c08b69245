//! Theater Billing CLI
//!
//! Reads a play catalog and a list of invoices, then prints one statement per
//! invoice in the requested format.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --plays json/plays.json --invoices json/invoices.json --format html
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::Parser;
use log::warn;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use theater_billing::{DataSource, JsonFileSource, OutputFormat, Result, StatementDataBuilder};

#[derive(Parser, Debug)]
#[command(name = "statement", version, about = "Print billing statements for theater invoices")]
struct Cli {
    /// Play catalog (JSON object keyed by play id)
    #[arg(long, default_value = "json/plays.json")]
    plays: PathBuf,

    /// Invoices (JSON array)
    #[arg(long, default_value = "json/invoices.json")]
    invoices: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip invoices that reference unknown plays or genres instead of stopping
    #[arg(long)]
    skip_invalid: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = JsonFileSource::new(&cli.plays, &cli.invoices);
    let catalog = source.plays()?;
    let invoices = source.invoices()?;

    let builder = StatementDataBuilder::new();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let mut first = true;
    for invoice in &invoices {
        let data = match builder.build(invoice, &catalog) {
            Ok(data) => data,
            Err(e) if cli.skip_invalid && e.is_data_error() => {
                warn!("Skipping invoice for {}: {}", invoice.customer, e);
                continue;
            }
            Err(e) => return Err(e),
        };

        if !first {
            writeln!(handle)?;
        }
        first = false;
        handle.write_all(cli.format.render(&data)?.as_bytes())?;
    }

    handle.flush()?;
    Ok(())
}
