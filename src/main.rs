use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use hhreport::config::ReportPaths;

#[derive(Parser)]
#[command(
    name = "hhreport",
    version,
    about = "Household financial report generator",
    long_about = "Reads a CSV table of household financial records, normalizes \
                  its numeric columns, and writes a spreadsheet summary, two \
                  charts, and a PDF report to the output directory."
)]
struct Cli {
    /// Path to the household records CSV
    #[arg(long, default_value = "data/transactions.csv")]
    input: PathBuf,

    /// Directory all report artifacts are written to
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ReportPaths::new(cli.input, cli.output_dir);
    hhreport::pipeline::run(&paths)?;

    Ok(())
}
