//! Shift Report CLI Application
//!
//! Command-line front end for the shift report parser. It uses the
//! shift-report-parser library and adds:
//! - File path handling (argument or interactive prompt)
//! - Text summary output (or JSON via --json)
//! - Styled Excel workbook generation
//! - Output artifact naming from machine id and date range

use anyhow::Result;
use clap::Parser;
use shift_report_parser::ReportScanner;
use std::io::{self, Write};
use std::path::PathBuf;

mod excel;
mod report;

/// Shift Report Analyzer - Summarize machine shift production reports
#[derive(Parser, Debug)]
#[command(name = "shift-report-cli")]
#[command(about = "Aggregate shift production reports by month", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the shift report text file (prompted for if omitted)
    #[arg(value_name = "FILE")]
    report: Option<PathBuf>,

    /// Directory for the generated Excel workbook (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Print the aggregate as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Shift Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using parser library v{}", shift_report_parser::VERSION);

    let path = match &args.report {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };

    if !path.is_file() {
        println!("File not found: {}", path.display());
        return Ok(());
    }

    let scanner = ReportScanner::new();
    let result = scanner.parse_file(&path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report::render_text(&result));
    }

    let filename = excel::workbook_filename(&result);
    let output_path = match &args.output_dir {
        Some(dir) => dir.join(&filename),
        None => PathBuf::from(&filename),
    };

    let mut workbook = excel::build_workbook(&result)?;
    workbook.save(&output_path)?;
    println!("Excel report generated: {}", output_path.display());

    Ok(())
}

/// Ask for the report path interactively when no argument was given
fn prompt_for_path() -> Result<PathBuf> {
    print!("Please enter the path to the text file: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(PathBuf::from(input.trim()))
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
