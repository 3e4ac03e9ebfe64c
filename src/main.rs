// Entry point and CLI flow.
//
// The binary runs one batch: scan the year folders under the input
// directory, consolidate every report it finds into the output directory,
// then print a run summary. Per-file errors are reported and the exit
// status only turns non-zero when errors occurred and nothing was written.
use clap::Parser;
use rust_report::batch::{self, BatchConfig};
use rust_report::output;
use rust_report::util::format_int;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rust_report")]
#[command(about = "Consolidate weekly unit reports from year folders into per-report CSV files")]
struct Cli {
    /// Base input directory containing the year folders
    #[arg(long)]
    input: PathBuf,

    /// Output directory for consolidated CSV files (created if absent)
    #[arg(long)]
    output: PathBuf,

    /// Year folders to scan
    #[arg(long, num_args = 1.., default_values_t = [2024, 2025])]
    years: Vec<i32>,

    /// Print the first N rows of each saved report
    #[arg(long, value_name = "N")]
    preview: Option<usize>,

    /// Write the run summary as pretty JSON
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = BatchConfig {
        input: cli.input,
        output: cli.output,
        years: cli.years,
        preview: cli.preview,
    };

    let report = match batch::run(&cfg) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Batch failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "\nDone: {} files processed, {} reports saved, {} skipped, {} errors.",
        format_int(report.files_processed as i64),
        format_int(report.outputs_written.len() as i64),
        format_int(report.skipped.len() as i64),
        format_int(report.errors.len() as i64)
    );
    if let Some(path) = &cli.summary_json {
        match output::write_json(path, &report) {
            Ok(()) => println!("Run summary written to {}", path.display()),
            Err(e) => eprintln!("Write error: {}", e),
        }
    }

    if !report.errors.is_empty() && report.outputs_written.is_empty() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
