// Batch orchestration: scan year folders, group workbooks by base report
// name, run the per-file pipeline and write one consolidated CSV per report.
//
// Per-file failures (unreadable workbooks, missing year folders) are
// captured into the run report and processing continues; only failures that
// precede any file work (e.g. the output directory cannot be created) abort
// the run.
use crate::extract::extract_workbook;
use crate::output::{indicator_union, preview_report, write_report_csv};
use crate::reshape::build_report;
use crate::types::{FileError, ReportTable, RunReport};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BatchConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub years: Vec<i32>,
    /// Print the first N rows of each saved report to the console.
    pub preview: Option<usize>,
}

/// Run the whole batch and return its summary.
pub fn run(cfg: &BatchConfig) -> Result<RunReport, Box<dyn Error>> {
    fs::create_dir_all(&cfg.output)?;
    let mut report = RunReport::default();
    let groups = collect_file_groups(cfg, &mut report);

    for (base_name, files_by_year) in groups {
        let mut tables: Vec<ReportTable> = Vec::new();
        // Ascending year order; output is a concatenation, so order matters.
        for (year, path) in files_by_year {
            println!("Processing: {}", path.display());
            report.files_processed += 1;
            match process_file(&path, year) {
                Ok(table) if table.is_empty() => {}
                Ok(table) => tables.push(table),
                Err(e) => {
                    eprintln!("Error in {}: {}", path.display(), e);
                    report.errors.push(FileError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        if tables.is_empty() {
            println!("Skipped (no data): {}", base_name);
            report.skipped.push(base_name);
            continue;
        }
        let indicators = indicator_union(&tables);
        let out_path = cfg.output.join(format!("{}.csv", base_name));
        match write_report_csv(&out_path, &tables, &indicators) {
            Ok(()) => {
                println!("Saved: {}", out_path.display());
                if let Some(n) = cfg.preview {
                    preview_report(&tables, &indicators, n);
                }
                report.outputs_written.push(out_path.display().to_string());
            }
            Err(e) => {
                eprintln!("Error writing {}: {}", out_path.display(), e);
                report.errors.push(FileError {
                    path: out_path.display().to_string(),
                    message: e.to_string(),
                });
            }
        }
    }
    Ok(report)
}

fn process_file(path: &Path, year: i32) -> Result<ReportTable, Box<dyn Error>> {
    let records = extract_workbook(path)?;
    build_report(records, year)
}

/// Scan the year folders and group workbook paths by base report name:
/// `{base_name: {year: path}}`. A missing or unreadable year folder is
/// captured as an error, not a crash.
fn collect_file_groups(
    cfg: &BatchConfig,
    report: &mut RunReport,
) -> BTreeMap<String, BTreeMap<i32, PathBuf>> {
    let mut groups: BTreeMap<String, BTreeMap<i32, PathBuf>> = BTreeMap::new();
    let mut years = cfg.years.clone();
    years.sort_unstable();
    for year in years {
        let folder = cfg.input.join(year.to_string());
        let entries = match fs::read_dir(&folder) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("Error reading {}: {}", folder.display(), e);
                report.errors.push(FileError {
                    path: folder.display().to_string(),
                    message: e.to_string(),
                });
                continue;
            }
        };
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "xlsx"))
            .collect();
        paths.sort();
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            groups
                .entry(base_name(stem, year))
                .or_default()
                .insert(year, path);
        }
    }
    groups
}

/// Strip the year substring from a file stem and trim the surrounding
/// separators, so "Наркотики_2024" and "Наркотики_2025" group under one
/// base name. Interior separators survive.
pub fn base_name(stem: &str, year: i32) -> String {
    stem.replace(&year.to_string(), "")
        .trim_matches(|c| c == ' ' || c == '_' || c == '-')
        .to_string()
}
