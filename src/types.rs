use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// One cell of a source sheet in long form: the value an indicator took for
/// one unit in one week. Values are already normalized to integers by the
/// extractor, so a `WeekRecord` never carries raw text.
#[derive(Debug, Clone)]
pub struct WeekRecord {
    pub unit: String,
    pub indicator: String,
    pub week: u32,
    pub value: i64,
}

/// One pivoted and enriched output row: a single (unit, week) pair with all
/// indicator values for that pair plus the derived calendar and region fields.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub region: Option<&'static str>,
    pub unit: String,
    pub week: u32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    /// Indicator name -> value. Every indicator seen anywhere in the source
    /// file is present here, missing values filled with 0.
    pub values: HashMap<String, i64>,
}

/// The pivoted table for one workbook (one report, one year).
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub year: i32,
    /// Indicator column names in output order (lexicographic).
    pub indicators: Vec<String>,
    /// Rows sorted by (unit, week) ascending.
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A per-file failure captured during a batch run. Failures are recorded and
/// reported instead of aborting the remaining files.
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub path: String,
    pub message: String,
}

/// Summary of one batch run, printed to the console and optionally written
/// as JSON.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub files_processed: usize,
    pub outputs_written: Vec<String>,
    pub skipped: Vec<String>,
    pub errors: Vec<FileError>,
}
