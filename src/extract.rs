// Sheet extraction: workbook -> long-form week records.
//
// Each eligible sheet is reduced to one record per (marker row, week column)
// cell. Sheets on the skip-list, sheets without the marker column and sheets
// without week columns all contribute nothing; an empty result means "no
// data in this workbook", not a failure.
use crate::types::WeekRecord;
use crate::util::cell_to_int;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::error::Error;
use std::path::Path;

/// Sheets holding monthly summaries or the cross-unit aggregate rather than
/// per-unit weekly data. Matched case-insensitively against the sheet name.
const SKIP_SHEETS: &[&str] = &["звіт", "звіти по місяцям", "звіт по місяцям", "дорд"];

/// The marker column: its header cell is blank and its data cells carry the
/// canonical indicator names. Rows with no marker value are layout filler
/// (section headings, spacer rows) and are dropped.
const MARKER_COL: u32 = 66;

/// Read one workbook and extract week records from every eligible sheet, in
/// workbook sheet order. Unreadable files or sheets propagate an error; a
/// workbook where no sheet qualifies yields an empty vector.
pub fn extract_workbook(path: &Path) -> Result<Vec<WeekRecord>, Box<dyn Error>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let mut records = Vec::new();
    for sheet in workbook.sheet_names() {
        if SKIP_SHEETS.contains(&sheet.to_lowercase().as_str()) {
            continue;
        }
        let range = workbook.worksheet_range(&sheet)?;
        extract_sheet(&sheet, &range, &mut records);
    }
    Ok(records)
}

/// Extract records from a single sheet into `out`. The sheet is silently
/// skipped when it lacks the marker column or has no week columns.
pub fn extract_sheet(name: &str, range: &Range<Data>, out: &mut Vec<WeekRecord>) {
    let (Some((top, left)), Some((bottom, right))) = (range.start(), range.end()) else {
        return;
    };
    // The marker column must exist and must be unnamed in the header row.
    if right < MARKER_COL || !is_blank(range.get_value((top, MARKER_COL))) {
        return;
    }
    let week_cols: Vec<(u32, u32)> = (left..=right)
        .filter_map(|col| week_header(range.get_value((top, col))).map(|w| (col, w)))
        .collect();
    if week_cols.is_empty() {
        return;
    }

    let unit = name.trim();
    for row in (top + 1)..=bottom {
        let Some(marker) = range.get_value((row, MARKER_COL)) else {
            continue;
        };
        if matches!(marker, Data::Empty) {
            continue;
        }
        let indicator = marker.to_string();
        for &(col, week) in &week_cols {
            let value = range.get_value((row, col)).map(cell_to_int).unwrap_or(0);
            out.push(WeekRecord {
                unit: unit.to_string(),
                indicator: indicator.clone(),
                week,
                value,
            });
        }
    }
}

// A header cell with any content, even whitespace, names the column and
// disqualifies it as the marker column.
fn is_blank(cell: Option<&Data>) -> bool {
    matches!(cell, None | Some(Data::Empty))
}

/// A header cell marks a week column when it is numeric and its truncated
/// value falls in [1, 52].
fn week_header(cell: Option<&Data>) -> Option<u32> {
    let w = match cell? {
        Data::Int(n) => *n,
        Data::Float(f) if f.is_finite() => f.trunc() as i64,
        _ => return None,
    };
    (1..=52).contains(&w).then_some(w as u32)
}
