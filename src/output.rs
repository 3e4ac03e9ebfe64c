// Output writing: consolidated CSV files, JSON run summaries and console
// table previews.
use crate::types::{ReportRow, ReportTable};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Fixed leading columns of every output file; indicator columns follow,
/// with the year closing the row. The labels and their order are the
/// contract consumed by the downstream dashboards.
pub const LEAD_COLUMNS: [&str; 5] = [
    "РУ",
    "Підрозділ",
    "Тиждень",
    "Початок тижня",
    "Кінець тижня",
];
pub const YEAR_COLUMN: &str = "Рік";

/// Sorted union of the indicator columns across the year tables of one
/// report. Years may report different indicator sets.
pub fn indicator_union(tables: &[ReportTable]) -> Vec<String> {
    let set: BTreeSet<&String> = tables.iter().flat_map(|t| t.indicators.iter()).collect();
    set.into_iter().cloned().collect()
}

fn header(indicators: &[String]) -> Vec<String> {
    let mut cols: Vec<String> = LEAD_COLUMNS.iter().map(|c| c.to_string()).collect();
    cols.extend(indicators.iter().cloned());
    cols.push(YEAR_COLUMN.to_string());
    cols
}

/// Render one row. An indicator the row's year never reported renders as an
/// empty field; an indicator the year reported but this row lacks is 0.
fn row_record(
    table: &ReportTable,
    row: &ReportRow,
    present: &HashSet<&str>,
    indicators: &[String],
) -> Vec<String> {
    let mut record = vec![
        row.region.unwrap_or("").to_string(),
        row.unit.clone(),
        row.week.to_string(),
        row.week_start.to_string(),
        row.week_end.to_string(),
    ];
    for name in indicators {
        if present.contains(name.as_str()) {
            record.push(row.values.get(name).copied().unwrap_or(0).to_string());
        } else {
            record.push(String::new());
        }
    }
    record.push(table.year.to_string());
    record
}

/// Write the consolidated CSV for one report: all year tables concatenated
/// in the order given, UTF-8 with a byte-order mark, no index column.
pub fn write_report_csv(
    path: &Path,
    tables: &[ReportTable],
    indicators: &[String],
) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(path)?;
    // BOM keeps Cyrillic headers readable when opened in Excel.
    file.write_all(b"\xef\xbb\xbf")?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(header(indicators))?;
    for table in tables {
        let present: HashSet<&str> = table.indicators.iter().map(String::as_str).collect();
        for row in &table.rows {
            wtr.write_record(row_record(table, row, &present, indicators))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Print the first `max_rows` rows of a consolidated report as a Markdown
/// table.
pub fn preview_report(tables: &[ReportTable], indicators: &[String], max_rows: usize) {
    let mut builder = Builder::default();
    builder.push_record(header(indicators));
    let mut shown = 0;
    'tables: for table in tables {
        let present: HashSet<&str> = table.indicators.iter().map(String::as_str).collect();
        for row in &table.rows {
            if shown == max_rows {
                break 'tables;
            }
            builder.push_record(row_record(table, row, &present, indicators));
            shown += 1;
        }
    }
    if shown == 0 {
        println!("(no rows)\n");
        return;
    }
    let mut table = builder.build();
    table.with(Style::markdown());
    println!("{}\n", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn table(year: i32, indicators: &[&str], rows: Vec<ReportRow>) -> ReportTable {
        ReportTable {
            year,
            indicators: indicators.iter().map(|s| s.to_string()).collect(),
            rows,
        }
    }

    fn row(unit: &str, week: u32, values: &[(&str, i64)]) -> ReportRow {
        ReportRow {
            region: crate::mapping::region_for(unit),
            unit: unit.into(),
            week,
            week_start: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
            week_end: NaiveDate::from_ymd_opt(2024, 10, 6).unwrap(),
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn csv_starts_with_bom_and_ordered_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let t = table(2024, &["X"], vec![row("ПдРУ", 40, &[("X", 5)])]);
        let union = indicator_union(std::slice::from_ref(&t));
        write_report_csv(&path, &[t], &union).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"\xef\xbb\xbf");
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "РУ,Підрозділ,Тиждень,Початок тижня,Кінець тижня,X,Рік"
        );
        assert_eq!(
            lines.next().unwrap(),
            "ПдРУ,ПдРУ,40,2024-09-30,2024-10-06,5,2024"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn indicator_absent_from_a_year_renders_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let t24 = table(2024, &["X"], vec![row("ПдРУ", 40, &[("X", 5)])]);
        let t25 = table(2025, &["Y"], vec![row("ПдРУ", 40, &[("Y", 7)])]);
        let tables = vec![t24, t25];
        let union = indicator_union(&tables);
        assert_eq!(union, vec!["X", "Y"]);
        write_report_csv(&path, &tables, &union).unwrap();

        let text = String::from_utf8(std::fs::read(&path).unwrap()[3..].to_vec()).unwrap();
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows[0], "ПдРУ,ПдРУ,40,2024-09-30,2024-10-06,5,,2024");
        assert_eq!(rows[1], "ПдРУ,ПдРУ,40,2024-09-30,2024-10-06,,7,2025");
    }

    #[test]
    fn unmapped_region_renders_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let t = table(2024, &["X"], vec![row("Штаб", 40, &[("X", 1)])]);
        let union = indicator_union(std::slice::from_ref(&t));
        write_report_csv(&path, &[t], &union).unwrap();

        let text = String::from_utf8(std::fs::read(&path).unwrap()[3..].to_vec()).unwrap();
        assert_eq!(
            text.lines().nth(1).unwrap(),
            ",Штаб,40,2024-09-30,2024-10-06,1,2024"
        );
    }
}
