// Pivot and enrichment: long week records -> one row per (unit, week).
//
// Duplicate (unit, indicator, week) cells keep the first value encountered;
// extraction order makes that the earliest (row, column) cell of the file.
use crate::mapping::region_for;
use crate::types::{ReportRow, ReportTable, WeekRecord};
use crate::util::week_bounds;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::error::Error;

/// Pivot one file's records into a [`ReportTable`] for the given report
/// year: group by (unit, week), spread indicators into columns, fill gaps
/// with 0, then attach the ISO week bounds and the region group.
///
/// Every unit gets a row for every week seen anywhere in the file. Sheets
/// of one workbook can carry different week-column sets; a week a unit's
/// own sheet lacks still produces a row with all indicators 0.
///
/// Indicator columns come out sorted lexicographically and rows sorted by
/// (unit, week) ascending.
pub fn build_report(records: Vec<WeekRecord>, year: i32) -> Result<ReportTable, Box<dyn Error>> {
    let mut indicators: BTreeSet<String> = BTreeSet::new();
    let mut groups: BTreeMap<(String, u32), HashMap<String, i64>> = BTreeMap::new();
    for rec in records {
        indicators.insert(rec.indicator.clone());
        groups
            .entry((rec.unit, rec.week))
            .or_default()
            .entry(rec.indicator)
            .or_insert(rec.value);
    }
    let indicators: Vec<String> = indicators.into_iter().collect();

    // Complete the (unit, week) grid over the file's week union; the
    // indicator fill below turns the added empty rows into all-zero rows.
    let weeks: BTreeSet<u32> = groups.keys().map(|&(_, week)| week).collect();
    let units: BTreeSet<String> = groups.keys().map(|(unit, _)| unit.clone()).collect();
    for unit in &units {
        for &week in &weeks {
            groups.entry((unit.clone(), week)).or_default();
        }
    }

    let mut rows = Vec::with_capacity(groups.len());
    for ((unit, week), mut values) in groups {
        let (week_start, week_end) = week_bounds(year, week)?;
        for name in &indicators {
            values.entry(name.clone()).or_insert(0);
        }
        rows.push(ReportRow {
            region: region_for(&unit),
            unit,
            week,
            week_start,
            week_end,
            values,
        });
    }
    Ok(ReportTable { year, indicators, rows })
}
