// Utility helpers for numeric cleaning and ISO week math.
//
// This module centralizes all the "dirty" cell/number handling so the rest
// of the code can assume clean, typed values.
use calamine::Data;
use chrono::{Duration, NaiveDate, Weekday};
use num_format::{Locale, ToFormattedString};
use std::error::Error;

/// Parse a numeric-looking string into an integer while being forgiving
/// about formatting issues that are common in spreadsheet exports.
///
/// - Strips non-breaking (U+00A0) and ordinary spaces.
/// - Replaces a comma decimal separator with a period.
/// - Parses as a float and truncates toward zero (these are count metrics).
/// - Returns 0 for anything that cannot be safely parsed.
pub fn normalize_number(raw: &str) -> i64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '\u{a0}' && *c != ' ')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v.trunc() as i64,
        _ => 0,
    }
}

/// Normalize a spreadsheet cell into an integer value.
///
/// Numeric cells pass through (floats truncate toward zero), string cells go
/// through [`normalize_number`], and everything else (empty, boolean, date,
/// error cells) coerces to 0.
pub fn cell_to_int(cell: &Data) -> i64 {
    match cell {
        Data::Int(n) => *n,
        Data::Float(f) if f.is_finite() => f.trunc() as i64,
        Data::String(s) => normalize_number(s),
        _ => 0,
    }
}

/// Start and end dates of an ISO-8601 week: Monday through Sunday, week 1
/// being the week that contains the year's first Thursday.
///
/// Errors if the (year, week) pair is outside the ISO calendar; callers
/// filter week headers to [1, 52] upstream, which keeps this valid for
/// every year.
pub fn week_bounds(year: i32, week: u32) -> Result<(NaiveDate, NaiveDate), Box<dyn Error>> {
    let start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or_else(|| format!("week {} is not a valid ISO week of {}", week, year))?;
    Ok((start, start + Duration::days(6)))
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values, used for
    // counts in console messages (e.g., `1,248 rows`).
    n.to_formatted_string(&Locale::en)
}
