//! Line-oriented CSV parsing for screener output files
//!
//! The screener writes plain comma-separated text: one header row, then one
//! row per stock, no quoting. Parsing is a straight split on commas with
//! whitespace trimming. Quoted fields containing commas or embedded
//! newlines are NOT supported - that is an accepted limitation of the file
//! format, not something to paper over here.

use std::collections::HashMap;

/// One data row, keyed by column header. Values are raw strings; missing
/// trailing fields are present with an empty value.
pub type CsvRecord = HashMap<String, String>;

/// Parse screener CSV text into records, preserving row order.
///
/// The first line is the header. Blank lines are skipped. Rows shorter than
/// the header get empty strings for the missing columns; extra trailing
/// cells are dropped.
pub fn parse_csv(text: &str) -> Vec<CsvRecord> {
    let mut lines = text.lines();

    let header: Vec<String> = match lines.next() {
        Some(line) => line.split(',').map(|col| col.trim().to_string()).collect(),
        None => return Vec::new(),
    };

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            header
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let value = cells.get(i).copied().unwrap_or("");
                    (col.clone(), value.to_string())
                })
                .collect()
        })
        .collect()
}
