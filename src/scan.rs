//! Directory lister for screener output files
//!
//! The screening process drops dated files into a flat directory, one set
//! per trading day. This module lists the immediate children of such a
//! directory, keeps the regular files whose names match the known report
//! patterns, and returns them newest first.

use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ScanError;

/// The report types the screener emits, distinguished by filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// `YYYYMMDD_selected_stocks.csv`
    Selected,
    /// `YYYYMMDD_top_industry_stocks.csv`
    TopIndustry,
    /// `YYYYMMDD_bottom_industry_stocks.csv`
    BottomIndustry,
    /// `YYYYMMDD_industry_performance_trend.png`
    Chart,
}

impl ReportKind {
    /// Anchored filename pattern with the embedded date as capture group 1.
    fn pattern(&self) -> &'static str {
        match self {
            ReportKind::Selected => r"^(\d{8})_selected_stocks\.csv$",
            ReportKind::TopIndustry => r"^(\d{8})_top_industry_stocks\.csv$",
            ReportKind::BottomIndustry => r"^(\d{8})_bottom_industry_stocks\.csv$",
            ReportKind::Chart => r"^(\d{8})_industry_performance_trend\.png$",
        }
    }
}

/// Report kinds served by the stock report feed (one item per CSV).
pub const STOCK_REPORT_KINDS: &[ReportKind] = &[
    ReportKind::Selected,
    ReportKind::TopIndustry,
    ReportKind::BottomIndustry,
];

/// Report kinds served by the industry comparison feed (paired by date).
pub const INDUSTRY_REPORT_KINDS: &[ReportKind] = &[
    ReportKind::TopIndustry,
    ReportKind::BottomIndustry,
    ReportKind::Chart,
];

/// A matched screener output file.
#[derive(Debug, Clone)]
pub struct ReportFile {
    /// Bare filename, no path components.
    pub name: String,
    /// The 8-digit YYYYMMDD prefix, kept verbatim for grouping and sorting.
    pub date_key: String,
    /// Calendar date parsed from the prefix.
    pub date: NaiveDate,
    pub kind: ReportKind,
}

impl ReportFile {
    /// Type label: the filename fragment between the date and the
    /// `_stocks.csv` suffix, with its first letter capitalized. Used as
    /// the feed item category and title component.
    pub fn label(&self) -> String {
        let stem = self.name.get(9..).unwrap_or("");
        let stem = stem.strip_suffix("_stocks.csv").unwrap_or(stem);
        capitalize(stem)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// List the screener reports of the given kinds directly under `dir`,
/// sorted by embedded date descending.
///
/// Only regular files are considered, and only names whose 8-digit prefix
/// is a real calendar date. Errors if the directory cannot be read.
pub async fn list_reports(dir: &Path, kinds: &[ReportKind]) -> Result<Vec<ReportFile>, ScanError> {
    let matchers: Vec<(ReportKind, Regex)> = kinds
        .iter()
        .map(|kind| (*kind, Regex::new(kind.pattern()).unwrap()))
        .collect();

    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();

        for (kind, matcher) in &matchers {
            let Some(caps) = matcher.captures(&name) else {
                continue;
            };
            let date_key = caps[1].to_string();
            // An 8-digit prefix is not necessarily a date (e.g. 20241399).
            if let Ok(date) = NaiveDate::parse_from_str(&date_key, "%Y%m%d") {
                files.push(ReportFile {
                    name: name.clone(),
                    date_key,
                    date,
                    kind: *kind,
                });
            }
            break;
        }
    }

    // The prefix is fixed-width zero-padded numeric, so string comparison
    // orders the same way as the dates themselves.
    files.sort_by(|a, b| b.date_key.cmp(&a.date_key));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), "x").unwrap();
    }

    #[tokio::test]
    async fn lists_matching_files_newest_first() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "20240101_selected_stocks.csv");
        touch(&dir, "20240103_selected_stocks.csv");
        touch(&dir, "20240102_top_industry_stocks.csv");

        let files = list_reports(dir.path(), STOCK_REPORT_KINDS).await.unwrap();

        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "20240103_selected_stocks.csv",
                "20240102_top_industry_stocks.csv",
                "20240101_selected_stocks.csv",
            ]
        );
    }

    #[tokio::test]
    async fn ignores_unrelated_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "20240101_selected_stocks.csv");
        touch(&dir, "notes.txt");
        touch(&dir, "selected_stocks.csv");
        touch(&dir, "20240101_selected_stocks.csv.bak");
        touch(&dir, "2024_selected_stocks.csv");

        let files = list_reports(dir.path(), STOCK_REPORT_KINDS).await.unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "20240101_selected_stocks.csv");
    }

    #[tokio::test]
    async fn ignores_directories_with_matching_names() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("20240101_selected_stocks.csv")).unwrap();
        touch(&dir, "20240102_selected_stocks.csv");

        let files = list_reports(dir.path(), STOCK_REPORT_KINDS).await.unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "20240102_selected_stocks.csv");
    }

    #[tokio::test]
    async fn skips_impossible_dates() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "20241399_selected_stocks.csv");
        touch(&dir, "20240102_selected_stocks.csv");

        let files = list_reports(dir.path(), STOCK_REPORT_KINDS).await.unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].date_key, "20240102");
    }

    #[tokio::test]
    async fn only_requested_kinds_match() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "20240101_selected_stocks.csv");
        touch(&dir, "20240101_top_industry_stocks.csv");
        touch(&dir, "20240101_industry_performance_trend.png");

        let files = list_reports(dir.path(), INDUSTRY_REPORT_KINDS)
            .await
            .unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.kind != ReportKind::Selected));
    }

    #[tokio::test]
    async fn missing_directory_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let result = list_reports(&missing, STOCK_REPORT_KINDS).await;

        assert!(result.is_err());
    }

    #[test]
    fn report_date_matches_prefix() {
        let file = ReportFile {
            name: "20240102_selected_stocks.csv".to_string(),
            date_key: "20240102".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            kind: ReportKind::Selected,
        };

        assert_eq!(file.date.format("%Y-%m-%d").to_string(), "2024-01-02");
    }

    #[test]
    fn label_capitalizes_first_letter() {
        let file = ReportFile {
            name: "20240102_selected_stocks.csv".to_string(),
            date_key: "20240102".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            kind: ReportKind::Selected,
        };

        assert_eq!(file.label(), "Selected");
    }

    #[test]
    fn label_keeps_inner_underscores() {
        let file = ReportFile {
            name: "20240102_top_industry_stocks.csv".to_string(),
            date_key: "20240102".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            kind: ReportKind::TopIndustry,
        };

        assert_eq!(file.label(), "Top_industry");
    }
}
