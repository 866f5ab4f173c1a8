//! Industry comparison feed handler (paired-file mode)
//!
//! Groups the day's top and bottom industry CSVs (plus an optional trend
//! chart) by embedded date and emits one HTML feed item per complete pair.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use futures::future;

use crate::csv::parse_csv;
use crate::error::{AppError, ScanError};
use crate::feed::{markdown_to_html, render_industry_comparison, Feed, FeedItem};
use crate::scan::{self, ReportKind, INDUSTRY_REPORT_KINDS};
use crate::AppState;

const FEED_TITLE: &str = "Industry performance comparison";

/// Files for one trading day, collected under the shared date prefix.
#[derive(Default)]
struct DayGroup {
    date: Option<NaiveDate>,
    top: Option<String>,
    bottom: Option<String>,
    chart: Option<String>,
}

/// GET /feeds/industry/*dir
///
/// An unreadable directory degrades to an empty feed with HTTP 400 rather
/// than failing; per-file read errors still abort the request.
pub async fn industry_feed(
    State(state): State<AppState>,
    Path(dir): Path<String>,
) -> Result<Response, AppError> {
    let dir = super::scan_dir(&dir);
    let link = dir.display().to_string();

    let files = match scan::list_reports(&dir, INDUSTRY_REPORT_KINDS).await {
        Ok(files) => files,
        Err(err) => {
            tracing::warn!("failed to list {}: {}", link, err);
            let feed = Feed::empty(
                FEED_TITLE,
                link.clone(),
                format!("Unable to read directory {}: {}", link, err),
            );
            return Ok((StatusCode::BAD_REQUEST, Json(feed)).into_response());
        }
    };
    tracing::debug!("{}: matched {} report file(s)", link, files.len());

    // Group by date prefix. The keys are fixed-width numeric, so reverse
    // BTreeMap order is reverse-chronological order.
    let mut groups: BTreeMap<String, DayGroup> = BTreeMap::new();
    for file in files {
        let group = groups.entry(file.date_key.clone()).or_default();
        group.date = Some(file.date);
        match file.kind {
            ReportKind::TopIndustry => group.top = Some(file.name),
            ReportKind::BottomIndustry => group.bottom = Some(file.name),
            ReportKind::Chart => group.chart = Some(file.name),
            ReportKind::Selected => {}
        }
    }

    // A day qualifies only when both CSVs exist; the chart stays optional.
    let days: Vec<(NaiveDate, String, String, Option<String>)> = groups
        .into_iter()
        .rev()
        .filter_map(|(_, group)| match group {
            DayGroup {
                date: Some(date),
                top: Some(top),
                bottom: Some(bottom),
                chart,
            } => Some((date, top, bottom, chart)),
            _ => None,
        })
        .collect();

    if days.is_empty() {
        let feed = Feed::empty(
            FEED_TITLE,
            link.clone(),
            format!(
                "No paired top/bottom industry reports found under {}",
                link
            ),
        );
        return Ok(Json(feed).into_response());
    }

    // Every qualifying day's pair is read concurrently; the first failed
    // read aborts the request.
    let texts = future::try_join_all(days.iter().map(|(_, top, bottom, _)| {
        let top_path = dir.join(top);
        let bottom_path = dir.join(bottom);
        async move {
            tokio::try_join!(
                tokio::fs::read_to_string(top_path),
                tokio::fs::read_to_string(bottom_path),
            )
        }
    }))
    .await
    .map_err(ScanError::from)?;

    let items = days
        .iter()
        .zip(texts)
        .map(|((date, _, _, chart), (top_text, bottom_text))| {
            let chart_url = chart
                .as_ref()
                .map(|name| chart_url(&state.config.chart_base_url, name));
            let markdown = render_industry_comparison(
                &parse_csv(&top_text),
                &parse_csv(&bottom_text),
                chart_url.as_deref(),
            );
            FeedItem {
                title: format!("Industry performance {}", date.format("%Y-%m-%d")),
                description: markdown_to_html(&markdown),
                pub_date: *date,
                categories: vec!["Industry".to_string()],
            }
        })
        .collect();

    let feed = Feed::new(
        FEED_TITLE,
        link.clone(),
        format!("Daily top and bottom industry stocks from {}", link),
        items,
    );

    Ok(Json(feed).into_response())
}

fn chart_url(base_url: &str, filename: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_joins_base_and_filename() {
        assert_eq!(
            chart_url("http://charts.local", "20240102_industry_performance_trend.png"),
            "http://charts.local/20240102_industry_performance_trend.png"
        );
    }

    #[test]
    fn chart_url_tolerates_trailing_slash() {
        assert_eq!(
            chart_url("http://charts.local/", "t.png"),
            "http://charts.local/t.png"
        );
    }
}
