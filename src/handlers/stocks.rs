//! Stock report feed handler (single-file mode)
//!
//! Every screener CSV under the requested directory becomes one feed item,
//! newest first, with the record list rendered as plain Markdown.

use axum::{extract::Path, Json};
use futures::future;

use crate::csv::parse_csv;
use crate::error::{AppError, ScanError};
use crate::feed::{render_stock_list, Feed, FeedItem};
use crate::scan::{self, STOCK_REPORT_KINDS};

const FEED_TITLE: &str = "Stock screener reports";

/// GET /feeds/stocks/*dir
///
/// An unreadable directory fails the request; a readable directory with no
/// matching files yields an empty feed with an explanatory description.
pub async fn stocks_feed(Path(dir): Path<String>) -> Result<Json<Feed>, AppError> {
    let dir = super::scan_dir(&dir);
    let link = dir.display().to_string();

    let files = scan::list_reports(&dir, STOCK_REPORT_KINDS).await?;
    tracing::debug!("{}: matched {} report file(s)", link, files.len());

    if files.is_empty() {
        return Ok(Json(Feed::empty(
            FEED_TITLE,
            link.clone(),
            format!("No screener reports found under {}", link),
        )));
    }

    // Reads run concurrently; the first failed read aborts the request.
    let bodies = future::try_join_all(
        files
            .iter()
            .map(|file| tokio::fs::read_to_string(dir.join(&file.name))),
    )
    .await
    .map_err(ScanError::from)?;

    let items = files
        .iter()
        .zip(bodies)
        .map(|(file, text)| {
            let records = parse_csv(&text);
            FeedItem {
                title: format!("{} {}", file.label(), file.date.format("%Y-%m-%d")),
                description: render_stock_list(&records),
                pub_date: file.date,
                categories: vec![file.label()],
            }
        })
        .collect();

    Ok(Json(Feed::new(
        FEED_TITLE,
        link.clone(),
        format!("Daily stock screening results from {}", link),
        items,
    )))
}
