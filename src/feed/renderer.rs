//! Record formatters
//!
//! Renders parsed screener records to Markdown feed-item bodies, and
//! Markdown to HTML for the industry feed.

use crate::csv::CsvRecord;

/// Look up a display field, falling back to `-` for absent or empty cells.
fn field<'a>(record: &'a CsvRecord, key: &str) -> &'a str {
    record
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .unwrap_or("-")
}

/// Render one stock record as a Markdown bullet line.
fn render_stock_line(record: &CsvRecord) -> String {
    let mut meta_parts = Vec::new();
    meta_parts.push(format!("weight: {}", field(record, "target_weight")));
    meta_parts.push(format!("industry: {}", field(record, "industry")));

    if let Some(pe) = record.get("pe").filter(|value| !value.is_empty()) {
        let mut part = format!("PE: {}", pe);
        if let Some(pctl) = record
            .get("pe_percentile")
            .filter(|value| !value.is_empty())
        {
            part.push_str(&format!(" ({}%)", pctl));
        }
        meta_parts.push(part);
    }

    format!(
        "- **{}** ({}) {}\n",
        field(record, "name"),
        field(record, "ts_code"),
        meta_parts.join(" | ")
    )
}

/// Render a list of stock records as plain Markdown bullet text.
pub fn render_stock_list(records: &[CsvRecord]) -> String {
    if records.is_empty() {
        return "_No records._\n".to_string();
    }

    let mut buf = String::new();
    for record in records {
        buf.push_str(&render_stock_line(record));
    }
    buf
}

/// Render the Markdown body for one day of the industry comparison feed:
/// top performers, bottom performers, and the performance trend chart when
/// one exists for that day.
pub fn render_industry_comparison(
    top: &[CsvRecord],
    bottom: &[CsvRecord],
    chart_url: Option<&str>,
) -> String {
    let mut buf = String::new();

    buf.push_str("## Top industry stocks\n\n");
    buf.push_str(&render_stock_list(top));
    buf.push('\n');

    buf.push_str("## Bottom industry stocks\n\n");
    buf.push_str(&render_stock_list(bottom));
    buf.push('\n');

    buf.push_str("## Performance trend\n\n");
    match chart_url {
        Some(url) => buf.push_str(&format!("![Industry performance trend]({})\n", url)),
        None => buf.push_str("_(no chart available for this date)_\n"),
    }

    buf
}

/// Render Markdown to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}
