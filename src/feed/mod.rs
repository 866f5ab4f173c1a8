//! Feed module
//!
//! The feed document model and the formatters that turn parsed screener
//! records into item bodies. Serialization into a concrete syndication
//! format (RSS/Atom) is left to downstream consumers.

pub mod renderer;

pub use renderer::{markdown_to_html, render_industry_comparison, render_stock_list};

use chrono::NaiveDate;
use serde::Serialize;

/// A syndication feed assembled from one screener output directory
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    pub title: String,
    /// The directory the feed was generated from
    pub link: String,
    pub description: String,
    /// Items in reverse-chronological filename-date order
    pub items: Vec<FeedItem>,
}

/// One entry in the feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedItem {
    pub title: String,
    /// Item body: plain Markdown for the stock feed, rendered HTML for the
    /// industry feed
    pub description: String,
    /// Publication date taken from the filename prefix
    pub pub_date: NaiveDate,
    pub categories: Vec<String>,
}

impl Feed {
    pub fn new(title: &str, link: String, description: String, items: Vec<FeedItem>) -> Self {
        Self {
            title: title.to_string(),
            link,
            description,
            items,
        }
    }

    /// A feed with no items and a description explaining why.
    pub fn empty(title: &str, link: String, description: String) -> Self {
        Self::new(title, link, description, Vec::new())
    }
}
