pub mod summary;

pub use summary::normalize;

use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{FeedwheelError, Result};
use crate::fetcher::{RawFeed, RawItem};

/// Parse an RSS 0.9x/1.0/2.0, Atom or JSON Feed document into raw items.
///
/// Titles are entity-decoded here. Bodies are left as markup for
/// [`normalize`].
pub fn parse_feed(body: &[u8]) -> Result<RawFeed> {
    let feed = parser::parse(body).map_err(|e| FeedwheelError::FeedParse(e.to_string()))?;

    let title = feed
        .title
        .map(|t| decode_html_entities(&t.content).trim().to_string())
        .filter(|t| !t.is_empty());

    let items = feed
        .entries
        .into_iter()
        .map(|entry| RawItem {
            title: entry
                .title
                .map(|t| decode_html_entities(&t.content).to_string()),
            content: entry.content.and_then(|c| c.body),
            summary: entry.summary.map(|s| s.content),
            published: entry.published,
            updated: entry.updated,
        })
        .collect();

    Ok(RawFeed { title, items })
}
