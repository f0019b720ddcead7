pub mod http_fetcher;

#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::app::Result;

/// A fetched feed before any normalization.
#[derive(Debug, Clone, Default)]
pub struct RawFeed {
    /// The feed's declared title, if it has a non-empty one.
    pub title: Option<String>,
    pub items: Vec<RawItem>,
}

/// One entry as the feed delivered it. Bodies are still markup.
#[derive(Debug, Clone, Default)]
pub struct RawItem {
    pub title: Option<String>,
    /// Full content (`content:encoded`, Atom `<content>`).
    pub content: Option<String>,
    /// Summary (`<description>`, Atom `<summary>`).
    pub summary: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

/// Turns a source address into a parsed feed. Implementations may fail for
/// any reason; callers contain the failure.
#[async_trait]
pub trait Fetcher {
    async fn fetch_feed(&self, address: &str) -> Result<RawFeed>;
}
