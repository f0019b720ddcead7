//! In-memory fetcher for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::app::{FeedwheelError, Result};
use crate::fetcher::{Fetcher, RawFeed, RawItem};

/// Serves canned feeds by address. Unknown addresses fail.
#[derive(Default)]
pub struct StaticFetcher {
    feeds: Mutex<HashMap<String, RawFeed>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn set(&self, address: &str, feed: RawFeed) {
        self.feeds.lock().unwrap().insert(address.to_string(), feed);
    }

    pub fn clear(&self) {
        self.feeds.lock().unwrap().clear();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch_feed(&self, address: &str) -> Result<RawFeed> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.feeds
            .lock()
            .unwrap()
            .get(address)
            .cloned()
            .ok_or_else(|| FeedwheelError::Other(format!("connection refused: {}", address)))
    }
}

pub fn feed(title: Option<&str>, items: Vec<RawItem>) -> RawFeed {
    RawFeed {
        title: title.map(String::from),
        items,
    }
}

pub fn item(title: &str, published: Option<DateTime<Utc>>, summary: &str) -> RawItem {
    RawItem {
        title: Some(title.to_string()),
        summary: Some(summary.to_string()),
        published,
        ..RawItem::default()
    }
}
