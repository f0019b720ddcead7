use std::sync::Arc;

use chrono::Utc;

use crate::domain::Story;
use crate::fetcher::{Fetcher, RawFeed};
use crate::normalizer::normalize;

/// Fetches one source and turns its items into stories.
#[derive(Clone)]
pub struct FetchWorker {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl FetchWorker {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }

    /// Never fails: a source that can't be fetched contributes nothing.
    pub async fn fetch(&self, address: &str) -> Vec<Story> {
        match self.fetcher.fetch_feed(address).await {
            Ok(feed) => {
                let stories = stories_from_feed(address, feed);
                tracing::debug!("Fetched {} stories from {}", stories.len(), address);
                stories
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", address, e);
                Vec::new()
            }
        }
    }
}

fn stories_from_feed(address: &str, feed: RawFeed) -> Vec<Story> {
    let fetched_at = Utc::now();
    let source_label = feed.title.unwrap_or_else(|| address.to_string());

    feed.items
        .into_iter()
        .map(|item| {
            let body = item.content.or(item.summary).unwrap_or_default();
            let published_at = item.published.or(item.updated).unwrap_or(fetched_at);

            Story::new(item.title, published_at, source_label.as_str(), normalize(&body))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::tests::at;
    use crate::fetcher::stub::{feed, item, StaticFetcher};
    use crate::fetcher::RawItem;
    use crate::normalizer::summary::NO_CONTENT;

    fn worker(fetcher: StaticFetcher) -> FetchWorker {
        FetchWorker::new(Arc::new(fetcher))
    }

    #[tokio::test]
    async fn test_failed_source_yields_nothing() {
        let stories = worker(StaticFetcher::new()).fetch("https://down.example/feed").await;
        assert!(stories.is_empty());
    }

    #[tokio::test]
    async fn test_fields_are_mapped() {
        let fetcher = StaticFetcher::new();
        fetcher.set(
            "https://a.example/feed",
            feed(
                Some("Example News"),
                vec![item("Headline", Some(at(4)), "<p>First <i>para</i></p><p>Second</p>")],
            ),
        );

        let stories = worker(fetcher).fetch("https://a.example/feed").await;
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].title, "Headline");
        assert_eq!(stories[0].source_label, "Example News");
        assert_eq!(stories[0].published_at, at(4));
        assert_eq!(stories[0].summary, "First para");
    }

    #[tokio::test]
    async fn test_content_preferred_over_summary() {
        let fetcher = StaticFetcher::new();
        let mut raw = item("T", Some(at(1)), "<p>summary text</p>");
        raw.content = Some("<p>full content</p>".into());
        fetcher.set("a", feed(None, vec![raw]));

        let stories = worker(fetcher).fetch("a").await;
        assert_eq!(stories[0].summary, "full content");
    }

    #[tokio::test]
    async fn test_missing_body_falls_back() {
        let fetcher = StaticFetcher::new();
        fetcher.set(
            "a",
            feed(
                None,
                vec![RawItem {
                    title: Some("Bodiless".into()),
                    published: Some(at(1)),
                    ..RawItem::default()
                }],
            ),
        );

        let stories = worker(fetcher).fetch("a").await;
        assert_eq!(stories[0].summary, NO_CONTENT);
    }

    #[tokio::test]
    async fn test_label_defaults_to_address() {
        let fetcher = StaticFetcher::new();
        fetcher.set("https://a.example/feed", feed(None, vec![item("T", None, "x")]));

        let stories = worker(fetcher).fetch("https://a.example/feed").await;
        assert_eq!(stories[0].source_label, "https://a.example/feed");
    }

    #[tokio::test]
    async fn test_timestamp_fallbacks() {
        let fetcher = StaticFetcher::new();
        let mut updated_only = item("updated", None, "x");
        updated_only.updated = Some(at(2));
        let mut both = item("both", Some(at(5)), "x");
        both.updated = Some(at(8));
        let neither = item("neither", None, "x");
        fetcher.set("a", feed(None, vec![updated_only, both, neither]));

        let before = Utc::now();
        let stories = worker(fetcher).fetch("a").await;
        let after = Utc::now();

        assert_eq!(stories[0].published_at, at(2));
        assert_eq!(stories[1].published_at, at(5));
        assert!(stories[2].published_at >= before && stories[2].published_at <= after);
    }

    #[tokio::test]
    async fn test_missing_title_defaults() {
        let fetcher = StaticFetcher::new();
        let mut raw = item("", Some(at(1)), "x");
        raw.title = None;
        fetcher.set("a", feed(None, vec![raw]));

        let stories = worker(fetcher).fetch("a").await;
        assert_eq!(stories[0].title, "No Title");
    }
}
