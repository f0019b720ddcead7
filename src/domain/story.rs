use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "No Title";

/// A normalized, displayable unit derived from one feed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub source_label: String,
    /// Plain text, single line, no runs of whitespace.
    pub summary: String,
}

impl Story {
    pub fn new(
        title: Option<String>,
        published_at: DateTime<Utc>,
        source_label: impl Into<String>,
        summary: String,
    ) -> Self {
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self {
            title,
            published_at,
            source_label: source_label.into(),
            summary,
        }
    }

    /// `source | YYYY-MM-DD HH:MM` in local time.
    pub fn meta_line(&self) -> String {
        format!(
            "{} | {}",
            self.source_label,
            self.published_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
        )
    }
}

/// Stories ordered newest first. Never mutated after construction; a refresh
/// builds a new list and swaps it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryList(Arc<[Story]>);

impl StoryList {
    /// Sort stories gathered in discovery order. The sort is stable, so stories
    /// with equal timestamps keep the order they were discovered in.
    pub fn from_discovered(mut stories: Vec<Story>) -> Self {
        stories.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Self(stories.into())
    }

    pub fn as_slice(&self) -> &[Story] {
        &self.0
    }
}

impl Deref for StoryList {
    type Target = [Story];

    fn deref(&self) -> &[Story] {
        &self.0
    }
}
