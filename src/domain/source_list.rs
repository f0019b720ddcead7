use std::fs;
use std::path::Path;

use crate::app::{FeedwheelError, Result};

/// Ordered feed addresses, one per line of a flat text file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    addresses: Vec<String>,
}

impl SourceList {
    pub fn new(addresses: Vec<String>) -> Self {
        Self { addresses }
    }

    /// Read a source list. Blank lines and `#` comments are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| FeedwheelError::SourceListUnavailable {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let addresses = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();

        Self { addresses }
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
