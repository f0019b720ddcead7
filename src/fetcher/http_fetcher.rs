use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{FeedwheelError, Result};
use crate::fetcher::{Fetcher, RawFeed};
use crate::normalizer::parse_feed;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("feedwheel/", env!("CARGO_PKG_VERSION"));

/// Where an address points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(Url),
    Local(PathBuf),
}

impl Location {
    /// Classify an address. Anything that isn't an absolute URL is taken as a
    /// filesystem path.
    pub fn resolve(address: &str) -> Result<Self> {
        match Url::parse(address) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Location::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(Location::Local)
                    .map_err(|_| FeedwheelError::UnsupportedAddress(address.to_string())),
                _ => Err(FeedwheelError::UnsupportedAddress(address.to_string())),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(Location::Local(PathBuf::from(address)))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Fetches feeds over HTTP(S) or from local files and parses them with feed-rs.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_settings(Duration::from_secs(DEFAULT_TIMEOUT_SECS), DEFAULT_USER_AGENT)
    }

    pub fn with_settings(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    async fn read(&self, location: Location) -> Result<Vec<u8>> {
        match location {
            Location::Remote(url) => {
                let response = self.client.get(url).send().await?;
                response.error_for_status_ref()?;
                Ok(response.bytes().await?.to_vec())
            }
            Location::Local(path) => Ok(tokio::fs::read(path).await?),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_feed(&self, address: &str) -> Result<RawFeed> {
        let location = Location::resolve(address)?;
        let body = self.read(location).await?;
        parse_feed(&body)
    }
}
