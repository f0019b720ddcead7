use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::ingest::{FetchWorker, IngestionPipeline};
use crate::rotation::Intervals;

/// Everything a command needs, built once from the resolved [`Config`].
pub struct AppContext {
    pub config: Config,
    pub pipeline: Arc<IngestionPipeline>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::with_settings(
            config.fetch.timeout(),
            &config.fetch.user_agent,
        )?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let pipeline = IngestionPipeline::from_path(
            FetchWorker::new(fetcher),
            &config.feeds.path,
            config.fetch.workers,
        );

        Self {
            config,
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn intervals(&self) -> Intervals {
        self.config.rotation.intervals()
    }
}
