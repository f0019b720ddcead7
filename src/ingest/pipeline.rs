use std::path::Path;
use std::sync::{Arc, Mutex};

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::domain::{SourceList, StoryList};
use crate::ingest::worker::FetchWorker;

pub const DEFAULT_WORKERS: usize = 10;

/// The outcome of one refresh cycle.
#[derive(Debug, Clone, Default)]
pub struct Ingestion {
    pub stories: StoryList,
    /// Number of configured sources.
    pub sources: usize,
    /// Sources that produced at least one story.
    pub contributing: usize,
    /// Source-list load failure, reported on the first cycle only.
    pub source_error: Option<String>,
}

/// Fans a [`FetchWorker`] out over every source and merges the results.
pub struct IngestionPipeline {
    worker: FetchWorker,
    sources: Arc<SourceList>,
    semaphore: Arc<Semaphore>,
    source_error: Mutex<Option<String>>,
}

impl IngestionPipeline {
    pub fn new(worker: FetchWorker, sources: SourceList, workers: usize) -> Self {
        Self {
            worker,
            sources: Arc::new(sources),
            semaphore: Arc::new(Semaphore::new(workers.max(1))),
            source_error: Mutex::new(None),
        }
    }

    /// Load the source list from `path`. An unreadable list leaves the
    /// pipeline with zero sources and is reported by the first [`run`](Self::run).
    pub fn from_path(worker: FetchWorker, path: &Path, workers: usize) -> Self {
        match SourceList::load(path) {
            Ok(sources) => Self::new(worker, sources, workers),
            Err(e) => {
                tracing::warn!("{}", e);
                let pipeline = Self::new(worker, SourceList::default(), workers);
                if let Ok(mut slot) = pipeline.source_error.lock() {
                    *slot = Some(e.status_message());
                }
                pipeline
            }
        }
    }

    pub fn sources(&self) -> &SourceList {
        &self.sources
    }

    /// Fetch every source and return the merged, sorted stories. Never fails;
    /// the list is empty when nothing could be fetched.
    pub async fn run(&self) -> Ingestion {
        let addresses = self.sources.addresses().to_vec();

        let handles = addresses.iter().cloned().map(|address| {
            let worker = self.worker.clone();
            let semaphore = self.semaphore.clone();

            tokio::spawn(async move {
                let Ok(_permit) = semaphore.acquire().await else {
                    return Vec::new();
                };
                worker.fetch(&address).await
            })
        });

        let results = join_all(handles).await;

        // Results arrive in source-list order, which is the discovery order
        // the stable sort preserves for equal timestamps.
        let mut discovered = Vec::new();
        let mut contributing = 0;
        for (address, result) in addresses.iter().zip(results) {
            match result {
                Ok(stories) => {
                    if !stories.is_empty() {
                        contributing += 1;
                    }
                    discovered.extend(stories);
                }
                Err(e) => {
                    tracing::error!("Fetch task for {} failed: {}", address, e);
                }
            }
        }

        let stories = StoryList::from_discovered(discovered);
        tracing::info!(
            "Ingestion complete: {} stories from {}/{} sources",
            stories.len(),
            contributing,
            addresses.len()
        );

        Ingestion {
            stories,
            sources: addresses.len(),
            contributing,
            source_error: self.source_error.lock().ok().and_then(|mut slot| slot.take()),
        }
    }
}
