//! Fetching and merging stories from every configured source.

pub mod pipeline;
pub mod worker;

pub use pipeline::{Ingestion, IngestionPipeline, DEFAULT_WORKERS};
pub use worker::FetchWorker;
