//! # Feedwheel
//!
//! A rotating RSS/Atom headline reader: it pulls every configured feed,
//! merges the items into one newest-first list, and shows them one at a
//! time on a timer.
//!
//! ## Architecture
//!
//! ```text
//! SourceList → IngestionPipeline (FetchWorker × N) → RotationScheduler → DisplayPort
//! ```
//!
//! - [`fetcher`]: reads feed documents over HTTP or from disk
//! - [`normalizer`]: parses RSS/Atom and flattens HTML summaries to plain text
//! - [`ingest`]: fans fetches out over the source list and merges the results
//! - [`rotation`]: owns the story list and the advance/refresh timers
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Rotate through feeds.txt in the terminal
//! feedwheel
//!
//! # Same rotation, printed to stdout
//! feedwheel watch --advance 5s
//!
//! # Fetch once and dump the merged list
//! feedwheel fetch --json
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// config, fetcher, pipeline.
pub mod app;

/// Command-line interface using clap.
///
/// - `tui` - Launch the TUI (default)
/// - `watch` - Print the rotation to stdout
/// - `fetch [--json]` - One fetch cycle
/// - `sources` - Show the source list
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/feedwheel/config.toml`, supporting:
/// - Source list path and timer intervals
/// - Fetch concurrency, timeout and user agent
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Outbound rendering port and the stdout implementation.
pub mod display;

/// Core domain models.
///
/// - [`Story`](domain::Story): One displayable feed entry
/// - [`StoryList`](domain::StoryList): Immutable newest-first story sequence
/// - [`SourceList`](domain::SourceList): Configured feed addresses
pub mod domain;

/// Feed retrieval.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for feed fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Fetching every source and merging the results.
///
/// - [`FetchWorker`](ingest::FetchWorker): One source to a list of stories
/// - [`IngestionPipeline`](ingest::IngestionPipeline): Bounded fan-out over all sources
pub mod ingest;

/// Feed parsing and summary normalization.
///
/// Converts RSS 0.9x/1.0/2.0, Atom 0.3/1.0, and JSON Feed 1.0 into
/// [`RawFeed`](fetcher::RawFeed) values, and HTML summaries into one line of text.
pub mod normalizer;

/// The rotation: current story, advance timer and periodic refresh.
pub mod rotation;

/// Terminal user interface.
///
/// One centered panel with the current story and a status bar.
/// Keybindings: Right/Space next, Left previous, r refreshes, j/k scroll, q quits.
pub mod tui;
