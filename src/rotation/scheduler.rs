//! The foreground rotation loop.
//!
//! [`RotationScheduler`] owns the [`Rotation`] and is the only thing that ever
//! changes it. Everything else talks to it through a [`SchedulerHandle`]:
//!
//! ```text
//! SchedulerHandle ──Command──►┌───────────────────┐──show_story──► DisplayPort
//!                             │ RotationScheduler │──show_status─►
//! IngestionPipeline ─result──►└───────────────────┘──snapshot────► watch
//!   (spawned task)                 ▲         ▲
//!                          advance timer   refresh interval
//! ```
//!
//! Ingestion runs on spawned tasks and hands back an immutable [`Ingestion`].
//! Publishing it (list swap, index reset, render) happens inside one call on
//! the scheduler task, so no observer sees a half-applied refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::interval::{format_interval, MAX_INTERVAL};
use crate::display::{DisplayPort, Severity};
use crate::domain::{Story, StoryList};
use crate::ingest::{Ingestion, IngestionPipeline};
use crate::rotation::state::Rotation;

pub const DEFAULT_ADVANCE_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3600);

pub const NO_STORIES: &str = "No stories found.";
pub const REFRESHING: &str = "Refreshing feeds...";

const MIN_INTERVAL: Duration = Duration::from_millis(1);
const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intervals {
    /// Time each story stays up before the next one is shown.
    pub advance: Duration,
    /// Time between refresh cycles.
    pub refresh: Duration,
}

impl Default for Intervals {
    fn default() -> Self {
        Self {
            advance: DEFAULT_ADVANCE_INTERVAL,
            refresh: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    Refresh,
    Shutdown,
}

/// Read-only view of the rotation, updated after every change.
#[derive(Debug, Clone, Default)]
pub struct RotationSnapshot {
    pub stories: StoryList,
    pub index: Option<usize>,
    /// Refresh cycle that produced `stories`; 0 before the first one lands.
    pub generation: u64,
}

impl RotationSnapshot {
    pub fn current(&self) -> Option<&Story> {
        self.index.and_then(|i| self.stories.get(i))
    }
}

/// Cloneable front door to a running scheduler.
#[derive(Clone)]
pub struct SchedulerHandle {
    commands: mpsc::Sender<Command>,
    snapshot: watch::Receiver<RotationSnapshot>,
}

impl SchedulerHandle {
    pub async fn advance(&self) {
        self.send(Command::Advance).await;
    }

    pub async fn retreat(&self) {
        self.send(Command::Retreat).await;
    }

    pub async fn refresh_now(&self) {
        self.send(Command::Refresh).await;
    }

    pub async fn shutdown(&self) {
        self.send(Command::Shutdown).await;
    }

    pub fn snapshot(&self) -> RotationSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RotationSnapshot> {
        self.snapshot.clone()
    }

    async fn send(&self, command: Command) {
        if self.commands.send(command).await.is_err() {
            debug!("Scheduler has stopped; dropping {:?}", command);
        }
    }
}

struct Completed {
    generation: u64,
    ingestion: Ingestion,
}

pub struct RotationScheduler {
    rotation: Rotation,
    pipeline: Arc<IngestionPipeline>,
    display: Arc<dyn DisplayPort>,
    intervals: Intervals,
    commands: mpsc::Receiver<Command>,
    completed_tx: mpsc::Sender<Completed>,
    completed_rx: mpsc::Receiver<Completed>,
    snapshot: watch::Sender<RotationSnapshot>,
    next_generation: u64,
    published_generation: u64,
    in_flight: Option<u64>,
}

impl RotationScheduler {
    pub fn new(
        pipeline: Arc<IngestionPipeline>,
        display: Arc<dyn DisplayPort>,
        intervals: Intervals,
    ) -> (Self, SchedulerHandle) {
        let (commands_tx, commands) = mpsc::channel(COMMAND_BUFFER);
        let (completed_tx, completed_rx) = mpsc::channel(1);
        let (snapshot, snapshot_rx) = watch::channel(RotationSnapshot::default());

        let intervals = Intervals {
            advance: intervals.advance.clamp(MIN_INTERVAL, MAX_INTERVAL),
            refresh: intervals.refresh.clamp(MIN_INTERVAL, MAX_INTERVAL),
        };

        let scheduler = Self {
            rotation: Rotation::new(),
            pipeline,
            display,
            intervals,
            commands,
            completed_tx,
            completed_rx,
            snapshot,
            next_generation: 0,
            published_generation: 0,
            in_flight: None,
        };
        let handle = SchedulerHandle {
            commands: commands_tx,
            snapshot: snapshot_rx,
        };

        (scheduler, handle)
    }

    /// Build a scheduler and run it as a tokio task.
    pub fn spawn(
        pipeline: Arc<IngestionPipeline>,
        display: Arc<dyn DisplayPort>,
        intervals: Intervals,
    ) -> (SchedulerHandle, JoinHandle<()>) {
        let (scheduler, handle) = Self::new(pipeline, display, intervals);
        let task = tokio::spawn(scheduler.run());
        (handle, task)
    }

    /// Run until [`Command::Shutdown`] or until every handle is dropped.
    ///
    /// The refresh interval ticks immediately, so the first cycle starts as
    /// soon as the loop does.
    pub async fn run(mut self) {
        info!(
            "Rotation started (advance every {}, refresh every {}, {} sources)",
            format_interval(self.intervals.advance),
            format_interval(self.intervals.refresh),
            self.pipeline.sources().len()
        );

        let advance_timer = time::sleep(self.intervals.advance);
        tokio::pin!(advance_timer);

        let mut refresh_timer = time::interval(self.intervals.refresh);
        refresh_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = refresh_timer.tick() => {
                    self.refresh_now();
                }
                () = &mut advance_timer => {
                    self.advance();
                    advance_timer.as_mut().reset(Instant::now() + self.intervals.advance);
                }
                command = self.commands.recv() => {
                    match command {
                        Some(Command::Advance) => {
                            self.advance();
                            advance_timer.as_mut().reset(Instant::now() + self.intervals.advance);
                        }
                        Some(Command::Retreat) => {
                            self.retreat();
                            advance_timer.as_mut().reset(Instant::now() + self.intervals.advance);
                        }
                        Some(Command::Refresh) => self.refresh_now(),
                        Some(Command::Shutdown) | None => break,
                    }
                }
                Some(completed) = self.completed_rx.recv() => {
                    if self.publish(completed) {
                        advance_timer.as_mut().reset(Instant::now() + self.intervals.advance);
                    }
                }
            }
        }

        info!("Rotation stopped");
    }

    fn advance(&mut self) {
        if let Some(story) = self.rotation.advance() {
            self.display.show_story(story);
            self.publish_snapshot();
        }
    }

    fn retreat(&mut self) {
        if let Some(story) = self.rotation.retreat() {
            self.display.show_story(story);
            self.publish_snapshot();
        }
    }

    /// Start a refresh cycle in the background. A request made while a cycle
    /// is still running is folded into that cycle.
    fn refresh_now(&mut self) {
        if let Some(generation) = self.in_flight {
            debug!("Refresh {} still running; not starting another", generation);
            return;
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        self.in_flight = Some(generation);
        self.display.show_status(REFRESHING, Severity::Info);

        let pipeline = self.pipeline.clone();
        let completed = self.completed_tx.clone();
        tokio::spawn(async move {
            let ingestion = pipeline.run().await;
            if completed.send(Completed { generation, ingestion }).await.is_err() {
                debug!("Scheduler gone before refresh {} finished", generation);
            }
        });
    }

    /// Apply a finished cycle. Returns true when the story list was replaced.
    ///
    /// Results older than the last published cycle are dropped. An empty
    /// result leaves the current list and index alone.
    fn publish(&mut self, completed: Completed) -> bool {
        let Completed {
            generation,
            ingestion,
        } = completed;

        if self.in_flight == Some(generation) {
            self.in_flight = None;
        }
        if generation <= self.published_generation {
            debug!(
                "Dropping refresh {}; refresh {} already published",
                generation, self.published_generation
            );
            return false;
        }
        self.published_generation = generation;

        if ingestion.stories.is_empty() {
            match ingestion.source_error {
                Some(message) => self.display.show_status(&message, Severity::Error),
                None => self.display.show_status(NO_STORIES, Severity::Warning),
            }
            return false;
        }

        let count = ingestion.stories.len();
        if let Some(story) = self.rotation.replace(ingestion.stories) {
            self.display.show_story(story);
        }
        self.display.show_status(
            &format!(
                "Loaded {} stories from {}/{} sources",
                count, ingestion.contributing, ingestion.sources
            ),
            Severity::Info,
        );
        self.publish_snapshot();
        true
    }

    fn publish_snapshot(&self) {
        self.snapshot.send_replace(RotationSnapshot {
            stories: self.rotation.stories().clone(),
            index: self.rotation.index(),
            generation: self.published_generation,
        });
    }
}
