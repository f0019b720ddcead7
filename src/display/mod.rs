//! The outbound side of the engine.
//!
//! The scheduler pushes every rendering update through [`DisplayPort`] and
//! never reads anything back. The TUI, the headless printer and the tests all
//! plug in here.

pub mod print;

#[cfg(test)]
pub(crate) mod recording;

use std::sync::Arc;

use crate::domain::Story;

pub use print::PrintDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

pub trait DisplayPort: Send + Sync {
    fn show_story(&self, story: &Story);
    fn show_status(&self, message: &str, severity: Severity);
}

impl<T: DisplayPort + ?Sized> DisplayPort for Arc<T> {
    fn show_story(&self, story: &Story) {
        (**self).show_story(story)
    }

    fn show_status(&self, message: &str, severity: Severity) {
        (**self).show_status(message, severity)
    }
}
