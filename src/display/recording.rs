use std::sync::Mutex;

use crate::display::{DisplayPort, Severity};
use crate::domain::Story;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Story(String),
    Status(String, Severity),
}

/// Remembers everything pushed to it.
#[derive(Default)]
pub struct RecordingDisplay {
    events: Mutex<Vec<Shown>>,
}

impl RecordingDisplay {
    pub fn events(&self) -> Vec<Shown> {
        self.events.lock().unwrap().clone()
    }

    pub fn stories(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Shown::Story(title) => Some(title),
                Shown::Status(..) => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<(String, Severity)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Shown::Status(message, severity) => Some((message, severity)),
                Shown::Story(_) => None,
            })
            .collect()
    }
}

impl DisplayPort for RecordingDisplay {
    fn show_story(&self, story: &Story) {
        self.events
            .lock()
            .unwrap()
            .push(Shown::Story(story.title.clone()));
    }

    fn show_status(&self, message: &str, severity: Severity) {
        self.events
            .lock()
            .unwrap()
            .push(Shown::Status(message.to_string(), severity));
    }
}
