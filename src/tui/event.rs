use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

use crate::app::Result;
use crate::display::Severity;
use crate::domain::Story;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

/// What the scheduler asked the screen to show.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    Story(Story),
    Status(String, Severity),
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            // Windows reports key releases too
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(AppEvent::Key(key));
                }
            }
        }
        Ok(AppEvent::Tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Previous,
    Refresh,
    ScrollUp,
    ScrollDown,
    None,
}
