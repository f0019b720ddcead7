use crate::display::Severity;
use crate::domain::Story;
use crate::tui::event::DisplayEvent;

/// Screen state: the story being shown and the last status line.
pub struct TuiApp {
    pub story: Option<Story>,
    pub status: Option<(String, Severity)>,
    pub scroll: u16,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            story: None,
            status: None,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn apply(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::Story(story) => {
                self.story = Some(story);
                self.scroll = 0;
            }
            DisplayEvent::Status(message, severity) => {
                self.status = Some((message, severity));
            }
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.story.is_some() {
            self.scroll = self.scroll.saturating_add(1);
        }
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
