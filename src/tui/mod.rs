pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::warn;

use crate::app::{AppContext, Result};
use crate::display::{DisplayPort, Severity};
use crate::domain::Story;
use crate::rotation::{RotationScheduler, SchedulerHandle};

use self::app::TuiApp;
use self::event::{Action, AppEvent, DisplayEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Forwards what the scheduler shows to the draw loop.
pub struct TuiDisplay {
    events: mpsc::UnboundedSender<DisplayEvent>,
}

impl TuiDisplay {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DisplayEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (Self { events }, rx)
    }

    fn send(&self, event: DisplayEvent) {
        // The receiver only goes away once the screen is torn down.
        let _ = self.events.send(event);
    }
}

impl DisplayPort for TuiDisplay {
    fn show_story(&self, story: &Story) {
        self.send(DisplayEvent::Story(story.clone()));
    }

    fn show_status(&self, message: &str, severity: Severity) {
        self.send(DisplayEvent::Status(message.to_string(), severity));
    }
}

pub async fn run(ctx: &AppContext) -> Result<()> {
    let (display, events) = TuiDisplay::new();
    let (handle, scheduler) =
        RotationScheduler::spawn(ctx.pipeline.clone(), Arc::new(display), ctx.intervals());

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, &handle, events).await;
    restore_terminal(&mut terminal)?;

    handle.shutdown().await;
    if let Err(e) = scheduler.await {
        warn!("Rotation task ended abnormally: {}", e);
    }

    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Tui,
    ctx: &AppContext,
    handle: &SchedulerHandle,
    mut events: mpsc::UnboundedReceiver<DisplayEvent>,
) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let keybindings = &ctx.config.keybindings;
    let hint = keybindings.hint();

    loop {
        while let Ok(event) = events.try_recv() {
            tui_app.apply(event);
        }

        terminal.draw(|frame| layout::render(frame, &tui_app, &ctx.config.colors, &hint))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match keybindings.get_action(&key) {
                Action::Quit => tui_app.should_quit = true,
                Action::Next => handle.advance().await,
                Action::Previous => handle.retreat().await,
                Action::Refresh => handle.refresh_now().await,
                Action::ScrollUp => tui_app.scroll_up(),
                Action::ScrollDown => tui_app.scroll_down(),
                Action::None => {}
            },
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::tests::{at, story};

    #[test]
    fn test_tui_display_forwards_events() {
        let (display, mut events) = TuiDisplay::new();
        display.show_status("Refreshing feeds...", Severity::Info);
        display.show_story(&story("one", at(1)));

        assert_eq!(
            events.try_recv().unwrap(),
            DisplayEvent::Status("Refreshing feeds...".into(), Severity::Info)
        );
        assert_eq!(
            events.try_recv().unwrap(),
            DisplayEvent::Story(story("one", at(1)))
        );
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_tui_display_survives_closed_screen() {
        let (display, events) = TuiDisplay::new();
        drop(events);
        display.show_status("late", Severity::Warning);
    }
}
