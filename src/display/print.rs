use std::io::Write;
use std::sync::Mutex;

use chrono::Local;

use crate::display::{DisplayPort, Severity};
use crate::domain::Story;

/// Writes each update as timestamped lines. Used by `feedwheel watch`.
pub struct PrintDisplay<W: Write + Send> {
    out: Mutex<W>,
}

impl PrintDisplay<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> PrintDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lines(&self, lines: &[String]) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        for line in lines {
            let _ = writeln!(out, "[{}] {}", timestamp, line);
        }
        let _ = out.flush();
    }
}

impl<W: Write + Send> DisplayPort for PrintDisplay<W> {
    fn show_story(&self, story: &Story) {
        self.write_lines(&[
            story.title.clone(),
            format!("  {}", story.meta_line()),
            format!("  {}", story.summary),
        ]);
    }

    fn show_status(&self, message: &str, severity: Severity) {
        let line = match severity {
            Severity::Info => format!("-- {}", message),
            Severity::Warning => format!("!! {}", message),
            Severity::Error => format!("!! ERROR {}", message),
        };
        self.write_lines(&[line]);
    }
}
