//! UI state for the extractor window, independent of any toolkit
//!
//! The front-end binds its widgets to the public fields, calls the action
//! methods on clicks and calls [`Session::poll`] once per frame. All state
//! changes happen on the thread that owns the session.

use crate::extractor::{DedupCasing, ExtractOptions};
use crate::io::default_output_path;
use crate::job::ExtractionRequest;
use crate::worker::{JobEvent, JobId, Worker};
use std::path::Path;
use std::time::{Duration, Instant};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_EXTRACTING: &str = "Extracting...";

/// A message the front-end should show in a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Error(m) | Self::Info(m) => m,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

pub struct Session {
    pub input: String,
    pub output: String,
    pub deduplicate: bool,
    pub casing: DedupCasing,
    pub status: String,
    pub preview: String,
    running: usize,
    worker: Worker,
}

impl Default for Session {
    fn default() -> Self {
        let options = ExtractOptions::default();
        Self {
            input: String::new(),
            output: String::new(),
            deduplicate: options.deduplicate,
            casing: options.casing,
            status: STATUS_READY.to_string(),
            preview: String::new(),
            running: 0,
            worker: Worker::default(),
        }
    }
}

impl Session {
    #[must_use]
    pub const fn options(&self) -> ExtractOptions {
        ExtractOptions {
            deduplicate: self.deduplicate,
            casing: self.casing,
        }
    }

    /// Number of jobs started but not yet finished
    #[must_use]
    pub const fn running(&self) -> usize {
        self.running
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running > 0
    }

    /// Set the input path, suggesting an output path if none is set yet
    pub fn choose_input(&mut self, path: &Path) {
        self.input = path.display().to_string();
        if self.output.trim().is_empty() {
            self.output = default_output_path(path).display().to_string();
        }
    }

    pub fn choose_output(&mut self, path: &Path) {
        self.output = path.display().to_string();
    }

    /// Validate the form and hand the job to the worker
    pub fn start(&mut self) -> Result<JobId, Notice> {
        let request = ExtractionRequest::from_fields(&self.input, &self.output, self.options())
            .map_err(|e| Notice::Error(e.to_string()))?;

        self.running += 1;
        self.status = STATUS_EXTRACTING.to_string();
        Ok(self.worker.spawn(request))
    }

    /// Apply every pending worker event
    pub fn poll(&mut self) -> Vec<Notice> {
        self.worker
            .try_events()
            .into_iter()
            .filter_map(|event| self.apply(event))
            .collect()
    }

    /// Apply events until no job is running or `timeout` elapses
    pub fn wait_idle(&mut self, timeout: Duration) -> Vec<Notice> {
        let deadline = Instant::now() + timeout;
        let mut notices = Vec::new();

        while self.is_running() {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                break;
            }
            match self.worker.wait_event(left) {
                Some(event) => notices.extend(self.apply(event)),
                None => break,
            }
        }

        notices
    }

    /// Reset the form. A job already running still reports back.
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.preview.clear();
        self.status = STATUS_READY.to_string();
    }

    fn apply(&mut self, event: JobEvent) -> Option<Notice> {
        match event {
            JobEvent::Started { .. } => {
                self.status = STATUS_EXTRACTING.to_string();
                None
            }
            JobEvent::Finished { report, .. } => {
                self.running = self.running.saturating_sub(1);
                self.preview = report.preview().render();
                self.status = report.status_line();
                Some(Notice::Info(format!("Extracted {} emails", report.count())))
            }
            JobEvent::Failed { message, .. } => {
                self.running = self.running.saturating_sub(1);
                Some(Notice::Error(message))
            }
        }
    }
}
