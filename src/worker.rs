//! Background execution of extraction jobs
//!
//! Each job runs on its own thread; progress comes back over a channel that
//! the UI thread drains between frames. Jobs cannot be cancelled and
//! overlapping jobs are not prevented.

use crate::error::Result;
use crate::job::{ExtractionReport, ExtractionRequest};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::time::Duration;
use tracing::warn;

/// Identifier handed out per spawned job
pub type JobId = u64;

/// Progress reported by a job thread
#[derive(Debug)]
pub enum JobEvent {
    Started { job: JobId },
    Finished { job: JobId, report: ExtractionReport },
    Failed { job: JobId, message: String },
}

impl JobEvent {
    #[must_use]
    pub const fn job(&self) -> JobId {
        match self {
            Self::Started { job } | Self::Finished { job, .. } | Self::Failed { job, .. } => *job,
        }
    }
}

pub struct Worker {
    events_tx: mpsc::Sender<JobEvent>,
    events_rx: mpsc::Receiver<JobEvent>,
    next_job: JobId,
}

impl Default for Worker {
    fn default() -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            events_tx,
            events_rx,
            next_job: 1,
        }
    }
}

impl Worker {
    /// Run `request` on a new thread
    pub fn spawn(&mut self, request: ExtractionRequest) -> JobId {
        let job = self.next_job;
        self.next_job += 1;

        let tx = self.events_tx.clone();
        std::thread::spawn(move || run_job(job, &tx, || request.run()));

        job
    }

    /// Drain every event that has arrived so far
    pub fn try_events(&self) -> Vec<JobEvent> {
        self.events_rx.try_iter().collect()
    }

    /// Block for the next event, up to `timeout`
    pub fn wait_event(&self, timeout: Duration) -> Option<JobEvent> {
        self.events_rx.recv_timeout(timeout).ok()
    }
}

fn run_job<F>(job: JobId, tx: &mpsc::Sender<JobEvent>, run: F)
where
    F: FnOnce() -> Result<ExtractionReport>,
{
    let _ = tx.send(JobEvent::Started { job });

    let outcome = match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    };

    let event = match outcome {
        Ok(report) => JobEvent::Finished { job, report },
        Err(message) => {
            warn!("Extraction job {job} failed: {message}");
            JobEvent::Failed { job, message }
        }
    };

    let _ = tx.send(event);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    format!("Extraction panicked: {detail}")
}
