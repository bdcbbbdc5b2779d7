//! Run-status reporting and cooperative cancellation
//!
//! The orchestrator reports run-level status through the narrow [`LogSink`]
//! interface instead of a process-global logger, so a front end can supply
//! its own sink (say, one that appends to a display widget) without touching
//! the pipeline. The CLI uses [`TracingSink`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Coarse progress milestones reported during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// Run accepted, nothing fetched yet.
    Started,
    /// Fetch and extraction finished, sinks not yet written.
    Scraped,
    /// Sinks written, run complete.
    Finished,
}

impl Milestone {
    /// The percentage a progress indicator should show for this milestone.
    pub fn percent(self) -> u8 {
        match self {
            Milestone::Started => 0,
            Milestone::Scraped => 50,
            Milestone::Finished => 100,
        }
    }
}

/// Severity-tagged status sink the orchestrator depends on abstractly.
pub trait LogSink: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);

    /// Coarse milestone progress. Front ends map this onto an indicator;
    /// the default implementation ignores it.
    fn progress(&self, milestone: Milestone) {
        let _ = milestone;
    }
}

/// Sink that forwards every status line to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn progress(&self, milestone: Milestone) {
        tracing::debug!("progress: {}%", milestone.percent());
    }
}

/// Cooperative stop flag.
///
/// The crawl loop polls this between page iterations and between detail
/// fetches; a request already in flight completes before the stop takes
/// effect, so cancellation is best-effort rather than preemptive.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop. Safe to call from another thread.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
