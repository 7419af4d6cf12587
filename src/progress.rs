//! Progress capabilities handed to core logic by the caller.
//!
//! Core code never touches the console; it reports through these traits and
//! the CLI decides how (or whether) to draw anything.

use crate::model::Cluster;
use std::sync::atomic::{AtomicU64, Ordering};

/// Receives (current, total) counts during listings and batch work.
///
/// Called once per fetched page or processed item, so implementations must
/// return quickly and never block.
pub trait ProgressSink: Send + Sync {
    fn report(&self, current: u64, total: u64);
}

/// Sink that drops every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _current: u64, _total: u64) {}
}

/// Sink that remembers the last report. Useful for summaries and tests.
#[derive(Debug, Default)]
pub struct LastProgress {
    current: AtomicU64,
    total: AtomicU64,
}

impl LastProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> (u64, u64) {
        (
            self.current.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
        )
    }
}

impl ProgressSink for LastProgress {
    fn report(&self, current: u64, total: u64) {
        self.current.store(current, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }
}

/// Remote side effect issued by the readiness poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Start,
    Terminate,
}

impl LifecycleAction {
    pub fn verb(self) -> &'static str {
        match self {
            LifecycleAction::Start => "start",
            LifecycleAction::Terminate => "terminate",
        }
    }

    pub fn gerund(self) -> &'static str {
        match self {
            LifecycleAction::Start => "Starting",
            LifecycleAction::Terminate => "Terminating",
        }
    }
}

/// Observer for cluster start/stop transitions.
pub trait LifecycleObserver: Send + Sync {
    /// A start or terminate request is about to be sent for `cluster`.
    fn request_sent(&self, _action: LifecycleAction, _cluster: &Cluster) {}

    /// A poll tick re-fetched `cluster`.
    fn state_observed(&self, _cluster: &Cluster) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl LifecycleObserver for SilentObserver {}
