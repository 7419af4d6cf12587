//! Console feedback on stderr: indicatif progress bars and poll-tick dots.

use crate::model::Cluster;
use crate::progress::{LifecycleAction, LifecycleObserver, ProgressSink};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Progress bar drawn on stderr; hidden when stderr is not a terminal.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(message.to_string());
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for ConsoleProgress {
    fn report(&self, current: u64, total: u64) {
        self.bar.set_length(total);
        self.bar.set_position(current);
    }
}

/// Prints "Starting cluster ..." once and a `.STATE` marker per poll, all on one line.
#[derive(Debug, Default)]
pub struct ConsoleObserver {
    line_open: AtomicBool,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminate the status line if anything was printed on it.
    pub fn finish_line(&self) {
        if self.line_open.swap(false, Ordering::Relaxed) {
            eprintln!();
        }
    }

    fn emit(&self, text: &str) {
        eprint!("{}", text);
        let _ = std::io::stderr().flush();
        self.line_open.store(true, Ordering::Relaxed);
    }
}

impl LifecycleObserver for ConsoleObserver {
    fn request_sent(&self, action: LifecycleAction, cluster: &Cluster) {
        self.emit(&format!(
            "{} cluster {} ({})",
            action.gerund(),
            cluster.name,
            cluster.id
        ));
    }

    fn state_observed(&self, cluster: &Cluster) {
        self.emit(&format!(".{}", cluster.state));
    }
}
