use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterState {
    Idle,
    Running,
    Stopped,
}

/// Polls the completion counter on its own task and mirrors it into a
/// progress bar. Never touches the result lock.
pub struct ProgressReporter {
    bar: ProgressBar,
    counter: Arc<AtomicUsize>,
    interval: Duration,
    total: usize,
    state: ReporterState,
    handle: Option<JoinHandle<()>>,
}

impl ProgressReporter {
    pub fn new(counter: Arc<AtomicUsize>, interval: Duration, visible: bool) -> Self {
        let bar = ProgressBar::hidden();
        if visible {
            bar.set_draw_target(ProgressDrawTarget::stderr());
        }
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:50}] {percent:>3}% {pos:>8}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );

        Self {
            bar,
            counter,
            interval,
            total: 0,
            state: ReporterState::Idle,
            handle: None,
        }
    }

    pub fn state(&self) -> ReporterState {
        self.state
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn start(&mut self, total: usize) {
        if self.state != ReporterState::Idle {
            return;
        }

        self.total = total;
        self.bar.set_length(total as u64);
        self.state = ReporterState::Running;

        let bar = self.bar.clone();
        let counter = self.counter.clone();
        let interval = self.interval;

        self.handle = Some(tokio::spawn(async move {
            loop {
                let done = counter.load(Ordering::Acquire);
                bar.set_position(done as u64);
                if done >= total {
                    break;
                }
                tokio::time::sleep(interval).await;
            }
        }));
    }

    /// Waits for the poll loop to see the final count, then renders the
    /// 100% line regardless of where the last poll landed.
    pub async fn finish(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                debug!("Progress task ended abnormally: {}", e);
            }
        }
        self.bar.set_position(self.counter.load(Ordering::Acquire) as u64);
        self.bar.finish();
        self.state = ReporterState::Stopped;
    }

    pub fn abandon(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.bar.abandon();
        self.state = ReporterState::Stopped;
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
