use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use super::result::ProbeResult;

/// Shared sink for every worker of a scan. Appends are serialized by the
/// mutex; the completion counter is a separate atomic so the progress
/// reporter never contends with writers.
pub struct ResultAggregator {
    results: Mutex<Vec<ProbeResult>>,
    completed: Arc<AtomicUsize>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(Vec::new()),
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn record(&self, result: ProbeResult) {
        self.results.lock().await.push(result);
    }

    /// Called once per examined address, hit or miss.
    pub fn mark_complete(&self) {
        self.completed.fetch_add(1, Ordering::Release);
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.completed.clone()
    }

    /// Only meaningful once every worker has been joined.
    pub async fn snapshot(&self) -> Vec<ProbeResult> {
        self.results.lock().await.clone()
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}
