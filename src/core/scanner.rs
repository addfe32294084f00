use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use super::aggregator::ResultAggregator;
use super::progress::ProgressReporter;
use super::result::{ResultSet, ScanReport};
use crate::config::ScannerConfig;
use crate::errors::ScanError;
use crate::feeders::partition::partition;
use crate::feeders::range::AddressSpace;
use crate::fetchers::traits::Prober;

pub struct Scanner {
    prober: Arc<dyn Prober>,
    config: Arc<ScannerConfig>,
}

impl Scanner {
    pub fn new(prober: Arc<dyn Prober>, config: Arc<ScannerConfig>) -> Self {
        Self { prober, config }
    }

    /// Sweeps every address of `cidr`. Range and worker errors are returned
    /// before any task is spawned; after that only a failed worker task
    /// aborts the scan.
    pub async fn scan(&self, cidr: &str) -> Result<ScanReport, ScanError> {
        let space = AddressSpace::from_cidr(cidr)?;
        let addresses = space.addresses()?;
        let total = addresses.len();
        let chunks = partition(&addresses, self.config.workers)?;
        drop(addresses);

        info!(
            "Starting {} scan of {} ({} addresses) with {} workers",
            self.config.mode, cidr, total, self.config.workers
        );

        let aggregator = Arc::new(ResultAggregator::new());
        let mut reporter = ProgressReporter::new(
            aggregator.counter(),
            self.config.progress_interval(),
            self.config.show_progress,
        );

        let started_at = Utc::now();
        let started = Instant::now();
        reporter.start(total);

        let mut tasks = JoinSet::new();
        for (index, chunk) in chunks.into_iter().enumerate() {
            let prober = self.prober.clone();
            let aggregator = aggregator.clone();

            tasks.spawn(async move {
                debug!("Worker {} started with {} addresses", index, chunk.len());
                for address in chunk {
                    if let Some(result) = prober.probe(address).await {
                        aggregator.record(result).await;
                    }
                    aggregator.mark_complete();
                }
                debug!("Worker {} finished", index);
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                error!("Worker task failed: {}", e);
                tasks.abort_all();
                reporter.abandon();
                return Err(ScanError::WorkerFailed(e.to_string()));
            }
        }

        reporter.finish().await;
        let elapsed = started.elapsed();

        let results = aggregator.snapshot().await;
        let scanned = aggregator.completed();
        info!(
            "Scan completed. {} of {} addresses matched in {:?}",
            results.len(),
            scanned,
            elapsed
        );

        Ok(ScanReport {
            network: cidr.to_string(),
            mode: self.config.mode,
            prober: self.prober.id(),
            started_at,
            elapsed,
            scanned,
            results: ResultSet::from_results(self.config.mode, results),
        })
    }
}
