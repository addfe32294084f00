pub mod config;
pub mod errors;

pub mod core {
    pub mod aggregator;
    pub mod progress;
    pub mod result;
    pub mod scanner;
}

pub mod fetchers {
    pub mod dns_server;
    pub mod hostname;
    pub mod registry;
    pub mod traits;
}

pub mod feeders {
    pub mod partition;
    pub mod range;
}

pub use config::{ProbeMode, ScannerConfig};
pub use core::aggregator::ResultAggregator;
pub use core::progress::{ProgressReporter, ReporterState};
pub use core::result::{ProbeResult, ResultSet, ScanReport};
pub use core::scanner::Scanner;
pub use errors::ScanError;
pub use feeders::partition::partition;
pub use feeders::range::{AddressSpace, RangeFeeder};
pub use fetchers::registry::select_prober;
pub use fetchers::traits::{Dialer, Prober, Resolver};
