use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::time::Duration;

use crate::core::result::ProbeResult;
use crate::errors::ScanError;

/// One probe strategy, applied to every address of a scan. A miss or any
/// per-address failure is `None`; probes never fail the scan.
#[async_trait]
pub trait Prober: Send + Sync {
    fn id(&self) -> String;
    fn name(&self) -> String;
    async fn probe(&self, address: Ipv4Addr) -> Option<ProbeResult>;
}

/// PTR lookups against an upstream server chosen by the implementation.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn reverse_lookup(
        &self,
        address: Ipv4Addr,
        timeout: Duration,
    ) -> Result<Vec<String>, ScanError>;
}

#[async_trait]
pub trait Dialer: Send + Sync {
    async fn connect(&self, address: Ipv4Addr, port: u16, timeout: Duration)
    -> Result<(), ScanError>;
}
