use std::sync::Arc;

use super::dns_server::{DnsServerProber, TcpDialer};
use super::hostname::{DnsResolver, HostnameProber};
use super::traits::Prober;
use crate::config::{ProbeMode, ScannerConfig};
use crate::errors::ScanError;

/// Builds the single prober a scan runs with, wired to the production
/// resolver or dialer.
pub fn select_prober(config: &ScannerConfig) -> Result<Arc<dyn Prober>, ScanError> {
    config.validate()?;

    match config.mode {
        ProbeMode::ReverseDns => {
            let server = config.dns_server.ok_or_else(|| {
                ScanError::InvalidConfig("reverse lookups need a DNS server".to_string())
            })?;
            let resolver = DnsResolver::new(server, config.dns_port, config.lookup_timeout());
            Ok(Arc::new(HostnameProber::new(
                Arc::new(resolver),
                config.lookup_timeout(),
            )))
        }
        ProbeMode::DnsDiscovery => Ok(Arc::new(DnsServerProber::new(
            Arc::new(TcpDialer::new()),
            config.dns_port,
            config.connect_timeout(),
        ))),
    }
}
