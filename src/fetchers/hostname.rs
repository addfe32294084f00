use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::trace;

use super::traits::{Prober, Resolver};
use crate::core::result::ProbeResult;
use crate::errors::ScanError;

/// Resolver pinned to a single upstream name server, no cache, one attempt.
pub struct DnsResolver {
    resolver: TokioAsyncResolver,
}

impl DnsResolver {
    pub fn new(server: Ipv4Addr, port: u16, lookup_timeout: Duration) -> Self {
        let name_servers = NameServerConfigGroup::from_ips_clear(&[IpAddr::V4(server)], port, true);
        let config = ResolverConfig::from_parts(None, Vec::new(), name_servers);

        let mut opts = ResolverOpts::default();
        opts.timeout = lookup_timeout;
        opts.attempts = 1;
        opts.cache_size = 0;
        opts.use_hosts_file = false;

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl Resolver for DnsResolver {
    async fn reverse_lookup(
        &self,
        address: Ipv4Addr,
        lookup_timeout: Duration,
    ) -> Result<Vec<String>, ScanError> {
        let lookup = timeout(
            lookup_timeout,
            self.resolver.reverse_lookup(IpAddr::V4(address)),
        )
        .await
        .map_err(|_| ScanError::Timeout)?
        .map_err(|e| match e.kind() {
            ResolveErrorKind::NoRecordsFound { .. } => ScanError::NotFound,
            ResolveErrorKind::Timeout => ScanError::Timeout,
            _ => ScanError::Network(e.to_string()),
        })?;

        Ok(lookup.iter().map(|name| name.to_string()).collect())
    }
}

pub struct HostnameProber {
    resolver: Arc<dyn Resolver>,
    timeout: Duration,
}

impl HostnameProber {
    pub fn new(resolver: Arc<dyn Resolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }
}

#[async_trait]
impl Prober for HostnameProber {
    fn id(&self) -> String {
        "hostname".to_string()
    }

    fn name(&self) -> String {
        "Hostname".to_string()
    }

    async fn probe(&self, address: Ipv4Addr) -> Option<ProbeResult> {
        match self.resolver.reverse_lookup(address, self.timeout).await {
            Ok(names) if !names.is_empty() => {
                trace!("{}: {}", address, names.join(", "));
                Some(ProbeResult::new(address, names))
            }
            Ok(_) => {
                trace!("{}: no PTR records", address);
                None
            }
            Err(e) => {
                trace!("{}: {}", address, e);
                None
            }
        }
    }
}
