use async_trait::async_trait;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

use super::traits::{Dialer, Prober};
use crate::core::result::ProbeResult;
use crate::errors::ScanError;

pub struct TcpDialer;

impl TcpDialer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TcpDialer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dialer for TcpDialer {
    async fn connect(
        &self,
        address: Ipv4Addr,
        port: u16,
        connect_timeout: Duration,
    ) -> Result<(), ScanError> {
        let target = SocketAddrV4::new(address, port);
        match timeout(connect_timeout, TcpStream::connect(target)).await {
            // Dropping the stream closes it; nothing is exchanged.
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(e)) => Err(ScanError::Network(e.to_string())),
            Err(_) => Err(ScanError::Timeout),
        }
    }
}

/// Flags addresses that accept TCP connections on the DNS port.
pub struct DnsServerProber {
    dialer: Arc<dyn Dialer>,
    port: u16,
    timeout: Duration,
}

impl DnsServerProber {
    pub fn new(dialer: Arc<dyn Dialer>, port: u16, timeout: Duration) -> Self {
        Self {
            dialer,
            port,
            timeout,
        }
    }
}

#[async_trait]
impl Prober for DnsServerProber {
    fn id(&self) -> String {
        "dns_server".to_string()
    }

    fn name(&self) -> String {
        "DNS Server".to_string()
    }

    async fn probe(&self, address: Ipv4Addr) -> Option<ProbeResult> {
        match self.dialer.connect(address, self.port, self.timeout).await {
            Ok(()) => {
                trace!("{}:{}: accepting connections", address, self.port);
                Some(ProbeResult::reachable(address))
            }
            Err(e) => {
                trace!("{}:{}: {}", address, self.port, e);
                None
            }
        }
    }
}
