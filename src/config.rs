use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

use crate::errors::ScanError;

/// Which probe runs against every address of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeMode {
    /// PTR lookup of each address through one upstream DNS server.
    ReverseDns,
    /// TCP connect to the DNS port of each address.
    DnsDiscovery,
}

impl fmt::Display for ProbeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeMode::ReverseDns => write!(f, "reverse-dns"),
            ProbeMode::DnsDiscovery => write!(f, "dns-discovery"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub workers: usize,
    pub mode: ProbeMode,
    pub dns_server: Option<Ipv4Addr>,
    pub dns_port: u16,
    pub lookup_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub progress_interval_ms: u64,
    pub show_progress: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            mode: ProbeMode::ReverseDns,
            dns_server: None,
            dns_port: 53,
            lookup_timeout_ms: 1000,
            connect_timeout_ms: 1000,
            progress_interval_ms: 100,
            show_progress: true,
        }
    }
}

impl ScannerConfig {
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.workers < 1 {
            return Err(ScanError::InvalidConfig(
                "number of workers must be a positive integer".to_string(),
            ));
        }
        if self.lookup_timeout_ms == 0 || self.connect_timeout_ms == 0 {
            return Err(ScanError::InvalidConfig(
                "probe timeouts must be non-zero".to_string(),
            ));
        }
        if self.progress_interval_ms == 0 {
            return Err(ScanError::InvalidConfig(
                "progress interval must be non-zero".to_string(),
            ));
        }
        if self.mode == ProbeMode::ReverseDns && self.dns_server.is_none() {
            return Err(ScanError::InvalidConfig(
                "reverse lookups need a DNS server".to_string(),
            ));
        }
        Ok(())
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }
}
