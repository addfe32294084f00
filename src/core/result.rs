use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use std::time::Duration;

use crate::config::ProbeMode;

/// One hit. `payload` holds PTR names for reverse lookups and stays empty
/// for DNS server discovery, where the address alone is the finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    address: Ipv4Addr,
    payload: Vec<String>,
}

impl ProbeResult {
    pub fn new(address: Ipv4Addr, payload: Vec<String>) -> Self {
        Self { address, payload }
    }

    pub fn reachable(address: Ipv4Addr) -> Self {
        Self::new(address, Vec::new())
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn payload(&self) -> &[String] {
        &self.payload
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultSet {
    /// `[{"10.0.0.1": ["gw.example."]}, ...]` in recording order.
    Hostnames(Vec<BTreeMap<String, Vec<String>>>),
    DnsServers(Vec<String>),
}

impl ResultSet {
    pub fn from_results(mode: ProbeMode, results: Vec<ProbeResult>) -> Self {
        match mode {
            ProbeMode::ReverseDns => ResultSet::Hostnames(
                results
                    .into_iter()
                    .map(|r| BTreeMap::from([(r.address.to_string(), r.payload)]))
                    .collect(),
            ),
            ProbeMode::DnsDiscovery => ResultSet::DnsServers(
                results.iter().map(|r| r.address.to_string()).collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ResultSet::Hostnames(entries) => entries.len(),
            ResultSet::DnsServers(servers) => servers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultSet::Hostnames(_) => "Hostnames",
            ResultSet::DnsServers(_) => "DNS Servers",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub network: String,
    pub mode: ProbeMode,
    pub prober: String,
    pub started_at: DateTime<Utc>,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub scanned: usize,
    pub results: ResultSet,
}

fn serialize_millis<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(elapsed.as_millis() as u64)
}
