//! Core types and structures for demo-hosts

use crate::error::Result;
use crate::sample::words::{DEFAULT_COUNT, DOMAINS, SERVERS, SUBDOMAINS};
use crate::validation_error;

/// Outcome of a fair coin flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    /// Use the next server name from the pool
    Heads,
    /// Use a random subdomain keyword
    Tails,
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coin::Heads => write!(f, "heads"),
            Coin::Tails => write!(f, "tails"),
        }
    }
}

/// Parameters for one sample run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    pub count: usize,
    pub domains: Vec<&'static str>,
    pub subdomains: Vec<&'static str>,
    pub servers: Vec<&'static str>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            domains: DOMAINS.to_vec(),
            subdomains: SUBDOMAINS.to_vec(),
            servers: SERVERS.to_vec(),
        }
    }
}

impl SampleConfig {
    /// Check the wordlists can produce well-formed hosts
    pub fn validate(&self) -> Result<()> {
        if self.domains.is_empty() {
            return Err(validation_error!("domain list is empty"));
        }
        if self.subdomains.is_empty() {
            return Err(validation_error!("subdomain list is empty"));
        }
        if self.servers.is_empty() {
            return Err(validation_error!("server list is empty"));
        }

        if let Some(bad) = self.domains.iter().find(|d| !d.contains('.')) {
            return Err(validation_error!("domain '{}' has no '.'", bad));
        }

        let labels = self.subdomains.iter().chain(self.servers.iter());
        for label in labels {
            if label.is_empty() || label.contains('.') {
                return Err(validation_error!("'{}' is not a single label", label));
            }
        }

        Ok(())
    }

    /// True when the server pool cannot run dry, whatever the coin does
    pub fn is_underflow_safe(&self) -> bool {
        self.count <= self.servers.len()
    }
}

/// Default SSH port for demo host records
pub const DEFAULT_PORT: u16 = 22;

/// Source label shown for generated records
pub const DEMO_SOURCE: &str = "test data";

/// A generated hostname dressed up as an SSH host entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoHost {
    pub hostname: String,
    pub port: u16,
    pub source: String,
}

impl DemoHost {
    pub fn from_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: DEFAULT_PORT,
            source: DEMO_SOURCE.to_string(),
        }
    }

    pub fn ssh_url(&self) -> String {
        format!("ssh://{}:{}", self.hostname, self.port)
    }
}

/// Turn a generated sample into host records, keeping order
pub fn demo_hosts(hostnames: &[String]) -> Vec<DemoHost> {
    hostnames.iter().map(DemoHost::from_hostname).collect()
}
