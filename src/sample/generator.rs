//! Hostname sample generator

use std::io::Write;

use super::{RandomSource, ServerPool};
use crate::error::{HostGenError, Result};
use crate::output::write_hosts;
use crate::types::{Coin, SampleConfig};

/// Domain part of `host`: everything after the first '.'
pub fn domain(host: &str) -> Result<&str> {
    host.split_once('.')
        .map(|(_, rest)| rest)
        .ok_or_else(|| HostGenError::malformed_input(host))
}

/// Sort hosts by domain. Stable, so equal domains keep insertion order.
pub fn sort_by_domain(hosts: Vec<String>) -> Result<Vec<String>> {
    let mut keyed = hosts
        .into_iter()
        .map(|host| {
            let key = domain(&host)?.to_string();
            Ok((key, host))
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(keyed.into_iter().map(|(_, host)| host).collect())
}

/// Generator for one run of synthetic hostnames
pub struct HostGenerator<S> {
    config: SampleConfig,
    source: S,
}

impl<S: RandomSource> HostGenerator<S> {
    /// Create a generator, rejecting wordlists that can't yield hosts
    pub fn new(config: SampleConfig, source: S) -> Result<Self> {
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "Rejected sample configuration");
            return Err(e);
        }
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Produce `count` hosts sorted by domain
    pub fn generate(&mut self) -> Result<Vec<String>> {
        let config = &self.config;
        let source = &mut self.source;

        let mut pool = ServerPool::shuffled(&config.servers, source);
        let mut hosts = Vec::with_capacity(config.count);

        for i in 0..config.count {
            let domain = config.domains[source.pick(config.domains.len())];
            let coin = source.flip();
            let label = match coin {
                Coin::Heads => pool.take()?,
                Coin::Tails => config.subdomains[source.pick(config.subdomains.len())],
            };

            let host = format!("{}.{}", label, domain);
            tracing::debug!(index = i, coin = %coin, host = %host, "Composed host");
            hosts.push(host);
        }

        let hosts = sort_by_domain(hosts)?;

        tracing::info!(
            count = hosts.len(),
            servers_left = pool.remaining(),
            "Generated host sample"
        );

        Ok(hosts)
    }
}

/// Generate a sample and write it as quoted, comma-terminated lines
pub fn run<S: RandomSource, W: Write>(config: SampleConfig, source: S, out: &mut W) -> Result<()> {
    let mut generator = HostGenerator::new(config, source)?;
    let hosts = generator.generate()?;
    write_hosts(out, &hosts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::ScriptedSource;

    fn small_config(count: usize) -> SampleConfig {
        SampleConfig {
            count,
            domains: vec!["a.com", "b.com"],
            subdomains: vec!["www"],
            servers: vec!["srv1"],
        }
    }

    #[test]
    fn test_domain_extraction() {
        assert_eq!(domain("www.example.com"), Ok("example.com"));
        assert_eq!(domain("a.b.c"), Ok("b.c"));
        assert_eq!(domain("trailing."), Ok(""));
    }

    #[test]
    fn test_domain_malformed() {
        assert_eq!(
            domain("localhost"),
            Err(HostGenError::malformed_input("localhost"))
        );
    }

    #[test]
    fn test_sort_by_domain_is_stable() {
        let hosts = vec![
            "z.b.com".to_string(),
            "y.a.com".to_string(),
            "x.b.com".to_string(),
            "w.a.com".to_string(),
        ];
        let sorted = sort_by_domain(hosts).unwrap();
        assert_eq!(sorted, vec!["y.a.com", "w.a.com", "z.b.com", "x.b.com"]);
    }

    #[test]
    fn test_sort_by_domain_rejects_malformed() {
        let hosts = vec!["ok.a.com".to_string(), "nodot".to_string()];
        assert!(matches!(
            sort_by_domain(hosts),
            Err(HostGenError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_all_tails_sorted_by_domain() {
        // picks: domain b, domain a, domain b; subdomain picks default to 0
        let source = ScriptedSource::new(
            [Coin::Tails, Coin::Tails, Coin::Tails],
            [1, 0, 0, 0, 1, 0],
        );
        let mut generator = HostGenerator::new(small_config(3), source).unwrap();
        let hosts = generator.generate().unwrap();
        assert_eq!(hosts, vec!["www.a.com", "www.b.com", "www.b.com"]);
    }

    #[test]
    fn test_heads_consumes_server() {
        let source = ScriptedSource::with_coins([Coin::Heads, Coin::Tails]);
        let mut generator = HostGenerator::new(small_config(2), source).unwrap();
        let hosts = generator.generate().unwrap();
        assert_eq!(hosts, vec!["srv1.a.com", "www.a.com"]);
    }

    #[test]
    fn test_second_heads_underflows() {
        let source = ScriptedSource::with_coins([Coin::Heads, Coin::Heads]);
        let mut generator = HostGenerator::new(small_config(2), source).unwrap();
        assert_eq!(
            generator.generate(),
            Err(HostGenError::underflow("server"))
        );
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut generator =
            HostGenerator::new(small_config(0), ScriptedSource::default()).unwrap();
        assert!(generator.generate().unwrap().is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SampleConfig {
            domains: vec![],
            ..small_config(1)
        };
        assert!(HostGenerator::new(config, ScriptedSource::default()).is_err());
    }

    #[test]
    fn test_run_writes_lines() {
        let mut out = Vec::new();
        let source = ScriptedSource::with_coins([Coin::Tails]);
        run(small_config(1), source, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\"www.a.com\",\n");
    }

    #[test]
    fn test_run_underflow_writes_nothing() {
        let mut out = Vec::new();
        let source = ScriptedSource::with_coins([Coin::Heads, Coin::Heads]);
        assert!(run(small_config(2), source, &mut out).is_err());
        assert!(out.is_empty());
    }
}
