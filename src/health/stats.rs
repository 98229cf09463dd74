//! Per-domain availability counters.
//!
//! # Responsibilities
//! - Count UP and total probes per domain, cumulative for the whole run
//! - Compute the rounded availability percentage on demand
//!
//! # Design Decisions
//! - Domains are kept in first-seen order so reports are stable within a run
//! - Counters only grow; nothing is reset or evicted
//! - Single owner: the monitor holds it by value, no interior mutability

use std::collections::HashMap;

/// Counters for one domain. `up_count <= total_count` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainStats {
    up_count: u64,
    total_count: u64,
}

impl DomainStats {
    pub fn up_count(&self) -> u64 {
        self.up_count
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    fn record(&mut self, healthy: bool) {
        self.total_count += 1;
        if healthy {
            self.up_count += 1;
        }
    }

    /// Rounded availability in `[0, 100]`, or `None` before the first probe.
    ///
    /// Ties round half to even (`0.5 → 0`, `2.5 → 2`), done in integer
    /// arithmetic so large counters never lose precision.
    pub fn availability(&self) -> Option<u8> {
        if self.total_count == 0 {
            return None;
        }
        let scaled = 100 * u128::from(self.up_count);
        let total = u128::from(self.total_count);
        let mut pct = scaled / total;
        let twice_rem = 2 * (scaled % total);
        if twice_rem > total || (twice_rem == total && pct % 2 == 1) {
            pct += 1;
        }
        // up_count <= total_count bounds pct to 100.
        Some(pct as u8)
    }
}

/// Availability counters for every domain seen so far.
#[derive(Debug, Default)]
pub struct Aggregator {
    index: HashMap<String, usize>,
    domains: Vec<(String, DomainStats)>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one probe outcome for `domain`, creating its entry on first sight.
    pub fn record(&mut self, domain: &str, healthy: bool) {
        let slot = match self.index.get(domain) {
            Some(&slot) => slot,
            None => {
                let slot = self.domains.len();
                self.domains.push((domain.to_string(), DomainStats::default()));
                self.index.insert(domain.to_string(), slot);
                slot
            }
        };
        self.domains[slot].1.record(healthy);
    }

    pub fn stats(&self, domain: &str) -> Option<DomainStats> {
        self.index.get(domain).map(|&slot| self.domains[slot].1)
    }

    /// Rounded availability for `domain`; `None` if it has never been probed.
    pub fn availability(&self, domain: &str) -> Option<u8> {
        self.stats(domain).and_then(|s| s.availability())
    }

    /// All known domains in first-seen order.
    pub fn all_domains(&self) -> impl Iterator<Item = (&str, DomainStats)> + '_ {
        self.domains.iter().map(|(d, s)| (d.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
