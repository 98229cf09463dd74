//! Availability reporting.
//!
//! Emits one line per known domain after every round. Output is best-effort:
//! a write failure is logged and the monitor keeps running.

use std::io::{self, Write};

use crate::health::stats::Aggregator;

/// Writes availability lines to a sink (stdout in production).
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit the current availability of every probed domain.
    pub fn report(&mut self, stats: &Aggregator) {
        if let Err(e) = self.write_report(stats) {
            tracing::warn!(error = %e, "Failed to write availability report");
        }
    }

    fn write_report(&mut self, stats: &Aggregator) -> io::Result<()> {
        for (domain, s) in stats.all_domains() {
            if let Some(pct) = s.availability() {
                writeln!(self.out, "{}", format_line(domain, pct))?;
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `<domain> has <percentage>% availability percentage`
pub fn format_line(domain: &str, percentage: u8) -> String {
    format!("{} has {}% availability percentage", domain, percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn one_line_per_domain_in_first_seen_order() {
        let mut stats = Aggregator::new();
        stats.record("fetch.com", true);
        stats.record("fetch.com", false);
        stats.record("fetch.com", false);
        stats.record("www.fetchrewards.com", true);

        let mut reporter = Reporter::new(Vec::new());
        reporter.report(&stats);
        let out = String::from_utf8(reporter.into_inner()).unwrap();

        assert_eq!(
            out,
            "fetch.com has 33% availability percentage\n\
             www.fetchrewards.com has 100% availability percentage\n"
        );
    }

    #[test]
    fn empty_stats_print_nothing() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.report(&Aggregator::new());
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn write_errors_are_swallowed() {
        let mut stats = Aggregator::new();
        stats.record("a.com", true);
        let mut reporter = Reporter::new(BrokenPipe);
        reporter.report(&stats);
        reporter.report(&stats);
    }
}
