// src/telemetry.rs
//! Logging and metrics plumbing.
//!
//! The library only emits `tracing` events and `metrics` counters; installing a
//! subscriber or a recorder is left to binaries (`init_tracing`,
//! `install_prometheus`). Comment text is never logged raw, only as `anon_hash`.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::sentiment::{ScoringPath, SentimentLabel};

pub const TEXTS_TOTAL: &str = "sentiment_texts_total";
pub const POLARITY_FAILURES_TOTAL: &str = "sentiment_polarity_failures_total";
pub const BATCHES_TOTAL: &str = "sentiment_batches_total";
pub const BATCH_SIZE: &str = "sentiment_batch_size";
pub const POSTS_TOTAL: &str = "sentiment_posts_total";

const DEFAULT_FILTER: &str = "thai_sentiment_analyzer=info,thai_sentiment=info,warn";

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default
/// filter; `json` switches to one JSON object per line.
/// Safe to call more than once (later calls are no-ops).
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
    };
}

/// Install the Prometheus recorder; render the exposition with `handle.render()`.
pub fn install_prometheus() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))?;
    Ok(handle)
}

/// Short stable id for a text (first 6 bytes of SHA-256, hex).
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

pub(crate) fn record_text(label: SentimentLabel, path: ScoringPath) {
    counter!(TEXTS_TOTAL, "label" => label.as_str(), "path" => path.as_str()).increment(1);
}

pub(crate) fn record_polarity_failure() {
    counter!(POLARITY_FAILURES_TOTAL).increment(1);
}

pub(crate) fn record_batch(size: usize) {
    counter!(BATCHES_TOTAL).increment(1);
    histogram!(BATCH_SIZE).record(size as f64);
}

pub(crate) fn record_post() {
    counter!(POSTS_TOTAL).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anon_hash_is_short_and_stable() {
        let a = anon_hash("ดีมาก");
        assert_eq!(a.len(), 12);
        assert_eq!(a, anon_hash("ดีมาก"));
        assert_ne!(a, anon_hash("แย่มาก"));
    }
}
