use anyhow::{Context, Result};
use prometheus::{Encoder, TextEncoder};

use crate::pool::Pool;

/// Encoder and buffer reused between two scrapes.
pub struct PooledMetrics {
    pub encoder: TextEncoder,
    pub buffer:  Vec<u8>,
}

impl Default for PooledMetrics {
    fn default() -> Self {
        Self { encoder: TextEncoder::new(), buffer: vec![] }
    }
}

/// Content type of the text exposition format.
pub fn content_type() -> String { TextEncoder::new().format_type().to_string() }

/// Encode every metric of the default registry in the text exposition
/// format.
pub fn gather_text(pool: &Pool<PooledMetrics>) -> Result<String> {
    let mut pooled = pool.get();
    pooled.buffer.clear();

    let families = prometheus::gather();
    let encoded = pooled
        .encoder
        .encode(&families, &mut pooled.buffer)
        .context("Failed to encode the metrics");
    let text = encoded.and_then(|_| {
        String::from_utf8(pooled.buffer.clone())
            .context("Encoded metrics are not valid UTF-8")
    });

    pool.put(pooled);
    text
}
