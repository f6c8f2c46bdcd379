use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Request metrics on a private registry.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    requests_total: IntCounterVec,
    response_items: HistogramVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        let requests_total = IntCounterVec::new(
            Opts::new("catalog_requests_total", "Catalog requests by method and outcome"),
            &["method", "status"],
        )?;
        let response_items = HistogramVec::new(
            HistogramOpts::new("catalog_response_items", "Items returned per successful catalog request")
                .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0]),
            &["method"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(response_items.clone()))?;
        Ok(Self { registry, requests_total, response_items })
    }

    /// `status` is `OK` or an error code name.
    pub fn observe(&self, method: &str, status: &str, items: Option<usize>) {
        self.requests_total.with_label_values(&[method, status]).inc();
        if let Some(n) = items {
            self.response_items.with_label_values(&[method]).observe(n as f64);
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| format!("metrics encode error: {e}"))?;
        String::from_utf8(buffer).map_err(|e| format!("metrics encode error: {e}"))
    }
}
