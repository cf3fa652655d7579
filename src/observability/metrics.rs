use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder,
};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub requests_total: IntCounterVec,
    pub request_latency_seconds: HistogramVec,
    pub records_fetched: IntGaugeVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("admin_api_requests_total", "Backend requests by operation and outcome"),
            &["operation", "outcome"],
        )
        .expect("valid admin_api_requests_total metric");

        let request_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "admin_api_request_latency_seconds",
                "Latency of backend requests in seconds",
            ),
            &["operation"],
        )
        .expect("valid admin_api_request_latency_seconds metric");

        let records_fetched = IntGaugeVec::new(
            Opts::new(
                "admin_records_fetched",
                "Records returned by the latest collection fetch",
            ),
            &["resource"],
        )
        .expect("valid admin_records_fetched metric");

        registry
            .register(Box::new(requests_total.clone()))
            .expect("register admin_api_requests_total");
        registry
            .register(Box::new(request_latency_seconds.clone()))
            .expect("register admin_api_request_latency_seconds");
        registry
            .register(Box::new(records_fetched.clone()))
            .expect("register admin_records_fetched");

        Self {
            registry,
            requests_total,
            request_latency_seconds,
            records_fetched,
        }
    }

    pub fn observe_request(&self, operation: &str, success: bool, elapsed_secs: f64) {
        let outcome = if success { "success" } else { "error" };
        self.requests_total
            .with_label_values(&[operation, outcome])
            .inc();
        self.request_latency_seconds
            .with_label_values(&[operation])
            .observe(elapsed_secs);
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
