use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub api_requests_total: IntCounterVec,
    pub api_failures_total: IntCounterVec,
    pub optimistic_rollbacks_total: IntCounterVec,
    pub draft_assignments: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let api_requests_total = IntCounterVec::new(
            Opts::new("api_requests_total", "API calls issued, by resource"),
            &["resource"],
        )
        .expect("valid api_requests_total metric");

        let api_failures_total = IntCounterVec::new(
            Opts::new(
                "api_failures_total",
                "Failed API calls by resource and failure kind",
            ),
            &["resource", "kind"],
        )
        .expect("valid api_failures_total metric");

        let optimistic_rollbacks_total = IntCounterVec::new(
            Opts::new(
                "optimistic_rollbacks_total",
                "Optimistic mutations reverted after a failed request",
            ),
            &["flow"],
        )
        .expect("valid optimistic_rollbacks_total metric");

        let draft_assignments = IntGauge::new(
            "draft_assignments",
            "Unconfirmed rider assignments currently drafted",
        )
        .expect("valid draft_assignments metric");

        registry
            .register(Box::new(api_requests_total.clone()))
            .expect("register api_requests_total");
        registry
            .register(Box::new(api_failures_total.clone()))
            .expect("register api_failures_total");
        registry
            .register(Box::new(optimistic_rollbacks_total.clone()))
            .expect("register optimistic_rollbacks_total");
        registry
            .register(Box::new(draft_assignments.clone()))
            .expect("register draft_assignments");

        Self {
            registry,
            api_requests_total,
            api_failures_total,
            optimistic_rollbacks_total,
            draft_assignments,
        }
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
