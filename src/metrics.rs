//! # Metrics
//!
//! Process-wide request metrics, exposed in the Prometheus text format:
//!
//! * `http_server_requests_total` - counter of handled requests.
//! * `http_server_request_duration_seconds` - histogram of request durations
//!   over the default Prometheus bucket ladder.
//!
//! Both series carry the `method`, `route` and `code` labels. The `route`
//! label is always the registered route pattern, never the raw request path,
//! to keep label cardinality bounded.
//!
//! [`Metrics`] is built once at startup and cloned into every handler; the
//! registry behind it lives for the whole process. Recording is atomic and
//! infallible, so concurrent requests can never lose an update, and every
//! recorded request lands in both series with the same label tuple.

use axum::http::{Method, StatusCode};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;
use std::time::Duration;

const LABEL_NAMES: &[&str] = &["method", "route", "code"];

/// The observed result of one completed request, consumed by [`Metrics::record`].
#[derive(Debug, Clone)]
pub struct RequestOutcome {
    /// HTTP method of the request.
    pub method: Method,
    /// Registered route pattern the request matched.
    pub route: String,
    /// Status code of the response.
    pub status: StatusCode,
    /// Wall-clock time from the start of handling to just before recording.
    pub duration: Duration,
}

/// Shared handle to the process-wide metrics registry.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
}

impl Metrics {
    /// Create a registry with the request counter and duration histogram.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("http_server_requests_total", "Request count"),
            LABEL_NAMES,
        )?;
        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_server_request_duration_seconds", "Request duration"),
            LABEL_NAMES,
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;

        Ok(Metrics {
            registry: Arc::new(registry),
            requests_total,
            request_duration_seconds,
        })
    }

    /// Record one completed request.
    ///
    /// Increments the counter and observes the duration under the same
    /// `(method, route, code)` label tuple, keeping the two series in step.
    pub fn record(&self, outcome: &RequestOutcome) {
        let labels = [
            outcome.method.as_str(),
            outcome.route.as_str(),
            outcome.status.as_str(),
        ];
        self.requests_total.with_label_values(&labels).inc();
        self.request_duration_seconds
            .with_label_values(&labels)
            .observe(outcome.duration.as_secs_f64());
    }

    /// Serialize the registry contents in the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
    }
}
