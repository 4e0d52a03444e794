//! # Request handling
//!
//! The simulation pipeline and its HTTP surface. Every request to `/` runs
//! through the same sequence: draw a delay and sleep it off, draw an outcome,
//! answer, then record what happened. `/metrics` serves the registry in the
//! text exposition format.

use crate::{
    config::Config,
    decider::{Decider, Outcome},
    latency,
    metrics::{Metrics, RequestOutcome},
};
use axum::{
    extract::{MatchedPath, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Response body for simulated successes.
pub const SUCCESS_BODY: &str = "ok";

/// Response body for simulated failures.
pub const FAILURE_BODY: &str = "oops";

/// Shared state handed to every request task.
///
/// The RNG is seeded once at startup and shared behind a mutex; the lock is
/// only ever held for a single draw, never across the delay.
#[derive(Clone)]
pub struct AppState {
    config: Config,
    metrics: Metrics,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Build the shared state, creating the process-wide metrics registry.
    pub fn new(config: Config, rng: StdRng) -> Result<Self, prometheus::Error> {
        Ok(AppState {
            config,
            metrics: Metrics::new()?,
            rng: Arc::new(Mutex::new(rng)),
        })
    }

    fn draw<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|err| err.into_inner());
        draw(&mut rng)
    }
}

/// Build the router serving the simulated backend and its metrics.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(simulate))
        .route("/metrics", get(expose))
        .with_state(state)
}

/// Answer one simulated request: delay, decide, respond, record.
async fn simulate(State(state): State<AppState>, route: MatchedPath, method: Method) -> Response {
    let start = Instant::now();

    let delay = state.draw(|rng| latency::sample(&state.config, rng));
    latency::delay(delay).await;

    let (status, body) = match state.draw(|rng| state.config.failure_percent.decide(rng)) {
        Outcome::Success => (StatusCode::OK, SUCCESS_BODY),
        Outcome::Failure => (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_BODY),
    };

    state.metrics.record(&RequestOutcome {
        method,
        route: route.as_str().to_owned(),
        status,
        duration: start.elapsed(),
    });

    (status, body).into_response()
}

/// Serve the current registry contents.
///
/// Serialization failures surface as a bare 500 here; metrics are telemetry
/// and never affect the simulated responses themselves.
async fn expose(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Ok(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
