//! Synthetic HTTP backend with injected latency and failures
//!
//! This crate implements a deliberately flaky backend for exercising clients,
//! load balancers and monitoring pipelines against known ground truth. Every
//! request to `/` is answered after an artificial delay and with an
//! artificial failure rate, both fixed at startup from the environment:
//!
//! * `LATENCY_MS` - base delay in milliseconds added to every response, plus
//!   up to 200ms of random jitter (default 50).
//! * `ERROR_PCT` - percentage of requests answered `500 "oops"` instead of
//!   `200 "ok"` (default 0).
//!
//! Request counts and duration histograms, labeled by method, route and
//! status code, are served at `/metrics` in the Prometheus text format.
//!
//! ## Example
//!
//! ```no_run
//! use chaos_target::{app, config::Config};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # async fn serve() -> Result<(), Box<dyn std::error::Error>> {
//! let state = app::AppState::new(Config::load()?, StdRng::from_entropy())?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app::router(state)).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod decider;
pub mod latency;
pub mod metrics;

#[cfg(test)]
mod test_utils;
