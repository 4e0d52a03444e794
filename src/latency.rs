//! # Latency simulation
//!
//! Every request is held for the configured base delay plus a random jitter
//! drawn from a fixed range. Sampling and suspension are split so the draw
//! can happen while holding the shared RNG and the sleep cannot.
//!
//! The suspension is a `tokio::time::sleep`, so a delayed request only parks
//! its own task; other in-flight requests keep being accepted, delayed and
//! completed in parallel.

use crate::config::Config;
use rand::Rng;
use std::{ops, time::Duration};
use tokio::time;

/// Additive jitter applied on top of the base delay, in milliseconds.
///
/// This is a fixed property of the simulator, independent of configuration.
pub const JITTER_MS: ops::Range<u64> = 0..200;

/// Draw the delay for a single request: base delay plus uniform jitter.
pub fn sample<R: Rng>(config: &Config, rng: &mut R) -> Duration {
    let jitter = rng.gen_range(JITTER_MS);
    Duration::from_millis(config.base_delay_ms.saturating_add(jitter))
}

/// Suspend the current request for the given duration.
pub async fn delay(duration: Duration) {
    time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FailurePercent;
    use crate::test_utils;
    use std::time::Duration;
    use tokio::time::Instant;

    fn config(base_delay_ms: u64) -> Config {
        Config {
            base_delay_ms,
            failure_percent: FailurePercent::new(0).unwrap(),
        }
    }

    #[test]
    fn sample_stays_within_jitter_window() {
        let mut rng = test_utils::rng();
        let config = config(50);

        for _ in 0..1000 {
            let delay = sample(&config, &mut rng);
            assert!(delay >= Duration::from_millis(50));
            assert!(delay < Duration::from_millis(250));
        }
    }

    #[test]
    fn sample_with_zero_base_is_pure_jitter() {
        let mut rng = test_utils::rng();
        let config = config(0);

        for _ in 0..1000 {
            let delay = sample(&config, &mut rng);
            assert!(delay < Duration::from_millis(200));
        }
    }

    #[tokio::test]
    async fn delay_suspends_the_caller() {
        let now = Instant::now();
        delay(Duration::from_millis(20)).await;
        assert!(now.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_delays_do_not_serialize() {
        let now = Instant::now();

        let tasks: Vec<_> = (0..100)
            .map(|_| tokio::spawn(delay(Duration::from_millis(50))))
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        // 100 parallel sleeps advance the paused clock by one sleep, not 100.
        assert!(now.elapsed() >= Duration::from_millis(50));
        assert!(now.elapsed() < Duration::from_millis(100));
    }
}
