//! Inter-request pacing for sweeps.
//!
//! A fixed base delay separates store-touching items. When the store reports
//! rate limiting the delay doubles (capped); each clean result halves it back
//! toward the base.

use std::time::Duration;

use genieflow_domain::{GenieFlowError, ReconcileOutcome, SweepConfig};
use tracing::{debug, warn};

/// Smallest delay used once rate limiting has been observed.
const MIN_BACKOFF: Duration = Duration::from_millis(500);

/// Adaptive delay between sweep items.
#[derive(Debug, Clone)]
pub struct RequestPacer {
    base: Duration,
    max: Duration,
    current: Duration,
}

impl RequestPacer {
    /// Start at `base`; backoff never exceeds `max` (or `base`, if larger).
    #[must_use]
    pub fn new(base: Duration, max: Duration) -> Self {
        let max = max.max(base);
        Self { base, max, current: base }
    }

    /// Pacer for the configured sweep delays.
    #[must_use]
    pub fn from_config(config: &SweepConfig) -> Self {
        Self::new(
            Duration::from_millis(config.inter_request_delay_ms),
            Duration::from_millis(config.max_backoff_ms),
        )
    }

    /// Delay [`wait`](Self::wait) will sleep for.
    #[must_use]
    pub const fn current_delay(&self) -> Duration {
        self.current
    }

    /// Adjust the delay after an item has been processed.
    pub fn observe(&mut self, outcome: &ReconcileOutcome) {
        let rate_limited = outcome.error().is_some_and(GenieFlowError::is_rate_limited);

        if rate_limited {
            self.current = self.current.saturating_mul(2).max(MIN_BACKOFF).min(self.max);
            warn!(delay_ms = millis(self.current), "calendar store rate limited; backing off");
        } else if self.current > self.base {
            self.current = (self.current / 2).max(self.base);
            debug!(delay_ms = millis(self.current), "easing sweep delay");
        }
    }

    /// Sleep for the current delay.
    pub async fn wait(&self) {
        let delay = self.current_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use genieflow_domain::CalendarEvent;

    use super::*;

    fn rate_limited() -> ReconcileOutcome {
        ReconcileOutcome::Error { error: GenieFlowError::RateLimited("429".into()) }
    }

    fn created() -> ReconcileOutcome {
        ReconcileOutcome::Created { event: CalendarEvent::default() }
    }

    #[test]
    fn starts_at_configured_base() {
        let pacer = RequestPacer::from_config(&SweepConfig::default());
        assert_eq!(pacer.current_delay(), Duration::from_millis(1_500));
    }

    #[test]
    fn doubles_on_rate_limit_and_caps() {
        let mut pacer = RequestPacer::new(Duration::from_secs(1), Duration::from_secs(3));
        pacer.observe(&rate_limited());
        assert_eq!(pacer.current_delay(), Duration::from_secs(2));
        pacer.observe(&rate_limited());
        assert_eq!(pacer.current_delay(), Duration::from_secs(3));
    }

    #[test]
    fn decays_back_to_base() {
        let mut pacer = RequestPacer::new(Duration::from_secs(1), Duration::from_secs(8));
        pacer.observe(&rate_limited());
        pacer.observe(&rate_limited());
        assert_eq!(pacer.current_delay(), Duration::from_secs(4));

        pacer.observe(&created());
        assert_eq!(pacer.current_delay(), Duration::from_secs(2));
        pacer.observe(&created());
        pacer.observe(&created());
        assert_eq!(pacer.current_delay(), Duration::from_secs(1));
    }

    #[test]
    fn zero_base_still_backs_off() {
        let mut pacer = RequestPacer::new(Duration::ZERO, Duration::from_secs(5));
        pacer.observe(&rate_limited());
        assert_eq!(pacer.current_delay(), MIN_BACKOFF);

        pacer.observe(&ReconcileOutcome::Error { error: GenieFlowError::Network("x".into()) });
        assert_eq!(pacer.current_delay(), Duration::from_millis(250));
    }
}
