// src/services/rate_limiter.rs
// DOCUMENTATION: In-memory per-client rate limiting for AI endpoints
// PURPOSE: Caps generation calls per client IP; state lives in process
// memory only, so limits reset on restart and are per instance

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};

use crate::errors::CmsError;

/// Keyed rate limiter wrapping governor
/// DOCUMENTATION: One bucket per client IP, refilled per minute
pub struct AiRateLimiter {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
}

impl AiRateLimiter {
    /// Create a limiter allowing `per_minute` requests per key
    pub fn new(per_minute: u32) -> Self {
        let quota = Quota::per_minute(
            NonZeroU32::new(per_minute.max(1)).unwrap_or(NonZeroU32::MIN),
        );

        Self {
            limiter: RateLimiter::keyed(quota),
        }
    }

    /// Check whether the key may proceed, consuming one slot if so
    pub fn check(&self, key: &str) -> Result<(), CmsError> {
        self.limiter.check_key(&key.to_string()).map_err(|_| {
            log::warn!("Rate limit exceeded for client: {}", key);
            CmsError::RateLimitExceeded
        })
    }

    /// Drop state for keys that have not been seen recently
    pub fn cleanup(&self) {
        self.limiter.retain_recent();
        log::debug!("Rate limiter state cleaned up");
    }
}

/// Start background cleanup task
/// DOCUMENTATION: Periodically evicts stale per-key limiter state
pub fn start_cleanup_task(limiter: Arc<AiRateLimiter>, interval_seconds: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));

        loop {
            interval.tick().await;
            limiter.cleanup();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limiter_allows_within_quota() {
        let limiter = AiRateLimiter::new(5);

        for _ in 0..5 {
            assert!(limiter.check("10.0.0.1").is_ok());
        }
    }

    #[test]
    fn test_limiter_blocks_over_quota() {
        let limiter = AiRateLimiter::new(2);

        assert!(limiter.check("10.0.0.2").is_ok());
        assert!(limiter.check("10.0.0.2").is_ok());
        assert!(matches!(
            limiter.check("10.0.0.2"),
            Err(CmsError::RateLimitExceeded)
        ));
    }

    #[test]
    fn test_limiter_keys_are_independent() {
        let limiter = AiRateLimiter::new(1);

        assert!(limiter.check("10.0.0.3").is_ok());
        assert!(limiter.check("10.0.0.4").is_ok());
        assert!(limiter.check("10.0.0.3").is_err());
    }

    #[test]
    fn test_zero_quota_is_clamped_to_one() {
        let limiter = AiRateLimiter::new(0);

        assert!(limiter.check("10.0.0.5").is_ok());
        assert!(limiter.check("10.0.0.5").is_err());
    }
}
