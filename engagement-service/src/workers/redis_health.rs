//! Redis connection health check background job
//!
//! Periodically pings Redis to keep connections alive and surface stale
//! connections before they fail a counter operation mid-request.

use crate::cache::EngagementCounters;
use std::time::Duration;
use tokio::time::sleep;

/// How often to ping Redis (every 60 seconds)
const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Initial delay so the service finishes starting before the first ping.
const STARTUP_DELAY: Duration = Duration::from_secs(10);

const MAX_CONSECUTIVE_FAILURES: u32 = 5;

/// Configuration for Redis health checks
#[derive(Clone)]
pub struct RedisHealthConfig {
    pub enabled: bool,
    pub check_interval: Duration,
}

impl Default for RedisHealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_interval: HEALTH_CHECK_INTERVAL,
        }
    }
}

/// Start the Redis health check background job.
///
/// Runs until the process exits; repeated failures escalate from warn to
/// error and a recovery after failures is logged.
pub async fn start_redis_health_check(counters: EngagementCounters, config: RedisHealthConfig) {
    if !config.enabled {
        tracing::info!("Redis health check disabled by configuration");
        return;
    }

    tracing::info!(
        interval_secs = config.check_interval.as_secs(),
        "starting Redis health check background job"
    );

    sleep(STARTUP_DELAY).await;

    let mut consecutive_failures: u32 = 0;

    loop {
        match counters.ping().await {
            Ok(()) => {
                if consecutive_failures > 0 {
                    tracing::info!(
                        previous_failures = consecutive_failures,
                        "Redis connection recovered"
                    );
                }
                consecutive_failures = 0;
                tracing::debug!("Redis health check: OK");
            }
            Err(e) => {
                consecutive_failures += 1;
                if consecutive_failures >= MAX_CONSECUTIVE_FAILURES {
                    tracing::error!(
                        consecutive_failures,
                        error = %e,
                        "Redis health check: multiple consecutive failures"
                    );
                } else {
                    tracing::warn!(
                        consecutive_failures,
                        error = %e,
                        "Redis health check failed"
                    );
                }
            }
        }

        sleep(config.check_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RedisHealthConfig::default();
        assert!(config.enabled);
        assert_eq!(config.check_interval, Duration::from_secs(60));
    }
}
