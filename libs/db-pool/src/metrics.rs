//! Prometheus gauges for pool utilization.

use lazy_static::lazy_static;
use prometheus::{register_int_gauge_vec, IntGaugeVec};
use sqlx::PgPool;
use std::time::Duration;

lazy_static! {
    static ref DB_POOL_CONNECTIONS: IntGaugeVec = register_int_gauge_vec!(
        "db_pool_connections",
        "Connections in the database pool segmented by state",
        &["service", "state"]
    )
    .expect("failed to register db_pool_connections");
}

const SAMPLE_INTERVAL: Duration = Duration::from_secs(15);

/// Periodically export open/idle gauges for a service's pool.
///
/// The task runs for the lifetime of the process; it holds its own pool
/// handle and never blocks pool users.
pub fn spawn_pool_sampler(service: String, pool: PgPool) {
    tokio::spawn(async move {
        loop {
            DB_POOL_CONNECTIONS
                .with_label_values(&[service.as_str(), "open"])
                .set(pool.size() as i64);
            DB_POOL_CONNECTIONS
                .with_label_values(&[service.as_str(), "idle"])
                .set(pool.num_idle() as i64);
            tokio::time::sleep(SAMPLE_INTERVAL).await;
        }
    });
}
