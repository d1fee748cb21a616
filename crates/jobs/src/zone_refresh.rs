use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use zonestore_dns_application::ports::ZoneRepository;
use zonestore_dns_application::services::StoreHealth;
use zonestore_dns_domain::HeartbeatConfig;

/// Heartbeat that reloads the zone catalog and tracks store health.
///
/// Waits `success_interval` after a successful reload and the shorter
/// `fail_interval` after a failed one.
pub struct ZoneRefreshJob {
    zones: Arc<dyn ZoneRepository>,
    health: Arc<StoreHealth>,
    success_interval: Duration,
    fail_interval: Duration,
    shutdown: CancellationToken,
}

impl ZoneRefreshJob {
    pub fn new(zones: Arc<dyn ZoneRepository>, health: Arc<StoreHealth>) -> Self {
        let defaults = HeartbeatConfig::default();
        Self {
            zones,
            health,
            success_interval: defaults.success_interval(),
            fail_interval: defaults.fail_interval(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_intervals(mut self, success: Duration, fail: Duration) -> Self {
        self.success_interval = success;
        self.fail_interval = fail;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Runs one reload and returns the delay before the next one.
    pub async fn run_once(&self) -> Duration {
        match self.zones.reload().await {
            Ok(count) => {
                debug!(zones = count, "Zone heartbeat succeeded");
                self.health.mark_healthy();
                self.success_interval
            }
            Err(e) => {
                warn!(
                    error = %e,
                    consecutive_failures = self.health.consecutive_failures() + 1,
                    "Zone heartbeat failed"
                );
                self.health.mark_failed();
                self.fail_interval
            }
        }
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            success_interval_secs = self.success_interval.as_secs(),
            fail_interval_secs = self.fail_interval.as_secs(),
            "Starting zone refresh job"
        );

        loop {
            let delay = tokio::select! {
                _ = self.shutdown.cancelled() => break,
                delay = self.run_once() => delay,
            };

            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        info!("ZoneRefreshJob: shutting down");
    }
}
