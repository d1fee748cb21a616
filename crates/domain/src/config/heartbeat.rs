use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cadence of the zone catalog refresh. After a successful reload the next
/// reload waits `success_interval_secs`, after a failed one `fail_interval_secs`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeartbeatConfig {
    #[serde(default = "default_success_interval_secs")]
    pub success_interval_secs: u64,

    #[serde(default = "default_fail_interval_secs")]
    pub fail_interval_secs: u64,
}

impl HeartbeatConfig {
    pub fn success_interval(&self) -> Duration {
        Duration::from_secs(self.success_interval_secs)
    }

    pub fn fail_interval(&self) -> Duration {
        Duration::from_secs(self.fail_interval_secs)
    }

    pub(crate) fn normalize(&mut self) {
        if self.success_interval_secs == 0 {
            self.success_interval_secs = default_success_interval_secs();
        }
        if self.fail_interval_secs == 0 {
            self.fail_interval_secs = default_fail_interval_secs();
        }
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            success_interval_secs: default_success_interval_secs(),
            fail_interval_secs: default_fail_interval_secs(),
        }
    }
}

fn default_success_interval_secs() -> u64 {
    10
}

fn default_fail_interval_secs() -> u64 {
    2
}
