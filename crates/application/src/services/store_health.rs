use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Healthy,
    Unhealthy,
    Unknown,
}

impl StoreStatus {
    fn to_u8(self) -> u8 {
        match self {
            StoreStatus::Unknown => 0,
            StoreStatus::Healthy => 1,
            StoreStatus::Unhealthy => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => StoreStatus::Healthy,
            2 => StoreStatus::Unhealthy,
            _ => StoreStatus::Unknown,
        }
    }
}

/// Reachability of the record store as observed by the heartbeat.
///
/// Purely observational: resolution never consults it before trying the
/// store, it only annotates degrade answers.
#[derive(Debug, Default)]
pub struct StoreHealth {
    status: AtomicU8,
    consecutive_failures: AtomicU32,
}

impl StoreHealth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StoreStatus {
        StoreStatus::from_u8(self.status.load(Ordering::Acquire))
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures.load(Ordering::Relaxed)
    }

    pub fn mark_healthy(&self) {
        self.consecutive_failures.store(0, Ordering::Relaxed);
        let previous = self
            .status
            .swap(StoreStatus::Healthy.to_u8(), Ordering::AcqRel);
        if StoreStatus::from_u8(previous) != StoreStatus::Healthy {
            info!("Record store marked HEALTHY");
        }
    }

    pub fn mark_failed(&self) {
        let failures = self.consecutive_failures.fetch_add(1, Ordering::Relaxed) + 1;
        let previous = self
            .status
            .swap(StoreStatus::Unhealthy.to_u8(), Ordering::AcqRel);
        if StoreStatus::from_u8(previous) != StoreStatus::Unhealthy {
            warn!(consecutive_failures = failures, "Record store marked UNHEALTHY");
        }
    }
}
