#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use sysinfo::System;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    pub total_mb: u64,
    pub used_mb: u64,
    pub available_mb: u64,
}

impl MemoryStats {
    /// 兩次快照之間釋放的可用記憶體 (MB)，記憶體減少時為負數
    pub fn freed_since(&self, before: &MemoryStats) -> i64 {
        self.available_mb as i64 - before.available_mb as i64
    }
}

#[cfg(feature = "cli")]
pub struct MemoryMonitor {
    system: Mutex<System>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl MemoryMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            system: Mutex::new(System::new()),
            enabled,
        }
    }

    pub fn snapshot(&self) -> Option<MemoryStats> {
        if !self.enabled {
            return None;
        }

        let mut system = self.system.lock().ok()?;
        system.refresh_memory();

        Some(MemoryStats {
            total_mb: system.total_memory() / 1024 / 1024,
            used_mb: system.used_memory() / 1024 / 1024,
            available_mb: system.available_memory() / 1024 / 1024,
        })
    }

    pub fn log_stats(&self, phase: &str) -> Option<MemoryStats> {
        let stats = self.snapshot()?;
        tracing::info!(
            "📊 {} - Total: {}MB, Used: {}MB, Available: {}MB",
            phase,
            stats.total_mb,
            stats.used_mb,
            stats.available_mb
        );
        Some(stats)
    }

    pub fn log_delta(&self, before: Option<MemoryStats>) {
        if let (Some(before), Some(after)) = (before, self.log_stats("After drop")) {
            tracing::info!("📊 Available memory changed by {}MB", after.freed_since(&before));
        }
    }
}

// 為非CLI環境提供空實現
#[cfg(not(feature = "cli"))]
pub struct MemoryMonitor;

#[cfg(not(feature = "cli"))]
impl MemoryMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn snapshot(&self) -> Option<MemoryStats> {
        None
    }

    pub fn log_stats(&self, _phase: &str) -> Option<MemoryStats> {
        None
    }

    pub fn log_delta(&self, _before: Option<MemoryStats>) {}
}
