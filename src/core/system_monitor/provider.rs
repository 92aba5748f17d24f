use std::time::Duration;

use parking_lot::Mutex;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use crate::error::{DashError, Result};

use super::metrics::{clamp_percent, MemorySample};

/// Source of CPU and memory readings for the monitor widgets.
///
/// Implementations may block for the duration of a sampling window, so
/// they are only ever called from the sampler, never from the render loop.
pub trait MetricsProvider: Send + Sync {
    /// Global CPU usage measured over `window`, in `[0, 100]`.
    fn sample_cpu_percent(&self, window: Duration) -> Result<f32>;

    /// Current physical memory usage.
    fn sample_memory(&self) -> Result<MemorySample>;
}

/// Metrics provider backed by `sysinfo`
pub struct SysinfoProvider {
    system: Mutex<System>,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        Self {
            system: Mutex::new(System::new_with_specifics(refresh_kind)),
        }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SysinfoProvider {
    fn sample_cpu_percent(&self, window: Duration) -> Result<f32> {
        let mut system = self.system.lock();

        // Usage is a delta between two refreshes at least this far apart
        system.refresh_cpu_usage();
        std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        system.refresh_cpu_usage();

        if system.cpus().is_empty() {
            return Err(DashError::metric_unavailable("no CPUs reported"));
        }

        Ok(clamp_percent(system.global_cpu_usage()))
    }

    fn sample_memory(&self) -> Result<MemorySample> {
        let mut system = self.system.lock();
        system.refresh_memory();

        let total = system.total_memory();
        if total == 0 {
            return Err(DashError::metric_unavailable("total memory reported as zero"));
        }

        Ok(MemorySample::from_bytes(system.used_memory().min(total), total))
    }
}
