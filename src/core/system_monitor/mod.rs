//! Metrics sources for the monitor widgets.
//!
//! The dashboard reads CPU and memory figures through [`MetricsProvider`];
//! [`SysinfoProvider`] is the production implementation.

mod metrics;
mod provider;

pub use metrics::{bytes_to_mb, clamp_percent, MemorySample, BYTES_PER_MB};
pub use provider::{MetricsProvider, SysinfoProvider};
