//! Background refresh of widget state.
//!
//! The sampler runs on its own Tokio runtime so it keeps ticking while the
//! render loop blocks on input. Widget updates block (CPU sampling sleeps
//! for its window), so each tick's update group runs on the blocking pool.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::error::{DashError, Result};

use super::widgets::SharedWidget;

/// Upper bound on waiting for the sampler task during shutdown.
const JOIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Outcome of one pass over every widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub updated: usize,
    pub failed: usize,
}

/// Call `update` on every widget in order.
///
/// A failing widget keeps its previous state; the remaining widgets are
/// still updated.
pub fn sample_all(widgets: &[SharedWidget]) -> TickReport {
    let mut report = TickReport::default();

    for widget in widgets {
        match widget.update() {
            Ok(()) => report.updated += 1,
            Err(e) => {
                log::warn!("{} update failed, keeping last value: {}", widget.name(), e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Handle to the running background sampler
pub struct Sampler {
    shutdown_tx: broadcast::Sender<()>,
    task: Option<JoinHandle<u64>>,
    runtime: tokio::runtime::Runtime,
}

impl Sampler {
    /// Start ticking `widgets` every `period`. The first tick runs immediately.
    pub fn start(widgets: Vec<SharedWidget>, period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(DashError::sampler("sample interval must be non-zero"));
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .thread_name("griddash-sampler")
            .build()?;

        let (shutdown_tx, _) = broadcast::channel::<()>(1);
        let task = runtime.spawn(sampler_task(
            Arc::from(widgets),
            period,
            shutdown_tx.subscribe(),
        ));

        log::info!("Sampler started with {:?} interval", period);

        Ok(Self {
            shutdown_tx,
            task: Some(task),
            runtime,
        })
    }

    /// Signal the sampler to stop and wait (bounded) for its loop to exit.
    ///
    /// Returns the number of completed ticks, or `None` if the task could not
    /// be joined in time. An update group still in flight is detached and left
    /// to finish on its own; widgets are reference counted so it never touches
    /// freed state.
    pub fn shutdown(mut self) -> Option<u64> {
        let _ = self.shutdown_tx.send(());

        let ticks = self.task.take().and_then(|task| {
            match self
                .runtime
                .block_on(async { tokio::time::timeout(JOIN_TIMEOUT, task).await })
            {
                Ok(Ok(ticks)) => Some(ticks),
                Ok(Err(e)) => {
                    log::error!("Sampler task failed: {}", e);
                    None
                }
                Err(_) => {
                    log::warn!("Sampler did not stop within {:?}", JOIN_TIMEOUT);
                    None
                }
            }
        });

        self.runtime.shutdown_background();
        log::info!("Sampler stopped after {:?} ticks", ticks);
        ticks
    }
}

async fn sampler_task(
    widgets: Arc<[SharedWidget]>,
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> u64 {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut ticks = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let batch = widgets.clone();
                let group = tokio::task::spawn_blocking(move || sample_all(&batch));

                tokio::select! {
                    result = group => match result {
                        Ok(report) => {
                            ticks += 1;
                            log::trace!("Tick {}: {:?}", ticks, report);
                        }
                        Err(e) => log::error!("Update group panicked: {}", e),
                    },
                    _ = shutdown.recv() => break,
                }
            }
            _ = shutdown.recv() => break,
        }
    }

    ticks
}
