use std::{sync::Arc, time::Duration};

use chrono::{Local, NaiveDateTime, NaiveTime};
use entities::ExpiryAlert;
use item_store::{ItemStore, ItemStoreError};
use thiserror::Error;
use tokio::sync::RwLock;

use super::notification::ExpiryNotifier;

/// Local-time hour of the daily sweep.
const DAILY_SWEEP_HOUR: u32 = 8;

#[derive(Error, Debug)]
pub enum ExpiryMonitorError {
    #[error("Store error: {0}")]
    Store(#[from] ItemStoreError),
}

pub type ExpiryMonitorResult<T> = Result<T, ExpiryMonitorError>;

/// Service that periodically scans the store for items whose expiry date
/// is today or earlier and hands each one to the notification sink.
///
/// A sweep failure is logged and swallowed; it never stops the schedule.
/// Items are re-alerted on every sweep until they are edited or deleted.
pub struct ExpiryMonitorService {
    store: Arc<dyn ItemStore>,
    notifier: Arc<dyn ExpiryNotifier>,
    /// Flag to stop the sweep loop
    stop_flag: Arc<RwLock<bool>>,
}

impl ExpiryMonitorService {
    /// Creates a new ExpiryMonitorService.
    pub fn new(store: Arc<dyn ItemStore>, notifier: Arc<dyn ExpiryNotifier>) -> Self {
        Self {
            store,
            notifier,
            stop_flag: Arc::new(RwLock::new(false)),
        }
    }

    /// Starts the sweep loop.
    /// Runs one sweep immediately, then sweeps daily at the next
    /// 08:00 local-time boundary.
    pub fn start(&self) {
        let store = self.store.clone();
        let notifier = self.notifier.clone();
        let stop_flag = self.stop_flag.clone();

        tokio::spawn(async move {
            tracing::info!(
                "Expiry monitor started, daily sweep at {:02}:00",
                DAILY_SWEEP_HOUR
            );

            // Run a sweep immediately on startup
            if let Err(e) = sweep(store.as_ref(), notifier.as_ref()).await {
                tracing::error!("Initial expiry sweep failed: {}", e);
            }

            let mut next_tick = next_daily_anchor(Local::now().naive_local());
            loop {
                // Check if we should stop
                if *stop_flag.read().await {
                    tracing::info!("Expiry monitor stopped");
                    break;
                }

                // Wait until the next anchor
                let now = Local::now().naive_local();
                let delay = (next_tick - now).to_std().unwrap_or(Duration::ZERO);
                tokio::time::sleep(delay).await;

                // Check again after sleeping
                if *stop_flag.read().await {
                    tracing::info!("Expiry monitor stopped");
                    break;
                }

                if let Err(e) = sweep(store.as_ref(), notifier.as_ref()).await {
                    tracing::error!("Expiry sweep failed: {}", e);
                }
                next_tick += chrono::Duration::days(1);
            }
        });
    }

    /// Stops the sweep loop
    pub async fn stop(&self) {
        *self.stop_flag.write().await = true;
    }

    /// Runs one sweep immediately (for manual triggering)
    pub async fn run_sweep(&self) -> ExpiryMonitorResult<SweepResult> {
        sweep(self.store.as_ref(), self.notifier.as_ref()).await
    }
}

/// Result of one sweep
#[derive(Debug, Default)]
pub struct SweepResult {
    /// Number of alerts delivered
    pub alerted: usize,
}

/// Loads the full item set and raises an alert for every item whose
/// expiry date is today or earlier.
async fn sweep(
    store: &dyn ItemStore,
    notifier: &dyn ExpiryNotifier,
) -> ExpiryMonitorResult<SweepResult> {
    let items = store.load_all().await?;
    let today = Local::now().date_naive();

    let mut result = SweepResult::default();
    for item in items {
        if let Some(alert) = ExpiryAlert::evaluate(item, today) {
            notifier.notify(&alert);
            result.alerted += 1;
        }
    }

    tracing::debug!("Expiry sweep completed, {} alert(s) raised", result.alerted);
    Ok(result)
}

/// Returns the next occurrence of the sweep hour: today's boundary unless
/// it has already passed, otherwise tomorrow's.
fn next_daily_anchor(now: NaiveDateTime) -> NaiveDateTime {
    let anchor = now
        .date()
        .and_time(NaiveTime::from_hms_opt(DAILY_SWEEP_HOUR, 0, 0).unwrap_or_default());
    if now > anchor {
        anchor + chrono::Duration::days(1)
    } else {
        anchor
    }
}
