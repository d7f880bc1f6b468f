use entities::{ExpiryAlert, ExpiryStatus};
use tokio::sync::mpsc;

/// Sink for expiry alerts raised by the monitor.
pub trait ExpiryNotifier: Send + Sync {
    /// Delivers one alert.
    fn notify(&self, alert: &ExpiryAlert);
}

/// Service for presenting expiry alerts to the user.
/// On Linux alerts are posted through the system notification daemon;
/// elsewhere they are written to the log.
#[derive(Debug, Default)]
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        Self
    }

    fn show(&self, title: &str, body: &str) {
        #[cfg(target_os = "linux")]
        {
            if let Err(e) = notify_rust::Notification::new()
                .summary(title)
                .body(body)
                .show()
            {
                tracing::warn!("Failed to show desktop notification: {}", e);
            }
        }

        #[cfg(not(target_os = "linux"))]
        tracing::warn!("{}: {}", title, body);
    }
}

impl ExpiryNotifier for NotificationService {
    fn notify(&self, alert: &ExpiryAlert) {
        let title = match alert.status {
            ExpiryStatus::ExpiresToday => "Item Expires Today",
            ExpiryStatus::Expired => "Item Expired",
        };
        self.show(title, &alert.message());
    }
}

/// Forwards alerts over a channel so the receiving side, typically the UI
/// event loop, delivers them on its own thread.
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<ExpiryAlert>,
}

impl ChannelNotifier {
    /// Creates the notifier together with the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ExpiryAlert>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ExpiryNotifier for ChannelNotifier {
    fn notify(&self, alert: &ExpiryAlert) {
        if self.sender.send(alert.clone()).is_err() {
            tracing::debug!(
                "Alert receiver dropped, alert for item {} discarded",
                alert.item.id
            );
        }
    }
}
