use std::sync::Arc;

use item_store::{FlatFileStore, ItemStore};
use tokio::sync::RwLock;

use super::{ExpiryMonitorService, InventoryService, NotificationService};
use crate::config::{ConfigManager, GlobalConfig};

/// Application state shared with the UI shell
pub struct AppState {
    /// Configuration manager
    pub config_manager: Arc<ConfigManager>,
    /// Global configuration (cached)
    pub global_config: Arc<RwLock<GlobalConfig>>,
    /// Inventory service
    pub inventory_service: Arc<InventoryService>,
    /// Notification service
    pub notification_service: Arc<NotificationService>,
    /// Expiry monitor for periodic due-item sweeps
    pub expiry_monitor: Arc<ExpiryMonitorService>,
}

impl AppState {
    /// Creates a new application state
    pub async fn new() -> anyhow::Result<Self> {
        // Initialize config manager
        let config_manager = Arc::new(ConfigManager::new()?);

        // Load global configuration
        let global_config = config_manager.load_global_config()?;

        // Ensure the data directory exists before the store first appends
        let data_file = global_config.storage.data_file.clone();
        if let Some(parent) = data_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Initialize services
        let store: Arc<dyn ItemStore> = Arc::new(FlatFileStore::new(data_file));
        let inventory_service = Arc::new(InventoryService::new(store.clone()));
        let notification_service = Arc::new(NotificationService::new());
        let expiry_monitor = Arc::new(ExpiryMonitorService::new(
            store,
            notification_service.clone(),
        ));

        Ok(Self {
            config_manager,
            global_config: Arc::new(RwLock::new(global_config)),
            inventory_service,
            notification_service,
            expiry_monitor,
        })
    }

    /// Starts background services
    pub fn start_background_services(&self) {
        self.expiry_monitor.start();
    }

    /// Stops background services
    pub async fn shutdown(&self) {
        self.expiry_monitor.stop().await;
    }
}
