mod app_state;
mod expiry_monitor;
mod inventory;
mod notification;

pub use app_state::*;
pub use expiry_monitor::*;
pub use inventory::*;
pub use notification::*;
