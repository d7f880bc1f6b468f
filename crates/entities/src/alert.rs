//! Expiry alert classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Item;

/// How an item's expiry date relates to the day of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// Expiry date is today.
    ExpiresToday,
    /// Expiry date has passed.
    Expired,
}

/// An alert for an item that is due today or already overdue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryAlert {
    /// The item the alert refers to.
    pub item: Item,
    /// Classification relative to the sweep day.
    pub status: ExpiryStatus,
}

impl ExpiryAlert {
    /// Classifies an item against the given day. Items expiring after
    /// `today` produce no alert.
    pub fn evaluate(item: Item, today: NaiveDate) -> Option<Self> {
        if item.expiry_date > today {
            return None;
        }
        let status = if item.expiry_date == today {
            ExpiryStatus::ExpiresToday
        } else {
            ExpiryStatus::Expired
        };
        Some(Self { item, status })
    }

    /// Human-readable alert message.
    pub fn message(&self) -> String {
        match self.status {
            ExpiryStatus::ExpiresToday => format!("Item {} expires today!", self.item.name),
            ExpiryStatus::Expired => format!("Item {} has expired!", self.item.name),
        }
    }
}
