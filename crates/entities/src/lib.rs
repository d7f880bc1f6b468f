//! Core entity definitions for ShelfWatch.
//!
//! This crate defines the data types shared across the ShelfWatch
//! application: the inventory [`Item`] record and the expiry alert
//! classification consumed by the notification layer.

mod alert;
mod item;

pub use alert::*;
pub use item::*;
