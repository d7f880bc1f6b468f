//! ShelfWatch application library.
//!
//! Wires configuration, the flat-file item store, and the background
//! expiry monitor behind the services consumed by the table UI shell.

pub mod config;
pub mod services;
