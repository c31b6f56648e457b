//! authwatch history schema
//!
//! Defines the persisted cross-run history snapshot and its JSON format.

mod history;

pub use history::{History, HistoryError};
