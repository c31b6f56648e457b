//! I/O glue: history persistence, export writing, confirmation.

pub mod confirm;
pub mod export_writer;
pub mod state_store;

pub use confirm::{Confirmer, DenyAll, ScriptedConfirmer, StdinConfirmer};
pub use export_writer::{write_export, ExportError};
pub use state_store::StateStore;
