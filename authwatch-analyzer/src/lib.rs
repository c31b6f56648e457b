//! authwatch analysis engine
//!
//! Pure classification and aggregation over raw journal lines:
//! - `classify` - maps one line to a tagged category with extracted fields
//! - `aggregate` - folds classified lines into per-run summaries
//! - `merge` - combines a run with the persisted cross-run history
//! - `render` - sectioned plain-text report
//! - `export` - per-run export document (JSON / text)
//! - `recommend` - mitigation commands for offending addresses
//!
//! Nothing in this crate performs I/O.

pub mod aggregate;
pub mod classify;
pub mod export;
pub mod merge;
pub mod recommend;
pub mod render;

pub use aggregate::{aggregate, RunSummary};
pub use classify::{Classifier, LineClass};
pub use export::ExportDocument;
pub use merge::merge;
pub use recommend::{advisory_notes, block_commands, Recommendation};
pub use render::render_report;
