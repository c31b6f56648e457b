//! History snapshot persistence.
//!
//! Loads the cumulative history at process start and writes the merged
//! snapshot back atomically at process end. A missing or unparsable file
//! is an empty history, never an error.

use std::path::Path;

use authwatch_fs::{Filesystem, FsError};
use authwatch_schema::History;

/// Reads and writes the history snapshot through a `Filesystem`.
pub struct StateStore<'a, F: Filesystem> {
    fs: &'a F,
    path: &'a Path,
}

impl<'a, F: Filesystem> StateStore<'a, F> {
    pub fn new(fs: &'a F, path: &'a Path) -> Self {
        Self { fs, path }
    }

    pub fn path(&self) -> &Path {
        self.path
    }

    /// Load the prior history; absent or corrupt state is empty.
    pub fn load(&self) -> History {
        if !self.fs.exists(self.path) {
            return History::empty();
        }
        match self.fs.read_file(self.path) {
            Ok(content) => History::from_json(&content).unwrap_or_else(|_| History::empty()),
            Err(_) => History::empty(),
        }
    }

    /// Persist the merged history atomically.
    pub fn save(&self, history: &History) -> Result<(), FsError> {
        self.fs
            .write_atomic(self.path, history.to_json().as_bytes())
    }
}
