//! Time window for journal queries.

/// Window start when the operator gives none.
pub const DEFAULT_SINCE: &str = "1 hour ago";

/// Bounds for a journal query.
///
/// Both fields are free-form journalctl time expressions ("1 hour ago",
/// "2026-08-07 12:00:00", "yesterday") passed through verbatim; this tool
/// never parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub since: String,
    pub until: Option<String>,
}

impl TimeWindow {
    /// Build a window, defaulting `since` to the last hour.
    pub fn new(since: Option<String>, until: Option<String>) -> Self {
        Self {
            since: since.unwrap_or_else(|| DEFAULT_SINCE.to_string()),
            until,
        }
    }

    /// The default window: everything from one hour ago until now.
    pub fn last_hour() -> Self {
        Self::new(None, None)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::last_hour()
    }
}
