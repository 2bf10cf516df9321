use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One committed page change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub from_page: usize,
    pub to_page: usize,
    pub message: String,
}

impl LogEntry {
    pub fn page_change(from_page: usize, to_page: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            from_page,
            to_page,
            message: format!("Moved from page {from_page} to page {to_page}"),
        }
    }
}

pub trait Loggable {
    fn add_log(&mut self, entry: LogEntry);
    fn get_logs(&self) -> &[LogEntry];

    fn last_log(&self) -> Option<&LogEntry> {
        self.get_logs().last()
    }
}
