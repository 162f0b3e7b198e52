//! Time-windowed views over the log sequence for charting.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::LogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    #[serde(rename = "7days")]
    SevenDays,
    #[serde(rename = "30days")]
    ThirtyDays,
    #[serde(rename = "all")]
    All,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 3] = [TimeWindow::SevenDays, TimeWindow::ThirtyDays, TimeWindow::All];

    pub fn span(self) -> Option<Duration> {
        match self {
            TimeWindow::SevenDays => Some(Duration::days(7)),
            TimeWindow::ThirtyDays => Some(Duration::days(30)),
            TimeWindow::All => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::SevenDays => "7 Days",
            TimeWindow::ThirtyDays => "30 Days",
            TimeWindow::All => "All",
        }
    }

    /// Entries dated within `[now - span, now]`. `All` keeps everything.
    pub fn filter<'a>(self, logs: &'a [LogEntry], now: DateTime<Utc>) -> Vec<&'a LogEntry> {
        match self.span() {
            None => logs.iter().collect(),
            Some(span) => {
                let cutoff = now - span;
                logs.iter()
                    .filter(|log| log.date >= cutoff && log.date <= now)
                    .collect()
            }
        }
    }
}

/// Logs ordered oldest first.
pub fn sorted_by_date(logs: &[LogEntry]) -> Vec<LogEntry> {
    let mut sorted = logs.to_vec();
    sorted.sort_by_key(|log| log.date);
    sorted
}
