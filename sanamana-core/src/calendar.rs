//! Month grid for the calendar page.

use chrono::{Datelike, NaiveDate, TimeZone};

use crate::model::LogEntry;

/// A displayed month. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn days_in_month(self) -> u32 {
        let next = self.next().first_day();
        next.signed_duration_since(self.first_day()).num_days() as u32
    }

    /// Empty cells before the 1st in a Sunday-first week.
    pub fn leading_blanks(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn title(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    pub log: Option<LogEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub month: Month,
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl MonthView {
    /// Lay out `month`, marking `today` and attaching each day's log entry as
    /// seen in time zone `tz`.
    pub fn build<Tz: TimeZone>(month: Month, logs: &[LogEntry], today: NaiveDate, tz: &Tz) -> Self {
        let first = month.first_day();
        let days = first
            .iter_days()
            .take(month.days_in_month() as usize)
            .map(|date| CalendarDay {
                day: date.day(),
                date,
                is_today: date == today,
                log: log_on(logs, date, tz).cloned(),
            })
            .collect();

        Self {
            month,
            leading_blanks: month.leading_blanks(),
            days,
        }
    }

    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.day == day)
    }
}

/// The entry logged on local calendar date `date`, if any.
pub fn log_on<'a, Tz: TimeZone>(logs: &'a [LogEntry], date: NaiveDate, tz: &Tz) -> Option<&'a LogEntry> {
    logs.iter()
        .find(|log| log.date.with_timezone(tz).date_naive() == date)
}
