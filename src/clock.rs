//! Wall-clock sampling and 12-hour dial arithmetic.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Snapshot of the wall clock at a tick instant.
///
/// Taken once per minute tick and once at window load; immutable after
/// sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSample {
    /// Hour of day, 0–23.
    pub hour: u8,
    /// Minute of hour, 0–59.
    pub minute: u8,
    /// Day of week.
    pub weekday: Weekday,
    /// Day of month, 1–31.
    pub day: u8,
    /// Zero-based month index.
    pub month0: u8,
}

impl ClockSample {
    /// Sample the given wall-clock time.
    pub fn from_datetime(time: &NaiveDateTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            weekday: time.weekday(),
            day: time.day() as u8,
            month0: time.month0() as u8,
        }
    }

    /// Hour on the 12-hour dial: 0 and 12 both read 12, 13 reads 1.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            hour => hour,
        }
    }
}

/// Abbreviated month name for a zero-based month index.
pub fn month_abbrev(month0: u8) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        11 => "Dec",
        _ => "",
    }
}
