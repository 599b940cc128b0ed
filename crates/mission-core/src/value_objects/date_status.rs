//! Date status - lifecycle label for a community's date window

use chrono::NaiveDate;
use serde::Serialize;

/// Lifecycle state of a community relative to its start/end dates.
///
/// Both boundary days count as in progress: a community is active on its
/// start date and on its end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateStatus {
    BeforeStart,
    InProgress,
    Ended,
}

impl DateStatus {
    /// Classify `today` against the `[start, end]` window (inclusive).
    pub fn classify(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if today < start {
            Self::BeforeStart
        } else if today > end {
            Self::Ended
        } else {
            Self::InProgress
        }
    }

    /// String form used in API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeStart => "BEFORE_START",
            Self::InProgress => "IN_PROGRESS",
            Self::Ended => "ENDED",
        }
    }
}

impl std::fmt::Display for DateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_before_start() {
        let status = DateStatus::classify(date(2024, 1, 1), date(2024, 1, 31), date(2023, 12, 31));
        assert_eq!(status, DateStatus::BeforeStart);
    }

    #[test]
    fn test_in_progress_on_start_boundary() {
        let status = DateStatus::classify(date(2024, 1, 1), date(2024, 1, 31), date(2024, 1, 1));
        assert_eq!(status, DateStatus::InProgress);
    }

    #[test]
    fn test_in_progress_on_end_boundary() {
        let status = DateStatus::classify(date(2024, 1, 1), date(2024, 1, 31), date(2024, 1, 31));
        assert_eq!(status, DateStatus::InProgress);
    }

    #[test]
    fn test_in_progress_mid_window() {
        let status = DateStatus::classify(date(2024, 1, 1), date(2024, 1, 31), date(2024, 1, 15));
        assert_eq!(status, DateStatus::InProgress);
    }

    #[test]
    fn test_ended() {
        let status = DateStatus::classify(date(2024, 1, 1), date(2024, 1, 31), date(2024, 2, 1));
        assert_eq!(status, DateStatus::Ended);
    }

    #[test]
    fn test_single_day_window() {
        let day = date(2024, 6, 1);
        assert_eq!(DateStatus::classify(day, day, day), DateStatus::InProgress);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&DateStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }
}
