//! Date and clock normalization for display.
//!
//! Strings coming from the API are taken at face value: the location's local
//! time is formatted as if it were the viewer's, no timezone math happens here.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::{
    error::TimeError,
    model::{ForecastPayload, HourEntry},
};

/// Text shown in place of a date the API sent in an unreadable form.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_TIME_FORMATS: &[&str] =
    &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// `"2024-03-15"` → `"Friday, 15-03"`.
pub fn format_date(date: &str) -> Result<String, TimeError> {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(date.to_string()))?;

    Ok(parsed.format("%A, %d-%m").to_string())
}

/// `"2024-03-15 9:05"` → `"15-03-2024, 09:05"`.
pub fn format_date_time(date_time: &str) -> Result<String, TimeError> {
    let parsed = parse_date_time(date_time)?;
    Ok(parsed.format("%d-%m-%Y, %H:%M").to_string())
}

pub fn parse_date_time(date_time: &str) -> Result<NaiveDateTime, TimeError> {
    let trimmed = date_time.trim();

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimeError::InvalidDateTime(date_time.to_string()))
}

/// Hour of day (0-23) of an hourly entry, read from the clock part of its timestamp.
pub fn hour_of(entry: &HourEntry) -> Option<u32> {
    let (_, clock) = entry.timestamp.trim().split_once(' ')?;
    let (hour, _) = clock.split_once(':')?;

    hour.parse::<u32>().ok().filter(|h| *h < 24)
}

/// Index of the entry whose hour equals `now_hour`. First match wins.
pub fn current_hour_index(hours: &[HourEntry], now_hour: u32) -> Option<usize> {
    hours.iter().position(|entry| hour_of(entry) == Some(now_hour))
}

/// Hour of day at the forecast location, from the payload's local time.
pub fn location_hour(payload: &ForecastPayload) -> Option<u32> {
    parse_date_time(&payload.location.local_time).ok().map(|dt| dt.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Condition;

    fn hour(ts: &str) -> HourEntry {
        HourEntry {
            timestamp: ts.to_string(),
            temperature_c: 10.0,
            condition: Condition { text: "Clear".into(), icon: "icon.png".into() },
        }
    }

    fn day(date: &str) -> Vec<HourEntry> {
        (0..24).map(|h| hour(&format!("{date} {h:02}:00"))).collect()
    }

    #[test]
    fn format_date_has_weekday_and_day_month() {
        assert_eq!(format_date("2024-03-15").unwrap(), "Friday, 15-03");
        assert_eq!(format_date("2023-07-27").unwrap(), "Thursday, 27-07");
    }

    #[test]
    fn format_date_rejects_garbage() {
        assert_eq!(format_date("tomorrow"), Err(TimeError::InvalidDate("tomorrow".into())));
        assert!(format_date("2024-02-30").is_err());
    }

    #[test]
    fn format_date_time_pads_unpadded_hour() {
        assert_eq!(format_date_time("2024-03-15 9:05").unwrap(), "15-03-2024, 09:05");
        assert_eq!(format_date_time("2024-12-01 23:59").unwrap(), "01-12-2024, 23:59");
    }

    #[test]
    fn format_date_time_accepts_iso_separator_and_seconds() {
        assert_eq!(format_date_time("2024-03-15T07:30").unwrap(), "15-03-2024, 07:30");
        assert_eq!(format_date_time("2024-03-15 07:30:45").unwrap(), "15-03-2024, 07:30");
    }

    #[test]
    fn format_date_time_rejects_date_only() {
        assert!(matches!(format_date_time("2024-03-15"), Err(TimeError::InvalidDateTime(_))));
    }

    #[test]
    fn hour_of_reads_clock_part() {
        assert_eq!(hour_of(&hour("2024-03-15 07:00")), Some(7));
        assert_eq!(hour_of(&hour("2024-03-15 23:00")), Some(23));
        assert_eq!(hour_of(&hour("2024-03-15")), None);
        assert_eq!(hour_of(&hour("2024-03-15 xx:00")), None);
        assert_eq!(hour_of(&hour("2024-03-15 24:00")), None);
    }

    #[test]
    fn current_hour_index_finds_matching_hour() {
        let hours = day("2024-03-15");
        for h in 0..24 {
            assert_eq!(current_hour_index(&hours, h), Some(h as usize));
        }
    }

    #[test]
    fn current_hour_index_not_found() {
        let hours = day("2024-03-15");
        assert_eq!(current_hour_index(&hours, 24), None);
        assert_eq!(current_hour_index(&hours[..5], 12), None);
        assert_eq!(current_hour_index(&[], 0), None);
    }

    #[test]
    fn current_hour_index_first_duplicate_wins() {
        let hours = vec![hour("2024-03-15 01:00"), hour("2024-03-15 02:00"), hour("2024-03-16 02:00")];
        assert_eq!(current_hour_index(&hours, 2), Some(1));
    }
}
