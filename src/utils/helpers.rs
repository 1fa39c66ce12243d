//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{Local, NaiveDateTime};

/// Formats accepted for date-time values passed in headers
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse a local date-time such as `2024-09-01T08:30` or `2024-09-01T08:30:00`
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Timestamp attached to error payloads
pub fn timestamp_now() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Check if a string has any non-whitespace content
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
