//! Timestamp parsing and formatting.
//!
//! All timestamps are naive local wall-clock times. Input must use a `T`
//! separator, with or without seconds. Nothing else is accepted: no
//! fractional seconds, no offsets, no bare dates.

use super::error::RecallError;
use super::messages::Message;
use chrono::{Local, NaiveDateTime, SubsecRound};

/// Accepted input layouts, tried in order.
pub const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Layout used in tables and confirmations.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, RecallError> {
    let trimmed = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| RecallError::Validation(Message::InvalidDate(value.to_string())))
}

/// Current local time, truncated to whole seconds so stored and in-memory
/// values compare equal after a round trip.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

pub fn display(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DISPLAY_FORMAT).to_string()
}

pub fn display_opt(timestamp: Option<&NaiveDateTime>) -> String {
    timestamp.map_or_else(|| "-".to_string(), display)
}
