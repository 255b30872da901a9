//! Time helpers — wall-clock booking slots.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Format used for booking start times, e.g. `09:00`.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// A booked period: a start time of day and a length in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSlot {
    pub start: NaiveTime,
    pub duration_minutes: u32,
}

impl BookingSlot {
    /// Parse `start` as `HH:MM` and pair it with `duration_minutes`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStartTime`] when `start` is not a
    /// valid time of day, or [`ValidationError::InvalidDuration`] when
    /// `duration_minutes` is zero.
    pub fn parse(start: &str, duration_minutes: u32) -> Result<Self, ValidationError> {
        let start = NaiveTime::parse_from_str(start.trim(), CLOCK_FORMAT).map_err(|_| {
            ValidationError::InvalidStartTime {
                value: start.to_string(),
            }
        })?;
        if duration_minutes == 0 {
            return Err(ValidationError::InvalidDuration);
        }
        Ok(Self {
            start,
            duration_minutes,
        })
    }

    /// End of the slot, wrapping past midnight.
    #[must_use]
    pub fn end(&self) -> NaiveTime {
        let (end, _) = self
            .start
            .overflowing_add_signed(TimeDelta::minutes(i64::from(self.duration_minutes)));
        end
    }
}

impl std::fmt::Display for BookingSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} for {} minutes",
            self.start.format(CLOCK_FORMAT),
            self.duration_minutes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_valid_start_time() {
        let slot = BookingSlot::parse("09:00", 60).unwrap();
        assert_eq!(slot.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slot.duration_minutes, 60);
    }

    #[test]
    fn should_compute_end_time() {
        let slot = BookingSlot::parse("09:30", 45).unwrap();
        assert_eq!(slot.end(), NaiveTime::from_hms_opt(10, 15, 0).unwrap());
    }

    #[test]
    fn should_wrap_end_time_past_midnight() {
        let slot = BookingSlot::parse("23:30", 60).unwrap();
        assert_eq!(slot.end(), NaiveTime::from_hms_opt(0, 30, 0).unwrap());
    }

    #[test]
    fn should_reject_malformed_start_time() {
        let result = BookingSlot::parse("nine o'clock", 60);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidStartTime { value }) if value == "nine o'clock"
        ));
    }

    #[test]
    fn should_reject_zero_duration() {
        assert_eq!(
            BookingSlot::parse("09:00", 0),
            Err(ValidationError::InvalidDuration)
        );
    }

    #[test]
    fn should_display_start_and_duration() {
        let slot = BookingSlot::parse("09:00", 60).unwrap();
        assert_eq!(slot.to_string(), "09:00 for 60 minutes");
    }
}
