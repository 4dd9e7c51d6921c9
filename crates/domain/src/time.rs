//! Time-of-day helpers.
//!
//! Trigger times carry no date component: a schedule entry is due whenever
//! its time-of-day has passed relative to the local wall clock.

use chrono::NaiveTime;

use crate::error::HomeschedError;

/// Return the current local wall-clock time of day.
#[must_use]
pub fn wall_clock() -> NaiveTime {
    chrono::Local::now().time()
}

/// Parse a `HH:MM` 24-hour string into a time of day.
///
/// Parsing happens once, when an entry is scheduled — malformed times are
/// rejected before anything is stored.
///
/// # Errors
///
/// Returns [`HomeschedError::InvalidTimeFormat`] when `input` is not a valid
/// `HH:MM` string.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, HomeschedError> {
    NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| HomeschedError::InvalidTimeFormat(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_valid_time() {
        let time = parse_time_of_day("18:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
    }

    #[test]
    fn should_parse_midnight() {
        let time = parse_time_of_day("00:00").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn should_reject_out_of_range_hour() {
        assert!(matches!(
            parse_time_of_day("25:00"),
            Err(HomeschedError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn should_reject_trailing_garbage() {
        assert!(parse_time_of_day("18:30:00").is_err());
        assert!(parse_time_of_day("18:30 tomorrow").is_err());
    }

    #[test]
    fn should_reject_non_numeric_input() {
        assert!(parse_time_of_day("noonish").is_err());
        assert!(parse_time_of_day("").is_err());
    }

    #[test]
    fn should_return_wall_clock_time_within_bounds() {
        let time = wall_clock();
        assert!(time >= NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }
}
