//! Timestamp parsing for configuration and CLI input.
//!
//! Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM[:SS[.mmm]]` with human 1-based
//! months on the wire. Syntactically valid but calendar-impossible fields
//! (month 13, Feb 30, hour 24) are rejected here at the boundary; the engine
//! itself never validates.

use std::str::FromStr;

use crate::error::TimescaleError;
use crate::instant::{days_in_month, Instant};

impl FromStr for Instant {
    type Err = TimescaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimescaleError::MalformedTimestamp {
            input: s.to_string(),
        };

        let (date_part, time_part) = match s.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (s, None),
        };

        let mut date_fields = date_part.split('-');
        let year: i32 = date_fields
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        let month: u32 = date_fields
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        let day: u32 = date_fields
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        if date_fields.next().is_some() {
            return Err(malformed());
        }

        let (mut hour, mut minute, mut second, mut millisecond) = (0u32, 0u32, 0u32, 0u32);
        if let Some(time) = time_part {
            let mut time_fields = time.split(':');
            hour = time_fields
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(malformed)?;
            minute = time_fields
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(malformed)?;
            if let Some(seconds_part) = time_fields.next() {
                match seconds_part.split_once('.') {
                    Some((sec, ms)) => {
                        second = sec.parse().map_err(|_| malformed())?;
                        if ms.len() != 3 {
                            return Err(malformed());
                        }
                        millisecond = ms.parse().map_err(|_| malformed())?;
                    }
                    None => second = seconds_part.parse().map_err(|_| malformed())?,
                }
            }
            if time_fields.next().is_some() {
                return Err(malformed());
            }
        }

        if !(1..=12).contains(&month) {
            return Err(TimescaleError::InvalidMonth { month });
        }
        let max_day = days_in_month(month - 1, year);
        if !(1..=u32::from(max_day)).contains(&day) {
            return Err(TimescaleError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        for (field, value, max) in [
            ("hour", hour, 23),
            ("minute", minute, 59),
            ("second", second, 59),
            ("millisecond", millisecond, 999),
        ] {
            if value > max {
                return Err(TimescaleError::InvalidTimeField { field, value, max });
            }
        }

        Ok(Instant::new(
            year,
            month - 1,
            day,
            hour,
            minute,
            second,
            millisecond,
        ))
    }
}
