//! Twelve-hour wall-clock times and leave-by arithmetic.
//!
//! A [`ClockTime`] always renders as `H:MM AM` / `H:MM PM`: the hour is never
//! zero-padded and the minute always is.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveTime, TimeDelta, Timelike};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

/// A wall-clock time on a 12-hour dial
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time {0:?}: expected \"H:MM AM\" or \"H:MM PM\"")]
pub struct ParseClockTimeError(String);

impl ClockTime {
    /// `hour` must be 1..=12 and `minute` 0..=59
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Option<Self> {
        if (1..=12).contains(&hour) && minute < 60 {
            Some(Self {
                hour,
                minute,
                meridiem,
            })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// 12 AM is hour 0, 12 PM is hour 12
    pub fn hour_24(&self) -> u32 {
        match (self.hour, self.meridiem) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 12,
            (hour, Meridiem::Am) => hour as u32,
            (hour, Meridiem::Pm) => hour as u32 + 12,
        }
    }

    pub fn from_hour_24(hour: u32, minute: u32) -> Option<Self> {
        let minute = u8::try_from(minute).ok()?;
        match hour {
            0 => Self::new(12, minute, Meridiem::Am),
            1..=11 => Self::new(hour as u8, minute, Meridiem::Am),
            12 => Self::new(12, minute, Meridiem::Pm),
            13..=23 => Self::new((hour - 12) as u8, minute, Meridiem::Pm),
            _ => None,
        }
    }

    pub fn from_naive_time(time: NaiveTime) -> Self {
        // hour() is always 0..=23 and minute() 0..=59
        Self::from_hour_24(time.hour(), time.minute()).unwrap_or(Self {
            hour: 12,
            minute: 0,
            meridiem: Meridiem::Am,
        })
    }

    /// Default for the arrival picker: `now` rounded up to the next
    /// multiple of five minutes.
    pub fn next_five_minute_slot(now: NaiveTime) -> Self {
        let minutes_of_day = now.hour() * 60 + now.minute();
        let rounded = minutes_of_day.div_ceil(5) * 5 % (24 * 60);
        Self::from_naive_time(
            NaiveTime::from_hms_opt(rounded / 60, rounded % 60, 0).unwrap_or(NaiveTime::MIN),
        )
    }

    /// [`next_five_minute_slot`](Self::next_five_minute_slot) of the local clock
    pub fn default_arrival() -> Self {
        Self::next_five_minute_slot(Local::now().time())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

fn parse_dial_number(digits: &str) -> Option<u8> {
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError(s.to_owned());

        let (time, meridiem) = s.trim().split_once(char::is_whitespace).ok_or_else(err)?;
        let meridiem = match meridiem.trim() {
            m if m.eq_ignore_ascii_case("am") => Meridiem::Am,
            m if m.eq_ignore_ascii_case("pm") => Meridiem::Pm,
            _ => return Err(err()),
        };

        let (hour, minute) = time.split_once(':').ok_or_else(err)?;
        let hour = parse_dial_number(hour).ok_or_else(err)?;
        let minute = parse_dial_number(minute).ok_or_else(err)?;

        Self::new(hour, minute, meridiem).ok_or_else(err)
    }
}

// ============================================================================
// Durations
// ============================================================================

/// Hours, minutes and seconds as reported by a collaborator.
///
/// Not normalized: `minutes` and `seconds` may exceed 59.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TravelDuration {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TravelDuration {
    pub const ZERO: TravelDuration = TravelDuration {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Carry seconds into minutes and minutes into hours
    pub fn normalized(&self) -> Self {
        let total = self.total_seconds();
        Self {
            hours: u32::try_from(total / 3600).unwrap_or(u32::MAX),
            minutes: ((total % 3600) / 60) as u32,
            seconds: (total % 60) as u32,
        }
    }
}

/// Component-wise; carries are left to [`backsolve_leave_time`]
impl Add for TravelDuration {
    type Output = TravelDuration;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            hours: self.hours.saturating_add(rhs.hours),
            minutes: self.minutes.saturating_add(rhs.minutes),
            seconds: self.seconds.saturating_add(rhs.seconds),
        }
    }
}

impl fmt::Display for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normalized();
        match (n.hours, n.minutes) {
            (0, 0) => write!(f, "{}s", n.seconds),
            (0, m) => write!(f, "{}m {}s", m, n.seconds),
            (h, m) => write!(f, "{}h {}m", h, m),
        }
    }
}

// ============================================================================
// Leave-by arithmetic
// ============================================================================

/// The wall-clock time to depart so that `total` later it is `arrival`.
///
/// The arrival is placed on today's date and the duration is subtracted
/// hours, then minutes, then seconds, so crossing midnight rolls into the
/// previous day; only the wall-clock part of the result is kept.
/// Returns `None` only if the subtraction leaves the representable date range.
pub fn backsolve_leave_time(arrival: &ClockTime, total: &TravelDuration) -> Option<ClockTime> {
    backsolve_from(Local::now().date_naive(), arrival, total)
}

fn backsolve_from(
    anchor: NaiveDate,
    arrival: &ClockTime,
    total: &TravelDuration,
) -> Option<ClockTime> {
    let leave = anchor
        .and_hms_opt(arrival.hour_24(), arrival.minute() as u32, 0)?
        .checked_sub_signed(TimeDelta::try_hours(total.hours.into())?)?
        .checked_sub_signed(TimeDelta::try_minutes(total.minutes.into())?)?
        .checked_sub_signed(TimeDelta::try_seconds(total.seconds.into())?)?;

    Some(ClockTime::from_naive_time(leave.time()))
}

/// String form of [`backsolve_leave_time`].
///
/// An empty or unparsable `arrival` yields an empty string, which callers
/// render as "leave-by unknown".
pub fn backsolve_leave_time_str(arrival: &str, total: &TravelDuration) -> String {
    arrival
        .parse::<ClockTime>()
        .ok()
        .and_then(|arrival| backsolve_leave_time(&arrival, total))
        .map(|leave| leave.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave(arrival: &str, hours: u32, minutes: u32, seconds: u32) -> String {
        backsolve_leave_time_str(arrival, &TravelDuration::new(hours, minutes, seconds))
    }

    #[test]
    fn test_parse_and_display() {
        let time: ClockTime = "9:05 AM".parse().unwrap();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.meridiem(), Meridiem::Am);
        assert_eq!(time.to_string(), "9:05 AM");

        // Lenient about case, spacing and single-digit minutes
        assert_eq!(" 12:7 pm ".parse::<ClockTime>().unwrap().to_string(), "12:07 PM");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "9:00", "13:00 PM", "0:30 AM", "9:60 AM", "9:00 XM", "nine AM", "+9:00 AM", "9:000 AM"] {
            assert!(bad.parse::<ClockTime>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_24_hour_conversion() {
        let cases = [
            ("12:00 AM", 0),
            ("1:00 AM", 1),
            ("11:59 AM", 11),
            ("12:30 PM", 12),
            ("1:00 PM", 13),
            ("11:00 PM", 23),
        ];
        for (text, hour) in cases {
            let time: ClockTime = text.parse().unwrap();
            assert_eq!(time.hour_24(), hour, "{text}");
            assert_eq!(ClockTime::from_hour_24(hour, time.minute() as u32), Some(time));
        }
        assert_eq!(ClockTime::from_hour_24(24, 0), None);
    }

    #[test]
    fn test_zero_duration_is_identity() {
        for hour in 1..=12 {
            for minute in 0..60 {
                for meridiem in [Meridiem::Am, Meridiem::Pm] {
                    let arrival = ClockTime::new(hour, minute, meridiem).unwrap();
                    assert_eq!(
                        backsolve_leave_time(&arrival, &TravelDuration::ZERO),
                        Some(arrival)
                    );
                }
            }
        }
        assert_eq!(leave("12:00 PM", 0, 0, 0), "12:00 PM");
    }

    #[test]
    fn test_simple_backsolve() {
        assert_eq!(leave("9:00 AM", 1, 30, 0), "7:30 AM");
        assert_eq!(leave("1:15 PM", 0, 45, 0), "12:30 PM");
        assert_eq!(leave("12:20 PM", 0, 30, 0), "11:50 AM");
    }

    #[test]
    fn test_backsolve_crosses_midnight() {
        assert_eq!(leave("12:10 AM", 0, 20, 0), "11:50 PM");
        assert_eq!(leave("12:00 AM", 0, 0, 1), "11:59 PM");
    }

    #[test]
    fn test_backsolve_normalizes_components() {
        // 90 minutes and 120 seconds are carried by the date arithmetic
        assert_eq!(leave("9:00 AM", 0, 90, 120), "7:28 AM");
        // Seconds truncate toward the earlier minute
        assert_eq!(leave("9:00 AM", 0, 0, 30), "8:59 AM");
    }

    #[test]
    fn test_backsolve_longer_than_a_day() {
        assert_eq!(leave("9:00 AM", 25, 0, 0), "8:00 AM");
        assert_eq!(leave("3:00 PM", 48, 0, 0), "3:00 PM");
    }

    #[test]
    fn test_backsolve_unparsable_arrival_is_empty() {
        assert_eq!(leave("", 0, 10, 0), "");
        assert_eq!(leave("soon", 0, 10, 0), "");
    }

    #[test]
    fn test_backsolve_out_of_range_is_none() {
        let arrival: ClockTime = "9:00 AM".parse().unwrap();
        let total = TravelDuration::new(u32::MAX, 0, 0);
        assert_eq!(backsolve_leave_time(&arrival, &total), None);
    }

    #[test]
    fn test_backsolve_is_independent_of_anchor_date() {
        let arrival: ClockTime = "12:10 AM".parse().unwrap();
        let total = TravelDuration::new(0, 20, 0);
        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let leap_day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(
            backsolve_from(new_year, &arrival, &total),
            backsolve_from(leap_day, &arrival, &total)
        );
    }

    #[test]
    fn test_duration_add_and_normalize() {
        let drive = TravelDuration::new(0, 50, 40);
        let walk = TravelDuration::new(0, 15, 30);
        let total = drive + walk;

        assert_eq!(total, TravelDuration::new(0, 65, 70));
        assert_eq!(total.normalized(), TravelDuration::new(1, 6, 10));
        assert_eq!(total.total_seconds(), 3970);
        assert_eq!(total.to_string(), "1h 6m");
    }

    #[test]
    fn test_next_five_minute_slot() {
        let slot = |h, m| {
            ClockTime::next_five_minute_slot(NaiveTime::from_hms_opt(h, m, 0).unwrap()).to_string()
        };

        assert_eq!(slot(9, 0), "9:00 AM");
        assert_eq!(slot(9, 1), "9:05 AM");
        assert_eq!(slot(11, 58), "12:00 PM");
        assert_eq!(slot(12, 56), "1:00 PM");
        assert_eq!(slot(23, 57), "12:00 AM");
    }
}
