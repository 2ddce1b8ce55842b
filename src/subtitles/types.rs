use super::utils::{format_timestamp, parse_timestamp};
use crate::errors::{DelayError, TimestampError};
use std::fmt;
use std::str::FromStr;

pub(crate) const MILLIS_PER_SECOND: u64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Subtitle timestamp held as total elapsed milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Unbounded hour component (not wrapped at 24)
    pub const fn hours(self) -> u64 {
        self.0 / MILLIS_PER_HOUR
    }

    pub const fn minutes(self) -> u64 {
        (self.0 % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
    }

    pub const fn seconds(self) -> u64 {
        (self.0 % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }

    pub const fn millis(self) -> u64 {
        self.0 % MILLIS_PER_SECOND
    }

    /// Move the timestamp back by `delay`.
    ///
    /// Returns `None` when the result would be negative; callers clamp that
    /// to [`Timestamp::ZERO`]. A negative delay moves the timestamp forward,
    /// saturating at `u64::MAX` milliseconds.
    pub fn shift_back(self, delay: Delay) -> Option<Timestamp> {
        let shifted = self.0 as i128 - delay.as_millis() as i128;
        if shifted < 0 {
            return None;
        }
        Some(Timestamp(u64::try_from(shifted).unwrap_or(u64::MAX)))
    }

    /// [`Timestamp::shift_back`] with the floor at zero applied
    pub fn saturating_shift_back(self, delay: Delay) -> Timestamp {
        self.shift_back(delay).unwrap_or(Timestamp::ZERO)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timestamp(*self))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_timestamp(s)
    }
}

const MICROS_PER_MILLI: i64 = 1_000;
const MICROS_PER_SECOND: i64 = 1_000 * MICROS_PER_MILLI;

/// Signed amount of time subtracted from every timestamp, in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Delay(i64);

impl Delay {
    pub const fn from_millis(millis: i64) -> Self {
        Delay(millis.saturating_mul(MICROS_PER_MILLI))
    }

    pub const fn from_micros(micros: i64) -> Self {
        Delay(micros)
    }

    /// Build a delay from fractional seconds, rounded to the nearest microsecond.
    pub fn from_secs_f64(seconds: f64) -> Result<Self, DelayError> {
        if !seconds.is_finite() {
            return Err(DelayError::new(format!("{} is not a finite number", seconds)));
        }

        let micros = (seconds * MICROS_PER_SECOND as f64).round();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if micros < i64::MIN as f64 || micros >= i64::MAX as f64 {
            return Err(DelayError::new(format!(
                "{} seconds is out of range",
                seconds
            )));
        }

        Ok(Delay(micros as i64))
    }

    pub const fn as_micros(self) -> i64 {
        self.0
    }

    /// Whole milliseconds to subtract from a millisecond timestamp.
    ///
    /// Rounded up, so that `T - as_millis()` is `floor(T - delay)`.
    pub const fn as_millis(self) -> i64 {
        let whole = self.0.div_euclid(MICROS_PER_MILLI);
        if self.0.rem_euclid(MICROS_PER_MILLI) == 0 {
            whole
        } else {
            whole + 1
        }
    }
}

impl fmt::Display for Delay {
    /// Seconds with trailing zero decimals dropped, e.g. `12.8` or `-3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let secs = abs / MICROS_PER_SECOND as u64;
        let frac = abs % MICROS_PER_SECOND as u64;

        if frac == 0 {
            return write!(f, "{}{}", sign, secs);
        }

        let digits = format!("{:06}", frac);
        write!(f, "{}{}.{}", sign, secs, digits.trim_end_matches('0'))
    }
}

impl FromStr for Delay {
    type Err = DelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seconds: f64 = s
            .trim()
            .parse()
            .map_err(|_| DelayError::new(format!("'{}' is not a number of seconds", s)))?;
        Delay::from_secs_f64(seconds)
    }
}

/// Summary of one shift pass over a subtitle document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftReport {
    /// Number of `start --> end` pairs rewritten
    pub pairs: usize,
    /// Number of individual timestamps floored at `00:00:00,000`
    pub clamped: usize,
}
