use super::types::{Timestamp, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::errors::TimestampError;

/// Length of `HH:MM:SS,mmm`
pub(crate) const TIMESTAMP_LEN: usize = 12;

/// Parse an SRT timestamp (`HH:MM:SS,mmm`) into milliseconds.
///
/// Only the leading 12 characters are inspected; anything after them is
/// ignored. Minutes and seconds are not range-checked.
pub fn parse_timestamp(text: &str) -> Result<Timestamp, TimestampError> {
    let b = text.as_bytes();
    if b.len() < TIMESTAMP_LEN {
        return Err(TimestampError::new(text));
    }

    let mut valid = b[2] == b':' && b[5] == b':' && b[8] == b',';
    for &i in &[0, 1, 3, 4, 6, 7, 9, 10, 11] {
        valid &= b[i].is_ascii_digit();
    }
    if !valid {
        return Err(TimestampError::new(text));
    }

    let digits = |range: std::ops::Range<usize>| {
        b[range]
            .iter()
            .fold(0u64, |acc, &d| acc * 10 + u64::from(d - b'0'))
    };

    let hours = digits(0..2);
    let minutes = digits(3..5);
    let seconds = digits(6..8);
    let millis = digits(9..12);

    Ok(Timestamp::from_millis(
        hours * MILLIS_PER_HOUR + minutes * MILLIS_PER_MINUTE + seconds * MILLIS_PER_SECOND + millis,
    ))
}

/// Format timestamp in SRT format
pub fn format_timestamp(timestamp: Timestamp) -> String {
    format!(
        "{:02}:{:02}:{:02},{:03}",
        timestamp.hours(),
        timestamp.minutes(),
        timestamp.seconds(),
        timestamp.millis()
    )
}
