pub mod subtitles;
pub use subtitles::{
    delay_timestamps, format_timestamp, parse_timestamp, shift_timestamps, Delay, ShiftReport,
    Timestamp,
};

pub mod errors;
pub use errors::{DelayError, SrtShiftError, SrtShiftResult, TimestampError};
