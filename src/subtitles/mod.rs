mod shifter;
mod types;
mod utils;

pub use shifter::{delay_timestamps, shift_timestamps};
pub use types::{Delay, ShiftReport, Timestamp};
pub use utils::{format_timestamp, parse_timestamp};
