use super::types::{Delay, ShiftReport, Timestamp};
use super::utils::{format_timestamp, parse_timestamp};
use crate::errors::{SrtShiftResult, TimestampError};
use log::{debug, info, warn};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// `start --> end` where both sides are `HH:MM:SS,mmm` with ASCII digits
static TIMESTAMP_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}) --> ([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3})")
        .expect("timestamp pair pattern must compile")
});

/// Read an SRT file and write a new one with every timestamp moved back by `delay`
pub fn delay_timestamps<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    delay: Delay,
) -> SrtShiftResult<ShiftReport> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let content = fs::read_to_string(input)?;
    info!(
        "Read {} bytes from {}, shifting by {} seconds",
        content.len(),
        input.display(),
        delay
    );

    let (adjusted, report) = shift_timestamps(&content, delay)?;

    fs::write(output, adjusted.as_bytes())?;
    info!(
        "Wrote {} bytes to {} ({} timestamp pairs adjusted)",
        adjusted.len(),
        output.display(),
        report.pairs
    );
    if report.clamped > 0 {
        warn!(
            "{} timestamps in {} would have gone negative and were set to 00:00:00,000",
            report.clamped,
            input.display()
        );
    }

    Ok(report)
}

/// Rewrite every `start --> end` pair in `content`, leaving all other text untouched.
///
/// Matches are leftmost and non-overlapping. Each side is shifted
/// independently and floored at zero.
pub fn shift_timestamps(
    content: &str,
    delay: Delay,
) -> Result<(String, ShiftReport), TimestampError> {
    let mut adjusted = String::with_capacity(content.len());
    let mut report = ShiftReport::default();
    let mut last_end = 0;

    for caps in TIMESTAMP_PAIR.captures_iter(content) {
        let Some(pair) = caps.get(0) else {
            continue;
        };

        let start = shift_one(&caps[1], delay, &mut report)?;
        let end = shift_one(&caps[2], delay, &mut report)?;

        adjusted.push_str(&content[last_end..pair.start()]);
        adjusted.push_str(&format_timestamp(start));
        adjusted.push_str(" --> ");
        adjusted.push_str(&format_timestamp(end));
        last_end = pair.end();

        report.pairs += 1;
        debug!("  {} -> {} --> {}", pair.as_str(), start, end);
    }

    adjusted.push_str(&content[last_end..]);
    Ok((adjusted, report))
}

fn shift_one(
    text: &str,
    delay: Delay,
    report: &mut ShiftReport,
) -> Result<Timestamp, TimestampError> {
    let original = parse_timestamp(text)?;
    match original.shift_back(delay) {
        Some(shifted) => Ok(shifted),
        None => {
            report.clamped += 1;
            Ok(Timestamp::ZERO)
        }
    }
}
