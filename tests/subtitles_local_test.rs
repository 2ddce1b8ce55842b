use srtshift::{delay_timestamps, Delay, ShiftReport, SrtShiftError};
use std::fs;
use std::io;
use tempfile::tempdir;

const TESTDATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/input.srt");

#[test]
fn test_delay_local_subtitles() -> io::Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("output_adjusted.srt");

    let report = delay_timestamps(TESTDATA, &output, Delay::from_millis(12_800))?;
    assert_eq!(report, ShiftReport { pairs: 4, clamped: 2 });

    let adjusted = fs::read_to_string(&output)?;
    let expected = "1\n\
00:00:03,000 --> 00:00:05,500\n\
Será que você foi infectado?\n\
\n\
2\n\
00:00:06,200 --> 00:00:08,450\n\
Não, não,\n\
não com um vírus de verdade,\n\
\n\
3\n\
00:00:00,000 --> 00:00:00,000\n\
[SERENE MUSIC]\n\
\n\
4\n\
01:01:50,204 --> 01:01:52,200\n\
Last line.\n";
    assert_eq!(adjusted, expected);
    Ok(())
}

#[test]
fn test_delay_overwrites_existing_output() -> io::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("input.srt");
    let output = dir.path().join("output.srt");
    fs::write(&input, "1\n00:00:02,000 --> 00:00:03,000\nHi\n")?;
    fs::write(&output, "stale content that is much longer than the new output\n")?;

    delay_timestamps(&input, &output, Delay::from_millis(1_000))?;

    assert_eq!(
        fs::read_to_string(&output)?,
        "1\n00:00:01,000 --> 00:00:02,000\nHi\n"
    );
    Ok(())
}

#[test]
fn test_delay_without_timestamps_copies_content() -> io::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("plain.txt");
    let output = dir.path().join("plain_out.txt");
    let content = "no subtitles here\r\n00:00:5,000 --> 00:00:06,000\r\n";
    fs::write(&input, content)?;

    let report = delay_timestamps(&input, &output, Delay::from_millis(12_800))?;

    assert_eq!(report.pairs, 0);
    assert_eq!(fs::read_to_string(&output)?, content);
    Ok(())
}

#[test]
fn test_delay_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("never_written.srt");

    let result = delay_timestamps(dir.path().join("missing.srt"), &output, Delay::default());

    match result {
        Err(SrtShiftError::Other(ref err)) => assert_eq!(err.kind(), io::ErrorKind::NotFound),
        ref other => panic!("expected I/O error, got {:?}", other),
    }
    assert!(result.unwrap_err().to_string().starts_with("I/O error: "));
    assert!(!output.exists(), "output must not be created on failure");
}

#[test]
fn test_delay_non_utf8_input_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("latin1.srt");
    fs::write(&input, b"1\n00:00:01,000 --> 00:00:02,000\n\xe9t\xe9\n").unwrap();

    let err = delay_timestamps(&input, dir.path().join("out.srt"), Delay::default()).unwrap_err();
    let err: io::Error = err.into();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_delay_unwritable_output_is_io_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("no_such_dir").join("out.srt");

    let err = delay_timestamps(TESTDATA, &output, Delay::default()).unwrap_err();
    assert!(matches!(err, SrtShiftError::Other(_)));
}

