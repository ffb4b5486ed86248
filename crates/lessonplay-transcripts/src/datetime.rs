use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Korean-locale timestamp as it appears in transcript cells and file names:
/// `2025. 9. 11. 오후 12-05-27` with optional seconds and uneven spacing.
static STAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d{4})\.\s*(\d{1,2})\.\s*(\d{1,2})\.\s*(오전|오후)\s*(\d{1,2})-(\d{1,2})(?:-\d{1,2})?",
    )
    .unwrap()
});

/// Calendar date and wall-clock time parsed from one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStamp {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Parse a session timestamp out of arbitrary text.
///
/// Whitespace runs are collapsed before matching. 오전 (AM) maps hour 12 to
/// 0, 오후 (PM) adds 12 to every hour except 12. Text without a timestamp,
/// or with an impossible date or clock value, yields `None`; this is never
/// an error.
pub fn parse_stamp(text: &str) -> Option<SessionStamp> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let caps = STAMP_RE.captures(&collapsed)?;

    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    let raw_hour: u32 = caps[5].parse().ok()?;
    let minute: u32 = caps[6].parse().ok()?;

    let hour = if &caps[4] == "오전" {
        if raw_hour == 12 { 0 } else { raw_hour }
    } else if raw_hour == 12 {
        12
    } else {
        raw_hour + 12
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(SessionStamp { date, time })
}

/// Parse a session timestamp from the base name of a file path.
pub fn parse_stamp_from_filename(path: &Path) -> Option<SessionStamp> {
    let name = path.file_name()?.to_str()?;
    parse_stamp(name)
}
