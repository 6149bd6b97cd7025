//! Time and date functions.
//!
//! Reentrant local-time conversion and fixed-width ISO 8601 timestamp
//! formatting. The timezone-aware conversion goes through a per-platform
//! backend; everything above it is pure logic over [`BrokenDownTime`].

mod platform;

/// Broken-down local time (like `struct tm`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokenDownTime {
    /// Seconds (0-60, 60 for leap second).
    pub tm_sec: i32,
    /// Minutes (0-59).
    pub tm_min: i32,
    /// Hours (0-23).
    pub tm_hour: i32,
    /// Day of month (1-31).
    pub tm_mday: i32,
    /// Month (0-11).
    pub tm_mon: i32,
    /// Years since 1900.
    pub tm_year: i32,
    /// Day of week (0-6, Sunday = 0).
    pub tm_wday: i32,
    /// Day of year (0-365).
    pub tm_yday: i32,
    /// Daylight saving time flag.
    pub tm_isdst: i32,
    /// Offset from UTC in seconds (east positive).
    pub tm_gmtoff: i64,
}

/// Buffer length needed by [`format_iso8601`]: the fixed-width
/// `YYYY-MM-DDThh:mm:ss+hhmm` template plus the NUL terminator.
pub const ISO8601_LEN: usize = 25;

/// Converts seconds since the Unix epoch to broken-down local time.
///
/// Reentrant analogue of C `localtime`: no hidden global state, the result
/// is returned by value. The conversion honors the process timezone
/// configuration through the platform backend. Returns `None` when the
/// platform conversion fails or the platform has no backend.
#[must_use]
pub fn localtime(epoch: i64) -> Option<BrokenDownTime> {
    platform::localtime(epoch)
}

/// Formats broken-down time as `YYYY-MM-DDThh:mm:ss+hhmm` into `buf`.
///
/// Writes the timestamp plus a NUL terminator and returns the number of
/// bytes written (excluding the NUL), or `0` when `buf` is shorter than
/// [`ISO8601_LEN`].
pub fn format_iso8601_from(bd: &BrokenDownTime, buf: &mut [u8]) -> usize {
    if buf.len() < ISO8601_LEN {
        return 0;
    }

    let year = i64::from(bd.tm_year) + 1900;
    let sign = if bd.tm_gmtoff < 0 { '-' } else { '+' };
    let off = bd.tm_gmtoff.unsigned_abs();
    let off_hour = off / 3600;
    let off_min = (off % 3600) / 60;

    let s = format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}{:02}",
        year,
        bd.tm_mon + 1,
        bd.tm_mday,
        bd.tm_hour,
        bd.tm_min,
        bd.tm_sec,
        sign,
        off_hour,
        off_min,
    );

    let bytes = s.as_bytes();
    let copy_len = bytes.len().min(buf.len() - 1);
    buf[..copy_len].copy_from_slice(&bytes[..copy_len]);
    buf[copy_len] = 0;
    copy_len
}

/// Formats seconds since the Unix epoch as a local-time ISO 8601 timestamp.
///
/// [`localtime`] followed by [`format_iso8601_from`]. Returns the number
/// of bytes written (excluding the NUL), or `0` when the buffer is shorter
/// than [`ISO8601_LEN`] or the local-time conversion fails.
pub fn format_iso8601(epoch: i64, buf: &mut [u8]) -> usize {
    if buf.len() < ISO8601_LEN {
        return 0;
    }
    match localtime(epoch) {
        Some(bd) => format_iso8601_from(&bd, buf),
        None => 0,
    }
}
