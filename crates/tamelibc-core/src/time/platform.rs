//! Per-platform local-time backends.
//!
//! POSIX hosts convert through `localtime_r`, which consults the process
//! timezone configuration and writes into caller-provided storage. Other
//! platforms have no backend yet and report failure.

use super::BrokenDownTime;

#[cfg(unix)]
pub(super) fn localtime(epoch: i64) -> Option<BrokenDownTime> {
    let timer = libc::time_t::try_from(epoch).ok()?;

    // SAFETY: `libc::tm` is a plain C struct for which all-zero bytes is a
    // valid value; every field is overwritten on success.
    let mut tm = unsafe { std::mem::zeroed::<libc::tm>() };

    // SAFETY: both pointers are valid for the duration of the call and
    // refer to disjoint storage owned by this frame.
    let ret = unsafe { libc::localtime_r(&raw const timer, &raw mut tm) };
    if ret.is_null() {
        return None;
    }

    Some(BrokenDownTime {
        tm_sec: tm.tm_sec,
        tm_min: tm.tm_min,
        tm_hour: tm.tm_hour,
        tm_mday: tm.tm_mday,
        tm_mon: tm.tm_mon,
        tm_year: tm.tm_year,
        tm_wday: tm.tm_wday,
        tm_yday: tm.tm_yday,
        tm_isdst: tm.tm_isdst,
        tm_gmtoff: i64::from(tm.tm_gmtoff),
    })
}

// TODO: Windows backend via localtime_s.
#[cfg(not(unix))]
pub(super) fn localtime(_epoch: i64) -> Option<BrokenDownTime> {
    None
}
