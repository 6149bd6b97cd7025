//! Error number definitions and reentrant message lookup.
//!
//! Errno constants, the message table, and a `strerror_r` analogue that
//! writes into a caller-supplied buffer and reports failure through its
//! return code only. There is no thread-local errno variable: every
//! operation in this crate is reentrant by construction.

/// Well-known errno constants.
pub const EPERM: i32 = 1;
pub const ENOENT: i32 = 2;
pub const ESRCH: i32 = 3;
pub const EINTR: i32 = 4;
pub const EIO: i32 = 5;
pub const ENXIO: i32 = 6;
pub const E2BIG: i32 = 7;
pub const ENOEXEC: i32 = 8;
pub const EBADF: i32 = 9;
pub const ECHILD: i32 = 10;
pub const EAGAIN: i32 = 11;
pub const ENOMEM: i32 = 12;
pub const EACCES: i32 = 13;
pub const EFAULT: i32 = 14;
pub const ENOTBLK: i32 = 15;
pub const EBUSY: i32 = 16;
pub const EEXIST: i32 = 17;
pub const EXDEV: i32 = 18;
pub const ENODEV: i32 = 19;
pub const ENOTDIR: i32 = 20;
pub const EISDIR: i32 = 21;
pub const EINVAL: i32 = 22;
pub const ENFILE: i32 = 23;
pub const EMFILE: i32 = 24;
pub const ENOTTY: i32 = 25;
pub const ETXTBSY: i32 = 26;
pub const EFBIG: i32 = 27;
pub const ENOSPC: i32 = 28;
pub const ESPIPE: i32 = 29;
pub const EROFS: i32 = 30;
pub const EMLINK: i32 = 31;
pub const EPIPE: i32 = 32;
pub const EDOM: i32 = 33;
pub const ERANGE: i32 = 34;
pub const EDEADLK: i32 = 35;
pub const ENAMETOOLONG: i32 = 36;
pub const ENOSYS: i32 = 38;
pub const ENOTEMPTY: i32 = 39;
pub const ELOOP: i32 = 40;
pub const EILSEQ: i32 = 84;

/// Buffer length guaranteed to hold any message written by [`strerror_r`].
///
/// There is no standard way to ask for the length of an errno message up
/// front; 1024 matches the internal buffer glibc uses for `strerror`.
pub const ERR_MSG_LEN: usize = 1024;

/// Returns the message for a known errno value, or `None` for an unknown
/// one.
#[must_use]
pub fn errno_message(errnum: i32) -> Option<&'static str> {
    let msg = match errnum {
        0 => "Success",
        EPERM => "Operation not permitted",
        ENOENT => "No such file or directory",
        ESRCH => "No such process",
        EINTR => "Interrupted system call",
        EIO => "Input/output error",
        ENXIO => "No such device or address",
        E2BIG => "Argument list too long",
        ENOEXEC => "Exec format error",
        EBADF => "Bad file descriptor",
        ECHILD => "No child processes",
        EAGAIN => "Resource temporarily unavailable",
        ENOMEM => "Cannot allocate memory",
        EACCES => "Permission denied",
        EFAULT => "Bad address",
        ENOTBLK => "Block device required",
        EBUSY => "Device or resource busy",
        EEXIST => "File exists",
        EXDEV => "Invalid cross-device link",
        ENODEV => "No such device",
        ENOTDIR => "Not a directory",
        EISDIR => "Is a directory",
        EINVAL => "Invalid argument",
        ENFILE => "Too many open files in system",
        EMFILE => "Too many open files",
        ENOTTY => "Inappropriate ioctl for device",
        ETXTBSY => "Text file busy",
        EFBIG => "File too large",
        ENOSPC => "No space left on device",
        ESPIPE => "Illegal seek",
        EROFS => "Read-only file system",
        EMLINK => "Too many links",
        EPIPE => "Broken pipe",
        EDOM => "Numerical argument out of domain",
        ERANGE => "Numerical result out of range",
        EDEADLK => "Resource deadlock avoided",
        ENAMETOOLONG => "File name too long",
        ENOSYS => "Function not implemented",
        ENOTEMPTY => "Directory not empty",
        ELOOP => "Too many levels of symbolic links",
        EILSEQ => "Invalid or incomplete multibyte or wide character",
        _ => return None,
    };
    Some(msg)
}

/// Returns the error message string for the given errno value.
///
/// Safe core of C `strerror`: a static string describing the error, or a
/// generic message for unknown errnos.
#[must_use]
pub fn strerror_message(errnum: i32) -> &'static str {
    errno_message(errnum).unwrap_or("Unknown error")
}

/// Writes the NUL-terminated message for `errnum` into `buf`.
///
/// Reentrant analogue of C `strerror`: all state lives in the caller's
/// buffer. Returns `0` on success, [`EINVAL`] when `errnum` is not a known
/// error number (the `Unknown error N` text is still written), or
/// [`ERANGE`] when `buf` cannot hold the message plus its NUL terminator.
/// On [`ERANGE`] the message is truncated into the available space; a
/// zero-length buffer is left untouched.
pub fn strerror_r(errnum: i32, buf: &mut [u8]) -> i32 {
    let known = errno_message(errnum);
    let storage;
    let msg: &str = match known {
        Some(text) => text,
        None => {
            storage = format!("Unknown error {errnum}");
            storage.as_str()
        }
    };

    if buf.is_empty() {
        return ERANGE;
    }
    let bytes = msg.as_bytes();
    if bytes.len() >= buf.len() {
        let keep = buf.len() - 1;
        buf[..keep].copy_from_slice(&bytes[..keep]);
        buf[keep] = 0;
        return ERANGE;
    }
    buf[..bytes.len()].copy_from_slice(bytes);
    buf[bytes.len()] = 0;
    if known.is_some() { 0 } else { EINVAL }
}
