//! Predictable wrappers around standard allocation, NUL-terminated string
//! manipulation, and time formatting.
//!
//! Every operation is a short, stateless computation over caller-owned
//! buffers. Allocation normalizes the implementation-defined zero-size
//! corner to a deterministic failure, string manipulation works on `&[u8]`
//! slices modelling C strings, and the error-message and local-time
//! lookups are reentrant analogues of their classic non-reentrant
//! counterparts. Failures are reported through sentinel returns (`Option`,
//! error codes); nothing logs and nothing retains state across calls.

pub mod alloc;
pub mod ctype;
pub mod errno;
pub mod string;
pub mod time;
