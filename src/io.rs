//! A tiny, `no_std`-friendly facade around `std::io`.
//! Reexports types from `std` when available; otherwise stands in a
//! `&'static str` for the error type so character sources and sinks can
//! still report why they stopped.
//!
//! `std::io::Error` may own a heap-allocated `Box<Error>` and depends on the
//! OS, which is why it has no home in `core`. Without `std` the only sinks
//! are in-memory ones, and their failures are all described by a fixed
//! message.

#[cfg(feature = "std")]
pub use std::io::{Bytes, Error, ErrorKind, Read, Write};
#[cfg(not(feature = "std"))]
pub type Error = &'static str;

/// The error reported when a sink accepts zero bytes of a non-empty write.
#[cfg(feature = "std")]
#[cold]
pub(crate) fn write_zero() -> Error {
    Error::new(ErrorKind::WriteZero, "failed to write whole buffer")
}

#[cfg(not(feature = "std"))]
#[cold]
pub(crate) fn write_zero() -> Error {
    "failed to write whole buffer"
}

/// The error reported when a `fmt::Formatter` refuses output.
#[cfg(feature = "std")]
#[cold]
pub(crate) fn fmt_error() -> Error {
    Error::new(ErrorKind::Other, "fmt error")
}

#[cfg(not(feature = "std"))]
#[cold]
pub(crate) fn fmt_error() -> Error {
    "fmt error"
}
