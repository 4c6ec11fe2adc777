//! Character sinks for formatting integers as text.

use crate::error::{Error, Result};
use crate::io;
use alloc::vec::Vec;
use core::fmt;
use core::str;

/// Trait used by the formatter for emitting text. Digits are produced into a
/// scratch buffer and handed over in one piece, so a sink sees at most a
/// handful of writes per integer.
///
/// This trait is sealed and cannot be implemented for types outside of
/// `mpint`.
pub trait Write: private::Sealed {
    /// Write some prefix of `buf`, returning how many bytes were taken.
    fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Flush buffered output, if the sink buffers.
    fn flush(&mut self) -> Result<()>;

    /// Write all of `buf`. A sink that accepts zero bytes of a non-empty
    /// buffer is an error.
    fn write_all(&mut self, mut buf: &[u8]) -> Result<()> {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => return Err(Error::io(io::write_zero())),
                Ok(n) => buf = &buf[n..],
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

// Prevent users from implementing the Write trait.
mod private {
    pub trait Sealed {}
}

/// Integer output sink that writes into a `fmt::Formatter`.
pub struct WriterFormatter<'a, 'b: 'a> {
    /// The formatter the text goes to.
    pub inner: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b> private::Sealed for WriterFormatter<'a, 'b> {}

impl<'a, 'b> Write for WriterFormatter<'a, 'b> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        fn error<E>(_: E) -> Error {
            // Error value does not matter because fmt::Display impl just maps
            // it to fmt::Error
            Error::io(io::fmt_error())
        }
        let s = tri!(str::from_utf8(buf).map_err(error));
        tri!(self.inner.write_str(s).map_err(error));
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Integer output sink that appends to a `Vec<u8>`.
pub struct VecWriter<'v>(pub &'v mut Vec<u8>);

impl<'v> private::Sealed for VecWriter<'v> {}

impl<'v> Write for VecWriter<'v> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        tri!(self
            .0
            .try_reserve(data.len())
            .map_err(|_| Error::out_of_memory()));
        self.0.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Integer output sink that writes to a std::io output stream.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub struct IoWrite<W>(pub W);

#[cfg(feature = "std")]
impl<W> private::Sealed for IoWrite<W> where W: io::Write {}

#[cfg(feature = "std")]
impl<W> Write for IoWrite<W>
where
    W: io::Write,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.0.write(buf).map_err(Error::io)
    }

    fn flush(&mut self) -> Result<()> {
        self.0.flush().map_err(Error::io)
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.0.write_all(buf).map_err(Error::io)
    }
}

impl<'a, W> private::Sealed for &'a mut W where W: ?Sized + Write {}

impl<'a, W> Write for &'a mut W
where
    W: ?Sized + Write,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        W::write(self, buf)
    }

    fn flush(&mut self) -> Result<()> {
        W::flush(self)
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        W::write_all(self, buf)
    }
}
