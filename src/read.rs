//! Character sources for parsing integers out of text.

use crate::error::Result;
#[cfg(feature = "std")]
use crate::error::Error;
#[cfg(feature = "std")]
use crate::io;

/// Trait used by the parser for iterating over input. This is manually
/// "specialized" for iterating over `&[u8]`.
///
/// A source hands out one byte at a time and can hold back the byte it
/// last peeked at, so the parser stops in front of the first character that
/// is not a digit and leaves it for the caller.
///
/// This trait is sealed and cannot be implemented for types outside of
/// `mpint`.
pub trait Read: private::Sealed {
    /// Consume and return the next byte, or `None` at the end of input.
    fn next(&mut self) -> Result<Option<u8>>;

    /// Return the next byte without consuming it.
    fn peek(&mut self) -> Result<Option<u8>>;

    /// Only valid after a call to peek(). Discards the peeked byte.
    fn discard(&mut self);

    /// Offset from the beginning of the input to the next byte that would be
    /// returned by next() or peek().
    fn byte_offset(&self) -> usize;
}

/// Integer input source that reads from a std::io input stream.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub struct IoRead<R>
where
    R: io::Read,
{
    iter: io::Bytes<R>,
    /// Temporary storage of peeked byte.
    ch: Option<u8>,
    /// Bytes taken out of `iter` so far, including a peeked one.
    offset: usize,
}

/// Integer input source that reads from a slice of bytes.
pub struct SliceRead<'a> {
    slice: &'a [u8],
    /// Index of the *next* byte that will be returned by next() or peek().
    index: usize,
}

/// Integer input source that reads from a UTF-8 string.
pub struct StrRead<'a> {
    delegate: SliceRead<'a>,
}

// Prevent users from implementing the Read trait.
mod private {
    pub trait Sealed {}
}

//////////////////////////////////////////////////////////////////////////////

#[cfg(feature = "std")]
impl<R> IoRead<R>
where
    R: io::Read,
{
    /// Create an input source to read from a std::io input stream.
    ///
    /// When reading from a source against which short reads are not
    /// efficient, such as a [`File`], you will want to apply your own
    /// buffering because mpint will not buffer the input. See
    /// [`std::io::BufReader`].
    ///
    /// [`File`]: std::fs::File
    pub fn new(reader: R) -> Self {
        IoRead {
            iter: reader.bytes(),
            ch: None,
            offset: 0,
        }
    }

    /// Give back the underlying reader. A byte that was peeked but not
    /// consumed is lost.
    pub fn into_inner(self) -> R {
        self.iter.into_inner()
    }
}

#[cfg(feature = "std")]
impl<R> private::Sealed for IoRead<R> where R: io::Read {}

#[cfg(feature = "std")]
impl<R> Read for IoRead<R>
where
    R: io::Read,
{
    #[inline]
    fn next(&mut self) -> Result<Option<u8>> {
        match self.ch.take() {
            Some(ch) => Ok(Some(ch)),
            None => match self.iter.next() {
                Some(Err(err)) => Err(Error::io(err)),
                Some(Ok(ch)) => {
                    self.offset += 1;
                    Ok(Some(ch))
                }
                None => Ok(None),
            },
        }
    }

    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        match self.ch {
            Some(ch) => Ok(Some(ch)),
            None => match self.iter.next() {
                Some(Err(err)) => Err(Error::io(err)),
                Some(Ok(ch)) => {
                    self.offset += 1;
                    self.ch = Some(ch);
                    Ok(self.ch)
                }
                None => Ok(None),
            },
        }
    }

    #[inline]
    fn discard(&mut self) {
        self.ch = None;
    }

    fn byte_offset(&self) -> usize {
        match self.ch {
            Some(_) => self.offset - 1,
            None => self.offset,
        }
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a> SliceRead<'a> {
    /// Create an input source to read from a slice of bytes.
    pub fn new(slice: &'a [u8]) -> Self {
        SliceRead { slice, index: 0 }
    }

    /// The bytes not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        &self.slice[self.index..]
    }
}

impl<'a> private::Sealed for SliceRead<'a> {}

impl<'a> Read for SliceRead<'a> {
    #[inline]
    fn next(&mut self) -> Result<Option<u8>> {
        // `Ok(self.slice.get(self.index).map(|ch| { self.index += 1; *ch }))`
        // is about 10% slower.
        Ok(if self.index < self.slice.len() {
            let ch = self.slice[self.index];
            self.index += 1;
            Some(ch)
        } else {
            None
        })
    }

    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        // `Ok(self.slice.get(self.index).map(|ch| *ch))` is about 10% slower
        // for some reason.
        Ok(if self.index < self.slice.len() {
            Some(self.slice[self.index])
        } else {
            None
        })
    }

    #[inline]
    fn discard(&mut self) {
        self.index += 1;
    }

    fn byte_offset(&self) -> usize {
        self.index
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a> StrRead<'a> {
    /// Create an input source to read from a UTF-8 string.
    pub fn new(s: &'a str) -> Self {
        StrRead {
            delegate: SliceRead::new(s.as_bytes()),
        }
    }

    /// The text not consumed yet.
    pub fn remaining(&self) -> &'a str {
        // SAFETY: the slice was created from a &str in StrRead::new.
        let s = unsafe { core::str::from_utf8_unchecked(self.delegate.slice) };
        // The parser only consumes ASCII, so this is a char boundary.
        s.get(self.delegate.index..).unwrap_or("")
    }
}

impl<'a> private::Sealed for StrRead<'a> {}

impl<'a> Read for StrRead<'a> {
    #[inline]
    fn next(&mut self) -> Result<Option<u8>> {
        self.delegate.next()
    }

    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        self.delegate.peek()
    }

    #[inline]
    fn discard(&mut self) {
        self.delegate.discard();
    }

    fn byte_offset(&self) -> usize {
        self.delegate.byte_offset()
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a, R> private::Sealed for &'a mut R where R: ?Sized + Read {}

impl<'a, R> Read for &'a mut R
where
    R: ?Sized + Read,
{
    fn next(&mut self) -> Result<Option<u8>> {
        R::next(self)
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        R::peek(self)
    }

    fn discard(&mut self) {
        R::discard(self);
    }

    fn byte_offset(&self) -> usize {
        R::byte_offset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_peek_discard_test() {
        let mut read = SliceRead::new(b"ab");
        assert_eq!(read.peek().unwrap(), Some(b'a'));
        assert_eq!(read.byte_offset(), 0);
        read.discard();
        assert_eq!(read.next().unwrap(), Some(b'b'));
        assert_eq!(read.peek().unwrap(), None);
        assert_eq!(read.byte_offset(), 2);
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_peek_keeps_byte_test() {
        let mut read = IoRead::new(&b"7x"[..]);
        assert_eq!(read.next().unwrap(), Some(b'7'));
        assert_eq!(read.peek().unwrap(), Some(b'x'));
        assert_eq!(read.byte_offset(), 1);
        assert_eq!(read.peek().unwrap(), Some(b'x'));
        assert_eq!(read.next().unwrap(), Some(b'x'));
        assert_eq!(read.byte_offset(), 2);
        assert_eq!(read.next().unwrap(), None);
    }

    #[test]
    fn str_remaining_test() {
        let mut read = StrRead::new("12é");
        read.discard();
        read.discard();
        assert_eq!(read.remaining(), "é");
    }
}
