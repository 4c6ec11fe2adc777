//! Conversion between integers and text in radix 2 through 64, and to and
//! from unsigned big-endian bytes.

use crate::bigint::{BigInt, Sign};
use crate::digit::{low_digit, Digit, Word, DIGIT_BITS};
use crate::error::{Error, ErrorCode, Result};
use crate::math;
use crate::read::{self, Read};
use crate::write::{Write, WriterFormatter};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};
use core::str::{self, FromStr};

/// Digit characters, in order of value.
const RMAP: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// Byte to digit value, `0xff` for bytes outside the alphabet.
static RMAP_REVERSE: [u8; 256] = reverse_map();

const fn reverse_map() -> [u8; 256] {
    let mut table = [0xff; 256];
    let mut i = 0;
    while i < RMAP.len() {
        table[RMAP[i] as usize] = i as u8;
        i += 1;
    }
    table
}

fn check_radix(radix: u32) -> Result<()> {
    if radix < 2 || radix > 64 {
        return Err(Error::new(ErrorCode::InvalidRadix(radix)));
    }
    Ok(())
}

/// Value of `ch` as a digit in `radix`, if it is one. Letters are
/// case-insensitive up to radix 36, where the alphabet only has one case.
#[inline]
fn decode(ch: u8, radix: u32) -> Option<Digit> {
    let ch = if radix <= 36 {
        ch.to_ascii_uppercase()
    } else {
        ch
    };
    let y = RMAP_REVERSE[ch as usize];
    if (y as u32) < radix {
        Some(y as Digit)
    } else {
        None
    }
}

//////////////////////////////////////////////////////////////////////////////

fn parse<R>(read: &mut R, radix: u32) -> Result<BigInt>
where
    R: ?Sized + Read,
{
    tri!(check_radix(radix));

    let mut sign = Sign::Positive;
    if tri!(read.peek()) == Some(b'-') {
        read.discard();
        sign = Sign::Negative;
    }

    let mut value = BigInt::new();
    while let Some(ch) = tri!(read.peek()) {
        let y = match decode(ch, radix) {
            Some(y) => y,
            None => break,
        };
        read.discard();
        tri!(math::imul_digit(&mut value, radix as Digit));
        tri!(math::iadd_digit_magnitude(&mut value, y));
    }

    // "-0" is still zero, and zero is positive.
    if !value.is_zero() {
        value.sign = sign;
    }
    Ok(value)
}

/// Parse an integer from a character source.
///
/// Reads an optional `-` followed by as many digits of `radix` as the source
/// offers. Parsing stops in front of the first byte that is not a digit,
/// which stays unconsumed in the source. A source that is empty or starts
/// with something other than a digit gives zero.
///
/// ```
/// use mpint::{BigInt, SliceRead};
///
/// let mut read = SliceRead::new(b"-1F;rest");
/// let value = mpint::from_read(&mut read, 16).unwrap();
/// assert_eq!(value, BigInt::from(-31));
/// assert_eq!(read.remaining(), b";rest");
/// ```
///
/// # Errors
///
/// Fails with `InvalidRadix` if `radix` is not in `2..=64`, with
/// `OutOfMemory` if the value cannot be grown, and with an IO error if the
/// source fails.
pub fn from_read<R>(mut read: R, radix: u32) -> Result<BigInt>
where
    R: Read,
{
    parse(&mut read, radix)
}

/// Parse an integer from the whole of a byte slice.
///
/// # Errors
///
/// As [`from_read`], and `TrailingCharacters` if anything follows the last
/// digit.
pub fn from_slice(v: &[u8], radix: u32) -> Result<BigInt> {
    let mut read = read::SliceRead::new(v);
    let value = tri!(parse(&mut read, radix));
    match tri!(read.peek()) {
        Some(_) => Err(Error::new(ErrorCode::TrailingCharacters)),
        None => Ok(value),
    }
}

/// Parse an integer from the whole of a string.
///
/// ```
/// let value = mpint::from_str("zz", 36).unwrap();
/// assert_eq!(value, mpint::BigInt::from(1295));
///
/// assert!(mpint::from_str("12 ", 10).is_err());
/// ```
///
/// # Errors
///
/// As [`from_read`], and `TrailingCharacters` if anything follows the last
/// digit.
pub fn from_str(s: &str, radix: u32) -> Result<BigInt> {
    from_slice(s.as_bytes(), radix)
}

//////////////////////////////////////////////////////////////////////////////

/// Append the digits of `value` to `buf`, most significant first.
fn format_into(buf: &mut Vec<u8>, value: &BigInt, radix: u32) -> Result<()> {
    if value.is_negative() {
        buf.push(b'-');
    }
    format_magnitude_into(buf, value, radix)
}

/// As `format_into`, without the sign.
fn format_magnitude_into(buf: &mut Vec<u8>, value: &BigInt, radix: u32) -> Result<()> {
    if radix == 10 {
        if let Some(magnitude) = value.magnitude_u64() {
            let mut itoa = itoa::Buffer::new();
            buf.extend_from_slice(itoa.format(magnitude).as_bytes());
            return Ok(());
        }
    }

    if value.is_zero() {
        buf.push(b'0');
        return Ok(());
    }

    let start = buf.len();
    let mut t = tri!(value.try_clone_with_capacity(value.used));
    while !t.is_zero() {
        let d = math::idiv_digit(&mut t, radix as Digit);
        buf.push(RMAP[d as usize]);
    }
    buf[start..].reverse();
    Ok(())
}

/// Upper bound on the length of `value` in `radix`, sign included. Exact
/// for power-of-two radixes.
fn size_hint(value: &BigInt, radix: u32) -> usize {
    let bits_per_char = (u32::BITS - 1 - radix.leading_zeros()) as usize;
    let bits = value.count_bits().max(1);
    (bits + bits_per_char - 1) / bits_per_char + value.is_negative() as usize
}

/// Scratch buffer large enough for the text of `value` in `radix`.
fn buffer_for(value: &BigInt, radix: u32) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    tri!(buf
        .try_reserve_exact(size_hint(value, radix))
        .map_err(|_| Error::out_of_memory()));
    Ok(buf)
}

fn format(value: &BigInt, radix: u32) -> Result<Vec<u8>> {
    tri!(check_radix(radix));
    let mut buf = tri!(buffer_for(value, radix));
    tri!(format_into(&mut buf, value, radix));
    Ok(buf)
}

/// Write `value` in `radix` to a character sink.
///
/// The output is minimal: a `-` only for negative values, no leading zeros,
/// and `0` for zero. Exactly [`radix_size`](BigInt::radix_size) bytes are
/// written, and no terminator.
///
/// # Errors
///
/// Fails with `InvalidRadix` if `radix` is not in `2..=64`, with
/// `OutOfMemory` if the scratch buffer cannot be allocated, and with an IO
/// error if the sink fails. Part of the text may have been written when the
/// sink fails.
pub fn to_writer<W>(mut writer: W, value: &BigInt, radix: u32) -> Result<()>
where
    W: Write,
{
    let buf = tri!(format(value, radix));
    writer.write_all(&buf)
}

/// Format `value` in `radix` as a byte vector.
pub fn to_vec(value: &BigInt, radix: u32) -> Result<Vec<u8>> {
    format(value, radix)
}

/// Format `value` in `radix` as a String.
pub fn to_string(value: &BigInt, radix: u32) -> Result<String> {
    let vec = tri!(format(value, radix));
    let string = unsafe {
        // We do not emit invalid UTF-8.
        String::from_utf8_unchecked(vec)
    };
    Ok(string)
}

//////////////////////////////////////////////////////////////////////////////

impl BigInt {
    /// Parse from a character source. See [`from_read`](crate::from_read).
    pub fn from_read<R>(read: R, radix: u32) -> Result<BigInt>
    where
        R: Read,
    {
        from_read(read, radix)
    }

    /// Parse the whole of `s` in `radix`.
    pub fn read_radix(s: &str, radix: u32) -> Result<BigInt> {
        from_str(s, radix)
    }

    /// Write `self` to a character sink. See [`to_writer`](crate::to_writer).
    pub fn to_writer<W>(&self, writer: W, radix: u32) -> Result<()>
    where
        W: Write,
    {
        to_writer(writer, self, radix)
    }

    /// Format `self` in `radix`.
    ///
    /// ```
    /// use mpint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-255).to_radix(16).unwrap(), "-FF");
    /// assert_eq!(BigInt::from(63).to_radix(64).unwrap(), "/");
    /// ```
    pub fn to_radix(&self, radix: u32) -> Result<String> {
        to_string(self, radix)
    }

    /// Number of characters `self` takes in `radix`, sign included.
    pub fn radix_size(&self, radix: u32) -> Result<usize> {
        tri!(check_radix(radix));
        if self.is_zero() {
            return Ok(1);
        }
        let sign = self.is_negative() as usize;

        if radix.is_power_of_two() {
            let bits = radix.trailing_zeros() as usize;
            return Ok((self.count_bits() + bits - 1) / bits + sign);
        }

        let mut t = tri!(self.try_clone_with_capacity(self.used));
        let mut digits = 0;
        while !t.is_zero() {
            math::idiv_digit(&mut t, radix as Digit);
            digits += 1;
        }
        Ok(digits + sign)
    }

    /// Number of bytes in the unsigned big-endian encoding of the
    /// magnitude. Zero for zero.
    pub fn unsigned_bin_size(&self) -> usize {
        (self.count_bits() + 7) / 8
    }

    /// The magnitude as unsigned big-endian bytes, without leading zeros.
    pub fn to_unsigned_bytes(&self) -> Result<Vec<u8>> {
        let len = self.unsigned_bin_size();
        let mut out = Vec::new();
        tri!(out
            .try_reserve_exact(len)
            .map_err(|_| Error::out_of_memory()));
        out.resize(len, 0);

        // At most 7 leftover bits plus one digit are in flight.
        let mut acc: Word = 0;
        let mut bits = 0;
        let mut pos = len;
        for &d in self.digits() {
            acc |= Word::from(d) << bits;
            bits += DIGIT_BITS;
            while bits >= 8 && pos > 0 {
                pos -= 1;
                out[pos] = acc as u8;
                acc >>= 8;
                bits -= 8;
            }
        }
        if pos > 0 {
            out[pos - 1] = acc as u8;
        }
        Ok(out)
    }

    /// A non-negative value from unsigned big-endian bytes. Leading zero
    /// bytes are allowed.
    pub fn from_unsigned_bytes(bytes: &[u8]) -> Result<BigInt> {
        let digits = match bytes.len().checked_mul(8) {
            Some(bits) => (bits + DIGIT_BITS as usize - 1) / DIGIT_BITS as usize,
            None => return Err(Error::out_of_memory()),
        };
        let mut x = tri!(BigInt::with_capacity(digits));

        let mut acc: Word = 0;
        let mut bits = 0;
        let mut i = 0;
        for &b in bytes.iter().rev() {
            acc |= Word::from(b) << bits;
            bits += 8;
            if bits >= DIGIT_BITS {
                x.dp[i] = low_digit(acc);
                acc >>= DIGIT_BITS;
                bits -= DIGIT_BITS;
                i += 1;
            }
        }
        if bits > 0 {
            x.dp[i] = low_digit(acc);
            i += 1;
        }
        x.used = i;
        BigInt::clamp(&mut x);
        Ok(x)
    }
}

impl BigInt {
    fn fmt_radix(
        &self,
        f: &mut fmt::Formatter,
        radix: u32,
        prefix: &str,
        lower: bool,
    ) -> fmt::Result {
        let mut buf = tri!(buffer_for(self, radix).map_err(|_| fmt::Error));
        tri!(format_magnitude_into(&mut buf, self, radix).map_err(|_| fmt::Error));
        if lower {
            buf.make_ascii_lowercase();
        }
        let digits = unsafe {
            // We do not emit invalid UTF-8.
            str::from_utf8_unchecked(&buf)
        };
        f.pad_integral(!self.is_negative(), prefix, digits)
    }
}

impl Display for BigInt {
    /// Decimal text of the value. Width, fill, alignment, `+` and zero
    /// padding behave as for the primitive integers.
    ///
    /// ```
    /// let value = mpint::BigInt::from(-1234567);
    /// assert_eq!(value.to_string(), "-1234567");
    /// assert_eq!(format!("{:>10}", value), "  -1234567");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 10, "", false)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 16, "0x", true)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 16, "0x", false)
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 8, "0o", false)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_radix(f, 2, "0b", false)
    }
}

// Show the value rather than the storage. Humans mostly see this
// representation through assert_eq! and unwrap().
impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        tri!(f.write_str("BigInt("));
        tri!(to_writer(WriterFormatter { inner: &mut *f }, self, 10).map_err(|_| fmt::Error));
        f.write_str(")")
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse decimal text, the inverse of `Display`.
    fn from_str(s: &str) -> Result<BigInt> {
        from_str(s, 10)
    }
}
