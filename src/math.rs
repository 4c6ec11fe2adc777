//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the digit buffers, so
//! for a `vec![0, 1, 2, 3]`, `3` is the most significant digit, and `0` is
//! the least significant digit.
//!
//! Every digit holds at most `DIGIT_BITS` bits inside a wider storage type,
//! so sums never overflow the storage and borrows show up in the top bit.
//! Results are masked back to `DIGIT_BITS` and clamped.

use crate::bigint::{BigInt, Sign};
use crate::digit::{as_word, high_digit, low_digit, Digit, Word, DIGIT_BITS, MASK};
use crate::error::{Error, ErrorCode, Result};
use core::cmp::Ordering;

/// Digit `i` of `x`, reading insignificant positions as zero.
#[inline]
pub(crate) fn digit_at(x: &BigInt, i: usize) -> Digit {
    if i < x.used {
        x.dp[i]
    } else {
        0
    }
}

#[inline]
fn check_digit(d: Digit) -> Result<()> {
    if d > MASK {
        return Err(Error::new(ErrorCode::DigitOutOfRange));
    }
    Ok(())
}

// RELATIVE OPERATORS

/// Compare `x` to `y`, in little-endian order. Both must be clamped.
#[inline]
pub(crate) fn compare_magnitude(x: &[Digit], y: &[Digit]) -> Ordering {
    if x.len() != y.len() {
        return x.len().cmp(&y.len());
    }
    for (xi, yi) in x.iter().rev().zip(y.iter().rev()) {
        match xi.cmp(yi) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

// LARGE
// -----

// Large-to-large operations on magnitudes. Signs are left alone; callers set
// the sign of the result.

/// AddAssign magnitudes: `|x| = |x| + |y|`.
pub(crate) fn iadd_magnitude(x: &mut BigInt, y: &BigInt) -> Result<()> {
    let max = x.used.max(y.used);
    tri!(x.grow(max + 1));

    let mut carry: Digit = 0;
    for i in 0..max {
        // Two digits and a carry bit stay below 2^(DIGIT_BITS + 2).
        let sum = digit_at(x, i) + digit_at(y, i) + carry;
        x.dp[i] = sum & MASK;
        carry = sum >> DIGIT_BITS;
    }
    x.dp[max] = carry;
    x.used = max + 1;
    x.clamp();
    Ok(())
}

/// SubAssign magnitudes: `|x| = |x| - |y|`.
///
/// Requires `|x| >= |y|`. Violating that gives a meaningless magnitude, not
/// an error.
pub(crate) fn isub_magnitude(x: &mut BigInt, y: &BigInt) {
    debug_assert!(compare_magnitude(x.digits(), y.digits()) != Ordering::Less);

    let mut borrow: Digit = 0;
    for i in 0..x.used {
        // An underflow wraps around the storage type and sets its top bit,
        // which is above the digit bits.
        let diff = x.dp[i]
            .wrapping_sub(digit_at(y, i))
            .wrapping_sub(borrow);
        borrow = diff >> (Digit::BITS - 1);
        x.dp[i] = diff & MASK;
    }
    x.clamp();
}

/// Reversed SubAssign magnitudes: `|x| = |y| - |x|`.
///
/// Requires `|y| >= |x|`.
pub(crate) fn rsub_magnitude(x: &mut BigInt, y: &BigInt) -> Result<()> {
    debug_assert!(compare_magnitude(y.digits(), x.digits()) != Ordering::Less);

    tri!(x.grow(y.used));
    let mut borrow: Digit = 0;
    for i in 0..y.used {
        let diff = y.dp[i]
            .wrapping_sub(digit_at(x, i))
            .wrapping_sub(borrow);
        borrow = diff >> (Digit::BITS - 1);
        x.dp[i] = diff & MASK;
    }
    x.used = y.used;
    x.clamp();
    Ok(())
}

// SMALL
// -----

// Large-to-small operations, to modify a magnitude by a single digit.

/// AddAssign a digit to the magnitude.
pub(crate) fn iadd_digit_magnitude(x: &mut BigInt, d: Digit) -> Result<()> {
    tri!(x.grow(x.used + 1));

    let mut carry = d;
    let mut i = 0;
    while carry != 0 {
        let sum = digit_at(x, i) + carry;
        x.dp[i] = sum & MASK;
        carry = sum >> DIGIT_BITS;
        i += 1;
    }
    x.used = x.used.max(i);
    x.clamp();
    Ok(())
}

/// SubAssign a digit from the magnitude. Requires `|x| >= d`.
pub(crate) fn isub_digit_magnitude(x: &mut BigInt, d: Digit) {
    debug_assert!(x.used > 1 || digit_at(x, 0) >= d);

    let mut borrow = d;
    let mut i = 0;
    while borrow != 0 && i < x.used {
        let diff = x.dp[i].wrapping_sub(borrow);
        borrow = diff >> (Digit::BITS - 1);
        x.dp[i] = diff & MASK;
        i += 1;
    }
    x.clamp();
}

/// MulAssign the magnitude by a digit.
pub(crate) fn imul_digit(x: &mut BigInt, d: Digit) -> Result<()> {
    tri!(x.grow(x.used + 1));

    let mut carry: Digit = 0;
    for i in 0..x.used {
        // Cannot overflow: (2^b - 1)^2 + (2^b - 1) < 2^(2b) fits a Word.
        let r: Word = as_word(x.dp[i]) * as_word(d) + as_word(carry);
        x.dp[i] = low_digit(r);
        carry = high_digit(r);
    }
    let used = x.used;
    x.dp[used] = carry;
    x.used += 1;
    x.clamp();
    Ok(())
}

/// DivAssign the magnitude by a non-zero digit, returning the remainder.
pub(crate) fn idiv_digit(x: &mut BigInt, d: Digit) -> Digit {
    debug_assert!(d != 0);

    let mut rem: Word = 0;
    for i in (0..x.used).rev() {
        let w = (rem << DIGIT_BITS) | as_word(x.dp[i]);
        x.dp[i] = (w / as_word(d)) as Digit;
        rem = w % as_word(d);
    }
    x.clamp();
    rem as Digit
}

// SIGNED SMALL
// ------------

impl BigInt {
    /// `self = self + d` for a digit `d < 2^DIGIT_BITS`.
    pub fn add_digit(&mut self, d: Digit) -> Result<()> {
        tri!(check_digit(d));
        if self.sign == Sign::Negative {
            if self.used > 1 || digit_at(self, 0) >= d {
                // -|x| + d = -(|x| - d)
                isub_digit_magnitude(self, d);
            } else {
                // -|x| + d = d - |x|, which is non-negative here.
                let x = digit_at(self, 0);
                tri!(self.grow(1));
                self.dp[0] = d - x;
                self.used = 1;
                self.sign = Sign::Positive;
                self.clamp();
            }
            Ok(())
        } else {
            iadd_digit_magnitude(self, d)
        }
    }

    /// `self = self - d` for a digit `d < 2^DIGIT_BITS`.
    pub fn sub_digit(&mut self, d: Digit) -> Result<()> {
        tri!(check_digit(d));
        if self.sign == Sign::Negative {
            return iadd_digit_magnitude(self, d);
        }
        if self.used > 1 || digit_at(self, 0) >= d {
            isub_digit_magnitude(self, d);
        } else {
            let x = digit_at(self, 0);
            tri!(self.grow(1));
            self.dp[0] = d - x;
            self.used = 1;
            self.sign = Sign::Negative;
        }
        Ok(())
    }

    /// `self = self * d` for a digit `d < 2^DIGIT_BITS`.
    pub fn mul_digit(&mut self, d: Digit) -> Result<()> {
        tri!(check_digit(d));
        imul_digit(self, d)
    }

    /// `self = self / d`, truncating toward zero, for a non-zero digit
    /// `d < 2^DIGIT_BITS`. Returns the remainder, which takes the sign of
    /// `self` as with Rust's `/` and `%` on primitives.
    pub fn div_digit(&mut self, d: Digit) -> Result<(Digit, Sign)> {
        tri!(check_digit(d));
        if d == 0 {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        let sign = self.sign;
        let rem = idiv_digit(self, d);
        let rem_sign = if rem == 0 { Sign::Positive } else { sign };
        Ok((rem, rem_sign))
    }
}

// TESTS
// -----
