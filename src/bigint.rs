//! Big integer type definition and digit storage.

use crate::digit::{Digit, DIGIT_BITS, MASK, PREC};
use crate::error::{Error, Result};
use crate::math;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Sign of a [`BigInt`]. Zero is always `Positive`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Sign {
    /// Zero or greater.
    Positive,
    /// Less than zero.
    Negative,
}

impl Sign {
    #[inline]
    pub(crate) fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// A signed integer of arbitrary size.
///
/// The magnitude is stored as little-endian digits in base `2^DIGIT_BITS`,
/// so for digits `[0, 1, 2, 3]`, `3` is the most significant digit and `0`
/// the least significant.
///
/// `alloc()` digits are allocated, of which the first `used()` are
/// significant. Digits past `used()` carry no meaning and are never read as
/// part of the value. A normalized value has no most-significant zero digit,
/// and zero is `used() == 0` with a positive sign.
#[derive(Clone)]
pub struct BigInt {
    /// Digit storage. Its length is the allocated capacity.
    pub(crate) dp: Vec<Digit>,
    /// Number of significant digits.
    pub(crate) used: usize,
    pub(crate) sign: Sign,
}

impl BigInt {
    /// A zero value without any digit storage.
    pub const fn new() -> Self {
        BigInt {
            dp: Vec::new(),
            used: 0,
            sign: Sign::Positive,
        }
    }

    /// A zero value with room for at least `digits` digits.
    pub fn with_capacity(digits: usize) -> Result<Self> {
        let mut int = BigInt::new();
        tri!(int.grow(digits));
        Ok(int)
    }

    /// Guarantee that at least `size` digits are allocated.
    ///
    /// Existing digits are preserved and new capacity is zero-filled.
    /// Capacity is never reduced. Fails with `OutOfMemory` when the
    /// allocator refuses, leaving `self` untouched.
    pub fn grow(&mut self, size: usize) -> Result<()> {
        if self.dp.len() >= size {
            return Ok(());
        }

        // Round up to a multiple of PREC to avoid regrowing one digit at a
        // time while a value is built up.
        let target = match size.checked_add(PREC - 1) {
            Some(padded) => padded / PREC * PREC,
            None => return Err(Error::out_of_memory()),
        };
        tri!(self
            .dp
            .try_reserve_exact(target - self.dp.len())
            .map_err(|_| Error::out_of_memory()));
        self.dp.resize(target, 0);
        Ok(())
    }

    /// Drop most-significant zero digits. A value that becomes zero is made
    /// positive.
    pub(crate) fn clamp(&mut self) {
        while self.used > 0 && self.dp[self.used - 1] == 0 {
            self.used -= 1;
        }
        if self.used == 0 {
            self.sign = Sign::Positive;
        }
    }

    /// Set to zero, keeping the allocated storage.
    pub fn set_zero(&mut self) {
        for d in &mut self.dp[..self.used] {
            *d = 0;
        }
        self.used = 0;
        self.sign = Sign::Positive;
    }

    /// Overwrite `self` with the value of `src`, reusing storage where
    /// possible.
    pub fn assign(&mut self, src: &BigInt) -> Result<()> {
        tri!(self.grow(src.used));
        self.dp[..src.used].copy_from_slice(src.digits());
        self.used = src.used;
        self.sign = src.sign;
        Ok(())
    }

    /// A copy of `self` with room for at least `digits` digits, reporting
    /// allocation failure instead of aborting.
    pub(crate) fn try_clone_with_capacity(&self, digits: usize) -> Result<BigInt> {
        let mut copy = tri!(BigInt::with_capacity(digits.max(self.used)));
        tri!(copy.assign(self));
        Ok(copy)
    }

    /// Number of significant digits.
    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Number of allocated digits.
    #[inline]
    pub fn alloc(&self) -> usize {
        self.dp.len()
    }

    /// The significant digits, least significant first.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.dp[..self.used]
    }

    /// Sign of the value. Zero is positive.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns true for zero, the value with no significant digits.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.used == 0
    }

    /// Returns true if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Number of bits up to and including the most significant set bit of
    /// the magnitude. Zero for zero.
    pub fn count_bits(&self) -> usize {
        match self.digits().last() {
            Some(&top) => {
                (self.used - 1) * DIGIT_BITS as usize
                    + (Digit::BITS - top.leading_zeros()) as usize
            }
            None => 0,
        }
    }

    /// Flip the sign. Zero stays positive.
    pub fn neg_inplace(&mut self) {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
    }

    /// Make the sign positive.
    pub fn abs_inplace(&mut self) {
        self.sign = Sign::Positive;
    }

    /// `|self|`, as a new value.
    pub fn abs(&self) -> Result<BigInt> {
        let mut abs = tri!(self.try_clone_with_capacity(self.used));
        abs.abs_inplace();
        Ok(abs)
    }

    /// Compare magnitudes, ignoring sign.
    pub fn compare_magnitude(&self, other: &BigInt) -> Ordering {
        math::compare_magnitude(self.digits(), other.digits())
    }

    /// Compare to a single non-negative digit.
    pub fn compare_digit(&self, d: Digit) -> Ordering {
        if self.is_negative() {
            return Ordering::Less;
        }
        match self.used {
            0 => (0 as Digit).cmp(&d),
            1 => self.dp[0].cmp(&d),
            _ => Ordering::Greater,
        }
    }

    fn from_u128(mut value: u128, sign: Sign) -> BigInt {
        let mut dp = Vec::with_capacity(PREC);
        while value != 0 {
            dp.push((value & MASK as u128) as Digit);
            value >>= DIGIT_BITS;
        }
        let used = dp.len();
        dp.resize(PREC, 0);
        let mut int = BigInt { dp, used, sign };
        BigInt::clamp(&mut int);
        int
    }

    /// The magnitude as a `u64`, if it fits.
    pub(crate) fn magnitude_u64(&self) -> Option<u64> {
        if self.count_bits() > 64 {
            return None;
        }
        let mut value = 0u64;
        for &d in self.digits().iter().rev() {
            value = (value << DIGIT_BITS) | d as u64;
        }
        Some(value)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> Self {
                    BigInt::from_u128(value as u128, Sign::Positive)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> Self {
                    let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                    BigInt::from_u128(value.unsigned_abs() as u128, sign)
                }
            }
        )*
    };
}

from_unsigned!(u8 u16 u32 u64 u128 usize);
from_signed!(i8 i16 i32 i64 i128 isize);

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.digits() == other.digits()
    }
}

impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.digits().hash(state);
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.compare_magnitude(other),
            (Sign::Negative, Sign::Negative) => other.compare_magnitude(self),
        }
    }
}

impl core::ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.neg_inplace();
        self
    }
}

impl<'a> core::ops::Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}
