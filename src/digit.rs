//! Digit width configuration.
//!
//! A [`BigInt`](crate::BigInt) stores its magnitude as little-endian digits
//! in base `2^DIGIT_BITS`. Each digit lives in a machine word that is a few
//! bits wider than `DIGIT_BITS`, so the sum of two digits and a carry never
//! overflows the storage type. Products go through [`Word`], which is twice
//! as wide as [`Digit`].
//!
//! The width is picked by `build.rs`:
//!
//!  - `digit_bits_60`: 60-bit digits in `u64`, `u128` products. Used on
//!    64-bit targets where the 128-bit product is a single instruction or a
//!    cheap hi/lo pair (x86_64, aarch64, mips64, powerpc64).
//!  - `digit_bits_28`: 28-bit digits in `u32`, `u64` products. Used
//!    everywhere else.

// 60-BIT DIGIT
/// Storage for one digit.
#[cfg(digit_bits_60)]
pub type Digit = u64;

/// Double-width intermediate for digit products.
#[cfg(digit_bits_60)]
pub type Word = u128;

/// Number of value bits in a digit.
#[cfg(digit_bits_60)]
pub const DIGIT_BITS: u32 = 60;

// 28-BIT DIGIT
/// Storage for one digit.
#[cfg(not(digit_bits_60))]
pub type Digit = u32;

/// Double-width intermediate for digit products.
#[cfg(not(digit_bits_60))]
pub type Word = u64;

/// Number of value bits in a digit.
#[cfg(not(digit_bits_60))]
pub const DIGIT_BITS: u32 = 28;

/// Largest value a single digit may hold.
pub const MASK: Digit = (1 << DIGIT_BITS) - 1;

/// The base of the digit representation, `2^DIGIT_BITS`.
pub const RADIX: Word = 1 << DIGIT_BITS;

/// Digit storage grows in multiples of this many digits.
pub(crate) const PREC: usize = 32;

/// Widen a digit for a double-width product.
#[inline(always)]
pub(crate) fn as_word(d: Digit) -> Word {
    d as Word
}

/// Keep the low `DIGIT_BITS` of a double-width intermediate.
#[inline(always)]
pub(crate) fn low_digit(w: Word) -> Digit {
    (w & as_word(MASK)) as Digit
}

/// Carry out of a double-width intermediate.
#[inline(always)]
pub(crate) fn high_digit(w: Word) -> Digit {
    (w >> DIGIT_BITS) as Digit
}
