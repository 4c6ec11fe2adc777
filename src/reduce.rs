//! Diminished-radix modular reduction.
//!
//! A diminished-radix modulus has the form `n = B^m - k` where `B` is the
//! digit base, `m` the number of digits of `n` and `k` a single digit. Since
//! `B^m ≡ k (mod n)`, a value `x = lo + B^m·hi` is congruent to `lo + k·hi`,
//! which is about `m` digits shorter. Folding like this until the value drops
//! below `n` replaces a full division by a handful of linear passes.
//!
//! Based on "Generating Efficient Primes for Discrete Log Cryptosystems" by
//! Chae Hoon Lim and Pil Joong Lee.

use crate::bigint::BigInt;
use crate::digit::{as_word, high_digit, low_digit, Digit, Word, MASK, RADIX};
use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, digit_at};
use core::cmp::Ordering;

impl BigInt {
    /// Whether `self` has the form `B^m - k` with `m >= 2`, i.e. every digit
    /// above the lowest one is all ones.
    pub fn is_dr_modulus(&self) -> bool {
        if self.used < 2 || self.is_negative() {
            return false;
        }
        self.digits()[1..].iter().all(|&d| d == MASK)
    }

    /// The `k` for which `self = B^m - k`, to pass to
    /// [`dr_reduce`](BigInt::dr_reduce).
    pub fn dr_setup(&self) -> Digit {
        (RADIX - as_word(digit_at(self, 0))) as Digit
    }

    /// Reduce `self` in place modulo `n = B^m - k`.
    ///
    /// `self` must be in `0 <= self <= (n-1)^2`. The input range is checked
    /// only as far as it is cheap: a negative `self` or one with more than
    /// `2m` digits is rejected, and so is a non-positive `n` or a `k` that is
    /// not a single digit. Within `2m` digits any non-negative `self`
    /// reduces correctly, so the squared bound is not enforced.
    ///
    /// `n` and `k` must describe the same modulus; a mismatched `k` gives a
    /// value below `n` that is not the residue.
    pub fn dr_reduce(&mut self, n: &BigInt, k: Digit) -> Result<()> {
        if n.is_zero() || n.is_negative() {
            return Err(Error::new(ErrorCode::InvalidModulus));
        }
        if k > MASK {
            return Err(Error::new(ErrorCode::DigitOutOfRange));
        }
        let m = n.used;
        if self.is_negative() || self.used > 2 * m {
            return Err(Error::new(ErrorCode::ReductionOutOfRange));
        }

        tri!(self.grow(2 * m));

        loop {
            // (x mod B^m) + k * floor(x / B^m), inline and in place. The high
            // half is read ahead of the low half being overwritten.
            let old_used = self.used;
            let mut mu: Digit = 0;
            for i in 0..m {
                let r: Word = as_word(digit_at(self, m + i)) * as_word(k)
                    + as_word(digit_at(self, i))
                    + as_word(mu);
                self.dp[i] = low_digit(r);
                mu = high_digit(r);
            }
            self.dp[m] = mu;
            for d in self.dp.iter_mut().take(old_used).skip(m + 1) {
                *d = 0;
            }
            self.used = m + 1;
            self.clamp();

            // Each pass leaves a smaller value, so this terminates.
            if math::compare_magnitude(self.digits(), n.digits()) == Ordering::Less {
                return Ok(());
            }
            math::isub_magnitude(self, n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::PREC;

    fn modulus(m: usize, k: Digit) -> BigInt {
        let mut n = BigInt::with_capacity(m).unwrap();
        n.dp[0] = (RADIX - as_word(k)) as Digit;
        for d in &mut n.dp[1..m] {
            *d = MASK;
        }
        n.used = m;
        n.clamp();
        n
    }

    #[test]
    fn setup_test() {
        let n = modulus(3, 159);
        assert!(n.is_dr_modulus());
        assert_eq!(n.dr_setup(), 159);

        assert!(!BigInt::from(17u8).is_dr_modulus());
        let mut bad = modulus(3, 159);
        bad.dp[1] = 0;
        assert!(!bad.is_dr_modulus());
    }

    #[test]
    fn fold_reads_stale_high_half_as_zero_test() {
        let n = modulus(2, 5);
        let mut x = BigInt::with_capacity(PREC).unwrap();
        // Garbage past `used` must not leak into the fold.
        for d in &mut x.dp[..4] {
            *d = 3;
        }
        x.used = 1;
        x.dr_reduce(&n, 5).unwrap();
        assert_eq!(x.digits(), &[3]);
    }

    #[test]
    fn reduce_equal_to_modulus_test() {
        let n = modulus(2, 5);
        let mut x = n.clone();
        x.dr_reduce(&n, 5).unwrap();
        assert!(x.is_zero());
    }

    #[test]
    fn reduce_radix_power_test() {
        // B^m ≡ k (mod B^m - k)
        let n = modulus(2, 5);
        let mut x = BigInt::with_capacity(3).unwrap();
        x.dp[2] = 1;
        x.used = 3;
        x.dr_reduce(&n, 5).unwrap();
        assert_eq!(x.digits(), &[5]);
    }

    #[test]
    fn reject_test() {
        let n = modulus(2, 5);
        let mut x = BigInt::from(-1i8);
        assert!(x.dr_reduce(&n, 5).unwrap_err().is_value());

        let mut x = BigInt::from(1u8);
        assert!(x.dr_reduce(&BigInt::new(), 5).unwrap_err().is_value());
        assert!(x.dr_reduce(&n, MASK + 1).unwrap_err().is_value());

        let mut x = BigInt::with_capacity(5).unwrap();
        x.dp[4] = 1;
        x.used = 5;
        assert_eq!(
            x.dr_reduce(&n, 5).unwrap_err().code(),
            &ErrorCode::ReductionOutOfRange
        );
    }
}
