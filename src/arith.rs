//! Signed addition and subtraction.

use crate::bigint::{BigInt, Sign};
use crate::error::Result;
use crate::math;
use core::cmp::Ordering;

impl BigInt {
    /// `|self| + |other|`, as a non-negative value.
    pub fn add_magnitude(&self, other: &BigInt) -> Result<BigInt> {
        let mut sum = tri!(self.try_clone_with_capacity(self.used.max(other.used) + 1));
        sum.sign = Sign::Positive;
        tri!(math::iadd_magnitude(&mut sum, other));
        Ok(sum)
    }

    /// `|self| - |other|`, as a non-negative value.
    ///
    /// Requires `|self| >= |other|`. The result is meaningless otherwise;
    /// callers check with [`compare_magnitude`](BigInt::compare_magnitude)
    /// first.
    pub fn sub_magnitude(&self, other: &BigInt) -> Result<BigInt> {
        let mut diff = tri!(self.try_clone_with_capacity(self.used));
        diff.sign = Sign::Positive;
        math::isub_magnitude(&mut diff, other);
        Ok(diff)
    }

    /// `self = self + other`.
    ///
    /// Equal signs add magnitudes and keep the sign. Mixed signs subtract
    /// the smaller magnitude from the larger and take the sign of the
    /// operand with the larger magnitude, so only two cases are needed
    /// instead of four.
    pub fn add_inplace(&mut self, other: &BigInt) -> Result<()> {
        if self.sign == other.sign {
            math::iadd_magnitude(self, other)
        } else if self.compare_magnitude(other) == Ordering::Less {
            self.sign = other.sign;
            math::rsub_magnitude(self, other)
        } else {
            math::isub_magnitude(self, other);
            Ok(())
        }
    }

    /// `self = self - other`, that is `self + (-other)`.
    pub fn sub_inplace(&mut self, other: &BigInt) -> Result<()> {
        if self.sign != other.sign {
            math::iadd_magnitude(self, other)
        } else if self.compare_magnitude(other) == Ordering::Less {
            self.sign = self.sign.flip();
            math::rsub_magnitude(self, other)
        } else {
            math::isub_magnitude(self, other);
            Ok(())
        }
    }

    /// `self + other`.
    pub fn add(&self, other: &BigInt) -> Result<BigInt> {
        let mut sum = tri!(self.try_clone_with_capacity(self.used.max(other.used) + 1));
        tri!(sum.add_inplace(other));
        Ok(sum)
    }

    /// `self - other`.
    pub fn sub(&self, other: &BigInt) -> Result<BigInt> {
        let mut diff = tri!(self.try_clone_with_capacity(self.used.max(other.used) + 1));
        tri!(diff.sub_inplace(other));
        Ok(diff)
    }
}
