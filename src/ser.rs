//! Serialize a `BigInt` as decimal text.

use crate::bigint::BigInt;
use serde::ser::{Serialize, Serializer};

impl Serialize for BigInt {
    /// Integers of arbitrary size do not fit any native serde integer, so the
    /// value goes out as its decimal string.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
