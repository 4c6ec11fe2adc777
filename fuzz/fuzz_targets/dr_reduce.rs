#![no_main]

use libfuzzer_sys::fuzz_target;
use mpint::{BigInt, MASK};

// Checks the reducer against x = n*q + r for a modulus n = RADIX^2 - k.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let k = (u16::from_be_bytes([data[0], data[1]]) as mpint::Digit).max(1);
    let rest = &data[2..];
    let (q, r) = rest.split_at(rest.len() / 2);

    let mut n = BigInt::from(MASK);
    n.mul_digit(MASK).unwrap();
    n.add_digit(MASK).unwrap();
    n.add_digit(MASK).unwrap();
    n.sub_digit(k - 1).unwrap();
    assert_eq!(n.dr_setup(), k);

    // Keep q below RADIX and r below n.
    let mut q = BigInt::from_unsigned_bytes(q).unwrap();
    while q.used() > 1 {
        q.div_digit(MASK).unwrap();
    }
    let mut r = BigInt::from_unsigned_bytes(r).unwrap();
    while r >= n {
        r.div_digit(2).unwrap();
    }

    let mut x = n.clone();
    x.mul_digit(q.digits().first().copied().unwrap_or(0)).unwrap();
    x.add_inplace(&r).unwrap();
    x.dr_reduce(&n, k).unwrap();
    assert_eq!(x, r);
});
