use mpint::{BigInt, MASK};

// With a large k the fold carries into digit m, and the folded value can
// still be at least n. Both the carry and the final subtraction must happen.
#[test]
fn test() {
    // n = RADIX^2 - MASK, so k = MASK
    let mut n = BigInt::from(MASK);
    n.mul_digit(MASK).unwrap();
    n.add_digit(MASK).unwrap();
    n.add_digit(1).unwrap();
    assert!(n.is_dr_modulus());
    let k = n.dr_setup();
    assert_eq!(k, MASK);

    // x = RADIX^4 - 1 has every digit set and needs several folds.
    let mut x = BigInt::from(MASK);
    for _ in 0..3 {
        let mut t = x.clone();
        t.mul_digit(MASK).unwrap();
        x = t.add(&x).unwrap();
        x.add_digit(MASK).unwrap();
    }
    assert_eq!(x.used(), 4);
    assert!(x.digits().iter().all(|&d| d == MASK));

    // RADIX^2 ≡ k, so RADIX^4 - 1 ≡ k^2 - 1, reduced once more mod n.
    let mut expected = BigInt::from(MASK);
    expected.mul_digit(MASK).unwrap();
    expected.sub_digit(1).unwrap();
    while expected >= n {
        expected.sub_inplace(&n).unwrap();
    }

    x.dr_reduce(&n, k).unwrap();
    assert_eq!(x, expected);
}
