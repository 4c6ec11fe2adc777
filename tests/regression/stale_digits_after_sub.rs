use mpint::{BigInt, MASK};

// Subtraction shrinks `used` without clearing the digits above it. A later
// addition into the same value must not pick them up again.
#[test]
fn test() {
    let mut x = mpint::from_str("100000000000000000000000000000000000000000", 16).unwrap();
    let y = x.clone();
    x.sub_inplace(&y).unwrap();
    assert!(x.is_zero());

    x.add_inplace(&BigInt::from(MASK)).unwrap();
    x.add_digit(1).unwrap();
    assert_eq!(x.used(), 2);
    assert_eq!(x.digits(), &[0, 1]);
}
