use mpint::{BigInt, Sign};

#[test]
fn test() {
    let zero = mpint::from_str("-000", 10).unwrap();
    assert_eq!(zero.sign(), Sign::Positive);
    assert_eq!(zero.to_string(), "0");

    let mut x = BigInt::from(-5);
    x.add_digit(5).unwrap();
    assert_eq!(x.sign(), Sign::Positive);

    let mut x = BigInt::from(-5);
    assert_eq!(x.div_digit(7).unwrap(), (5, Sign::Negative));
    assert_eq!(x.sign(), Sign::Positive);
    assert_eq!(x, -BigInt::new());
}
