#![allow(clippy::unreadable_literal)]

use mpint::error::ErrorCode;
use mpint::{BigInt, Sign, SliceRead, StrRead};
use proptest::collection::vec;
use proptest::prelude::*;

/// Values up to 40 bytes of magnitude, either sign.
fn bigint() -> impl Strategy<Value = BigInt> {
    (vec(any::<u8>(), 0..40), any::<bool>()).prop_map(|(bytes, negative)| {
        let mut x = BigInt::from_unsigned_bytes(&bytes).unwrap();
        if negative {
            x.neg_inplace();
        }
        x
    })
}

const TWO_POW_200: &str = "1606938044258990275541962092341162602522202993782792835301376";

#[test]
fn test_parse_scenarios() {
    assert_eq!(mpint::from_str("-1F", 16).unwrap(), BigInt::from(-31));
    assert_eq!(mpint::from_str("-1f", 16).unwrap(), BigInt::from(-31));

    let empty = mpint::from_str("", 10).unwrap();
    assert!(empty.is_zero());
    assert_eq!(empty.sign(), Sign::Positive);

    for text in &["-", "-0", "0", "000"] {
        let zero = mpint::from_str(text, 7).unwrap();
        assert!(zero.is_zero(), "{}", text);
        assert_eq!(zero.sign(), Sign::Positive, "{}", text);
    }
}

#[test]
fn test_parse_large() {
    let x = mpint::from_str(TWO_POW_200, 10).unwrap();
    assert_eq!(x.count_bits(), 201);
    assert_eq!(x.to_radix(16).unwrap(), format!("1{}", "0".repeat(50)));
    assert_eq!(x.to_string(), TWO_POW_200);

    let y = mpint::from_str(&format!("-1{}", "0".repeat(200)), 2).unwrap();
    assert_eq!(y, -x);
}

#[test]
fn test_parse_stops_at_non_digit() {
    let mut read = SliceRead::new(b"12G4");
    let x = mpint::from_read(&mut read, 16).unwrap();
    assert_eq!(x, BigInt::from(0x12));
    assert_eq!(read.remaining(), b"G4");

    // A digit of a larger radix is not a digit here.
    let mut read = StrRead::new("1019");
    let x = BigInt::from_read(&mut read, 2).unwrap();
    assert_eq!(x, BigInt::from(5));
    assert_eq!(read.remaining(), "9");

    // A source starting with a non-digit gives zero and consumes nothing.
    let mut read = StrRead::new("+5");
    assert!(mpint::from_read(&mut read, 10).unwrap().is_zero());
    assert_eq!(read.remaining(), "+5");
}

#[test]
fn test_trailing_characters() {
    let err = mpint::from_str("12G", 16).unwrap_err();
    assert_eq!(err.code(), &ErrorCode::TrailingCharacters);
    assert!(err.is_value());

    assert!(mpint::from_slice(b"99 ", 10).is_err());
    assert!(" 99".parse::<BigInt>().is_err());
}

#[test]
fn test_alphabet_case() {
    // Up to radix 36 letters fold to upper case.
    assert_eq!(mpint::from_str("zZ", 36).unwrap(), BigInt::from(35 * 36 + 35));

    // Above 36 the two cases are distinct digits.
    assert_eq!(mpint::from_str("A", 64).unwrap(), BigInt::from(10));
    assert_eq!(mpint::from_str("a", 64).unwrap(), BigInt::from(36));
    assert_eq!(mpint::from_str("+/", 64).unwrap(), BigInt::from(62 * 64 + 63));
    assert_eq!(BigInt::from(36).to_radix(37).unwrap(), "a");
}

#[test]
fn test_format_minimal() {
    assert_eq!(BigInt::new().to_radix(2).unwrap(), "0");
    assert_eq!(BigInt::new().to_radix(64).unwrap(), "0");
    assert_eq!(BigInt::from(-1).to_radix(3).unwrap(), "-1");
    assert_eq!(BigInt::from(255).to_radix(16).unwrap(), "FF");
    assert_eq!(BigInt::from(-256).to_radix(2).unwrap(), "-100000000");
    assert_eq!(mpint::to_vec(&BigInt::from(35), 36).unwrap(), b"Z");
}

#[test]
fn test_radix_size() {
    let x = BigInt::from(u64::max_value());
    assert_eq!(x.radix_size(2).unwrap(), 64);
    assert_eq!(x.radix_size(16).unwrap(), 16);
    assert_eq!(x.radix_size(10).unwrap(), 20);
    assert_eq!((-x).radix_size(10).unwrap(), 21);
    assert_eq!(BigInt::new().radix_size(10).unwrap(), 1);

    let err = BigInt::new().radix_size(1).unwrap_err();
    assert_eq!(err.code(), &ErrorCode::InvalidRadix(1));
}

#[test]
fn test_unsigned_bin_size() {
    assert_eq!(BigInt::from(0).unsigned_bin_size(), 0);
    assert_eq!(BigInt::from(255).unsigned_bin_size(), 1);
    assert_eq!(BigInt::from(256).unsigned_bin_size(), 2);
    assert_eq!(BigInt::from(-256).unsigned_bin_size(), 2);
    assert_eq!(BigInt::from(u128::max_value()).unsigned_bin_size(), 16);
}

#[test]
fn test_format_flags() {
    for &v in &[0i128, 7, -7, 1 << 70, -(1 << 70), i128::min_value()] {
        let x = BigInt::from(v);
        assert_eq!(format!("{:>8}", x), format!("{:>8}", v));
        assert_eq!(format!("{:<8}|", x), format!("{:<8}|", v));
        assert_eq!(format!("{:^9}", x), format!("{:^9}", v));
        assert_eq!(format!("{:+}", x), format!("{:+}", v));
        assert_eq!(format!("{:08}", x), format!("{:08}", v));
        assert_eq!(format!("{:*^40}", x), format!("{:*^40}", v));
    }
    assert_eq!(format!("{:>5}", BigInt::from(7)), "    7");
    assert_eq!(format!("{:+05}", BigInt::from(7)), "+0007");
}

#[test]
fn test_format_radix_traits() {
    // Negative primitives print two's complement in these formats, so
    // compare against the magnitude.
    for &v in &[0u128, 1, 0xff, 0xdead_beef, u128::max_value()] {
        for &negative in &[false, true] {
            let x = if negative { -BigInt::from(v) } else { BigInt::from(v) };
            let sign = if negative && v != 0 { "-" } else { "" };
            assert_eq!(format!("{:x}", x), format!("{}{:x}", sign, v));
            assert_eq!(format!("{:X}", x), format!("{}{:X}", sign, v));
            assert_eq!(format!("{:#x}", x), format!("{}{:#x}", sign, v));
            assert_eq!(format!("{:o}", x), format!("{}{:o}", sign, v));
            assert_eq!(format!("{:#b}", x), format!("{}{:#b}", sign, v));
        }
    }
    assert_eq!(format!("{:#010x}", BigInt::from(255)), "0x000000ff");
    assert_eq!(format!("{:#06x}", BigInt::from(-31)), "-0x01f");
}

proptest! {
    #[test]
    fn test_round_trip_all_radixes(v in bigint(), radix in 2u32..=64) {
        let text = mpint::to_string(&v, radix).unwrap();
        prop_assert_eq!(text.len(), v.radix_size(radix).unwrap());
        let back = mpint::from_str(&text, radix).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn test_display_matches_native(v in any::<i128>()) {
        let x = BigInt::from(v);
        prop_assert_eq!(x.to_string(), v.to_string());
        prop_assert_eq!(v.to_string().parse::<BigInt>().unwrap(), x.clone());
        prop_assert_eq!(format!("{:?}", x), format!("BigInt({})", v));
        prop_assert_eq!(format!("{:>45}", x), format!("{:>45}", v));
    }

    #[test]
    fn test_unsigned_bytes_round_trip(v in bigint()) {
        let v = v.abs().unwrap();
        let bytes = v.to_unsigned_bytes().unwrap();
        prop_assert_eq!(bytes.len(), v.unsigned_bin_size());
        prop_assert_ne!(bytes.first(), Some(&0));
        prop_assert_eq!(BigInt::from_unsigned_bytes(&bytes).unwrap(), v);
    }
}
