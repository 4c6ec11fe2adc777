use mpint::BigInt;
use serde::de::value::{
    Error, F64Deserializer, I128Deserializer, I64Deserializer, MapDeserializer, StrDeserializer,
    U64Deserializer,
};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Key {
    modulus: BigInt,
    exponent: BigInt,
}

const TWO_POW_200: &str = "1606938044258990275541962092341162602522202993782792835301376";

#[test]
fn test_deserialize_from_str() {
    let de: StrDeserializer<Error> = "-123456789012345678901234567890".into_deserializer();
    assert_eq!(
        BigInt::deserialize(de).unwrap(),
        mpint::from_str("-123456789012345678901234567890", 10).unwrap()
    );
}

#[test]
fn test_deserialize_from_integer() {
    let de: I64Deserializer<Error> = (-17i64).into_deserializer();
    assert_eq!(BigInt::deserialize(de).unwrap(), BigInt::from(-17));

    let de: U64Deserializer<Error> = u64::max_value().into_deserializer();
    assert_eq!(BigInt::deserialize(de).unwrap(), BigInt::from(u64::max_value()));

    let de: I128Deserializer<Error> = i128::min_value().into_deserializer();
    assert_eq!(BigInt::deserialize(de).unwrap(), BigInt::from(i128::min_value()));
}

#[test]
fn test_deserialize_rejects_garbage() {
    let de: StrDeserializer<Error> = "12ab".into_deserializer();
    let err = BigInt::deserialize(de).unwrap_err();
    assert_eq!(err.to_string(), "trailing characters");

    let de: F64Deserializer<Error> = 1.5f64.into_deserializer();
    assert!(BigInt::deserialize(de).is_err());
}

#[test]
fn test_deserialize_struct() {
    let fields = vec![("modulus", TWO_POW_200), ("exponent", "65537")];
    let de: MapDeserializer<_, Error> = MapDeserializer::new(fields.into_iter());
    let key = Key::deserialize(de).unwrap();
    assert_eq!(key.modulus.count_bits(), 201);
    assert_eq!(key.exponent, BigInt::from(65537));
}

#[test]
fn test_json_round_trip() {
    let key = Key {
        modulus: mpint::from_str(TWO_POW_200, 10).unwrap(),
        exponent: BigInt::from(-3),
    };
    let json = serde_json::to_string(&key).unwrap();
    assert_eq!(
        json,
        format!(r#"{{"modulus":"{}","exponent":"-3"}}"#, TWO_POW_200)
    );
    assert_eq!(serde_json::from_str::<Key>(&json).unwrap(), key);

    // Native JSON numbers are accepted too.
    let key: Key = serde_json::from_str(r#"{"modulus":"77","exponent":65537}"#).unwrap();
    assert_eq!(key.modulus, BigInt::from(77));
    assert_eq!(key.exponent, BigInt::from(65537));
}
