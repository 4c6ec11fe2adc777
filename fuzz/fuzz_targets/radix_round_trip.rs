#![no_main]

use libfuzzer_sys::fuzz_target;
use mpint::BigInt;

fuzz_target!(|data: &[u8]| {
    let (&head, bytes) = match data.split_first() {
        Some(split) => split,
        None => return,
    };
    let radix = 2 + (head & 0x3f) as u32 % 63;
    let mut value = BigInt::from_unsigned_bytes(bytes).unwrap();
    if head & 0x80 != 0 {
        value.neg_inplace();
    }

    let text = value.to_radix(radix).unwrap();
    assert_eq!(text.len(), value.radix_size(radix).unwrap());
    assert_eq!(mpint::from_str(&text, radix).unwrap(), value);
    assert_eq!(value.to_unsigned_bytes().unwrap().len(), value.unsigned_bin_size());
});
